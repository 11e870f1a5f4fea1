// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame-rate prediction and bottleneck analysis
//!
//! All numbers come from static synthetic benchmark scores combined through
//! fixed lookup tables. Nothing here measures real hardware, and every
//! function is pure: the same build and options always yield the same
//! estimate.

pub mod bottleneck;
pub mod game;
pub mod options;
pub mod predictor;
pub mod upgrade;
pub mod verdict;

pub use bottleneck::*;
pub use game::*;
pub use options::*;
pub use predictor::*;
pub use upgrade::*;
pub use verdict::*;
