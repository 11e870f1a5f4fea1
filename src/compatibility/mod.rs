// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compatibility checking for PC builds
//!
//! Validates CPU socket, memory standard and PSU headroom, and produces a
//! power budget. Missing components are warnings; physical incompatibilities
//! are errors reported inside the [`CompatibilityReport`], never returned as
//! `Err`.

pub mod checker;
pub mod issue;
pub mod power;

pub use checker::*;
pub use issue::*;
pub use power::*;
