// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Component catalog and build records
//!
//! Components are immutable values grouped into a [`Catalog`]. A [`Build`]
//! holds at most one component per kind and is produced from user selections
//! with [`resolve_build`].

pub mod build;
pub mod component;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use build::*;
pub use component::*;
pub use store::*;
