// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigcheck - PC build compatibility checks and FPS estimates.
//!
//! This crate exposes the engine used by the `rigcheck` CLI (`src/main.rs`)
//! and by anything embedding the build configurator.
//!
//! Architecture highlights:
//! - `catalog`: component records, the catalog store and build resolution
//! - `compatibility`: socket, memory and PSU checks plus the power budget
//! - `performance`: bottleneck analysis, FPS estimates, verdicts and upgrades
//! - `report`: the shareable plain-text build report
//! - `config`, `cli`, `commands`: settings and the command-line surface

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod performance;
pub mod report;

pub use error::{Result, RigError};
