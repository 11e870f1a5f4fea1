// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for rigcheck
//!
//! The compatibility and performance engines are total and never fail.
//! These errors only surface at the edges: catalog files, settings and
//! command-line input.

use thiserror::Error;

/// Main error type for rigcheck operations
#[derive(Error, Debug)]
pub enum RigError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading or validation errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Result type alias for rigcheck operations
pub type Result<T> = std::result::Result<T, RigError>;

impl From<toml::de::Error> for RigError {
    fn from(err: toml::de::Error) -> Self {
        RigError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for RigError {
    fn from(err: toml::ser::Error) -> Self {
        RigError::Toml(err.to_string())
    }
}
