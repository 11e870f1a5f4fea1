// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand handlers for the rigcheck binary
//!
//! Each handler resolves the build from the loaded catalog, runs the engine
//! and prints either text or JSON.

pub mod catalog;
pub mod check;
pub mod fps;
pub mod report;
pub mod upgrade;

use std::path::Path;

use crate::catalog::Catalog;
use crate::cli::FpsArgs;
use crate::config::Settings;
use crate::error::{Result, RigError};
use crate::performance::PredictorOptions;

/// Everything a subcommand needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub catalog: Catalog,
    pub settings: Settings,
}

impl CommandContext {
    /// Load the catalog from the command-line path, falling back to settings.
    pub fn load(catalog_path: Option<&Path>, settings: Settings) -> Result<Self> {
        let path = catalog_path
            .map(Path::to_path_buf)
            .or_else(|| settings.catalog_path.clone())
            .ok_or_else(|| {
                RigError::Config(
                    "no catalog given; pass --catalog or set catalog_path in settings".to_string(),
                )
            })?;

        let catalog = Catalog::load_from(&path)?;
        Ok(Self { catalog, settings })
    }

    /// Settings defaults overridden by whatever was given on the command line
    pub fn predictor_options(&self, args: &FpsArgs) -> PredictorOptions {
        let defaults = self.settings.predictor_options();
        PredictorOptions {
            resolution: args.resolution.unwrap_or(defaults.resolution),
            preset: args.preset.unwrap_or(defaults.preset),
            ray_tracing: args
                .ray_tracing_override()
                .unwrap_or(defaults.ray_tracing),
        }
    }
}
