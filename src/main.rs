// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigcheck - PC build compatibility checks and FPS estimates
//!
//! Entry point for the rigcheck CLI.

use clap::Parser;

use rigcheck::cli::{Cli, Commands};
use rigcheck::commands::{self, CommandContext};
use rigcheck::config::Settings;
use rigcheck::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on engine diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        for directive in [
            "rigcheck=debug",
            "rigcheck.compatibility=debug",
            "rigcheck.performance=debug",
        ] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.validate()?;
    for warning in settings.get_tuning_warnings() {
        tracing::warn!(target: "rigcheck", "{}", warning);
    }

    let ctx = CommandContext::load(cli.catalog.as_deref(), settings)?;

    match &cli.command {
        Commands::Check(args) => commands::check::execute(args, &ctx, &cli.format)?,
        Commands::Fps(args) => commands::fps::execute(args, &ctx, &cli.format)?,
        Commands::Report(args) => commands::report::execute(args, &ctx, &cli.format)?,
        Commands::Upgrade(args) => commands::upgrade::execute(args, &ctx, &cli.format)?,
        Commands::Catalog(args) => commands::catalog::execute(args, &ctx, &cli.format)?,
    }

    Ok(())
}
