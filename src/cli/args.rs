// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for rigcheck.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::{BuildIds, ComponentKind};
use crate::performance::{GameId, GraphicsPreset, Resolution};

/// rigcheck - PC build compatibility and FPS estimates
#[derive(Parser, Debug)]
#[command(name = "rigcheck")]
#[command(version, about = "PC build compatibility checks and FPS estimates")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog file (JSON, or TOML with a .toml extension)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check socket, memory and power compatibility of a build
    Check(CheckArgs),

    /// Estimate frame rates for a build
    Fps(FpsArgs),

    /// Print the full shareable build report
    Report(FpsArgs),

    /// Suggest the next-tier GPU and the FPS it would add
    Upgrade(FpsArgs),

    /// List catalog components
    #[command(alias = "ls")]
    Catalog(CatalogArgs),
}

/// Component selections shared by build-oriented subcommands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// CPU id
    #[arg(long)]
    pub cpu: Option<String>,

    /// GPU id
    #[arg(long)]
    pub gpu: Option<String>,

    /// Motherboard id
    #[arg(long, alias = "mobo")]
    pub motherboard: Option<String>,

    /// RAM kit id
    #[arg(long)]
    pub ram: Option<String>,

    /// Power supply id
    #[arg(long)]
    pub psu: Option<String>,
}

impl BuildArgs {
    pub fn ids(&self) -> BuildIds {
        BuildIds {
            cpu_id: self.cpu.clone(),
            gpu_id: self.gpu.clone(),
            motherboard_id: self.motherboard.clone(),
            ram_id: self.ram.clone(),
            psu_id: self.psu.clone(),
        }
    }
}

/// Arguments for the check subcommand
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Override the base system draw in watts
    #[arg(long)]
    pub base_system_w: Option<u32>,

    /// Override the PSU headroom factor
    #[arg(long)]
    pub headroom: Option<f64>,
}

/// Arguments for FPS-oriented subcommands
#[derive(clap::Args, Debug)]
pub struct FpsArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Game to estimate (all games when omitted)
    #[arg(long, value_parser = parse_game)]
    pub game: Option<GameId>,

    /// Target resolution (1080p, 1440p, 4k)
    #[arg(long, value_parser = parse_resolution)]
    pub resolution: Option<Resolution>,

    /// Graphics preset (low, medium, high, ultra)
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<GraphicsPreset>,

    /// Enable ray tracing
    #[arg(long, overrides_with = "no_ray_tracing")]
    pub ray_tracing: bool,

    /// Disable ray tracing even when settings enable it
    #[arg(long, overrides_with = "ray_tracing")]
    pub no_ray_tracing: bool,
}

impl FpsArgs {
    /// Ray tracing as requested on the command line; `None` defers to settings.
    pub fn ray_tracing_override(&self) -> Option<bool> {
        if self.ray_tracing {
            Some(true)
        } else if self.no_ray_tracing {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the catalog subcommand
#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Only list one kind (cpu, gpu, motherboard, ram, psu)
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<ComponentKind>,
}

fn parse_game(s: &str) -> Result<GameId, String> {
    s.parse()
}

fn parse_resolution(s: &str) -> Result<Resolution, String> {
    s.parse()
}

fn parse_preset(s: &str) -> Result<GraphicsPreset, String> {
    s.parse()
}

fn parse_kind(s: &str) -> Result<ComponentKind, String> {
    s.parse()
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== CLI Global Arguments ====================

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["rigcheck"]).is_err());
    }

    #[test]
    fn test_cli_global_args() {
        let cli = Cli::parse_from([
            "rigcheck",
            "check",
            "--catalog",
            "parts.json",
            "--format",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.catalog, Some(PathBuf::from("parts.json")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    // ==================== Check Command ====================

    #[test]
    fn test_check_build_ids() {
        let cli = Cli::parse_from([
            "rigcheck",
            "check",
            "--cpu",
            "ryzen-7-7800x3d",
            "--mobo",
            "b650-tomahawk",
            "--headroom",
            "1.3",
        ]);
        match cli.command {
            Commands::Check(args) => {
                let ids = args.build.ids();
                assert_eq!(ids.cpu_id.as_deref(), Some("ryzen-7-7800x3d"));
                assert_eq!(ids.motherboard_id.as_deref(), Some("b650-tomahawk"));
                assert!(ids.gpu_id.is_none());
                assert_eq!(args.headroom, Some(1.3));
                assert!(args.base_system_w.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    // ==================== Fps Command ====================

    #[test]
    fn test_fps_args() {
        let cli = Cli::parse_from([
            "rigcheck",
            "fps",
            "--game",
            "cyberpunk-2077",
            "--resolution",
            "4k",
            "--preset",
            "ultra",
            "--ray-tracing",
        ]);
        match cli.command {
            Commands::Fps(args) => {
                assert_eq!(args.game, Some(GameId::Cyberpunk2077));
                assert_eq!(args.resolution, Some(Resolution::Uhd));
                assert_eq!(args.preset, Some(GraphicsPreset::Ultra));
                assert_eq!(args.ray_tracing_override(), Some(true));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_fps_ray_tracing_flags() {
        let parse = |extra: &[&str]| {
            let mut argv = vec!["rigcheck", "fps"];
            argv.extend_from_slice(extra);
            match Cli::parse_from(argv).command {
                Commands::Fps(args) => args.ray_tracing_override(),
                other => panic!("unexpected command: {:?}", other),
            }
        };

        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&["--no-ray-tracing"]), Some(false));
        assert_eq!(parse(&["--ray-tracing", "--no-ray-tracing"]), Some(false));
        assert_eq!(parse(&["--no-ray-tracing", "--ray-tracing"]), Some(true));
    }

    #[test]
    fn test_fps_rejects_unknown_game() {
        assert!(Cli::try_parse_from(["rigcheck", "fps", "--game", "tetris"]).is_err());
    }

    // ==================== Catalog Command ====================

    #[test]
    fn test_catalog_alias_and_kind() {
        let cli = Cli::parse_from(["rigcheck", "ls", "--kind", "gpu"]);
        match cli.command {
            Commands::Catalog(args) => assert_eq!(args.kind, Some(ComponentKind::Gpu)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
