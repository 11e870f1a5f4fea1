// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU upgrade suggestion command

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use super::CommandContext;
use crate::catalog::resolve_build;
use crate::cli::args::{FpsArgs, OutputFormat};
use crate::error::Result;
use crate::performance::{suggest_gpu_upgrade, GameId};

/// Execute the upgrade command
pub fn execute(args: &FpsArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let build = resolve_build(&args.build.ids(), &ctx.catalog);
    let options = ctx.predictor_options(args);
    let game = args.game.unwrap_or(GameId::Battlefield2042);

    let suggestion = suggest_gpu_upgrade(&ctx.catalog, &build, game, &options);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    let Some(upgrade) = suggestion else {
        if build.cpu.is_none() || build.gpu.is_none() {
            println!("Select a CPU and GPU (--cpu, --gpu) to suggest an upgrade.");
        } else {
            println!("No faster GPU in the catalog.");
        }
        return Ok(());
    };

    let mut stdout = io::stdout();

    println!("\n=== GPU Upgrade ({}) ===\n", game);
    println!("Current:  {} avg FPS", upgrade.current.avg_fps);
    println!(
        "Upgrade:  {} (${:.0})",
        upgrade.gpu.name, upgrade.gpu.price.amount
    );
    print!("Expected: {} avg FPS (", upgrade.upgraded.avg_fps);
    let color = if upgrade.fps_delta > 0 {
        Color::Green
    } else {
        Color::Yellow
    };
    stdout.execute(SetForegroundColor(color))?;
    print!("{:+}", upgrade.fps_delta);
    stdout.execute(ResetColor)?;
    println!(")");

    Ok(())
}
