// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compatibility check command

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use serde::Serialize;

use super::CommandContext;
use crate::catalog::resolve_build;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::compatibility::{
    check_compatibility, is_power_danger, psu_load_ratio, CompatibilityOptions,
    CompatibilityReport, Severity,
};
use crate::error::{Result, RigError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput<'a> {
    report: &'a CompatibilityReport,
    psu_load_ratio: Option<f64>,
    power_danger: bool,
}

/// Compatibility options from settings, with command-line overrides
pub fn effective_options(args: &CheckArgs, ctx: &CommandContext) -> Result<CompatibilityOptions> {
    let defaults = ctx.settings.compatibility_options();
    if let Some(headroom) = args.headroom {
        if !headroom.is_finite() || headroom < 1.0 {
            return Err(RigError::InvalidInput(format!(
                "--headroom must be a finite factor of at least 1.0, got {}",
                headroom
            )));
        }
    }

    Ok(CompatibilityOptions {
        base_system_w: args.base_system_w.unwrap_or(defaults.base_system_w),
        psu_headroom_factor: args.headroom.unwrap_or(defaults.psu_headroom_factor),
    })
}

/// Execute the check command
pub fn execute(args: &CheckArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let build = resolve_build(&args.build.ids(), &ctx.catalog);
    let report = check_compatibility(&build, &effective_options(args, ctx)?);
    let load_ratio = psu_load_ratio(&report.power, build.psu.as_ref());
    let power_danger = is_power_danger(
        &report.power,
        build.psu.as_ref(),
        ctx.settings.power.load_warning_ratio,
    );

    if matches!(format, OutputFormat::Json) {
        let output = CheckOutput {
            report: &report,
            psu_load_ratio: load_ratio,
            power_danger,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut stdout = io::stdout();

    println!("\n=== Compatibility ===\n");
    if report.ok {
        stdout.execute(SetForegroundColor(Color::Green))?;
        println!("✓ No compatibility errors");
    } else {
        stdout.execute(SetForegroundColor(Color::Red))?;
        println!("✗ Build has compatibility errors");
    }
    stdout.execute(ResetColor)?;

    for issue in &report.issues {
        let color = match issue.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        };
        stdout.execute(SetForegroundColor(color))?;
        print!("  [{}] {}", issue.severity, issue.code);
        stdout.execute(ResetColor)?;
        println!(": {}", issue.message);
    }

    let power = &report.power;
    println!("\n=== Power Budget ===");
    println!("CPU: {}W", power.cpu_tdp_w);
    println!("GPU: {}W", power.gpu_tdp_w);
    println!("RAM: {}W", power.ram_tdp_w);
    println!("Base system: {}W", power.base_system_w);
    println!("Total: {}W", power.total_tdp_w);
    println!("Recommended PSU: {}W", power.recommended_psu_w);

    if let Some(ratio) = load_ratio {
        println!(
            "PSU load: {:.0}%{}",
            ratio * 100.0,
            if power_danger { " ⚠️  running hot" } else { "" }
        );
    }

    Ok(())
}
