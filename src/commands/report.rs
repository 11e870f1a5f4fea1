// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Full build report command

use serde::Serialize;

use super::CommandContext;
use crate::catalog::{resolve_build, Build};
use crate::cli::args::{FpsArgs, OutputFormat};
use crate::compatibility::{check_compatibility, is_power_danger, CompatibilityReport};
use crate::error::Result;
use crate::performance::{
    estimate_all_games, estimate_for_game, suggest_gpu_upgrade, verdict_advice, BuildVerdict,
    FpsEstimate, GameId, SlotFaults,
};
use crate::report::render_build_report;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOutput {
    build: Build,
    compatibility: CompatibilityReport,
    headline: Option<FpsEstimate>,
    estimates: Vec<FpsEstimate>,
    verdict: BuildVerdict,
    advice: String,
    faults: SlotFaults,
}

/// Execute the report command
pub fn execute(args: &FpsArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let build = resolve_build(&args.build.ids(), &ctx.catalog);
    let options = ctx.predictor_options(args);
    let game = args.game.unwrap_or(GameId::Battlefield2042);

    let headline = estimate_for_game(game, &build, &options);
    let estimates = estimate_all_games(&build, &options);
    let verdict = BuildVerdict::evaluate(
        headline.as_ref(),
        &build,
        &ctx.settings.verdict_thresholds(),
    );
    let upgrade = suggest_gpu_upgrade(&ctx.catalog, &build, game, &options);
    let advice = verdict_advice(headline.as_ref(), &verdict, upgrade.as_ref());

    if matches!(format, OutputFormat::Json) {
        let compatibility = check_compatibility(&build, &ctx.settings.compatibility_options());
        let power_danger = is_power_danger(
            &compatibility.power,
            build.psu.as_ref(),
            ctx.settings.power.load_warning_ratio,
        );
        let output = ReportOutput {
            verdict,
            advice,
            faults: SlotFaults::evaluate(&compatibility, headline.as_ref(), power_danger),
            build,
            compatibility,
            headline,
            estimates,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        render_build_report(&build, &options, headline.as_ref(), &estimates)
    );
    println!("\n{}", advice);
    Ok(())
}
