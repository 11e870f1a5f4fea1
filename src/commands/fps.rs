// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! FPS estimate command

use serde::Serialize;

use super::CommandContext;
use crate::catalog::{resolve_build, Build};
use crate::cli::args::{FpsArgs, OutputFormat};
use crate::error::Result;
use crate::performance::{
    bottleneck_label, estimate_all_games, estimate_for_game, suggest_gpu_upgrade,
    verdict_advice, BuildVerdict, FpsEstimate, GameId, PredictorOptions,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FpsOutput {
    estimates: Vec<FpsEstimate>,
    verdict: BuildVerdict,
    advice: String,
}

/// Estimates for `game`, or every game when none was given
pub fn collect_estimates(
    build: &Build,
    game: Option<GameId>,
    options: &PredictorOptions,
) -> Vec<FpsEstimate> {
    match game {
        Some(game) => estimate_for_game(game, build, options).into_iter().collect(),
        None => estimate_all_games(build, options),
    }
}

/// Execute the fps command
pub fn execute(args: &FpsArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let build = resolve_build(&args.build.ids(), &ctx.catalog);
    let options = ctx.predictor_options(args);
    let estimates = collect_estimates(&build, args.game, &options);

    // The first estimate is the requested game, or Battlefield 2042 for all games.
    let headline = estimates.first();
    let verdict = BuildVerdict::evaluate(headline, &build, &ctx.settings.verdict_thresholds());
    let upgrade = headline
        .and_then(|e| suggest_gpu_upgrade(&ctx.catalog, &build, e.game, &options));
    let advice = verdict_advice(headline, &verdict, upgrade.as_ref());

    if matches!(format, OutputFormat::Json) {
        let output = FpsOutput {
            estimates,
            verdict,
            advice,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if estimates.is_empty() {
        println!("Select a CPU and GPU (--cpu, --gpu) to estimate FPS.");
        return Ok(());
    }

    println!(
        "\n=== Estimated FPS @ {} {}{} ===\n",
        options.resolution.label().to_uppercase(),
        options.preset.label().to_uppercase(),
        if options.ray_tracing { " + RT" } else { "" }
    );
    for estimate in &estimates {
        println!(
            "  {:<20} {:>4} avg  {:>4} 1%  {:>4} min",
            estimate.game.display_name(),
            estimate.avg_fps,
            estimate.low_1_percent_fps,
            estimate.min_fps
        );
    }

    println!("\n{}", bottleneck_label(headline));
    if verdict.flagship {
        println!("★ God tier build");
    } else if verdict.approved {
        println!("✓ Titan approved");
    } else if verdict.critical_bottleneck {
        println!("⚠️  Critical bottleneck");
    }
    println!("{}", advice);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::cli::BuildArgs;
    use crate::config::Settings;

    fn ctx() -> CommandContext {
        CommandContext {
            catalog: sample_catalog(),
            settings: Settings::default(),
        }
    }

    fn args(game: Option<GameId>) -> FpsArgs {
        FpsArgs {
            build: BuildArgs {
                cpu: Some("ryzen-7-7800x3d".to_string()),
                gpu: Some("rtx-4070-super".to_string()),
                ..Default::default()
            },
            game,
            resolution: None,
            preset: None,
            ray_tracing: false,
            no_ray_tracing: false,
        }
    }

    fn collect(fps_args: &FpsArgs) -> Vec<FpsEstimate> {
        let ctx = ctx();
        let build = resolve_build(&fps_args.build.ids(), &ctx.catalog);
        collect_estimates(&build, fps_args.game, &ctx.predictor_options(fps_args))
    }

    #[test]
    fn test_collect_all_games() {
        assert_eq!(collect(&args(None)).len(), GameId::ALL.len());
    }

    #[test]
    fn test_collect_single_game() {
        let estimates = collect(&args(Some(GameId::Warzone3)));
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].game, GameId::Warzone3);
    }

    #[test]
    fn test_collect_without_gpu() {
        let mut fps_args = args(None);
        fps_args.build.gpu = None;
        assert!(collect(&fps_args).is_empty());
    }

    #[test]
    fn test_execute_text_and_json() {
        assert!(execute(&args(None), &ctx(), &OutputFormat::Text).is_ok());
        assert!(execute(&args(Some(GameId::Valorant)), &ctx(), &OutputFormat::Json).is_ok());
    }
}
