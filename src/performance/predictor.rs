// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Frame-rate estimation
//!
//! Estimates are a fixed heuristic over synthetic benchmark scores:
//!
//! ```text
//! avg = preset_base_fps * game_difficulty * resolution_scale
//!       * (w_cpu * cpu_index + w_gpu * gpu_index)
//!       * rt_penalty (when ray tracing)
//! ```
//!
//! 1%-low and minimum frame rates are fixed fractions of the average chosen
//! by bottleneck type. Every reported value is clamped to [`MIN_FPS`, `MAX_FPS`].

use serde::{Deserialize, Serialize};

use super::bottleneck::{check_bottleneck, cpu_index, gpu_index, BottleneckType};
use super::game::GameId;
use super::options::{GraphicsPreset, PredictorOptions, Resolution};
use crate::catalog::Build;

pub const MIN_FPS: u32 = 5;
pub const MAX_FPS: u32 = 800;

/// Predicted frame rates for one game at one rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FpsEstimate {
    pub game: GameId,
    pub resolution: Resolution,
    pub preset: GraphicsPreset,
    pub ray_tracing: bool,
    pub avg_fps: u32,
    #[serde(rename = "low1PercentFps")]
    pub low_1_percent_fps: u32,
    pub min_fps: u32,
    pub bottleneck: BottleneckType,
    pub bottleneck_percent: u8,
    pub significant_bottleneck: bool,
}

/// (1%-low, minimum) as fractions of the average frame rate
fn frame_time_fractions(bottleneck: BottleneckType) -> (f64, f64) {
    match bottleneck {
        BottleneckType::Cpu => (0.72, 0.55),
        BottleneckType::Gpu => (0.78, 0.62),
        BottleneckType::Balanced | BottleneckType::Unknown => (0.75, 0.58),
    }
}

/// Clamp to the reportable range and round to a whole frame rate.
///
/// NaN, which only comes out of degenerate benchmark data, reports the floor.
pub fn clamp_fps(value: f64) -> u32 {
    if value.is_nan() {
        return MIN_FPS;
    }
    value.clamp(f64::from(MIN_FPS), f64::from(MAX_FPS)).round() as u32
}

/// Estimate frame rates for `game`.
///
/// Returns `None` when the build has no CPU or no GPU.
pub fn estimate_for_game(
    game: GameId,
    build: &Build,
    options: &PredictorOptions,
) -> Option<FpsEstimate> {
    let cpu = build.cpu.as_ref()?;
    let gpu = build.gpu.as_ref()?;

    let weights = options.resolution.weights();
    let composite =
        weights.cpu * cpu_index(cpu) + weights.gpu * gpu_index(gpu, options.ray_tracing);

    let base_fps = options.preset.base_fps_1080p() * game.difficulty_multiplier();
    let rt_penalty = if options.ray_tracing {
        game.ray_tracing_penalty()
    } else {
        1.0
    };

    let avg = base_fps * options.resolution.scale() * composite * rt_penalty;

    // Classification always uses raster performance, even with ray tracing on.
    let analysis = check_bottleneck(cpu, gpu);
    let (low_fraction, min_fraction) = frame_time_fractions(analysis.kind);

    let estimate = FpsEstimate {
        game,
        resolution: options.resolution,
        preset: options.preset,
        ray_tracing: options.ray_tracing,
        avg_fps: clamp_fps(avg),
        low_1_percent_fps: clamp_fps(avg * low_fraction),
        min_fps: clamp_fps(avg * min_fraction),
        bottleneck: analysis.kind,
        bottleneck_percent: analysis.percentage,
        significant_bottleneck: analysis.significant,
    };

    tracing::debug!(
        target: "rigcheck.performance",
        game = %game,
        resolution = %options.resolution,
        preset = %options.preset,
        ray_tracing = options.ray_tracing,
        avg_fps = estimate.avg_fps,
        bottleneck = %estimate.bottleneck,
        "fps estimate"
    );

    Some(estimate)
}

/// Estimate the headline title shown next to the builder.
pub fn estimate_battlefield_2042(build: &Build, options: &PredictorOptions) -> Option<FpsEstimate> {
    estimate_for_game(GameId::Battlefield2042, build, options)
}

/// Estimate every supported game, in [`GameId::ALL`] order.
///
/// Empty when the build has no CPU or no GPU.
pub fn estimate_all_games(build: &Build, options: &PredictorOptions) -> Vec<FpsEstimate> {
    GameId::ALL
        .iter()
        .filter_map(|game| estimate_for_game(*game, build, options))
        .collect()
}
