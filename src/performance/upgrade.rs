// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU upgrade suggestions

use serde::{Deserialize, Serialize};

use super::game::GameId;
use super::options::PredictorOptions;
use super::predictor::{estimate_for_game, FpsEstimate};
use crate::catalog::{Build, Catalog, Gpu};

/// A suggested GPU swap and what it buys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuUpgrade {
    /// The next GPU up the raster ladder
    pub gpu: Gpu,
    /// Estimate for the current build
    pub current: FpsEstimate,
    /// Estimate with the GPU swapped in
    pub upgraded: FpsEstimate,
    /// Change in average FPS
    pub fps_delta: i64,
}

/// The catalog GPU immediately above `current_gpu_id` by raster score.
///
/// Ties keep catalog order. `None` when the GPU is already the fastest or is
/// not in the catalog.
pub fn next_tier_gpu<'a>(catalog: &'a Catalog, current_gpu_id: &str) -> Option<&'a Gpu> {
    let mut ladder: Vec<&Gpu> = catalog.gpus.iter().collect();
    ladder.sort_by(|a, b| {
        a.benchmarks
            .raster_score
            .total_cmp(&b.benchmarks.raster_score)
    });

    let index = ladder.iter().position(|gpu| gpu.id == current_gpu_id)?;
    ladder.get(index + 1).copied()
}

/// Suggest the next-tier GPU for a build and estimate the gain for `game`.
///
/// Requires both a CPU and a GPU in the build.
pub fn suggest_gpu_upgrade(
    catalog: &Catalog,
    build: &Build,
    game: GameId,
    options: &PredictorOptions,
) -> Option<GpuUpgrade> {
    let current = estimate_for_game(game, build, options)?;
    let current_gpu = build.gpu.as_ref()?;
    let candidate = next_tier_gpu(catalog, &current_gpu.id)?;

    let upgraded_build = Build {
        gpu: Some(candidate.clone()),
        ..build.clone()
    };
    let upgraded = estimate_for_game(game, &upgraded_build, options)?;

    Some(GpuUpgrade {
        gpu: candidate.clone(),
        current,
        upgraded,
        fps_delta: i64::from(upgraded.avg_fps) - i64::from(current.avg_fps),
    })
}
