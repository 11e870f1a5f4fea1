// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU/GPU bottleneck classification
//!
//! Benchmark scores are normalized against fixed reference scores into a CPU
//! index and a GPU index (1.0 = reference part). Two independent signals are
//! derived from them:
//!
//! - a tier difference (0-5 tiers each), which drives the "significant" flag
//! - a continuous mismatch percentage, which drives the numeric badge
//!
//! The two can disagree near tier boundaries. Both are kept as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Cpu, Gpu};

/// CPU gaming score of the reference CPU
pub const CPU_REFERENCE_SCORE: f64 = 1700.0;
/// GPU raster score of the reference GPU
pub const GPU_RASTER_REFERENCE_SCORE: f64 = 2100.0;
/// GPU ray-tracing score of the reference GPU (separate calibration)
pub const GPU_RAY_TRACING_REFERENCE_SCORE: f64 = 1800.0;

/// CPU index / GPU index below this ratio is CPU-bound
pub const CPU_BOUND_RATIO: f64 = 0.85;
/// CPU index / GPU index above this ratio is GPU-bound
pub const GPU_BOUND_RATIO: f64 = 1.18;
/// Tier differences above this are significant
pub const SIGNIFICANT_TIER_DIFFERENCE: u8 = 2;

/// Which side limits frame rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckType {
    Cpu,
    Gpu,
    Balanced,
    Unknown,
}

impl fmt::Display for BottleneckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BottleneckType::Cpu => write!(f, "cpu"),
            BottleneckType::Gpu => write!(f, "gpu"),
            BottleneckType::Balanced => write!(f, "balanced"),
            BottleneckType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Full bottleneck analysis for a CPU/GPU pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckAnalysis {
    #[serde(rename = "type")]
    pub kind: BottleneckType,
    /// Continuous CPU/GPU mismatch, 0-100
    pub percentage: u8,
    pub cpu_tier: u8,
    pub gpu_tier: u8,
    pub tier_difference: u8,
    pub significant: bool,
}

pub fn cpu_index(cpu: &Cpu) -> f64 {
    cpu.benchmarks.gaming_score / CPU_REFERENCE_SCORE
}

/// GPU index from the raster score, or the ray-tracing score when requested.
pub fn gpu_index(gpu: &Gpu, ray_tracing: bool) -> f64 {
    if ray_tracing {
        gpu.benchmarks.ray_tracing_score / GPU_RAY_TRACING_REFERENCE_SCORE
    } else {
        gpu.benchmarks.raster_score / GPU_RASTER_REFERENCE_SCORE
    }
}

/// Bucket a normalized index into a 0-5 performance tier.
pub fn performance_tier(index: f64) -> u8 {
    if !index.is_finite() || index <= 0.0 {
        return 0;
    }
    if index >= 1.6 {
        5
    } else if index >= 1.3 {
        4
    } else if index >= 1.1 {
        3
    } else if index >= 0.9 {
        2
    } else if index >= 0.7 {
        1
    } else {
        0
    }
}

/// Classify by the ratio of CPU index to GPU index.
pub fn classify_indexes(cpu_index: f64, gpu_index: f64) -> BottleneckType {
    if !cpu_index.is_finite() || !gpu_index.is_finite() || gpu_index == 0.0 {
        return BottleneckType::Unknown;
    }

    let ratio = cpu_index / gpu_index;
    if ratio < CPU_BOUND_RATIO {
        BottleneckType::Cpu
    } else if ratio > GPU_BOUND_RATIO {
        BottleneckType::Gpu
    } else {
        BottleneckType::Balanced
    }
}

/// `|cpu - gpu| / max(cpu, gpu)` as a rounded percentage capped at 100.
///
/// Zero when the larger index is not a positive finite number.
pub fn mismatch_percentage(cpu_index: f64, gpu_index: f64) -> u8 {
    if cpu_index.is_nan() || gpu_index.is_nan() {
        return 0;
    }
    let max_index = cpu_index.max(gpu_index);
    if !max_index.is_finite() || max_index <= 0.0 {
        return 0;
    }

    let diff = (cpu_index - gpu_index).abs();
    let percentage = (diff / max_index * 100.0).round().min(100.0);
    if percentage.is_finite() {
        percentage as u8
    } else {
        0
    }
}

/// Compare a CPU and GPU using raster performance.
pub fn check_bottleneck(cpu: &Cpu, gpu: &Gpu) -> BottleneckAnalysis {
    analyze_indexes(cpu_index(cpu), gpu_index(gpu, false))
}

/// Bottleneck analysis from precomputed indexes.
pub fn analyze_indexes(cpu_index: f64, gpu_index: f64) -> BottleneckAnalysis {
    let kind = classify_indexes(cpu_index, gpu_index);
    let cpu_tier = performance_tier(cpu_index);
    let gpu_tier = performance_tier(gpu_index);
    let tier_difference = cpu_tier.abs_diff(gpu_tier);

    BottleneckAnalysis {
        kind,
        percentage: mismatch_percentage(cpu_index, gpu_index),
        cpu_tier,
        gpu_tier,
        tier_difference,
        significant: tier_difference > SIGNIFICANT_TIER_DIFFERENCE,
    }
}
