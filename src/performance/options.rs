// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Rendering configuration for frame-rate estimates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the composite performance index splits between CPU and GPU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionWeights {
    pub cpu: f64,
    pub gpu: f64,
}

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// 1920x1080
    #[serde(rename = "1080p")]
    Fhd,
    /// 2560x1440
    #[default]
    #[serde(rename = "1440p")]
    Qhd,
    /// 3840x2160
    #[serde(rename = "4k")]
    Uhd,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Fhd, Resolution::Qhd, Resolution::Uhd];

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Fhd => "1080p",
            Resolution::Qhd => "1440p",
            Resolution::Uhd => "4k",
        }
    }

    /// Lower resolutions lean harder on the CPU.
    pub fn weights(&self) -> ResolutionWeights {
        match self {
            Resolution::Fhd => ResolutionWeights { cpu: 0.3, gpu: 0.7 },
            Resolution::Qhd => ResolutionWeights {
                cpu: 0.15,
                gpu: 0.85,
            },
            Resolution::Uhd => ResolutionWeights {
                cpu: 0.05,
                gpu: 0.95,
            },
        }
    }

    /// Frame-rate scale relative to 1080p
    pub fn scale(&self) -> f64 {
        match self {
            Resolution::Fhd => 1.0,
            Resolution::Qhd => 0.72,
            Resolution::Uhd => 0.42,
        }
    }

    /// Kind of play the resolution is typically chosen for
    pub fn target_label(&self) -> &'static str {
        match self {
            Resolution::Fhd => "esports",
            Resolution::Qhd => "high-refresh",
            Resolution::Uhd => "cinematic",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1080p" | "1080" | "fhd" => Ok(Resolution::Fhd),
            "1440p" | "1440" | "qhd" => Ok(Resolution::Qhd),
            "4k" | "2160p" | "2160" | "uhd" => Ok(Resolution::Uhd),
            other => Err(format!("unknown resolution: {}", other)),
        }
    }
}

/// In-game graphics preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsPreset {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

impl GraphicsPreset {
    pub const ALL: [GraphicsPreset; 4] = [
        GraphicsPreset::Low,
        GraphicsPreset::Medium,
        GraphicsPreset::High,
        GraphicsPreset::Ultra,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GraphicsPreset::Low => "low",
            GraphicsPreset::Medium => "medium",
            GraphicsPreset::High => "high",
            GraphicsPreset::Ultra => "ultra",
        }
    }

    /// Baseline average FPS at 1080p for a reference build
    pub fn base_fps_1080p(&self) -> f64 {
        match self {
            GraphicsPreset::Low => 170.0,
            GraphicsPreset::Medium => 155.0,
            GraphicsPreset::High => 140.0,
            GraphicsPreset::Ultra => 120.0,
        }
    }
}

impl fmt::Display for GraphicsPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GraphicsPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(GraphicsPreset::Low),
            "medium" | "med" => Ok(GraphicsPreset::Medium),
            "high" => Ok(GraphicsPreset::High),
            "ultra" => Ok(GraphicsPreset::Ultra),
            other => Err(format!("unknown graphics preset: {}", other)),
        }
    }
}

/// Target rendering configuration. Defaults to 1440p, high, ray tracing off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictorOptions {
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub preset: GraphicsPreset,
    #[serde(default)]
    pub ray_tracing: bool,
}

impl PredictorOptions {
    pub fn new(resolution: Resolution, preset: GraphicsPreset, ray_tracing: bool) -> Self {
        Self {
            resolution,
            preset,
            ray_tracing,
        }
    }
}
