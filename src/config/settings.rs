// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for rigcheck
//!
//! Handles loading and saving settings from ~/.rigcheck/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::compatibility::{
    CompatibilityOptions, DEFAULT_BASE_SYSTEM_W, DEFAULT_LOAD_WARNING_RATIO,
    DEFAULT_PSU_HEADROOM_FACTOR,
};
use crate::performance::{GraphicsPreset, PredictorOptions, Resolution, VerdictThresholds};

mod io;
mod validation;

/// Main settings structure, stored in ~/.rigcheck/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Power budget tunables for the compatibility check
    #[serde(default)]
    pub compatibility: CompatibilityConfig,

    /// Default rendering target for FPS estimates
    #[serde(default)]
    pub predictor: PredictorConfig,

    /// Verdict badge cut-offs
    #[serde(default)]
    pub verdict: VerdictConfig,

    /// PSU load warnings
    #[serde(default)]
    pub power: PowerConfig,

    /// Catalog file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Compatibility check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityConfig {
    /// Fans, storage and motherboard draw in watts
    #[serde(default = "default_base_system_w")]
    pub base_system_w: u32,

    /// Multiplier applied to total draw when recommending a PSU
    #[serde(default = "default_psu_headroom_factor")]
    pub psu_headroom_factor: f64,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            base_system_w: default_base_system_w(),
            psu_headroom_factor: default_psu_headroom_factor(),
        }
    }
}

/// Default predictor options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PredictorConfig {
    #[serde(default)]
    pub resolution: Resolution,

    #[serde(default)]
    pub preset: GraphicsPreset,

    #[serde(default)]
    pub ray_tracing: bool,
}

/// Verdict badge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictConfig {
    /// Mismatch percent above which a CPU/GPU-bound build is critical
    #[serde(default = "default_critical_bottleneck_percent")]
    pub critical_bottleneck_percent: u8,

    /// Mismatch percent at or below which a build is approved
    #[serde(default = "default_approved_bottleneck_percent")]
    pub approved_bottleneck_percent: u8,

    /// Minimum CPU gaming score for the flagship badge
    #[serde(default = "default_flagship_cpu_gaming_score")]
    pub flagship_cpu_gaming_score: f64,

    /// Minimum GPU raster score for the flagship badge
    #[serde(default = "default_flagship_gpu_raster_score")]
    pub flagship_gpu_raster_score: f64,
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            critical_bottleneck_percent: default_critical_bottleneck_percent(),
            approved_bottleneck_percent: default_approved_bottleneck_percent(),
            flagship_cpu_gaming_score: default_flagship_cpu_gaming_score(),
            flagship_gpu_raster_score: default_flagship_gpu_raster_score(),
        }
    }
}

/// PSU load configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerConfig {
    /// Share of PSU capacity (0.0-1.0) above which the PSU slot is flagged
    #[serde(default = "default_load_warning_ratio")]
    pub load_warning_ratio: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            load_warning_ratio: default_load_warning_ratio(),
        }
    }
}

impl Settings {
    /// Options for [`crate::compatibility::check_compatibility`]
    pub fn compatibility_options(&self) -> CompatibilityOptions {
        CompatibilityOptions {
            base_system_w: self.compatibility.base_system_w,
            psu_headroom_factor: self.compatibility.psu_headroom_factor,
        }
    }

    /// Default options for FPS estimates
    pub fn predictor_options(&self) -> PredictorOptions {
        PredictorOptions {
            resolution: self.predictor.resolution,
            preset: self.predictor.preset,
            ray_tracing: self.predictor.ray_tracing,
        }
    }

    pub fn verdict_thresholds(&self) -> VerdictThresholds {
        VerdictThresholds {
            critical_bottleneck_percent: self.verdict.critical_bottleneck_percent,
            approved_bottleneck_percent: self.verdict.approved_bottleneck_percent,
            flagship_cpu_gaming_score: self.verdict.flagship_cpu_gaming_score,
            flagship_gpu_raster_score: self.verdict.flagship_gpu_raster_score,
        }
    }
}

// Compatibility defaults
fn default_base_system_w() -> u32 {
    DEFAULT_BASE_SYSTEM_W
}

fn default_psu_headroom_factor() -> f64 {
    DEFAULT_PSU_HEADROOM_FACTOR
}

// Verdict defaults
fn default_critical_bottleneck_percent() -> u8 {
    15
}

fn default_approved_bottleneck_percent() -> u8 {
    10
}

fn default_flagship_cpu_gaming_score() -> f64 {
    2300.0
}

fn default_flagship_gpu_raster_score() -> f64 {
    3300.0
}

fn default_load_warning_ratio() -> f64 {
    DEFAULT_LOAD_WARNING_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.compatibility.base_system_w, 60);
        assert!((settings.compatibility.psu_headroom_factor - 1.5).abs() < f64::EPSILON);
        assert_eq!(settings.predictor.resolution, Resolution::Qhd);
        assert_eq!(settings.predictor.preset, GraphicsPreset::High);
        assert!(!settings.predictor.ray_tracing);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_verdict_defaults_match_engine() {
        let settings = Settings::default();
        assert_eq!(settings.verdict_thresholds(), VerdictThresholds::default());
    }

    #[test]
    fn test_option_conversions() {
        let mut settings = Settings::default();
        settings.compatibility.base_system_w = 80;
        settings.predictor.resolution = Resolution::Uhd;
        settings.predictor.ray_tracing = true;

        assert_eq!(settings.compatibility_options().base_system_w, 80);
        let options = settings.predictor_options();
        assert_eq!(options.resolution, Resolution::Uhd);
        assert!(options.ray_tracing);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "compatibility": { "base_system_w": 90 }, "predictor": { "preset": "ultra" } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.compatibility.base_system_w, 90);
        assert!((settings.compatibility.psu_headroom_factor - 1.5).abs() < f64::EPSILON);
        assert_eq!(settings.predictor.preset, GraphicsPreset::Ultra);
        assert_eq!(settings.predictor.resolution, Resolution::Qhd);
        assert_eq!(settings.verdict.critical_bottleneck_percent, 15);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.compatibility.psu_headroom_factor = 1.3;
        settings.catalog_path = Some(PathBuf::from("/srv/catalog.json"));
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert!((loaded.compatibility.psu_headroom_factor - 1.3).abs() < f64::EPSILON);
        assert_eq!(loaded.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Settings::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.compatibility.base_system_w, 60);
    }
}
