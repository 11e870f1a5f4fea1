// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Build verdicts and user-facing labels derived from estimates

use serde::{Deserialize, Serialize};

use super::bottleneck::BottleneckType;
use super::game::GameId;
use super::predictor::FpsEstimate;
use super::upgrade::GpuUpgrade;
use crate::catalog::{Build, ComponentKind};
use crate::compatibility::{CompatibilityReport, IssueCode};

/// Cut-offs for the verdict badges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    /// A CPU/GPU-bound build above this mismatch percent is critical
    pub critical_bottleneck_percent: u8,
    /// Mismatch at or below this percent earns approval
    pub approved_bottleneck_percent: u8,
    pub flagship_cpu_gaming_score: f64,
    pub flagship_gpu_raster_score: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            critical_bottleneck_percent: 15,
            approved_bottleneck_percent: 10,
            flagship_cpu_gaming_score: 2300.0,
            flagship_gpu_raster_score: 3300.0,
        }
    }
}

/// Badges shown for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildVerdict {
    /// Clearly CPU- or GPU-bound
    pub critical_bottleneck: bool,
    /// Balanced enough to recommend
    pub approved: bool,
    /// Top-tier parts with no critical bottleneck
    pub flagship: bool,
}

impl BuildVerdict {
    /// All badges are off without an estimate.
    pub fn evaluate(
        estimate: Option<&FpsEstimate>,
        build: &Build,
        thresholds: &VerdictThresholds,
    ) -> Self {
        let Some(estimate) = estimate else {
            return Self::default();
        };

        let critical_bottleneck = matches!(
            estimate.bottleneck,
            BottleneckType::Cpu | BottleneckType::Gpu
        ) && estimate.bottleneck_percent > thresholds.critical_bottleneck_percent;

        let approved = !critical_bottleneck
            && (estimate.bottleneck == BottleneckType::Balanced
                || estimate.bottleneck_percent <= thresholds.approved_bottleneck_percent);

        let flagship = !critical_bottleneck
            && match (&build.cpu, &build.gpu) {
                (Some(cpu), Some(gpu)) => {
                    cpu.benchmarks.gaming_score >= thresholds.flagship_cpu_gaming_score
                        && gpu.benchmarks.raster_score >= thresholds.flagship_gpu_raster_score
                }
                _ => false,
            };

        Self {
            critical_bottleneck,
            approved,
            flagship,
        }
    }
}

/// Which build slots the UI should flag as faulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotFaults {
    pub cpu: bool,
    pub gpu: bool,
    pub motherboard: bool,
    pub ram: bool,
    pub psu: bool,
}

impl SlotFaults {
    pub fn evaluate(
        report: &CompatibilityReport,
        estimate: Option<&FpsEstimate>,
        power_danger: bool,
    ) -> Self {
        let has_error = |code: IssueCode| report.error_codes().contains(&code);
        let significant_on = |side: BottleneckType| {
            estimate.is_some_and(|e| e.significant_bottleneck && e.bottleneck == side)
        };

        let socket = has_error(IssueCode::CpuSocketMismatch);
        let memory = has_error(IssueCode::RamStandardMismatch);

        Self {
            cpu: socket || significant_on(BottleneckType::Cpu),
            gpu: significant_on(BottleneckType::Gpu),
            motherboard: socket || memory,
            ram: memory,
            psu: has_error(IssueCode::PsuInsufficientWattage) || power_danger,
        }
    }

    pub fn for_kind(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Cpu => self.cpu,
            ComponentKind::Gpu => self.gpu,
            ComponentKind::Motherboard => self.motherboard,
            ComponentKind::Ram => self.ram,
            ComponentKind::Psu => self.psu,
        }
    }

    pub fn any(&self) -> bool {
        ComponentKind::ALL.iter().any(|kind| self.for_kind(*kind))
    }
}

/// One-line explanation of the bottleneck
pub fn bottleneck_label(estimate: Option<&FpsEstimate>) -> String {
    let Some(estimate) = estimate else {
        return "Balanced or unknown bottleneck.".to_string();
    };

    let side = match estimate.bottleneck {
        BottleneckType::Unknown => return "Balanced or unknown bottleneck.".to_string(),
        BottleneckType::Balanced => {
            return "CPU and GPU are well balanced for this workload.".to_string()
        }
        BottleneckType::Cpu => "CPU-bound",
        BottleneckType::Gpu => "GPU-bound",
    };

    if estimate.significant_bottleneck {
        format!(
            "Significant {} bottleneck ({}% mismatch across tiers).",
            side, estimate.bottleneck_percent
        )
    } else {
        format!(
            "{} with mild bottleneck ({}% mismatch).",
            side, estimate.bottleneck_percent
        )
    }
}

/// Headline FPS summary, or a prompt to pick parts when there is no estimate
pub fn fps_summary(estimate: Option<&FpsEstimate>, game: GameId) -> String {
    match estimate {
        None => format!("Select a CPU and GPU to estimate {} FPS.", game),
        Some(estimate) => format!(
            "{} FPS avg at {} {} ({})",
            estimate.avg_fps,
            estimate.resolution.label().to_uppercase(),
            estimate.preset.label().to_uppercase(),
            estimate.resolution.target_label()
        ),
    }
}

/// Advice shown next to the verdict badges.
///
/// `upgrade` is the next-tier GPU suggestion for the same game and options;
/// its FPS gain is quoted for GPU-bound builds when positive.
pub fn verdict_advice(
    estimate: Option<&FpsEstimate>,
    verdict: &BuildVerdict,
    upgrade: Option<&GpuUpgrade>,
) -> String {
    let Some(estimate) = estimate else {
        return "Lock in at least a CPU and GPU and Titan will evaluate balance, bottlenecks and real-world FPS.".to_string();
    };

    if verdict.flagship {
        return "This rig is entering GOD MODE territory. Expect 4K high-refresh gameplay in most titles and enough overhead for heavy ray tracing, streaming and background tasks.".to_string();
    }

    let percent = estimate.bottleneck_percent;
    match estimate.bottleneck {
        BottleneckType::Cpu if verdict.critical_bottleneck => {
            let gain = percent.clamp(20, 45);
            format!(
                "Soldier, your GPU is a beast but your CPU is holding it back. Upgrade to a higher-tier Ryzen 7/9 or Core i7/i9 class chip for around {}% more headroom and smoother frametimes.",
                gain
            )
        }
        BottleneckType::Gpu if verdict.critical_bottleneck => {
            let gain = match upgrade {
                Some(upgrade) if upgrade.fps_delta > 0 => format!("{} FPS", upgrade.fps_delta),
                _ => format!("{}%", percent.clamp(15, 40)),
            };
            let gpu_name = upgrade.map_or("a higher-tier GPU", |u| u.gpu.name.as_str());
            format!(
                "Your CPU is barely breaking a sweat while the GPU struggles to keep up. Consider stepping up to {} for roughly {} more performance at these settings.",
                gpu_name, gain
            )
        }
        _ => "Soldier, this configuration keeps CPU and GPU in the same weight class. You should see consistent high-refresh gameplay at your chosen settings.".to_string(),
    }
}
