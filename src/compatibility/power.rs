// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Power budget and PSU sizing

use serde::{Deserialize, Serialize};

use crate::catalog::{Build, Psu};

/// Fans, storage and motherboard draw not covered by component TDPs
pub const DEFAULT_BASE_SYSTEM_W: u32 = 60;
/// Safety margin applied to total draw when sizing a PSU
pub const DEFAULT_PSU_HEADROOM_FACTOR: f64 = 1.5;
/// Recommended PSU wattages are multiples of this step
pub const PSU_WATTAGE_STEP_W: u32 = 50;
/// Share of PSU capacity above which the build is considered to run hot
pub const DEFAULT_LOAD_WARNING_RATIO: f64 = 0.8;

/// Tunables for the compatibility check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityOptions {
    pub base_system_w: u32,
    pub psu_headroom_factor: f64,
}

impl Default for CompatibilityOptions {
    fn default() -> Self {
        Self {
            base_system_w: DEFAULT_BASE_SYSTEM_W,
            psu_headroom_factor: DEFAULT_PSU_HEADROOM_FACTOR,
        }
    }
}

/// Power draw breakdown for a build. Absent components contribute zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSummary {
    pub cpu_tdp_w: u32,
    pub gpu_tdp_w: u32,
    pub ram_tdp_w: u32,
    pub base_system_w: u32,
    pub total_tdp_w: u32,
    pub recommended_psu_w: u32,
}

/// Round `value` up to the next multiple of `step`.
///
/// A zero step only takes the ceiling. Negative or NaN inputs saturate to 0.
pub fn round_up_to_nearest(value: f64, step: u32) -> u32 {
    if step == 0 {
        return value.ceil() as u32;
    }
    let step = f64::from(step);
    ((value / step).ceil() * step) as u32
}

pub fn calculate_power_summary(build: &Build, options: &CompatibilityOptions) -> PowerSummary {
    let cpu_tdp_w = build.cpu.as_ref().map_or(0, |c| c.tdp_w);
    let gpu_tdp_w = build.gpu.as_ref().map_or(0, |g| g.tdp_w);
    let ram_tdp_w = build.ram.as_ref().map_or(0, |r| r.tdp_w);

    let total_tdp_w = cpu_tdp_w
        .saturating_add(gpu_tdp_w)
        .saturating_add(ram_tdp_w)
        .saturating_add(options.base_system_w);

    let recommended_psu_w = round_up_to_nearest(
        f64::from(total_tdp_w) * options.psu_headroom_factor,
        PSU_WATTAGE_STEP_W,
    );

    PowerSummary {
        cpu_tdp_w,
        gpu_tdp_w,
        ram_tdp_w,
        base_system_w: options.base_system_w,
        total_tdp_w,
        recommended_psu_w,
    }
}

/// Fraction of the PSU's rated wattage consumed by the build's total TDP.
///
/// Absent when no PSU is selected or it reports zero wattage.
pub fn psu_load_ratio(power: &PowerSummary, psu: Option<&Psu>) -> Option<f64> {
    let psu = psu?;
    if psu.wattage_w == 0 {
        return None;
    }
    Some(f64::from(power.total_tdp_w) / f64::from(psu.wattage_w))
}

/// Whether the PSU runs above `warning_ratio` of its capacity.
pub fn is_power_danger(power: &PowerSummary, psu: Option<&Psu>, warning_ratio: f64) -> bool {
    psu_load_ratio(power, psu).is_some_and(|ratio| ratio > warning_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{complete_build, sample_catalog};

    // ===== round_up_to_nearest tests =====

    #[test]
    fn test_round_up_to_nearest() {
        assert_eq!(round_up_to_nearest(825.0, 50), 850);
        assert_eq!(round_up_to_nearest(750.0, 50), 750);
        assert_eq!(round_up_to_nearest(750.1, 50), 800);
        assert_eq!(round_up_to_nearest(0.0, 50), 0);
    }

    #[test]
    fn test_round_up_zero_step() {
        assert_eq!(round_up_to_nearest(612.2, 0), 613);
    }

    #[test]
    fn test_round_up_negative_saturates() {
        assert_eq!(round_up_to_nearest(-120.0, 50), 0);
        assert_eq!(round_up_to_nearest(f64::NAN, 50), 0);
    }

    // ===== calculate_power_summary tests =====

    #[test]
    fn test_empty_build_uses_base_system_only() {
        let summary = calculate_power_summary(&Build::new(), &CompatibilityOptions::default());
        assert_eq!(summary.cpu_tdp_w, 0);
        assert_eq!(summary.gpu_tdp_w, 0);
        assert_eq!(summary.ram_tdp_w, 0);
        assert_eq!(summary.total_tdp_w, 60);
        assert_eq!(summary.recommended_psu_w, 100);
    }

    #[test]
    fn test_complete_build_summary() {
        let summary = calculate_power_summary(&complete_build(), &CompatibilityOptions::default());
        // 120 + 220 + 10 + 60
        assert_eq!(summary.total_tdp_w, 410);
        // 410 * 1.5 = 615 -> 650
        assert_eq!(summary.recommended_psu_w, 650);
    }

    #[test]
    fn test_custom_options() {
        let options = CompatibilityOptions {
            base_system_w: 100,
            psu_headroom_factor: 1.0,
        };
        let summary = calculate_power_summary(&complete_build(), &options);
        assert_eq!(summary.base_system_w, 100);
        assert_eq!(summary.total_tdp_w, 450);
        assert_eq!(summary.recommended_psu_w, 450);
    }

    // ===== load ratio tests =====

    #[test]
    fn test_psu_load_ratio() {
        let build = complete_build();
        let summary = calculate_power_summary(&build, &CompatibilityOptions::default());
        let ratio = psu_load_ratio(&summary, build.psu.as_ref()).unwrap();
        assert!((ratio - 410.0 / 850.0).abs() < 1e-9);
        assert!(!is_power_danger(
            &summary,
            build.psu.as_ref(),
            DEFAULT_LOAD_WARNING_RATIO
        ));
    }

    #[test]
    fn test_psu_load_ratio_without_psu() {
        let summary = calculate_power_summary(&Build::new(), &CompatibilityOptions::default());
        assert_eq!(psu_load_ratio(&summary, None), None);
        assert!(!is_power_danger(&summary, None, 0.0));
    }

    #[test]
    fn test_psu_load_ratio_zero_wattage() {
        let mut psu = sample_catalog().psus[0].clone();
        psu.wattage_w = 0;
        let summary = calculate_power_summary(&Build::new(), &CompatibilityOptions::default());
        assert_eq!(psu_load_ratio(&summary, Some(&psu)), None);
    }

    #[test]
    fn test_power_danger_on_small_psu() {
        let catalog = sample_catalog();
        let build = Build::new()
            .with_cpu(catalog.find_cpu("core-i7-14700k").unwrap().clone())
            .with_gpu(catalog.find_gpu("rtx-4090").unwrap().clone())
            .with_psu(catalog.find_psu("psu-650-gold").unwrap().clone());
        let summary = calculate_power_summary(&build, &CompatibilityOptions::default());
        // 125 + 450 + 60 = 635 on a 650W unit
        assert_eq!(summary.total_tdp_w, 635);
        assert!(is_power_danger(
            &summary,
            build.psu.as_ref(),
            DEFAULT_LOAD_WARNING_RATIO
        ));
    }
}
