// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Structural compatibility check for a build

use serde::{Deserialize, Serialize};

use super::issue::{Issue, IssueCode, Severity};
use super::power::{calculate_power_summary, CompatibilityOptions, PowerSummary};
use crate::catalog::{Build, ComponentKind};

/// Result of [`check_compatibility`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// True iff no issue has error severity
    pub ok: bool,
    pub issues: Vec<Issue>,
    pub power: PowerSummary,
}

impl CompatibilityReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Codes of error-severity issues, in report order
    pub fn error_codes(&self) -> Vec<IssueCode> {
        self.errors().map(|i| i.code).collect()
    }

    pub fn has_issue(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

/// Validate socket, memory standard and power headroom for a build.
///
/// Every applicable issue is reported, in a fixed order: missing slots
/// (CPU, GPU, motherboard, RAM, PSU), socket mismatch, memory standard
/// mismatch, then PSU wattage.
pub fn check_compatibility(build: &Build, options: &CompatibilityOptions) -> CompatibilityReport {
    let mut issues: Vec<Issue> = ComponentKind::ALL
        .iter()
        .filter(|kind| !build.has(**kind))
        .map(|kind| Issue::missing(*kind))
        .collect();

    if let (Some(cpu), Some(board)) = (&build.cpu, &build.motherboard) {
        if cpu.socket != board.socket {
            issues.push(Issue::error(
                IssueCode::CpuSocketMismatch,
                format!(
                    "CPU socket ({}) does not match motherboard socket ({}).",
                    cpu.socket, board.socket
                ),
            ));
        }
    }

    if let (Some(ram), Some(board)) = (&build.ram, &build.motherboard) {
        if ram.memory_standard != board.memory_standard {
            issues.push(Issue::error(
                IssueCode::RamStandardMismatch,
                format!(
                    "RAM standard ({}) does not match motherboard memory standard ({}).",
                    ram.memory_standard, board.memory_standard
                ),
            ));
        }
    }

    let power = calculate_power_summary(build, options);

    if let Some(psu) = &build.psu {
        if psu.wattage_w < power.recommended_psu_w {
            issues.push(Issue::error(
                IssueCode::PsuInsufficientWattage,
                format!(
                    "PSU wattage ({}W) is below the recommended {}W for this build.",
                    psu.wattage_w, power.recommended_psu_w
                ),
            ));
        }
    }

    let ok = !issues.iter().any(Issue::is_error);

    tracing::debug!(
        target: "rigcheck.compatibility",
        ok,
        issues = issues.len(),
        total_tdp_w = power.total_tdp_w,
        recommended_psu_w = power.recommended_psu_w,
        "compatibility check"
    );

    CompatibilityReport { ok, issues, power }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{complete_build, sample_catalog};

    fn codes(report: &CompatibilityReport) -> Vec<IssueCode> {
        report.issues.iter().map(|i| i.code).collect()
    }

    #[test]
    fn test_complete_build_passes() {
        let report = check_compatibility(&complete_build(), &CompatibilityOptions::default());
        assert!(report.ok);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_build_warns_for_every_slot() {
        let report = check_compatibility(&Build::new(), &CompatibilityOptions::default());
        assert!(report.ok);
        assert_eq!(
            codes(&report),
            vec![
                IssueCode::MissingCpu,
                IssueCode::MissingGpu,
                IssueCode::MissingMotherboard,
                IssueCode::MissingRam,
                IssueCode::MissingPsu,
            ]
        );
        assert!(report.warnings().count() == 5);
        assert_eq!(report.power.total_tdp_w, 60);
    }

    #[test]
    fn test_socket_mismatch() {
        let catalog = sample_catalog();
        let mut build = complete_build();
        build.cpu = catalog.find_cpu("core-i7-14700k").cloned();

        let report = check_compatibility(&build, &CompatibilityOptions::default());
        assert!(!report.ok);
        assert_eq!(report.error_codes(), vec![IssueCode::CpuSocketMismatch]);
        let issue = report.errors().next().unwrap();
        assert!(issue.message.contains("LGA1700"));
        assert!(issue.message.contains("AM5"));
    }

    #[test]
    fn test_ram_standard_mismatch() {
        let catalog = sample_catalog();
        let build = Build::new()
            .with_motherboard(catalog.find_motherboard("b550-tuf").unwrap().clone())
            .with_ram(catalog.find_ram("ddr5-32-6000").unwrap().clone());

        let report = check_compatibility(&build, &CompatibilityOptions::default());
        assert!(!report.ok);
        assert!(report.has_issue(IssueCode::RamStandardMismatch));
        let issue = report
            .issues
            .iter()
            .find(|i| i.code == IssueCode::RamStandardMismatch)
            .unwrap();
        assert!(issue.message.contains("DDR5"));
        assert!(issue.message.contains("DDR4"));
    }

    #[test]
    fn test_insufficient_psu() {
        let catalog = sample_catalog();
        let mut build = complete_build();
        build.gpu = catalog.find_gpu("rtx-4090").cloned();
        build.psu = catalog.find_psu("psu-650-gold").cloned();

        let report = check_compatibility(&build, &CompatibilityOptions::default());
        // 120 + 450 + 10 + 60 = 640 -> 960 -> 1000
        assert_eq!(report.power.recommended_psu_w, 1000);
        assert!(!report.ok);
        let issue = report.errors().next().unwrap();
        assert_eq!(issue.code, IssueCode::PsuInsufficientWattage);
        assert!(issue.message.contains("650W"));
        assert!(issue.message.contains("1000W"));
    }

    #[test]
    fn test_issue_order_with_every_error() {
        let catalog = sample_catalog();
        let build = Build::new()
            .with_cpu(catalog.find_cpu("core-i7-14700k").unwrap().clone())
            .with_gpu(catalog.find_gpu("rtx-4090").unwrap().clone())
            .with_motherboard(catalog.find_motherboard("b550-tuf").unwrap().clone())
            .with_ram(catalog.find_ram("ddr5-32-6000").unwrap().clone())
            .with_psu(catalog.find_psu("psu-650-gold").unwrap().clone());

        let report = check_compatibility(&build, &CompatibilityOptions::default());
        assert_eq!(
            codes(&report),
            vec![
                IssueCode::CpuSocketMismatch,
                IssueCode::RamStandardMismatch,
                IssueCode::PsuInsufficientWattage,
            ]
        );
    }

    #[test]
    fn test_missing_slots_come_before_errors() {
        let catalog = sample_catalog();
        let build = Build::new()
            .with_cpu(catalog.find_cpu("ryzen-5-5600").unwrap().clone())
            .with_motherboard(catalog.find_motherboard("b650-tomahawk").unwrap().clone());

        let report = check_compatibility(&build, &CompatibilityOptions::default());
        assert_eq!(
            codes(&report),
            vec![
                IssueCode::MissingGpu,
                IssueCode::MissingRam,
                IssueCode::MissingPsu,
                IssueCode::CpuSocketMismatch,
            ]
        );
    }

    #[test]
    fn test_psu_exactly_recommended_passes() {
        let mut build = complete_build();
        if let Some(psu) = build.psu.as_mut() {
            psu.wattage_w = 650;
        }
        let report = check_compatibility(&build, &CompatibilityOptions::default());
        assert!(report.ok);
    }
}
