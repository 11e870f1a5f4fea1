// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compatibility issue model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::ComponentKind;

/// How serious an issue is. Only errors fail a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable machine-readable issue code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    MissingCpu,
    MissingGpu,
    MissingMotherboard,
    MissingRam,
    MissingPsu,
    CpuSocketMismatch,
    RamStandardMismatch,
    PsuInsufficientWattage,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::MissingCpu => "missing_cpu",
            IssueCode::MissingGpu => "missing_gpu",
            IssueCode::MissingMotherboard => "missing_motherboard",
            IssueCode::MissingRam => "missing_ram",
            IssueCode::MissingPsu => "missing_psu",
            IssueCode::CpuSocketMismatch => "cpu_socket_mismatch",
            IssueCode::RamStandardMismatch => "ram_standard_mismatch",
            IssueCode::PsuInsufficientWattage => "psu_insufficient_wattage",
        }
    }

    /// Code reported when the slot for `kind` is empty
    pub fn missing(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Cpu => IssueCode::MissingCpu,
            ComponentKind::Gpu => IssueCode::MissingGpu,
            ComponentKind::Motherboard => IssueCode::MissingMotherboard,
            ComponentKind::Ram => IssueCode::MissingRam,
            ComponentKind::Psu => IssueCode::MissingPsu,
        }
    }

    pub fn is_missing_component(&self) -> bool {
        matches!(
            self,
            IssueCode::MissingCpu
                | IssueCode::MissingGpu
                | IssueCode::MissingMotherboard
                | IssueCode::MissingRam
                | IssueCode::MissingPsu
        )
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compatibility finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    pub fn error(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Warning for an empty slot, explaining what the slot is needed for
    pub fn missing(kind: ComponentKind) -> Self {
        let message = match kind {
            ComponentKind::Cpu => {
                "Select a CPU to validate socket compatibility and estimate FPS."
            }
            ComponentKind::Gpu => "Select a GPU to estimate FPS and power requirements.",
            ComponentKind::Motherboard => {
                "Select a motherboard to validate CPU socket and memory standard."
            }
            ComponentKind::Ram => "Select RAM to validate memory standard (DDR4/DDR5).",
            ComponentKind::Psu => "Select a PSU to validate power headroom.",
        };
        Self::warning(IssueCode::missing(kind), message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_code_serializes_as_snake_case() {
        for code in [
            IssueCode::MissingCpu,
            IssueCode::CpuSocketMismatch,
            IssueCode::PsuInsufficientWattage,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_missing_codes_per_kind() {
        let codes: Vec<&str> = ComponentKind::ALL
            .iter()
            .map(|kind| IssueCode::missing(*kind).as_str())
            .collect();
        assert_eq!(
            codes,
            vec![
                "missing_cpu",
                "missing_gpu",
                "missing_motherboard",
                "missing_ram",
                "missing_psu"
            ]
        );
    }

    #[test]
    fn test_missing_issue_is_warning() {
        let issue = Issue::missing(ComponentKind::Ram);
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.is_error());
        assert!(issue.message.contains("DDR4/DDR5"));
        assert!(issue.code.is_missing_component());
    }

    #[test]
    fn test_error_constructor() {
        let issue = Issue::error(IssueCode::CpuSocketMismatch, "nope");
        assert!(issue.is_error());
        assert!(!issue.code.is_missing_component());
    }
}
