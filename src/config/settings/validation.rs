// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{Result, RigError};

use super::Settings;

impl Settings {
    /// Reject values the engine cannot use meaningfully.
    pub fn validate(&self) -> Result<()> {
        let factor = self.compatibility.psu_headroom_factor;
        if !factor.is_finite() || factor < 1.0 {
            return Err(RigError::Config(format!(
                "compatibility.psu_headroom_factor must be a finite number >= 1.0, got {}",
                factor
            )));
        }

        let ratio = self.power.load_warning_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(RigError::Config(format!(
                "power.load_warning_ratio must be in (0.0, 1.0], got {}",
                ratio
            )));
        }

        let verdict = &self.verdict;
        if verdict.critical_bottleneck_percent > 100 || verdict.approved_bottleneck_percent > 100
        {
            return Err(RigError::Config(
                "verdict bottleneck percentages must be between 0 and 100".to_string(),
            ));
        }
        if verdict.approved_bottleneck_percent > verdict.critical_bottleneck_percent {
            return Err(RigError::Config(format!(
                "verdict.approved_bottleneck_percent ({}) exceeds critical_bottleneck_percent ({})",
                verdict.approved_bottleneck_percent, verdict.critical_bottleneck_percent
            )));
        }

        Ok(())
    }

    /// Human-readable notes about settings that deviate from the defaults.
    pub fn get_tuning_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.compatibility.psu_headroom_factor < 1.2 {
            warnings.push(format!(
                "PSU headroom factor {} leaves little margin for transient power spikes.",
                self.compatibility.psu_headroom_factor
            ));
        }

        if self.compatibility.base_system_w == 0 {
            warnings.push(
                "Base system draw is 0W; fans, storage and motherboard are not budgeted."
                    .to_string(),
            );
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
        assert!(Settings::default().get_tuning_warnings().is_empty());
    }

    #[test]
    fn test_headroom_below_one_rejected() {
        let mut settings = Settings::default();
        settings.compatibility.psu_headroom_factor = 0.9;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("psu_headroom_factor"));
    }

    #[test]
    fn test_non_finite_headroom_rejected() {
        let mut settings = Settings::default();
        settings.compatibility.psu_headroom_factor = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_ratio_bounds() {
        let mut settings = Settings::default();
        settings.power.load_warning_ratio = 0.0;
        assert!(settings.validate().is_err());
        settings.power.load_warning_ratio = 1.0;
        assert!(settings.validate().is_ok());
        settings.power.load_warning_ratio = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_verdict_percent_ordering() {
        let mut settings = Settings::default();
        settings.verdict.approved_bottleneck_percent = 20;
        assert!(settings.validate().is_err());

        settings.verdict.approved_bottleneck_percent = 10;
        settings.verdict.critical_bottleneck_percent = 120;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_tuning_warnings() {
        let mut settings = Settings::default();
        settings.compatibility.psu_headroom_factor = 1.1;
        settings.compatibility.base_system_w = 0;
        assert_eq!(settings.get_tuning_warnings().len(), 2);
    }
}
