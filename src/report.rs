// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Plain-text build report, as copied to the clipboard by the builder UI

use crate::catalog::{Build, ComponentKind};
use crate::performance::{bottleneck_label, FpsEstimate, PredictorOptions};

const TITLE: &str = "TitanGaming Build Report";

fn target_line(resolution: &str, preset: &str, ray_tracing: bool) -> String {
    format!(
        "Target: {} {}{}",
        resolution.to_uppercase(),
        preset.to_uppercase(),
        if ray_tracing { " + Ray Tracing" } else { "" }
    )
}

fn game_line(estimate: &FpsEstimate) -> String {
    format!(
        "- {}: {} avg / {} 1% / {} min @ {} {}{}",
        estimate.game,
        estimate.avg_fps,
        estimate.low_1_percent_fps,
        estimate.min_fps,
        estimate.resolution.label().to_uppercase(),
        estimate.preset.label().to_uppercase(),
        if estimate.ray_tracing { " (RT ON)" } else { "" }
    )
}

/// Render the shareable build summary.
///
/// `headline` is the estimate for the featured game; `all` is typically the
/// output of [`crate::performance::estimate_all_games`].
pub fn render_build_report(
    build: &Build,
    options: &PredictorOptions,
    headline: Option<&FpsEstimate>,
    all: &[FpsEstimate],
) -> String {
    let mut lines: Vec<String> = vec![TITLE.to_string(), "-".repeat(TITLE.len())];

    for kind in ComponentKind::ALL {
        lines.push(format!(
            "{}: {}",
            kind.label(),
            build.name_of(kind).unwrap_or("Not selected")
        ));
    }

    lines.push(String::new());
    lines.push(target_line(
        options.resolution.label(),
        options.preset.label(),
        options.ray_tracing,
    ));

    if let Some(estimate) = headline {
        lines.push(format!(
            "{}: {} avg / {} 1% / {} min FPS",
            estimate.game, estimate.avg_fps, estimate.low_1_percent_fps, estimate.min_fps
        ));
    }

    if !all.is_empty() {
        lines.push(String::new());
        lines.push("Game Performance:".to_string());
        lines.extend(all.iter().map(game_line));
    }

    if headline.is_some() {
        lines.push(String::new());
        lines.push(format!("Titan Verdict: {}", bottleneck_label(headline)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::complete_build;
    use crate::performance::{estimate_all_games, estimate_battlefield_2042, Resolution};

    #[test]
    fn test_empty_build_report() {
        let report = render_build_report(&Build::new(), &PredictorOptions::default(), None, &[]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "TitanGaming Build Report");
        assert_eq!(lines[1], "------------------------");
        assert_eq!(lines[2], "CPU: Not selected");
        assert_eq!(lines[6], "PSU: Not selected");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Target: 1440P HIGH");
        assert_eq!(lines.len(), 9);
        assert!(!report.contains("Titan Verdict"));
    }

    #[test]
    fn test_full_report() {
        let build = complete_build();
        let options = PredictorOptions::default();
        let headline = estimate_battlefield_2042(&build, &options);
        let all = estimate_all_games(&build, &options);

        let report = render_build_report(&build, &options, headline.as_ref(), &all);
        assert!(report.contains("CPU: Ryzen 7 7800X3D"));
        assert!(report.contains("GPU: GeForce RTX 4070 Super"));
        assert!(report.contains("Battlefield 2042: 127 avg / 96 1% / 74 min FPS"));
        assert!(report.contains("Game Performance:"));
        assert!(report.contains("- Battlefield 2042: 127 avg / 96 1% / 74 min @ 1440P HIGH"));
        assert!(report.contains("- Valorant:"));
        assert!(report.ends_with(
            "Titan Verdict: CPU and GPU are well balanced for this workload."
        ));
    }

    #[test]
    fn test_ray_tracing_markers() {
        let build = complete_build();
        let options = PredictorOptions {
            resolution: Resolution::Uhd,
            ray_tracing: true,
            ..Default::default()
        };
        let all = estimate_all_games(&build, &options);

        let report = render_build_report(&build, &options, None, &all);
        assert!(report.contains("Target: 4K HIGH + Ray Tracing"));
        assert!(report.contains("@ 4K HIGH (RT ON)"));
        assert!(!report.contains("Titan Verdict"));
    }
}
