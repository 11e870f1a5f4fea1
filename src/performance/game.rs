// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Supported games and their fixed demand profiles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ray-tracing penalty for titles without a measured profile
pub const DEFAULT_RAY_TRACING_PENALTY: f64 = 0.82;

/// The closed set of games the predictor knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    #[serde(rename = "Battlefield 2042")]
    Battlefield2042,
    #[serde(rename = "GTA VI (predicted)")]
    GtaVi,
    #[serde(rename = "Cyberpunk 2077")]
    Cyberpunk2077,
    #[serde(rename = "Warzone 3")]
    Warzone3,
    #[serde(rename = "Valorant")]
    Valorant,
}

impl GameId {
    /// Every supported game, in reporting order
    pub const ALL: [GameId; 5] = [
        GameId::Battlefield2042,
        GameId::GtaVi,
        GameId::Cyberpunk2077,
        GameId::Warzone3,
        GameId::Valorant,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GameId::Battlefield2042 => "Battlefield 2042",
            GameId::GtaVi => "GTA VI (predicted)",
            GameId::Cyberpunk2077 => "Cyberpunk 2077",
            GameId::Warzone3 => "Warzone 3",
            GameId::Valorant => "Valorant",
        }
    }

    /// Short identifier accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            GameId::Battlefield2042 => "battlefield-2042",
            GameId::GtaVi => "gta-vi",
            GameId::Cyberpunk2077 => "cyberpunk-2077",
            GameId::Warzone3 => "warzone-3",
            GameId::Valorant => "valorant",
        }
    }

    /// Frame-rate multiplier relative to the Battlefield 2042 baseline
    pub fn difficulty_multiplier(&self) -> f64 {
        match self {
            GameId::Battlefield2042 => 1.0,
            GameId::GtaVi => 0.78,         // heavy open world load
            GameId::Cyberpunk2077 => 0.7,  // extremely demanding
            GameId::Warzone3 => 0.9,       // heavy but well optimised
            GameId::Valorant => 1.45,      // very easy to run
        }
    }

    /// Frame-rate multiplier applied when ray tracing is enabled
    pub fn ray_tracing_penalty(&self) -> f64 {
        match self {
            GameId::Cyberpunk2077 => 0.6,
            GameId::GtaVi => 0.7,
            GameId::Warzone3 => 0.78,
            GameId::Valorant => 0.9,
            GameId::Battlefield2042 => DEFAULT_RAY_TRACING_PENALTY,
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GameId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        GameId::ALL
            .iter()
            .copied()
            .find(|game| {
                game.slug().eq_ignore_ascii_case(needle)
                    || game.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = GameId::ALL.iter().map(|g| g.slug()).collect();
                format!("unknown game '{}' (expected one of: {})", needle, known.join(", "))
            })
    }
}
