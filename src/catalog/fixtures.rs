// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shared sample data for unit tests

use super::build::{resolve_build, Build, BuildIds};
use super::store::Catalog;

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../../demos/catalog.json"))
        .expect("demo catalog should parse")
}

/// AM5 build that passes every check: 7800X3D, RTX 4070 Super, B650, DDR5, 850W.
pub(crate) fn complete_build() -> Build {
    resolve_build(
        &BuildIds {
            cpu_id: Some("ryzen-7-7800x3d".to_string()),
            gpu_id: Some("rtx-4070-super".to_string()),
            motherboard_id: Some("b650-tomahawk".to_string()),
            ram_id: Some("ddr5-32-6000".to_string()),
            psu_id: Some("psu-850-gold".to_string()),
        },
        &sample_catalog(),
    )
}
