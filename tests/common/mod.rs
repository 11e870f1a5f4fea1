// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

#![allow(dead_code)]

use rigcheck::catalog::{resolve_build, Build, BuildIds, Catalog};

pub fn demo_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../../demos/catalog.json")).unwrap()
}

pub fn ids(
    cpu: Option<&str>,
    gpu: Option<&str>,
    motherboard: Option<&str>,
    ram: Option<&str>,
    psu: Option<&str>,
) -> BuildIds {
    BuildIds {
        cpu_id: cpu.map(str::to_string),
        gpu_id: gpu.map(str::to_string),
        motherboard_id: motherboard.map(str::to_string),
        ram_id: ram.map(str::to_string),
        psu_id: psu.map(str::to_string),
    }
}

pub fn build(
    cpu: Option<&str>,
    gpu: Option<&str>,
    motherboard: Option<&str>,
    ram: Option<&str>,
    psu: Option<&str>,
) -> Build {
    resolve_build(&ids(cpu, gpu, motherboard, ram, psu), &demo_catalog())
}

/// 7800X3D, RTX 4070 Super, B650, DDR5 and an 850W unit
pub fn am5_build() -> Build {
    build(
        Some("ryzen-7-7800x3d"),
        Some("rtx-4070-super"),
        Some("b650-tomahawk"),
        Some("ddr5-32-6000"),
        Some("psu-850-gold"),
    )
}
