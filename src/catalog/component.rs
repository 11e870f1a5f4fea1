// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware component records
//!
//! Every record is an immutable value. Field names serialize in camelCase so
//! catalog files share the storefront's data shape (`tdpW`, `gamingScore`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency of a catalog price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[default]
    #[serde(rename = "USD")]
    Usd,
}

/// Catalog price
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub currency: CurrencyCode,
    pub amount: f64,
}

impl Money {
    pub fn usd(amount: f64) -> Self {
        Self {
            currency: CurrencyCode::Usd,
            amount,
        }
    }
}

/// CPU / motherboard socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuSocket {
    AM4,
    AM5,
    LGA1700,
    LGA1851,
}

impl fmt::Display for CpuSocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuSocket::AM4 => write!(f, "AM4"),
            CpuSocket::AM5 => write!(f, "AM5"),
            CpuSocket::LGA1700 => write!(f, "LGA1700"),
            CpuSocket::LGA1851 => write!(f, "LGA1851"),
        }
    }
}

/// DRAM generation supported by a motherboard or provided by a RAM kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryStandard {
    DDR4,
    DDR5,
}

impl fmt::Display for MemoryStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryStandard::DDR4 => write!(f, "DDR4"),
            MemoryStandard::DDR5 => write!(f, "DDR5"),
        }
    }
}

/// Motherboard form factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormFactor {
    #[serde(rename = "ATX")]
    Atx,
    #[serde(rename = "mATX")]
    MicroAtx,
    #[serde(rename = "ITX")]
    Itx,
}

/// PCIe generation of the primary x16 slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PcieGeneration {
    Gen3,
    Gen4,
    Gen5,
}

impl TryFrom<u8> for PcieGeneration {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            3 => Ok(PcieGeneration::Gen3),
            4 => Ok(PcieGeneration::Gen4),
            5 => Ok(PcieGeneration::Gen5),
            other => Err(format!("unsupported PCIe generation: {}", other)),
        }
    }
}

impl From<PcieGeneration> for u8 {
    fn from(generation: PcieGeneration) -> Self {
        match generation {
            PcieGeneration::Gen3 => 3,
            PcieGeneration::Gen4 => 4,
            PcieGeneration::Gen5 => 5,
        }
    }
}

/// 80 PLUS efficiency certification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyRating {
    #[serde(rename = "80+ Gold")]
    Gold,
    #[serde(rename = "80+ Platinum")]
    Platinum,
    #[serde(rename = "80+ Titanium")]
    Titanium,
}

/// PSU cable modularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modularity {
    Full,
    Semi,
    Non,
}

/// Synthetic CPU benchmark scores
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuBenchmarks {
    pub gaming_score: f64,
    pub single_core_score: f64,
    pub multi_core_score: f64,
}

/// Synthetic GPU benchmark scores
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuBenchmarks {
    pub raster_score: f64,
    pub ray_tracing_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub socket: CpuSocket,
    pub cores: u32,
    pub threads: u32,
    pub base_clock_ghz: f64,
    pub boost_clock_ghz: f64,
    pub tdp_w: u32,
    pub benchmarks: CpuBenchmarks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gpu {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub vram_gb: u32,
    pub tdp_w: u32,
    pub benchmarks: GpuBenchmarks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motherboard {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub socket: CpuSocket,
    pub chipset: String,
    pub form_factor: FormFactor,
    pub memory_standard: MemoryStandard,
    pub max_memory_gb: u32,
    pub pcie_gen: PcieGeneration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub memory_standard: MemoryStandard,
    pub capacity_gb: u32,
    pub modules: u32,
    pub speed_mhz: u32,
    pub tdp_w: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Psu {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub wattage_w: u32,
    pub efficiency_rating: EfficiencyRating,
    pub modular: Modularity,
}

/// Component kind, in the fixed order used for issue reporting and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Psu,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Cpu,
        ComponentKind::Gpu,
        ComponentKind::Motherboard,
        ComponentKind::Ram,
        ComponentKind::Psu,
    ];

    /// Short label used in listings and reports
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "CPU",
            ComponentKind::Gpu => "GPU",
            ComponentKind::Motherboard => "Motherboard",
            ComponentKind::Ram => "RAM",
            ComponentKind::Psu => "PSU",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Cpu => write!(f, "cpu"),
            ComponentKind::Gpu => write!(f, "gpu"),
            ComponentKind::Motherboard => write!(f, "motherboard"),
            ComponentKind::Ram => write!(f, "ram"),
            ComponentKind::Psu => write!(f, "psu"),
        }
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(ComponentKind::Cpu),
            "gpu" => Ok(ComponentKind::Gpu),
            "motherboard" | "mobo" => Ok(ComponentKind::Motherboard),
            "ram" | "memory" => Ok(ComponentKind::Ram),
            "psu" => Ok(ComponentKind::Psu),
            other => Err(format!("unknown component kind: {}", other)),
        }
    }
}

/// Any catalog component, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Component {
    Cpu(Cpu),
    Gpu(Gpu),
    Motherboard(Motherboard),
    Ram(Ram),
    Psu(Psu),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Cpu(_) => ComponentKind::Cpu,
            Component::Gpu(_) => ComponentKind::Gpu,
            Component::Motherboard(_) => ComponentKind::Motherboard,
            Component::Ram(_) => ComponentKind::Ram,
            Component::Psu(_) => ComponentKind::Psu,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Component::Cpu(c) => &c.id,
            Component::Gpu(c) => &c.id,
            Component::Motherboard(c) => &c.id,
            Component::Ram(c) => &c.id,
            Component::Psu(c) => &c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Cpu(c) => &c.name,
            Component::Gpu(c) => &c.name,
            Component::Motherboard(c) => &c.name,
            Component::Ram(c) => &c.name,
            Component::Psu(c) => &c.name,
        }
    }

    pub fn brand(&self) -> &str {
        match self {
            Component::Cpu(c) => &c.brand,
            Component::Gpu(c) => &c.brand,
            Component::Motherboard(c) => &c.brand,
            Component::Ram(c) => &c.brand,
            Component::Psu(c) => &c.brand,
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Component::Cpu(c) => c.price,
            Component::Gpu(c) => c.price,
            Component::Motherboard(c) => c.price,
            Component::Ram(c) => c.price,
            Component::Psu(c) => c.price,
        }
    }

    /// Rated power draw, if this kind contributes to the power budget
    pub fn tdp_w(&self) -> Option<u32> {
        match self {
            Component::Cpu(c) => Some(c.tdp_w),
            Component::Gpu(c) => Some(c.tdp_w),
            Component::Ram(c) => Some(c.tdp_w),
            Component::Motherboard(_) | Component::Psu(_) => None,
        }
    }
}
