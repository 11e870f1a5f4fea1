// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Build records and id resolution

use serde::{Deserialize, Serialize};

use super::component::{ComponentKind, Cpu, Gpu, Motherboard, Psu, Ram};
use super::store::Catalog;

/// Component ids selected by the user, one optional slot per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu_id: Option<String>,
}

/// A (possibly partial) PC build
///
/// Every present slot holds a component taken from the catalog the build was
/// resolved against. A missing selection and an unknown id both leave the
/// slot empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Cpu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<Gpu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<Motherboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<Ram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu: Option<Psu>,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpu(mut self, cpu: Cpu) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn with_gpu(mut self, gpu: Gpu) -> Self {
        self.gpu = Some(gpu);
        self
    }

    pub fn with_motherboard(mut self, motherboard: Motherboard) -> Self {
        self.motherboard = Some(motherboard);
        self
    }

    pub fn with_ram(mut self, ram: Ram) -> Self {
        self.ram = Some(ram);
        self
    }

    pub fn with_psu(mut self, psu: Psu) -> Self {
        self.psu = Some(psu);
        self
    }

    /// Whether the slot for `kind` holds a component
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Cpu => self.cpu.is_some(),
            ComponentKind::Gpu => self.gpu.is_some(),
            ComponentKind::Motherboard => self.motherboard.is_some(),
            ComponentKind::Ram => self.ram.is_some(),
            ComponentKind::Psu => self.psu.is_some(),
        }
    }

    /// Display name of the component in the slot for `kind`
    pub fn name_of(&self, kind: ComponentKind) -> Option<&str> {
        match kind {
            ComponentKind::Cpu => self.cpu.as_ref().map(|c| c.name.as_str()),
            ComponentKind::Gpu => self.gpu.as_ref().map(|c| c.name.as_str()),
            ComponentKind::Motherboard => self.motherboard.as_ref().map(|c| c.name.as_str()),
            ComponentKind::Ram => self.ram.as_ref().map(|c| c.name.as_str()),
            ComponentKind::Psu => self.psu.as_ref().map(|c| c.name.as_str()),
        }
    }

    pub fn is_empty(&self) -> bool {
        ComponentKind::ALL.iter().all(|kind| !self.has(*kind))
    }

    pub fn is_complete(&self) -> bool {
        ComponentKind::ALL.iter().all(|kind| self.has(*kind))
    }

    /// Ids of the components currently in the build
    pub fn ids(&self) -> BuildIds {
        BuildIds {
            cpu_id: self.cpu.as_ref().map(|c| c.id.clone()),
            gpu_id: self.gpu.as_ref().map(|c| c.id.clone()),
            motherboard_id: self.motherboard.as_ref().map(|c| c.id.clone()),
            ram_id: self.ram.as_ref().map(|c| c.id.clone()),
            psu_id: self.psu.as_ref().map(|c| c.id.clone()),
        }
    }
}

/// Empty selections count as "nothing selected".
fn selected(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|id| !id.is_empty())
}

/// Resolve selected ids against a catalog.
///
/// Unknown ids produce an empty slot, never an error.
pub fn resolve_build(ids: &BuildIds, catalog: &Catalog) -> Build {
    Build {
        cpu: selected(&ids.cpu_id).and_then(|id| catalog.find_cpu(id).cloned()),
        gpu: selected(&ids.gpu_id).and_then(|id| catalog.find_gpu(id).cloned()),
        motherboard: selected(&ids.motherboard_id)
            .and_then(|id| catalog.find_motherboard(id).cloned()),
        ram: selected(&ids.ram_id).and_then(|id| catalog.find_ram(id).cloned()),
        psu: selected(&ids.psu_id).and_then(|id| catalog.find_psu(id).cloned()),
    }
}
