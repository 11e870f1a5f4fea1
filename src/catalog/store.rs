// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! In-memory component catalog
//!
//! The catalog is supplied by the caller, either built in code or loaded
//! from a JSON/TOML file. The engine only ever reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::component::{Component, ComponentKind, Cpu, Gpu, Motherboard, Psu, Ram};
use crate::error::{Result, RigError};

/// All known components, partitioned by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub cpus: Vec<Cpu>,
    #[serde(default)]
    pub gpus: Vec<Gpu>,
    #[serde(default)]
    pub motherboards: Vec<Motherboard>,
    #[serde(default)]
    pub ram_kits: Vec<Ram>,
    #[serde(default)]
    pub psus: Vec<Psu>,
}

impl Catalog {
    /// Parse a catalog from JSON text and validate it.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let catalog = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        };

        match &catalog {
            Ok(catalog) => {
                tracing::debug!(
                    "Loaded catalog from {} ({} components)",
                    path.display(),
                    catalog.len()
                );
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog {}: {}", path.display(), e);
            }
        }

        catalog
    }

    /// Reject empty or duplicate component ids.
    ///
    /// Ids are unique across the whole catalog, not just within a kind, so a
    /// single id always names exactly one component.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for component in self.components() {
            let id = component.id();
            if id.trim().is_empty() {
                return Err(RigError::Catalog(format!(
                    "{} '{}' has an empty id",
                    component.kind().label(),
                    component.name()
                )));
            }
            if !seen.insert(id.to_string()) {
                return Err(RigError::Catalog(format!("duplicate component id: {}", id)));
            }
        }
        Ok(())
    }

    /// Iterate every component in kind order (CPU, GPU, motherboard, RAM, PSU).
    pub fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.cpus
            .iter()
            .cloned()
            .map(Component::Cpu)
            .chain(self.gpus.iter().cloned().map(Component::Gpu))
            .chain(self.motherboards.iter().cloned().map(Component::Motherboard))
            .chain(self.ram_kits.iter().cloned().map(Component::Ram))
            .chain(self.psus.iter().cloned().map(Component::Psu))
    }

    /// Components of a single kind
    pub fn components_of(&self, kind: ComponentKind) -> Vec<Component> {
        self.components().filter(|c| c.kind() == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.cpus.len()
            + self.gpus.len()
            + self.motherboards.len()
            + self.ram_kits.len()
            + self.psus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up any component by id. Only the match is cloned.
    pub fn find(&self, id: &str) -> Option<Component> {
        if let Some(cpu) = self.find_cpu(id) {
            return Some(Component::Cpu(cpu.clone()));
        }
        if let Some(gpu) = self.find_gpu(id) {
            return Some(Component::Gpu(gpu.clone()));
        }
        if let Some(motherboard) = self.find_motherboard(id) {
            return Some(Component::Motherboard(motherboard.clone()));
        }
        if let Some(ram) = self.find_ram(id) {
            return Some(Component::Ram(ram.clone()));
        }
        self.find_psu(id).cloned().map(Component::Psu)
    }

    pub fn find_cpu(&self, id: &str) -> Option<&Cpu> {
        self.cpus.iter().find(|c| c.id == id)
    }

    pub fn find_gpu(&self, id: &str) -> Option<&Gpu> {
        self.gpus.iter().find(|c| c.id == id)
    }

    pub fn find_motherboard(&self, id: &str) -> Option<&Motherboard> {
        self.motherboards.iter().find(|c| c.id == id)
    }

    pub fn find_ram(&self, id: &str) -> Option<&Ram> {
        self.ram_kits.iter().find(|c| c.id == id)
    }

    pub fn find_psu(&self, id: &str) -> Option<&Psu> {
        self.psus.iter().find(|c| c.id == id)
    }
}
