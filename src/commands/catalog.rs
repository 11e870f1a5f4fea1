// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog listing command

use serde::Serialize;

use super::CommandContext;
use crate::catalog::{Catalog, Component, ComponentKind};
use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    kind: ComponentKind,
    id: String,
    name: String,
    brand: String,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tdp_w: Option<u32>,
}

impl From<&Component> for CatalogEntry {
    fn from(component: &Component) -> Self {
        Self {
            kind: component.kind(),
            id: component.id().to_string(),
            name: component.name().to_string(),
            brand: component.brand().to_string(),
            price: component.price().amount,
            tdp_w: component.tdp_w(),
        }
    }
}

/// Components to list, in catalog order
pub fn select(catalog: &Catalog, kind: Option<ComponentKind>) -> Vec<Component> {
    match kind {
        Some(kind) => catalog.components_of(kind),
        None => catalog.components().collect(),
    }
}

/// Execute the catalog command
pub fn execute(args: &CatalogArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let components = select(&ctx.catalog, args.kind);

    if matches!(format, OutputFormat::Json) {
        let entries: Vec<CatalogEntry> = components.iter().map(CatalogEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if components.is_empty() {
        println!("No components found.");
        return Ok(());
    }

    let mut current: Option<ComponentKind> = None;
    for component in &components {
        let kind = component.kind();
        if current != Some(kind) {
            println!("\n=== {} ===", kind.label());
            current = Some(kind);
        }
        let tdp = component
            .tdp_w()
            .map(|w| format!("{}W", w))
            .unwrap_or_default();
        println!(
            "  {:<20} {:<32} ${:>7.2} {:>6}",
            component.id(),
            component.name(),
            component.price().amount,
            tdp
        );
    }

    Ok(())
}
