//! List command: one line per catalog method.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::check_daemon;
use crate::catalog::Catalog;
use crate::output::OutputControls;

/// Summary row for a single method.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodListing {
    pub daemon: String,
    pub method: String,
    pub streaming: &'static str,
    pub rest_method: String,
    pub proto_file: String,
}

/// Collect listings, optionally restricted to one daemon.
pub fn listings(catalog: &Catalog, daemon: Option<&str>) -> Vec<MethodListing> {
    catalog
        .methods()
        .filter(|m| daemon.map_or(true, |name| m.daemon.name == name))
        .map(|m| MethodListing {
            daemon: m.daemon.name.clone(),
            method: m.qualified_name(),
            streaming: m.method.streaming_direction.label(),
            rest_method: m.method.rest_method.clone(),
            proto_file: m.service.file_name.clone(),
        })
        .collect()
}

/// List methods in the catalog.
pub fn list(catalog: &Catalog, daemon: Option<&str>, output: &OutputControls) -> Result<()> {
    check_daemon(catalog, daemon)?;
    let rows = listings(catalog, daemon);
    info!(count = rows.len(), "listing methods");

    if output.json {
        output.print(&rows);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No methods found.");
        return Ok(());
    }

    println!("Methods ({}):", rows.len());
    println!("{}", "-".repeat(60));
    for row in &rows {
        let rest = if row.rest_method.is_empty() {
            String::new()
        } else {
            format!(" [{}]", row.rest_method)
        };
        println!("{:<6} {} ({}){}", row.daemon, row.method, row.streaming, rest);
    }

    Ok(())
}
