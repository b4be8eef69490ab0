//! Command implementations.
//!
//! CHANGELOG:
//! - 10/18/2026 - Replaced with catalog list/show/samples commands
//! - 10/18/2026 - Initial module structure

pub mod list;
pub mod samples;

use anyhow::{bail, Result};

use crate::catalog::Catalog;

/// Fail early on a `--daemon` filter that names no daemon in the catalog.
fn check_daemon(catalog: &Catalog, daemon: Option<&str>) -> Result<()> {
    if let Some(name) = daemon {
        if catalog.daemon(name).is_none() {
            let known: Vec<&str> = catalog.daemons.iter().map(|d| d.name.as_str()).collect();
            bail!("Unknown daemon: {} (known: {})", name, known.join(", "));
        }
    }
    Ok(())
}
