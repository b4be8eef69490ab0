//! Method catalog produced by the proto loader.
//!
//! The catalog owns the whole Daemon → Package → Service → Method tree.
//! Methods are handed out as [`MethodRef`]s that borrow their ancestors, so a
//! method can never be viewed without its daemon, package and service.
//!
//! CHANGELOG:
//! - 10/18/2026 - daemon: prefix and cross-daemon ambiguity for qualified names
//! - 10/18/2026 - Short-name lookup and duplicate detection
//! - 10/18/2026 - Initial implementation

pub mod model;

pub use model::{
    Daemon, Field, Message, Method, MethodRef, Package, RequestMessage, Service, StreamingDirection,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::config;
use crate::error::CatalogError;

/// Root of the catalog JSON (`{"daemons": [...]}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub daemons: Vec<Daemon>,
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.check_duplicates()?;
        debug!(
            daemons = catalog.daemons.len(),
            methods = catalog.methods().count(),
            "parsed catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading catalog");
        Self::from_json_str(&content)
    }

    /// Load from the default path (see [`config::default_catalog_path`]).
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::load(config::default_catalog_path())
    }

    /// Look up a daemon by name.
    pub fn daemon(&self, name: &str) -> Option<&Daemon> {
        self.daemons.iter().find(|d| d.name == name)
    }

    /// Every method in document order.
    pub fn methods(&self) -> impl Iterator<Item = MethodRef<'_>> {
        self.daemons.iter().flat_map(|daemon| {
            daemon.packages.iter().flat_map(move |package| {
                package.services.iter().flat_map(move |service| {
                    service.methods.iter().map(move |method| MethodRef {
                        daemon,
                        package,
                        service,
                        method,
                    })
                })
            })
        })
    }

    /// Resolve `package.Service.Method`, or `Service.Method` when only one
    /// service of that name exists. Either form may carry a `daemon:` prefix
    /// to pick between daemons that ship the same package.
    pub fn find_method(&self, name: &str) -> Result<MethodRef<'_>, CatalogError> {
        let (daemon, method_name) = match name.split_once(':') {
            Some((daemon, rest)) => (Some(daemon), rest),
            None => (None, name),
        };
        let in_scope = |m: &MethodRef<'_>| daemon.map_or(true, |d| m.daemon.name == d);

        let qualified: Vec<MethodRef<'_>> = self
            .methods()
            .filter(|m| in_scope(m) && m.qualified_name() == method_name)
            .collect();
        if !qualified.is_empty() {
            return pick_one(name, qualified);
        }

        let short: Vec<MethodRef<'_>> = self
            .methods()
            .filter(|m| in_scope(m) && m.short_name() == method_name)
            .collect();
        pick_one(name, short)
    }

    fn check_duplicates(&self) -> Result<(), CatalogError> {
        for daemon in &self.daemons {
            let mut seen = HashSet::new();
            for method in self.methods().filter(|m| m.daemon.name == daemon.name) {
                let qualified = method.qualified_name();
                if !seen.insert(qualified.clone()) {
                    return Err(CatalogError::DuplicateMethod {
                        daemon: daemon.name.clone(),
                        method: qualified,
                    });
                }
            }
        }
        Ok(())
    }
}

fn pick_one<'a>(name: &str, mut matches: Vec<MethodRef<'a>>) -> Result<MethodRef<'a>, CatalogError> {
    match matches.len() {
        0 => Err(CatalogError::MethodNotFound(name.to_string())),
        1 => Ok(matches.remove(0)),
        _ => {
            // Qualified names only disambiguate within a single daemon
            let one_daemon = matches.iter().all(|m| m.daemon.name == matches[0].daemon.name);
            let candidates = matches
                .iter()
                .map(|m| {
                    if one_daemon {
                        m.qualified_name()
                    } else {
                        m.daemon_qualified_name()
                    }
                })
                .collect();
            Err(CatalogError::AmbiguousMethod {
                name: name.to_string(),
                candidates,
            })
        }
    }
}

/// Catalog shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn fixture() -> Catalog {
    Catalog::from_json_str(include_str!("../../tests/fixtures/catalog.json"))
        .expect("fixture catalog should parse")
}
