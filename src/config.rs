//! Catalog path resolution.
//!
//! CHANGELOG:
//! - 10/18/2026 - Split lookup order from environment access
//! - 10/18/2026 - Initial implementation

use std::path::{Path, PathBuf};

/// Environment variable overriding the catalog location.
pub const CATALOG_PATH_ENV: &str = "RPC_DOCS_CATALOG_PATH";

const CATALOG_FILE_NAME: &str = "catalog.json";

/// Default catalog.json path.
///
/// Tries multiple locations in order:
/// 1. RPC_DOCS_CATALOG_PATH env var
/// 2. <config dir>/rpc-doc-samples/catalog.json (if it exists)
/// 3. ./catalog.json
pub fn default_catalog_path() -> PathBuf {
    catalog_path_from(std::env::var(CATALOG_PATH_ENV).ok(), dirs::config_dir())
}

/// Lookup order behind [`default_catalog_path`], given the env var value and
/// the user config directory.
fn catalog_path_from(env_value: Option<String>, config_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_value {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = config_dir {
        let path = config_dir.join("rpc-doc-samples").join(CATALOG_FILE_NAME);
        if path.exists() {
            return path;
        }
    }

    PathBuf::from(CATALOG_FILE_NAME)
}

/// An explicit `--catalog` flag wins over every default.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => default_catalog_path(),
    }
}
