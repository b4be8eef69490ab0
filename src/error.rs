//! Catalog error types.
//!
//! CHANGELOG:
//! - 10/18/2026 - Added ambiguous short-name lookups
//! - 10/18/2026 - Initial implementation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying a method catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown streaming direction '{0}'")]
    UnknownStreamingDirection(String),

    #[error("Duplicate method {method} in daemon {daemon}")]
    DuplicateMethod { daemon: String, method: String },

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Ambiguous method {name}: matches {}", .candidates.join(", "))]
    AmbiguousMethod {
        name: String,
        candidates: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_lists_candidates() {
        let err = CatalogError::AmbiguousMethod {
            name: "Lightning.GetInfo".to_string(),
            candidates: vec!["a.Lightning.GetInfo".to_string(), "b.Lightning.GetInfo".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous method Lightning.GetInfo: matches a.Lightning.GetInfo, b.Lightning.GetInfo"
        );
    }
}
