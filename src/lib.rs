//! rpc-doc-samples library
//!
//! Derives the values that API documentation templates need to render code
//! samples for each RPC method: proto loader files, macaroon paths, ports,
//! streaming flags and REST call arguments.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial library structure

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod samples;

pub use catalog::{Catalog, MethodRef, StreamingDirection};
pub use error::CatalogError;
pub use samples::{CodeSampleView, CodeSamples};
