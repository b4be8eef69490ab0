//! Code-sample values derived from catalog methods.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial module structure

pub mod code;
pub mod view;

pub use code::CodeSamples;
pub use view::CodeSampleView;
