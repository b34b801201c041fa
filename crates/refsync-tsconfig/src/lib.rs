//! tsconfig documents, canonical rendering, and style discovery
//!
//! The document model keeps every unmanaged field verbatim; only the
//! project reference list (and the root file list) are ever replaced.
//! Rendering is deterministic so drift detection can be byte equality.

pub mod canonical;
pub mod diff;
pub mod document;
pub mod error;
pub mod style;

pub use canonical::canonical_string;
pub use document::{ProjectReference, TsConfig};
pub use error::{Error, Result};
pub use style::{LineEnding, StyleOptions};
