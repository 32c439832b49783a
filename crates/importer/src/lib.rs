//! Tern Importer - Collection-format import adapter
//!
//! Converts externally authored collection export documents into the
//! canonical [`tern_domain::Collection`] model through a four-stage
//! pipeline: flatten the folder tree, classify each leaf, normalize bodies
//! and parameters, and assemble the collection envelope.
//!
//! The conversion is a pure, synchronous function of its input document;
//! persistence, transport, and identity assignment belong to the
//! surrounding platform.

mod classify;
mod flatten;
mod normalize;

pub mod error;
pub mod importer;
pub mod source;
pub mod warning;

pub use error::{ImportError, ImportResult};
pub use importer::{
    CollectionImporter, ImportConfig, ImportOutcome, ImportPreview, ValidationResult,
};
pub use source::SourceCollection;
pub use warning::{ImportWarning, WarningSeverity, WarningStats};
