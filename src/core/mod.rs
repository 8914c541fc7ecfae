//! Core analysis: reading definitions and references, then validating them.
//!
//! ## Module Structure
//!
//! - `context`: `CheckContext`, the per-run orchestrator
//! - `data`: Shared data types (locations, definitions, references)
//! - `file_scanner`: Source file discovery
//! - `parsers`: Locale and reference parsers
//! - `validate`: Set comparison of defined vs referenced keys

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod validate;

pub use context::CheckContext;
pub use data::{
    KeyReference, KeyReferences, LocaleDefinitions, LocaleEntry, SourceContext, SourceLocation,
};
pub use validate::{ValidationResult, validate};
