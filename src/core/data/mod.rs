//! Core data types shared by the parsers, validation and rules.
//!
//! ## Module Structure
//!
//! - `locale`: Definitions read from the canonical locale file (LocaleEntry, LocaleDefinitions)
//! - `reference`: Key use-sites in source code (KeyReference, KeyReferences)
//! - `source`: Source location types (SourceContext, SourceLocation)

pub mod locale;
pub mod reference;
pub mod source;

pub use locale::{LocaleDefinitions, LocaleEntry};
pub use reference::{KeyReference, KeyReferences};
pub use source::{SourceContext, SourceLocation};
