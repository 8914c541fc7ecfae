//! Line-based parsers for locale and source files.
//!
//! - `locale`: Definitions in the canonical locale file (`L["KEY"] = ...`)
//! - `reference`: Key references in source files (`L.KEY`)

pub mod locale;
pub mod reference;
