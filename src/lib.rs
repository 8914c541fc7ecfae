//! Loclint - locale consistency checker for Lua addons
//!
//! Loclint is a CLI tool and library that cross-checks the keys defined in an
//! addon's `L["KEY"] = ...` locale file against the `L.KEY` references in its
//! Lua sources, reporting keys that are defined but never used and keys that
//! are used but never defined. It also generates `Bindings.xml` and uploads
//! locale phrases to the translation platform.
//!
//! ## Module Structure
//!
//! - `bindings`: `Bindings.xml` generation
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and validation of locale keys
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Conversion of validation results into issues
//! - `upload`: Localization upload client
//! - `utils`: Shared utility functions

pub mod bindings;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod upload;
pub mod utils;
