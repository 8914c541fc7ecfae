//! Rule implementations for loclint.
//!
//! Each rule turns part of a `ValidationResult` into user-facing issues.
//!
//! ## Module Structure
//!
//! - `unused`: Defined but never referenced keys
//! - `undefined`: Referenced but never defined keys

pub mod undefined;
pub mod unused;
