//! Tagged dynamic values for generic-container boundaries.
//!
//! This crate provides:
//! - [`Value`], a closed tagged enum with one variant per recognized
//!   primitive kind plus an `Other` catch-all for composite data
//! - [`Kind`], the enumerable kind set, totally ordered by dispatch priority
//! - Per-kind classifier accessors (`as_i8`, `as_bytes`, ...) that signal a
//!   mismatch with `None`, never with an error
//! - [`Visit`] and [`dispatch`], visitor-style routing of a value to the
//!   handler for its matched kind
//! - [`equal`], semantic equality that disregards numeric width within a
//!   signedness class and treats a string and its exact byte encoding as equal
//!
//! Core invariants:
//! - Every value maps to exactly one kind; classification is pure and
//!   deterministic
//! - A visitor that overrides nothing is legal; dispatching to it does nothing
//! - `equal` never crosses the signed/unsigned boundary and never parses
//!   strings as numbers
//!
#![deny(missing_docs)]

/// Error types for value construction.
pub mod error;
/// Width-agnostic semantic equality.
pub mod equal;
/// The value and kind model plus classifier accessors.
pub mod value;
/// Visitor dispatch over classified values.
pub mod visit;

pub use equal::equal;
pub use error::ValueError;
pub use value::{Kind, Value};
pub use visit::{dispatch, Visit};
