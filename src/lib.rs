//! CSV Field Converter Library
//!
//! A Rust library providing column-level value converters for delimited-text
//! read/write pipelines. Each converter translates between one column's field
//! text and a strongly typed in-memory value, driven by per-column
//! configuration derived once from a declarative format string and a flags
//! bit-set.
//!
//! This library provides tools for:
//! - A uniform [`Converter`] contract every value-type converter satisfies
//! - Per-column descriptors ([`ColumnInfo`]) carrying derived configuration
//! - Bidirectional conversion with a round-trip guarantee for accepted values
//! - Structured, position-tagged parse errors instead of panics
//! - Character, string, and boolean converter variants
//!
//! Line tokenization, quoting, file I/O, and record assembly are the calling
//! row processor's responsibility; this crate is invoked once per field with
//! already-unescaped text.

pub mod column;
pub mod converter;
pub mod error;

// Re-export commonly used types
pub use column::ColumnInfo;
pub use converter::{
    BooleanConverter, CharacterConverter, Converter, FieldContext, StringConverter,
};
pub use error::{ErrorType, FieldResult, ParseError};
