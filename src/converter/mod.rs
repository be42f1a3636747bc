//! Column value converters for delimited-text fields.
//!
//! This module defines the uniform [`Converter`] contract the row processor
//! uses to treat every column type identically, plus the concrete variants:
//!
//! - [`character`] - single-character values with optional strict length
//! - [`string`] - pass-through strings with trim and blank-is-null flags
//! - [`boolean`] - booleans with configurable true/false tokens
//!
//! # Lifecycle
//!
//! Each column goes through a two-step configure-once/convert-many lifecycle:
//! at schema-setup time the converter derives an immutable configuration
//! value from the column's format string and flags, stored in the
//! [`ColumnInfo`]; per field, the row processor then calls [`deserialize`]
//! or [`serialize`], which query the stored configuration and never
//! recompute it.
//!
//! All converters are stateless unit structs, safe to share across threads
//! processing different rows in parallel.
//!
//! [`deserialize`]: Converter::deserialize
//! [`serialize`]: Converter::serialize

pub mod boolean;
pub mod character;
pub mod string;

#[cfg(test)]
pub mod tests;

// Re-export converter variants for easy access
pub use boolean::{BooleanConfig, BooleanConverter};
pub use character::CharacterConverter;
pub use string::{StringConfig, StringConverter};

use crate::column::ColumnInfo;
use crate::error::{ErrorType, FieldResult, ParseError};

/// Diagnostic context for one field-deserialization attempt.
///
/// Bundles the inputs used only for error reporting: the full raw line, its
/// one-based line number, and the character offset of the field within the
/// line. The field text itself is passed separately, already unescaped by
/// the line-level tokenizer.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Full raw text of the originating line.
    pub line: &'a str,

    /// One-based number of the originating line.
    pub line_number: usize,

    /// Character offset of the field within the line.
    pub line_pos: usize,
}

impl<'a> FieldContext<'a> {
    /// Create a context for a field at `line_pos` within `line`.
    pub fn new(line: &'a str, line_number: usize, line_pos: usize) -> Self {
        Self {
            line,
            line_number,
            line_pos,
        }
    }

    /// Build an [`ErrorType::InvalidFormat`] error tagged with this field's
    /// position.
    pub fn invalid_format(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            error_type: ErrorType::InvalidFormat,
            message: message.into(),
            line_number: self.line_number,
            line_pos: self.line_pos,
        }
    }
}

/// Contract implemented once per supported value type.
///
/// The associated `Config` type is the converter-defined configuration value
/// computed once per column by [`configure`] and stored in the column's
/// [`ColumnInfo`]; tying it to the converter at the type level replaces the
/// per-field downcast a runtime-typed configuration slot would need.
///
/// [`configure`]: Converter::configure
pub trait Converter {
    /// The in-memory value type this converter produces and accepts.
    type Value;

    /// Immutable per-column configuration derived from format and flags.
    type Config;

    /// Derive this column's configuration from its declared format string
    /// and flags bit-set.
    ///
    /// Called once per column at schema-setup time. Must be a pure function
    /// of `(format, flags)` and must not fail: flag bits the converter does
    /// not recognize are ignored for forward compatibility, and a malformed
    /// format string falls back to the converter's default behavior.
    fn configure(
        &self,
        format: Option<&str>,
        flags: u64,
        column: &ColumnInfo<Self::Config>,
    ) -> Self::Config;

    /// Whether serialized output for this column must be quoted regardless
    /// of content.
    ///
    /// Consulted by the line-serialization layer; pure, no side effects.
    fn needs_quotes(&self, config: &Self::Config) -> bool;

    /// Whether raw field text should be trimmed of surrounding whitespace
    /// before [`deserialize`] is attempted.
    ///
    /// Independent of quoting; pure, no side effects.
    ///
    /// [`deserialize`]: Converter::deserialize
    fn always_trim_input(&self, config: &Self::Config) -> bool;

    /// Render a typed value as field text.
    ///
    /// A `None` value serializes to `None` (an empty field). For every value
    /// the converter accepts, deserializing the produced text (after any
    /// required trimming) yields an equal value.
    fn serialize(
        &self,
        column: &ColumnInfo<Self::Config>,
        value: Option<&Self::Value>,
    ) -> Option<String>;

    /// Interpret unescaped field text as a typed value.
    ///
    /// An empty field yields `Ok(None)` rather than an error unless the
    /// variant documents a stricter policy. Malformed input never panics:
    /// failures are returned as a position-tagged [`ParseError`] built from
    /// `ctx`, one per failed field, so the caller can collect errors across
    /// a row or abort on the first.
    fn deserialize(
        &self,
        ctx: &FieldContext<'_>,
        column: &ColumnInfo<Self::Config>,
        field: &str,
    ) -> FieldResult<Self::Value>;
}
