//! Converter for free-form string column values.

use crate::column::ColumnInfo;
use crate::converter::{Converter, FieldContext};
use crate::error::FieldResult;

/// Converter for columns holding arbitrary text.
///
/// String conversion never fails. An empty field deserializes to the empty
/// string rather than the null value, since a string column cannot otherwise
/// distinguish the two; set [`BLANK_IS_NULL`](Self::BLANK_IS_NULL) to map
/// empty fields to null instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConverter;

/// Derived configuration for a string column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConfig {
    /// Trim surrounding whitespace from raw field text before parsing.
    pub trim_input: bool,

    /// Deserialize an empty field to null instead of the empty string.
    pub blank_is_null: bool,
}

impl StringConverter {
    /// Trim surrounding whitespace from field text before it is parsed.
    pub const TRIM_INPUT: u64 = 1 << 1;

    /// Treat an empty field as a null value instead of the empty string.
    pub const BLANK_IS_NULL: u64 = 1 << 2;

    /// Create a converter instance.
    pub fn new() -> Self {
        Self
    }
}

impl Converter for StringConverter {
    type Value = String;
    type Config = StringConfig;

    fn configure(
        &self,
        _format: Option<&str>,
        flags: u64,
        _column: &ColumnInfo<StringConfig>,
    ) -> StringConfig {
        StringConfig {
            trim_input: (flags & Self::TRIM_INPUT) != 0,
            blank_is_null: (flags & Self::BLANK_IS_NULL) != 0,
        }
    }

    /// Always `true`: the value may contain the delimiter or quote
    /// character.
    fn needs_quotes(&self, _config: &StringConfig) -> bool {
        true
    }

    fn always_trim_input(&self, config: &StringConfig) -> bool {
        config.trim_input
    }

    fn serialize(&self, _column: &ColumnInfo<StringConfig>, value: Option<&String>) -> Option<String> {
        value.cloned()
    }

    fn deserialize(
        &self,
        _ctx: &FieldContext<'_>,
        column: &ColumnInfo<StringConfig>,
        field: &str,
    ) -> FieldResult<String> {
        let config = column.config().copied().unwrap_or_default();

        if field.is_empty() && config.blank_is_null {
            Ok(None)
        } else {
            Ok(Some(field.to_string()))
        }
    }
}
