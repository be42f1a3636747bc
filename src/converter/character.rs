//! Converter for single-character column values.

use crate::column::ColumnInfo;
use crate::converter::{Converter, FieldContext};
use crate::error::FieldResult;

/// Converter for columns holding exactly one character.
///
/// By default a field with more than one character is silently truncated to
/// its first character. Set
/// [`PARSE_ERROR_IF_MORE_THAN_ONE_CHAR`](Self::PARSE_ERROR_IF_MORE_THAN_ONE_CHAR)
/// in the column's flags to report a parse error instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterConverter;

impl CharacterConverter {
    /// Report a parse error when the input has more than one character.
    /// Default is to just take the first character.
    pub const PARSE_ERROR_IF_MORE_THAN_ONE_CHAR: u64 = 1 << 1;

    /// Create a converter instance.
    pub fn new() -> Self {
        Self
    }
}

impl Converter for CharacterConverter {
    type Value = char;

    /// True when extra characters in a field are a hard error.
    type Config = bool;

    fn configure(&self, _format: Option<&str>, flags: u64, _column: &ColumnInfo<bool>) -> bool {
        (flags & Self::PARSE_ERROR_IF_MORE_THAN_ONE_CHAR) != 0
    }

    /// Always `true`: a single character may coincide with the delimiter or
    /// quote character, so output is conservatively quoted.
    fn needs_quotes(&self, _config: &bool) -> bool {
        true
    }

    /// Always `false`: whitespace is a valid character value and must not be
    /// stripped.
    fn always_trim_input(&self, _config: &bool) -> bool {
        false
    }

    fn serialize(&self, _column: &ColumnInfo<bool>, value: Option<&char>) -> Option<String> {
        value.map(|c| c.to_string())
    }

    /// Length is measured in characters, not bytes: a single multi-byte
    /// character is valid input in both modes. Truncation of longer input in
    /// the default mode is the documented behavior, not an oversight.
    fn deserialize(
        &self,
        ctx: &FieldContext<'_>,
        column: &ColumnInfo<bool>,
        field: &str,
    ) -> FieldResult<char> {
        let error_on_more_than_one = column.config().copied().unwrap_or_default();

        let mut chars = field.chars();
        match chars.next() {
            None => Ok(None),
            Some(first) => {
                if error_on_more_than_one && chars.next().is_some() {
                    Err(ctx.invalid_format("More than one character specified"))
                } else {
                    Ok(Some(first))
                }
            }
        }
    }
}
