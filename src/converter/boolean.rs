//! Converter for boolean column values with configurable tokens.

use tracing::warn;

use crate::column::ColumnInfo;
use crate::converter::{Converter, FieldContext};
use crate::error::FieldResult;

/// Converter for columns holding true/false values.
///
/// The column's format string selects the rendered and accepted tokens as a
/// `"<true-token>,<false-token>"` pair, defaulting to `"true,false"`. Token
/// matching ignores ASCII case. Unrecognized field text deserializes to
/// `false` unless [`PARSE_ERROR_ON_INVALID_VALUE`](Self::PARSE_ERROR_ON_INVALID_VALUE)
/// is set in the column's flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanConverter;

/// Derived configuration for a boolean column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanConfig {
    /// Token rendered and accepted for `true`.
    pub true_text: String,

    /// Token rendered and accepted for `false`.
    pub false_text: String,

    /// Report a parse error for unrecognized field text instead of
    /// defaulting to `false`.
    pub error_on_invalid: bool,
}

impl Default for BooleanConfig {
    fn default() -> Self {
        Self {
            true_text: "true".to_string(),
            false_text: "false".to_string(),
            error_on_invalid: false,
        }
    }
}

impl BooleanConverter {
    /// Report a parse error when field text matches neither token. Default
    /// is to deserialize unrecognized text as `false`.
    pub const PARSE_ERROR_ON_INVALID_VALUE: u64 = 1 << 1;

    /// Create a converter instance.
    pub fn new() -> Self {
        Self
    }
}

impl Converter for BooleanConverter {
    type Value = bool;
    type Config = BooleanConfig;

    /// A format string that is not exactly two non-empty comma-free tokens
    /// separated by one comma falls back to the default `"true,false"` with
    /// a warning; configuration never fails. Tokens may never contain the
    /// delimiter, since output for this column is not quoted.
    fn configure(
        &self,
        format: Option<&str>,
        flags: u64,
        column: &ColumnInfo<BooleanConfig>,
    ) -> BooleanConfig {
        let error_on_invalid = (flags & Self::PARSE_ERROR_ON_INVALID_VALUE) != 0;

        let mut config = BooleanConfig {
            error_on_invalid,
            ..BooleanConfig::default()
        };

        if let Some(format) = format {
            match format.split_once(',') {
                Some((true_text, false_text))
                    if !true_text.is_empty()
                        && !false_text.is_empty()
                        && !false_text.contains(',') =>
                {
                    config.true_text = true_text.to_string();
                    config.false_text = false_text.to_string();
                }
                _ => {
                    warn!(
                        column = %column.name,
                        format,
                        "malformed boolean format, expected '<true>,<false>', using default tokens"
                    );
                }
            }
        }

        config
    }

    /// Always `false`: the tokens are plain words that cannot contain the
    /// delimiter.
    fn needs_quotes(&self, _config: &BooleanConfig) -> bool {
        false
    }

    fn always_trim_input(&self, _config: &BooleanConfig) -> bool {
        false
    }

    fn serialize(
        &self,
        column: &ColumnInfo<BooleanConfig>,
        value: Option<&bool>,
    ) -> Option<String> {
        let default_config = BooleanConfig::default();
        let config = column.config().unwrap_or(&default_config);

        value.map(|&b| {
            if b {
                config.true_text.clone()
            } else {
                config.false_text.clone()
            }
        })
    }

    fn deserialize(
        &self,
        ctx: &FieldContext<'_>,
        column: &ColumnInfo<BooleanConfig>,
        field: &str,
    ) -> FieldResult<bool> {
        if field.is_empty() {
            return Ok(None);
        }

        let default_config = BooleanConfig::default();
        let config = column.config().unwrap_or(&default_config);

        if field.eq_ignore_ascii_case(&config.true_text) {
            Ok(Some(true))
        } else if field.eq_ignore_ascii_case(&config.false_text) {
            Ok(Some(false))
        } else if config.error_on_invalid {
            Err(ctx.invalid_format(format!("Invalid boolean value '{field}'")))
        } else {
            Ok(Some(false))
        }
    }
}
