//! Error handling for field conversion operations.
//!
//! Conversion failures are reported as values rather than panics so a caller
//! processing many fields can collect every error for a row before deciding
//! whether to abort or discard it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a field-level parse failure.
///
/// Converters in this crate only ever produce [`ErrorType::InvalidFormat`];
/// the remaining variants belong to the same taxonomy and are produced by the
/// row-processing layer that shares this error type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    /// The field text cannot be mapped to a valid value under the column's
    /// current configuration.
    #[error("invalid format")]
    InvalidFormat,

    /// The line ended before this column's field was reached.
    #[error("truncated column")]
    TruncatedColumn,

    /// A column marked as required held an empty field.
    #[error("must not be blank")]
    MustNotBeBlank,
}

/// A position-tagged error describing why one field failed to parse.
///
/// Created by a converter when field text cannot be interpreted, and returned
/// through [`FieldResult`] rather than raised. Exactly one error is produced
/// per failed field; the converter never aborts the surrounding row or file.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{error_type} at line {line_number}, position {line_pos}: {message}")]
pub struct ParseError {
    /// Failure classification.
    pub error_type: ErrorType,

    /// Human-readable description suitable for echoing back to an end user.
    pub message: String,

    /// One-based line number of the offending line (diagnostics only).
    pub line_number: usize,

    /// Character offset of the field within the raw line.
    pub line_pos: usize,
}

/// Result type alias for field deserialization.
///
/// `Ok(None)` is the null value (an empty field), `Ok(Some(v))` a parsed
/// value, and `Err` carries the position-tagged failure.
pub type FieldResult<T> = std::result::Result<Option<T>, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_position_and_message() {
        let error = ParseError {
            error_type: ErrorType::InvalidFormat,
            message: "More than one character specified".to_string(),
            line_number: 12,
            line_pos: 34,
        };

        let rendered = error.to_string();
        assert_eq!(
            rendered,
            "invalid format at line 12, position 34: More than one character specified"
        );
    }

    #[test]
    fn test_error_type_display() {
        assert_eq!(ErrorType::InvalidFormat.to_string(), "invalid format");
        assert_eq!(ErrorType::TruncatedColumn.to_string(), "truncated column");
        assert_eq!(ErrorType::MustNotBeBlank.to_string(), "must not be blank");
    }
}
