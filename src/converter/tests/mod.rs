//! Comprehensive tests for the converter module
//!
//! This module provides unit tests for the converter contract and each
//! concrete variant, plus shared fixture helpers.


// Test helper functions and fixtures
use crate::column::ColumnInfo;
use crate::converter::{
    BooleanConfig, BooleanConverter, CharacterConverter, FieldContext, StringConfig,
    StringConverter,
};

/// Install a subscriber routing configure-time logs to the test writer.
/// Safe to call from every fixture; repeat installs are ignored.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Create a field context for a field at the given offset of a test line
pub fn create_context(line: &str, line_number: usize, line_pos: usize) -> FieldContext<'_> {
    FieldContext::new(line, line_number, line_pos)
}

/// Create a configured character column with the given flags
pub fn create_character_column(flags: u64) -> ColumnInfo<bool> {
    init_test_logging();
    let mut column = ColumnInfo::new("grade", 0).with_flags(flags);
    column.configure_with(&CharacterConverter::new());
    column
}

/// Create a configured string column with the given flags
pub fn create_string_column(flags: u64) -> ColumnInfo<StringConfig> {
    init_test_logging();
    let mut column = ColumnInfo::new("comment", 1).with_flags(flags);
    column.configure_with(&StringConverter::new());
    column
}

/// Create a configured boolean column with an optional format and flags
pub fn create_boolean_column(format: Option<&str>, flags: u64) -> ColumnInfo<BooleanConfig> {
    init_test_logging();
    let mut column = ColumnInfo::new("active", 2).with_flags(flags);
    if let Some(format) = format {
        column = column.with_format(format);
    }
    column.configure_with(&BooleanConverter::new());
    column
}
