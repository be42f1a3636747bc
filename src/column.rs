//! Per-column schema descriptors.
//!
//! A [`ColumnInfo`] carries the declared metadata for one column (name,
//! position, format string, converter flags) together with the configuration
//! value its converter derives once at schema-setup time. The descriptor is
//! shared across all rows of a parse or write session and is immutable after
//! configuration.

use tracing::debug;

use crate::converter::Converter;

/// Descriptor for one column of a delimited-text schema.
///
/// Generic over the converter's configuration type `C`, so the stored
/// configuration is matched to its converter at compile time instead of being
/// downcast on every field conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo<C> {
    /// Declared column name, used in diagnostics.
    pub name: String,

    /// Zero-based position of the column within a row.
    pub position: usize,

    /// Optional format string with converter-specific meaning.
    pub format: Option<String>,

    /// Converter feature flags for this column. Bits a converter does not
    /// recognize are ignored, never rejected.
    pub flags: u64,

    // Converter-derived configuration, opaque to the row processor.
    config: Option<C>,
}

impl<C> ColumnInfo<C> {
    /// Create a descriptor with no format string and no flags set.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            format: None,
            flags: 0,
            config: None,
        }
    }

    /// Set the declared format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the converter flags bit-set.
    pub fn with_flags(mut self, flags: u64) -> Self {
        self.flags = flags;
        self
    }

    /// Derive and store this column's configuration from its format and
    /// flags.
    ///
    /// Called once per column at schema-setup time. Derivation is a pure
    /// function of `(format, flags)`, so repeating the call with the same
    /// inputs stores an equivalent configuration.
    pub fn configure_with<Cv>(&mut self, converter: &Cv)
    where
        Cv: Converter<Config = C>,
    {
        let config = converter.configure(self.format.as_deref(), self.flags, self);
        debug!(
            column = %self.name,
            position = self.position,
            flags = self.flags,
            "derived column configuration"
        );
        self.config = Some(config);
    }

    /// The stored configuration, or `None` if the column has not been
    /// configured yet.
    ///
    /// Converters read this on every field conversion rather than
    /// recomputing from format and flags.
    pub fn config(&self) -> Option<&C> {
        self.config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::CharacterConverter;

    #[test]
    fn test_new_column_is_unconfigured() {
        let column: ColumnInfo<bool> = ColumnInfo::new("initial", 3);
        assert_eq!(column.name, "initial");
        assert_eq!(column.position, 3);
        assert_eq!(column.format, None);
        assert_eq!(column.flags, 0);
        assert!(column.config().is_none());
    }

    #[test]
    fn test_configure_with_stores_derived_config() {
        let converter = CharacterConverter::new();
        let mut column = ColumnInfo::new("grade", 0)
            .with_flags(CharacterConverter::PARSE_ERROR_IF_MORE_THAN_ONE_CHAR);

        column.configure_with(&converter);
        assert_eq!(column.config(), Some(&true));
    }

    #[test]
    fn test_reconfiguring_is_idempotent() {
        let converter = CharacterConverter::new();
        let mut column: ColumnInfo<bool> = ColumnInfo::new("grade", 0);

        column.configure_with(&converter);
        let first = *column.config().unwrap();
        column.configure_with(&converter);
        let second = *column.config().unwrap();

        assert_eq!(first, second);
    }
}
