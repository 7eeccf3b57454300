//! Error types for catalog readers.

use thiserror::Error;

use crate::core::ConversionError;

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for database errors.
pub const EXIT_SOURCE_ERROR: u8 = 2;
/// Exit code for connection pool errors.
pub const EXIT_POOL_ERROR: u8 = 3;
/// Exit code for column access and conversion errors.
pub const EXIT_COLUMN_ERROR: u8 = 4;
/// Exit code for lookups of views or columns that do not exist.
pub const EXIT_UNKNOWN_ERROR: u8 = 5;
/// Exit code for IO and serialization errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// SQL Server connection or query error
    #[error("Source database error: {0}")]
    Source(#[from] tiberius::error::Error),

    /// Connection pool error with context
    #[error("Pool error: {message}\n  Context: {context}")]
    Pool { message: String, context: String },

    /// A typed accessor could not produce a value for a column
    #[error("Column {ordinal} ({column}): {source}")]
    Column {
        ordinal: usize,
        column: String,
        #[source]
        source: ConversionError,
    },

    /// A column was accessed before `read()` or after the cursor was exhausted
    #[error("No current row: call read() before accessing columns")]
    NoCurrentRow,

    /// Ordinal outside the result set
    #[error("Ordinal {ordinal} is out of range (field count {field_count})")]
    OrdinalOutOfRange { ordinal: usize, field_count: usize },

    /// Catalog view not known to the registry
    #[error("Unknown catalog view: {0}")]
    UnknownView(String),

    /// Column name not projected by a view
    #[error("View {view} has no column named {column}")]
    UnknownColumn { view: String, column: String },

    /// Named schema or table does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Raw column data could not be represented as a value
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a Pool error with context about where it occurred
    pub fn pool(message: impl ToString, context: impl Into<String>) -> Self {
        CatalogError::Pool {
            message: message.to_string(),
            context: context.into(),
        }
    }

    /// Create a Column error
    pub fn column(ordinal: usize, column: impl Into<String>, source: ConversionError) -> Self {
        CatalogError::Column {
            ordinal,
            column: column.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CatalogError::Config(_) | CatalogError::Yaml(_) => EXIT_CONFIG_ERROR,
            CatalogError::Source(_) => EXIT_SOURCE_ERROR,
            CatalogError::Pool { .. } => EXIT_POOL_ERROR,
            CatalogError::Column { .. }
            | CatalogError::NoCurrentRow
            | CatalogError::OrdinalOutOfRange { .. }
            | CatalogError::Conversion(_) => EXIT_COLUMN_ERROR,
            CatalogError::UnknownView(_)
            | CatalogError::UnknownColumn { .. }
            | CatalogError::NotFound(_) => EXIT_UNKNOWN_ERROR,
            CatalogError::Io(_) | CatalogError::Json(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CatalogError::Config("x".into()).exit_code(), EXIT_CONFIG_ERROR);
        assert_eq!(CatalogError::pool("down", "ctx").exit_code(), EXIT_POOL_ERROR);
        assert_eq!(CatalogError::NoCurrentRow.exit_code(), EXIT_COLUMN_ERROR);
        assert_eq!(
            CatalogError::UnknownView("sys.nope".into()).exit_code(),
            EXIT_UNKNOWN_ERROR
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(CatalogError::from(io).exit_code(), EXIT_IO_ERROR);
    }

    #[test]
    fn test_column_error_message() {
        let err = CatalogError::column(3, "is_nullable", ConversionError::UnexpectedNull);
        assert_eq!(
            err.to_string(),
            "Column 3 (is_nullable): unexpected NULL in non-nullable column"
        );
    }

    #[test]
    fn test_column_error_keeps_conversion_source() {
        let err = CatalogError::column(
            1,
            "name",
            ConversionError::InvalidCast {
                expected: "Uuid",
                actual: "nvarchar",
            },
        );

        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<ConversionError>())
            .cloned();
        assert_eq!(
            source,
            Some(ConversionError::InvalidCast {
                expected: "Uuid",
                actual: "nvarchar"
            })
        );

        let detailed = err.format_detailed();
        assert!(detailed.contains("Caused by:\n  1: cannot read nvarchar value as Uuid"));
    }

    #[test]
    fn test_format_detailed_includes_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.yaml");
        let err = CatalogError::from(io);
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: IO error: config.yaml"));
    }
}
