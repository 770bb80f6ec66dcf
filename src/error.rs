//! The [`EtsvError`] `enum` definition and error messages.
//!
use thiserror::Error;

/// The [`EtsvError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum EtsvError {
    // IO related errors
    #[error("File reading error: {0}")]
    IOError(#[from] std::io::Error),

    // Line source errors
    #[error("only one step back is allowed")]
    InvalidOperation,

    // Field resolution and row parsing errors
    #[error("can't find the column named '{0}'")]
    HeaderNotFound(String),
    #[error("field '{field}': cannot convert the value '{value}'")]
    ValueConversion { field: String, value: String },
    #[error("field '{field}' is bound to column {index}, but the line has only {columns} column(s)")]
    TooFewColumns {
        field: String,
        index: usize,
        columns: usize,
    },

    // Row writing errors
    #[error("row has no value for the field '{0}'")]
    MissingField(String),

    // Configuration errors
    #[error("unsupported option(s): {0}")]
    UnsupportedOption(String),
    #[error("invalid value '{value}' for the option '{key}'")]
    InvalidOptionValue { key: String, value: String },
}
