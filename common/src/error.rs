//! Error type shared by every core operation.
//!
//! All variants are recoverable: they describe why a single user action was
//! rejected and carry enough context (row, column, value) for the page to tell
//! the user what to fix.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Column name \"{name}\" is empty or already exists")]
    DuplicateColumn { name: String },

    #[error("Column \"{name}\" does not exist")]
    NotFound { name: String },

    #[error("Cannot delete \"{name}\": it is the last remaining column")]
    LastColumn { name: String },

    #[error("Add a column before adding rows")]
    NoColumns,

    #[error("Row {index} does not exist (the table has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("CSV parse error: {reason}")]
    Parse { reason: String },

    #[error("Select the phone number column before sending")]
    NoPhoneColumnSelected,

    #[error("Row {index} has no value in phone column \"{column}\"")]
    MissingPhone { index: usize, column: String },

    #[error("Phone number looks invalid or too short ({value})")]
    InvalidPhone { value: String },
}

impl Error {
    /// Stable snake_case tag used by the host in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::DuplicateColumn { .. } => "duplicate_column",
            Error::NotFound { .. } => "not_found",
            Error::LastColumn { .. } => "last_column",
            Error::NoColumns => "no_columns",
            Error::IndexOutOfRange { .. } => "index_out_of_range",
            Error::Parse { .. } => "parse",
            Error::NoPhoneColumnSelected => "no_phone_column_selected",
            Error::MissingPhone { .. } => "missing_phone",
            Error::InvalidPhone { .. } => "invalid_phone",
        }
    }

    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Error::Parse {
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
