//! Error types for the fee calculator.

use std::fmt;
use thiserror::Error;

/// Result type alias for fee calculation operations
pub type Result<T> = std::result::Result<T, FeeError>;

/// Errors that can occur while computing fees.
#[derive(Error, Debug)]
pub enum FeeError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A row failed validation; the whole run is aborted
    #[error("Invalid value for \"{field}\" at row {row}")]
    Validation { row: usize, field: Field },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: commission-fees <input.csv>")]
    MissingArgument,
}

impl FeeError {
    /// Returns the offending row and field for validation errors.
    pub fn validation_site(&self) -> Option<(usize, Field)> {
        match self {
            FeeError::Validation { row, field } => Some((*row, *field)),
            _ => None,
        }
    }
}

/// Input columns, in positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The row as a whole (wrong number of columns).
    Fields,
    Date,
    UserId,
    UserType,
    OperationType,
    Amount,
    Currency,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Fields => "fields",
            Field::Date => "date",
            Field::UserId => "user_id",
            Field::UserType => "user_type",
            Field::OperationType => "operation_type",
            Field::Amount => "amount",
            Field::Currency => "currency",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_row_and_field() {
        let err = FeeError::Validation {
            row: 3,
            field: Field::Currency,
        };
        assert_eq!(err.to_string(), "Invalid value for \"currency\" at row 3");
        assert_eq!(err.validation_site(), Some((3, Field::Currency)));
    }

    #[test]
    fn test_io_error_has_no_validation_site() {
        let err = FeeError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.validation_site().is_none());
    }
}
