//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every failure is recoverable: operations that fail leave the record or
//! directory exactly as it was.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone number does not pass validation
    #[error("{0}")]
    InvalidPhone(ValidationError),

    /// The birthday is missing or not a `DD.MM.YYYY` date
    #[error("{0}")]
    InvalidBirthday(ValidationError),

    /// No phone on the record matches the requested value
    #[error("Phone {0} not found.")]
    PhoneNotFound(String),
}

/// Errors that can occur when working with the directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No record is filed under the requested name
    #[error("Record for {0} not found.")]
    RecordNotFound(String),
}

/// Errors that can occur while handling a text command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input line contained no command
    #[error("Please enter a command.")]
    EmptyInput,

    /// The verb is not in the command table
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Not enough arguments were given
    #[error("{usage}")]
    MissingArguments { usage: &'static str },

    /// The named contact does not exist
    #[error("Contact '{0}' not found in the address book.")]
    ContactNotFound(String),

    /// A value failed validation before reaching a record
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record operation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A directory operation failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone 0501234567 not found.");

        let err = DirectoryError::RecordNotFound("Ann".to_string());
        assert_eq!(err.to_string(), "Record for Ann not found.");

        let err = CommandError::UnknownCommand("dance".to_string());
        assert_eq!(err.to_string(), "Invalid command.");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_record_error_is_transparent_through_layers() {
        let err: CommandError = RecordError::PhoneNotFound("1234567890".to_string()).into();
        assert!(matches!(err, CommandError::Record(RecordError::PhoneNotFound(_))));
        assert_eq!(err.to_string(), "Phone 1234567890 not found.");

        let err: CommandError = DirectoryError::RecordNotFound("Ann".to_string()).into();
        assert!(matches!(err, CommandError::Directory(_)));
        assert_eq!(err.to_string(), "Record for Ann not found.");
    }
}
