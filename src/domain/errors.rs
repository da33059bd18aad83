//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is missing or not a `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone number should contain exactly 10 digits, got: '{}'.",
                phone
            ),
            Self::InvalidBirthday(raw) if raw.is_empty() => {
                write!(f, "Birthday value cannot be empty.")
            }
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid date format '{}'. Use DD.MM.YYYY", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty."
        );
        assert!(ValidationError::InvalidPhone("123".to_string())
            .to_string()
            .contains("exactly 10 digits"));
        assert_eq!(
            ValidationError::InvalidBirthday(String::new()).to_string(),
            "Birthday value cannot be empty."
        );
        assert!(ValidationError::InvalidBirthday("2024-01-01".to_string())
            .to_string()
            .contains("DD.MM.YYYY"));
    }
}
