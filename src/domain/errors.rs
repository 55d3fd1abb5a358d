//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating client-supplied input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    Required(&'static str),

    /// A field exceeds its maximum length.
    TooLong { field: &'static str, max: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The password is shorter than the minimum length.
    PasswordTooShort { min: usize },

    /// A query parameter could not be parsed as a positive integer.
    InvalidParameter { name: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} must be less than {} characters", field, max)
            }
            Self::InvalidEmail(_) => write!(f, "Please provide a valid email"),
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters long", min)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "{} must be a positive integer, got: {}", name, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
