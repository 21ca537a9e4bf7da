//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is blank.
    EmptyEmail,

    /// The accepted phone-type set has no usable entries.
    EmptyLineTypes,

    /// A phone-type tag in the accepted set is blank.
    BlankLineType,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email address cannot be empty"),
            Self::EmptyLineTypes => write!(f, "At least one accepted phone type is required"),
            Self::BlankLineType => write!(f, "Accepted phone types cannot contain blank entries"),
        }
    }
}

impl std::error::Error for ValidationError {}
