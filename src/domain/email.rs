//! EmailAddress value object.

use super::errors::ValidationError;
use std::fmt;

/// A candidate email address read from a lead record.
///
/// Leads exports are noisy, so the only guarantee is that the address is
/// trimmed and non-empty. No syntax check is applied: whatever the export
/// holds is what the contact list receives.
///
/// # Example
///
/// ```
/// use leads_sms_converter::domain::EmailAddress;
///
/// let email = EmailAddress::new("  user@example.com ").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from a raw cell, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` if nothing is left after trimming.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
