use std::fmt;

use crate::domain::ValidationError;

/// Email address supplied by a visitor
///
/// Only the presence of `@` and `.` is checked. Submissions accepted so far
/// must stay accepted, so this is not an RFC 5322 parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Parse a visitor email address, trimming surrounding whitespace
    pub fn parse(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.contains('@') && email.contains('.') {
            Ok(Self(email.to_owned()))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
