//! User name and email validation
//!
//! Both columns are capped at 50 characters.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

const MAX_NAME_LEN: usize = 50;
const MAX_EMAIL_LEN: usize = 50;

/// One `@`, something on both sides, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

/// Validated display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Surrounding whitespace is trimmed before checking.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if s.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if s.chars().count() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@domain",
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
}

impl NewUser {
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: UserName::new(name)?,
            email: Email::new(email)?,
        })
    }
}

/// Partial update; at least one field is set
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: Option<UserName>,
    pub email: Option<Email>,
}

impl UserUpdate {
    pub fn new(name: Option<&str>, email: Option<&str>) -> Result<Self, ValidationError> {
        if name.is_none() && email.is_none() {
            return Err(ValidationError::NothingToUpdate {
                fields: "name, email",
            });
        }
        Ok(Self {
            name: name.map(UserName::new).transpose()?,
            email: email.map(Email::new).transpose()?,
        })
    }
}
