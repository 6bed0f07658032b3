//! Write-boundary validation shared by the stores and the submission form.

use std::fmt;

use thiserror::Error;

/// A user-supplied message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Content,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{0} must not be empty")]
    Empty(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) | ValidationError::Empty(field) => *field,
        }
    }
}

/// Trimmed, non-empty fields ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub username: String,
    pub content: String,
}

/// Trim both fields and reject absent or blank values. `username` is checked first.
pub fn validate(username: Option<&str>, content: Option<&str>) -> Result<NewMessage, ValidationError> {
    let username = require_field(Field::Username, username)?;
    let content = require_field(Field::Content, content)?;

    Ok(NewMessage {
        username: username.to_string(),
        content: content.to_string(),
    })
}

/// Check a single field, returning its trimmed value.
pub fn require_field(field: Field, value: Option<&str>) -> Result<&str, ValidationError> {
    let trimmed = value.ok_or(ValidationError::Missing(field))?.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed)
}
