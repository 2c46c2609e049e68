use std::{collections::HashMap, fmt};

/// Minimum username length accepted at registration.
pub const USERNAME_MIN: usize = 3;
/// Minimum password length accepted at registration.
pub const PASSWORD_MIN: usize = 8;
/// Maximum post title length.
pub const TITLE_MAX: usize = 200;

/// High-level validation errors used by form input checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    TooShort(usize),
    TooLong(usize),
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::TooShort(min) => write!(f, "Must be at least {} characters", min),
            ValidationError::TooLong(max) => write!(f, "Must be at most {} characters", max),
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Input wrapper for comment validation.
///
/// Whitespace-only content counts as empty, so a blank comment never reaches
/// the server.
#[derive(Debug, Clone, Default)]
pub struct CommentValidationInput<'a> {
    pub content: &'a str,
}

impl CommentValidationInput<'_> {
    /// Validate the comment, returning a field->error map.
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        if self.content.trim().is_empty() {
            errors.insert("content".to_string(), ValidationError::Required);
        }
        errors
    }
}

/// Input wrapper for new-post validation.
#[derive(Debug, Clone, Default)]
pub struct PostValidationInput<'a> {
    pub title: &'a str,
    pub subject: &'a str,
    pub content: &'a str,
}

impl PostValidationInput<'_> {
    /// Validate the post fields, returning a field->error map.
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title".to_string(), ValidationError::Required);
        } else if title.chars().count() > TITLE_MAX {
            errors.insert("title".to_string(), ValidationError::TooLong(TITLE_MAX));
        }

        if self.subject.trim().is_empty() {
            errors.insert("subject".to_string(), ValidationError::Required);
        }

        if self.content.trim().is_empty() {
            errors.insert("content".to_string(), ValidationError::Required);
        }

        errors
    }
}

/// Input wrapper for registration validation, shared by the register form and
/// the registration endpoint.
#[derive(Debug, Clone, Default)]
pub struct RegistrationValidationInput<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl RegistrationValidationInput<'_> {
    /// Validate the registration fields, returning a field->error map.
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        let username = self.username.trim();
        if username.is_empty() {
            errors.insert("username".to_string(), ValidationError::Required);
        } else if username.chars().count() < USERNAME_MIN {
            errors.insert("username".to_string(), ValidationError::TooShort(USERNAME_MIN));
        }

        if self.password.is_empty() {
            errors.insert("password".to_string(), ValidationError::Required);
        } else if self.password.chars().count() < PASSWORD_MIN {
            errors.insert("password".to_string(), ValidationError::TooShort(PASSWORD_MIN));
        }

        errors
    }
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &HashMap<String, ValidationError>) -> String {
    errors
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
