//! Error types for Freelo Core

use thiserror::Error;

use crate::models::DraftField;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a draft cannot leave the composer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("missing required fields: {}", display_fields(.0))]
    MissingFields(Vec<DraftField>),
}

impl DraftError {
    pub fn missing_fields(&self) -> &[DraftField] {
        match self {
            DraftError::MissingFields(fields) => fields,
        }
    }
}

fn display_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reported by an event publisher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("rejected by backend: {0}")]
    Rejected(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Sign-in and sign-up rejections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("name, email and password are required")]
    MissingSignUpFields,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("terms must be accepted and age confirmed")]
    AgreementRequired,

    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("an account with this email already exists")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email address not confirmed")]
    EmailNotConfirmed,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl AuthError {
    /// Translation key for the notification shown to the user
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "login.errorRequiredFields",
            AuthError::MissingSignUpFields => "signup.errorRequiredFields",
            AuthError::PasswordMismatch => "signup.errorPasswordMatch",
            AuthError::AgreementRequired => "signup.errorAgreement",
            AuthError::PasswordTooShort(_) => "signup.errorPasswordLength",
            AuthError::EmailTaken => "signup.errorEmailTaken",
            AuthError::InvalidCredentials => "login.error",
            AuthError::EmailNotConfirmed => "login.errorNotConfirmed",
            AuthError::Hashing(_) => "signup.error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_every_field() {
        let err = DraftError::MissingFields(vec![DraftField::Name, DraftField::Description]);
        assert_eq!(err.to_string(), "missing required fields: name, description");
        assert_eq!(err.missing_fields().len(), 2);
    }

    #[test]
    fn test_auth_error_converts() {
        let err: Error = AuthError::EmailTaken.into();
        assert!(matches!(err, Error::Authentication(AuthError::EmailTaken)));
        assert_eq!(AuthError::PasswordMismatch.message_key(), "signup.errorPasswordMatch");
    }

    #[test]
    fn test_publish_error_converts() {
        let err: Error = PublishError::Unavailable("down".into()).into();
        assert!(matches!(err, Error::Publish(PublishError::Unavailable(_))));
        assert_eq!(err.to_string(), "Publish error: backend unavailable: down");
    }
}
