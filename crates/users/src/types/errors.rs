//! Error types for the user management services.

use finapi_database::StoreError;
use thiserror::Error;

/// Errors raised by user management operations
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid user data: {0}")]
    Validation(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Errors raised by authentication operations.
///
/// A missing user and a wrong password both surface as
/// [`AuthError::IncorrectEmailOrPassword`] so callers cannot probe
/// which emails are registered.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("incorrect email or password")]
    IncorrectEmailOrPassword,

    #[error("token creation failed: {0}")]
    TokenCreation(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

pub type UserResult<T> = Result<T, UserError>;
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            UserError::UserAlreadyExists.to_string(),
            "user already exists"
        );
        assert_eq!(
            AuthError::IncorrectEmailOrPassword.to_string(),
            "incorrect email or password"
        );
    }
}
