use thiserror::Error;
use uuid::Uuid;

use crate::models::User;
use crate::services::UserDirectory;

/// Header carrying the acting user's id
pub const USER_TOKEN_HEADER: &str = "user-token";

/// Errors that can occur while identifying the caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No user token provided")]
    MissingToken,

    #[error("User not found")]
    UnknownUser,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Resolve a `user-token` value to the user it names
pub fn resolve_token<'a>(
    directory: &'a UserDirectory,
    token: Option<&str>,
) -> Result<&'a User, AuthError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let id = Uuid::parse_str(token).map_err(|_| AuthError::UnknownUser)?;
    directory.get(&id).ok_or(AuthError::UnknownUser)
}
