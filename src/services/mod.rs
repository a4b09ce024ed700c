// Service exports
pub mod auth;
pub mod directory;
pub mod password;

pub use auth::{resolve_token, AuthError, USER_TOKEN_HEADER};
pub use directory::UserDirectory;
pub use password::hash_password;
