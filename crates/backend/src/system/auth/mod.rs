pub mod authenticator;
pub mod extractor;
pub mod jwt;

use thiserror::Error;

pub use authenticator::{Authenticator, SessionTokenAuthenticator};
pub use extractor::AdminContext;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session token is missing")]
    MissingToken,

    #[error("invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("session token is for shop {actual}, expected {expected}")]
    ShopMismatch { expected: String, actual: String },

    #[error("app is not configured: {0} is empty")]
    NotConfigured(&'static str),
}
