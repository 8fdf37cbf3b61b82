//! Login collaborator.
//!
//! The planner has no account system. Login goes through an [`Authenticator`]
//! so a real credential check can be plugged in later; the only implementation
//! shipped accepts anything.

use async_trait::async_trait;

/// What the login form submits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Errors an authenticator may report.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials for '{0}'")]
    InvalidCredentials(String),

    #[error("Authentication unavailable: {0}")]
    Unavailable(String),
}

/// Interface every login backend implements.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Mock authenticator: every login succeeds, empty fields included.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAllAuthenticator;

#[async_trait]
impl Authenticator for AcceptAllAuthenticator {
    fn name(&self) -> &str {
        "accept-all"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        log::info!("Auth: accepting login for '{}'", credentials.username);
        Ok(())
    }
}
