//! Sign-in capability used by the auth dialog.
//!
//! Only a hard-coded credential pair exists. There is no hashing, no
//! constant-time comparison and no lockout: the check is plain string
//! equality.

use thiserror::Error;

/// The one email [`StaticCredentials::demo`] accepts
pub const DEMO_EMAIL: &str = "anbo@zealand.dk";
/// The one password [`StaticCredentials::demo`] accepts
pub const DEMO_PASSWORD: &str = "secret12";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Wrong email or password")]
    InvalidCredentials,
}

/// Something that can decide whether an email/password pair may sign in.
pub trait Authenticator {
    fn verify(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Accepts exactly one email/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The demo account
    pub fn demo() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::demo()
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
