//! Credential providers.
//!
//! The catalog may require a bearer token. Where it comes from (a login
//! flow, a secret store, the environment) is not the client's concern; the
//! client asks a [`CredentialProvider`] right before each request.

use std::fmt;

/// Placeholder printed instead of secrets.
pub const REDACTED: &str = "[REDACTED]";

/// Supplies the bearer token for outgoing requests.
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// Current token, or `None` to send the request anonymously.
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&REDACTED).finish()
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the token from an environment variable on every request.
///
/// An unset or empty variable means anonymous.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Read from `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialProvider for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}
