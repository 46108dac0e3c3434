//! Domain error types.

/// Error returned when a token is not a valid 32-bit identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {token:?}")]
pub struct InvalidId {
    kind: &'static str,
    token: String,
}

impl InvalidId {
    pub(super) fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }

    /// The offending token.
    pub fn token(&self) -> &str {
        &self.token
    }
}
