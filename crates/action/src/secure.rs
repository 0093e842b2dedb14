use std::fmt;

/// A string that redacts its contents in Debug and Display.
///
/// App configs hold API keys and OAuth tokens in this wrapper so a
/// stray `{:?}` on a config or client never leaks a secret into logs.
/// The value is only reachable through [`SecureString::expose`], at
/// the point the request is signed.
#[derive(Clone)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Wrap a secret value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Access the underlying value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString([REDACTED])")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
