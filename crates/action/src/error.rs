use thiserror::Error;

/// Error raised while invoking an action.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ActionError {
    /// The action exists in the catalog but its run logic has not been
    /// written yet.
    #[error("action `{key}` is not implemented")]
    NotImplemented {
        /// Key of the unimplemented action.
        key: String,
    },

    /// No action with this key is registered.
    #[error("unknown action: `{key}`")]
    UnknownAction {
        /// The key that failed to resolve.
        key: String,
    },

    /// The vendor API rejected the request. The message carries the
    /// vendor's own wording, unmodified.
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// The request never produced a vendor response (DNS, TLS,
    /// connect, or read failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be parsed as JSON.
    #[error("malformed vendor response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The caller's input failed validation before any request was
    /// sent.
    #[error("invalid input for `{key}`: {reason}")]
    InvalidInput {
        /// Key of the offending prop.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl ActionError {
    /// Shorthand for [`ActionError::NotImplemented`].
    #[must_use]
    pub fn not_implemented(key: impl Into<String>) -> Self {
        Self::NotImplemented { key: key.into() }
    }

    /// Stable category string for logging and metrics.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotImplemented { .. } => "not_implemented",
            Self::UnknownAction { .. } => "unknown_action",
            Self::Vendor(_) => "vendor",
            Self::Transport(_) => "transport",
            Self::MalformedResponse(_) => "malformed_response",
            Self::InvalidInput { .. } => "invalid_input",
        }
    }

    /// Whether this error came back from the vendor API.
    #[must_use]
    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::Vendor(_))
    }

    /// HTTP status of the vendor response, when there was one.
    #[must_use]
    pub fn vendor_status(&self) -> Option<u16> {
        match self {
            Self::Vendor(e) => Some(e.status),
            _ => None,
        }
    }

    /// Whether retrying the same invocation could reasonably succeed.
    ///
    /// Transport failures and vendor 5xx/429 responses are retryable.
    /// Everything else is deterministic.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Vendor(e) => e.status == 429 || e.status >= 500,
            _ => false,
        }
    }
}

/// A non-success response from a vendor API.
///
/// `message` is extracted from the vendor's error envelope when one is
/// recognized, otherwise it is the raw body. `body` always keeps the
/// full response text for diagnostics.
#[derive(Debug, Clone, Error)]
#[error("vendor responded {status}: {message}")]
pub struct VendorError {
    /// HTTP status code of the response.
    pub status: u16,
    /// The vendor's error message, verbatim.
    pub message: String,
    /// Full response body as received.
    pub body: String,
}

impl VendorError {
    /// Create a vendor error with an explicit message.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            body: message.clone(),
            message,
        }
    }

    /// Build from a response body, pulling the message out of the
    /// common JSON envelopes.
    ///
    /// Checks `error.message` (Stripe-style) then a top-level
    /// `message` (Zoom-style); falls back to the raw body.
    #[must_use]
    pub fn from_body(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .or_else(|| v.get("message"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| body.trim().to_owned());

        Self {
            status,
            message,
            body,
        }
    }
}

/// Error building an app configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing environment variable `{name}`")]
    MissingEnv {
        /// Name of the variable.
        name: &'static str,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingEnv`].
    #[must_use]
    pub fn missing_env(name: &'static str) -> Self {
        Self::MissingEnv { name }
    }
}
