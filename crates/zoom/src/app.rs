use weft_action::{ConfigError, SecureString};

use crate::client::{DEFAULT_BASE_URL, ZoomClient};

/// App slug actions carry in their descriptors.
pub const SLUG: &str = "zoom";

/// Credentials and endpoint for the Zoom API.
///
/// The access token never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    access_token: SecureString,
    base_url: String,
}

impl ZoomConfig {
    /// Configure with an explicit OAuth access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecureString::new(access_token),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Read the access token from `ZOOM_ACCESS_TOKEN`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingEnv`] when the variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Lookup seam behind [`Self::from_env`]. Tests inject the
    /// environment here.
    fn from_lookup(lookup: impl FnOnce(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_token = lookup("ZOOM_ACCESS_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::missing_env("ZOOM_ACCESS_TOKEN"))?;
        Ok(Self::new(access_token))
    }

    /// Point the client at a different host. Used to target a mock
    /// server in tests.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// The shared Zoom app definition. Unlike Stripe, the Zoom actions
/// declare their props inline, so the app carries only the
/// authenticated client.
#[derive(Debug)]
pub struct ZoomApp {
    client: ZoomClient,
}

impl ZoomApp {
    /// Build the app from a config.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            client: ZoomClient::new(config.access_token, config.base_url),
        }
    }

    /// Build the app from the environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingEnv`] when `ZOOM_ACCESS_TOKEN` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ZoomConfig::from_env()?))
    }

    /// The authenticated API client.
    #[must_use]
    pub fn client(&self) -> &ZoomClient {
        &self.client
    }
}
