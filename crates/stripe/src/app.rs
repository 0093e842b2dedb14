use weft_action::{ConfigError, SecureString};
use weft_parameter::catalog::PropCatalog;

use crate::client::{DEFAULT_BASE_URL, StripeClient};
use crate::props;

/// App slug actions carry in their descriptors.
pub const SLUG: &str = "stripe";

/// Credentials and endpoint for the Stripe API.
///
/// The secret key never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    api_key: SecureString,
    base_url: String,
}

impl StripeConfig {
    /// Configure with an explicit secret key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecureString::new(api_key),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Read the secret key from `STRIPE_API_KEY`.
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
        let api_key = lookup("STRIPE_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::missing_env("STRIPE_API_KEY"))?;
        Ok(Self::new(api_key))
    }

    /// Point the client at a different host. Used to target a mock
    /// server in tests.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// The shared Stripe app definition: prop catalog plus authenticated
/// client. Actions hold it behind `Arc` and reference catalog entries
/// when building their schemas.
#[derive(Debug)]
pub struct StripeApp {
    catalog: PropCatalog,
    client: StripeClient,
}

impl StripeApp {
    /// Build the app from a config.
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            catalog: props::catalog(),
            client: StripeClient::new(config.api_key, config.base_url),
        }
    }

    /// Build the app from the environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingEnv`] when `STRIPE_API_KEY` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(StripeConfig::from_env()?))
    }

    /// The shared prop catalog.
    #[must_use]
    pub fn catalog(&self) -> &PropCatalog {
        &self.catalog
    }

    /// The authenticated API client.
    #[must_use]
    pub fn client(&self) -> &StripeClient {
        &self.client
    }
}
