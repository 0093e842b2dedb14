use serde_json::{Map, Value};
use weft_action::http::read_json;
use weft_action::{ActionError, SecureString};

use crate::form;

/// Default Stripe API host.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Thin authenticated wrapper over the Stripe REST API.
///
/// One method per endpoint the actions call. Payloads go out
/// form-encoded the way Stripe requires; responses come back as parsed
/// JSON, untouched.
#[derive(Debug, Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    api_key: SecureString,
    base_url: String,
}

impl StripeClient {
    /// Create a client for the given secret key and base URL.
    #[must_use]
    pub fn new(api_key: SecureString, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /v1/payment_intents`.
    ///
    /// # Errors
    ///
    /// [`ActionError::Vendor`] for a non-2xx Stripe response (body
    /// verbatim), [`ActionError::Transport`] when the request never
    /// completes.
    pub async fn create_payment_intent(
        &self,
        params: &Map<String, Value>,
    ) -> Result<Value, ActionError> {
        let url = format!("{}/v1/payment_intents", self.base_url);
        let pairs = form::to_pairs(params);

        tracing::debug!(url = %url, fields = pairs.len(), "creating payment intent");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .form(&pairs)
            .send()
            .await?;

        read_json(response).await
    }
}
