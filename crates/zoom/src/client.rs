use serde_json::{Map, Value};
use weft_action::http::read_json;
use weft_action::{ActionError, SecureString};

/// Default Zoom API host, including the version prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

/// Thin authenticated wrapper over the Zoom REST API.
#[derive(Debug, Clone)]
pub struct ZoomClient {
    http: reqwest::Client,
    access_token: SecureString,
    base_url: String,
}

impl ZoomClient {
    /// Create a client for the given access token and base URL.
    #[must_use]
    pub fn new(access_token: SecureString, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `PATCH /webinars/{id}`.
    ///
    /// Zoom scopes the update to a single occurrence when
    /// `occurrence_id` is given. A successful update comes back as
    /// `204 No Content`, which surfaces as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// [`ActionError::Vendor`] for a non-2xx Zoom response (body
    /// verbatim), [`ActionError::Transport`] when the request never
    /// completes.
    pub async fn update_webinar(
        &self,
        webinar_id: i64,
        occurrence_id: Option<&str>,
        body: &Map<String, Value>,
    ) -> Result<Value, ActionError> {
        let url = format!("{}/webinars/{webinar_id}", self.base_url);

        tracing::debug!(url = %url, occurrence = occurrence_id.is_some(), "updating webinar");

        let mut request = self
            .http
            .patch(&url)
            .bearer_auth(self.access_token.expose())
            .json(body);
        if let Some(occurrence_id) = occurrence_id {
            request = request.query(&[("occurrence_id", occurrence_id)]);
        }

        let response = request.send().await?;
        read_json(response).await
    }
}
