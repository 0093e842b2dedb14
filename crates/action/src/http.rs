use serde_json::Value;

use crate::error::{ActionError, VendorError};

/// Read a vendor response into JSON.
///
/// Non-2xx statuses become [`ActionError::Vendor`] carrying the
/// response body verbatim. An empty success body (Zoom's
/// `204 No Content`) maps to [`Value::Null`]; any other success body
/// must parse as JSON.
///
/// # Errors
///
/// [`ActionError::Transport`] if the body cannot be read,
/// [`ActionError::Vendor`] on a non-2xx status,
/// [`ActionError::MalformedResponse`] if a success body is not JSON.
pub async fn read_json(response: reqwest::Response) -> Result<Value, ActionError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(VendorError::from_body(status.as_u16(), body).into());
    }

    if body.is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}
