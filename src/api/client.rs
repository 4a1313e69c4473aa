use serde_json::Value;

use crate::config::NOTION_VERSION;

use super::error::ApiError;

/// Core HTTP client function for talking to the Notion REST API.
/// Handles authentication, the version header and error responses.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    params: Option<Vec<(String, String)>>,
) -> Result<Value, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);
    tracing::debug!(method, %url, "notion request");

    let mut req = match method {
        "POST" => client.post(&url),
        _ => client.get(&url),
    };

    req = req
        .header("Authorization", format!("Bearer {}", api_token))
        .header("Notion-Version", NOTION_VERSION);

    if let Some(ref p) = params {
        req = req.query(p);
    }

    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        // Notion error bodies carry a human-readable "message" field
        let payload: Value = resp.json().await.unwrap_or(Value::Null);
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("upstream request failed")
            .to_string();
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    Ok(resp.json().await?)
}
