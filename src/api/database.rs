use serde_json::{json, Value};

use super::client::api_call;
use super::error::ApiError;

/// Query the plan database, sorted ascending by the Price property.
/// No filter; tie order among equal prices is whatever Notion returns.
pub async fn query_plan_database(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    database_id: &str,
) -> Result<Value, ApiError> {
    let body = json!({
        "sorts": [
            {
                "property": "Price",
                "direction": "ascending",
            }
        ]
    });
    api_call(
        client,
        api_base_url,
        api_token,
        "POST",
        &format!("/databases/{}/query", database_id),
        Some(body),
        None,
    )
    .await
}
