use futures_util::future::join_all;
use serde_json::Value;

use crate::models::Plan;

use super::blocks::load_page_content;
use super::database::query_plan_database;
use super::error::ApiError;
use super::properties::property_value;

/// Load all plans with their full detail trees, ordered ascending by price.
///
/// The database query failing fails the whole call; a single plan's detail
/// fetch failing only empties that plan's `service_details`. Detail fetches
/// run concurrently, one per plan, and the upstream sort order is preserved.
pub async fn load_plans(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    database_id: &str,
) -> Result<Vec<Plan>, ApiError> {
    let payload = query_plan_database(client, api_base_url, api_token, database_id).await?;
    let pages = payload
        .get("results")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let plans = join_all(
        pages
            .iter()
            .map(|page| build_plan(client, api_base_url, api_token, page)),
    )
    .await;
    Ok(plans)
}

async fn build_plan(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    page: &Value,
) -> Plan {
    let id = page
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let props = page.get("properties").unwrap_or(&Value::Null);

    let service_details = match load_page_content(client, api_base_url, api_token, &id).await {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::warn!(%e, page_id = %id, "detail fetch failed, serving plan with empty details");
            Vec::new()
        }
    };

    Plan {
        id,
        name: property_value(props, "Name").into_text(),
        description: property_value(props, "Description").into_text(),
        price: property_value(props, "Price").into_number(),
        features: property_value(props, "Features").into_list(),
        recommended: property_value(props, "Recommended").into_bool(),
        service_details,
    }
}
