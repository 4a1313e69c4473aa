use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api::load_plans;
use crate::models::AppState;

/// GET /api/prices — all plans, ascending by price, with detail trees.
pub async fn prices_get(State(state): State<AppState>) -> impl IntoResponse {
    match load_plans(
        &state.client,
        &state.api_base_url,
        &state.api_token,
        &state.database_id,
    )
    .await
    {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(e) => {
            tracing::error!(%e, "failed to load plans from Notion");
            let mut body = json!({ "error": "Failed to fetch pricing data" });
            if state.expose_error_details {
                body["details"] = json!(e.to_string());
            }
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Fallback for non-GET methods on the prices route.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
