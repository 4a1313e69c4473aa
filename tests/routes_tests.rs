use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use priceboard::models::AppState;
use priceboard::routes::build_router;

fn test_state(api_base_url: &str, expose_error_details: bool) -> AppState {
    AppState {
        api_base_url: api_base_url.to_string(),
        api_token: "tok".to_string(),
        database_id: "db1".to_string(),
        client: reqwest::Client::new(),
        expose_error_details,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_prices_returns_plan_array() {
    let mut server = mockito::Server::new_async().await;
    let _query = server
        .mock("POST", "/databases/db1/query")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [{
                    "id": "p1",
                    "properties": {
                        "Name": { "type": "title", "title": [{ "plain_text": "Basic" }] },
                        "Price": { "type": "number", "number": 500 }
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _details = server
        .mock("GET", "/blocks/p1/children")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[],"has_more":false,"next_cursor":null}"#)
        .create_async()
        .await;

    let app = build_router(test_state(&server.url(), false));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/prices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([{
            "id": "p1",
            "name": "Basic",
            "description": "",
            "price": 500.0,
            "features": [],
            "recommended": false,
            "serviceDetails": []
        }])
    );
}

#[tokio::test]
async fn non_get_method_is_rejected_with_405() {
    let app = build_router(test_state("http://127.0.0.1:9", false));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/prices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn upstream_failure_returns_generic_500() {
    let mut server = mockito::Server::new_async().await;
    let _query = server
        .mock("POST", "/databases/db1/query")
        .with_status(503)
        .with_body(r#"{"message":"service unavailable"}"#)
        .create_async()
        .await;

    let app = build_router(test_state(&server.url(), false));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/prices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("Failed to fetch pricing data"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn upstream_failure_exposes_details_outside_production() {
    let mut server = mockito::Server::new_async().await;
    let _query = server
        .mock("POST", "/databases/db1/query")
        .with_status(503)
        .with_body(r#"{"message":"service unavailable"}"#)
        .create_async()
        .await;

    let app = build_router(test_state(&server.url(), true));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/prices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("Failed to fetch pricing data"));
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("503"), "unexpected details: {details}");
}
