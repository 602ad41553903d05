mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::Fixture;
use presence_analyzer::{AppState, routes};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(fixture: &Fixture) -> Router {
    routes::router(AppState::new(fixture.config.clone()))
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn users_listing_uses_directory_names() {
    let fixture = Fixture::new();

    let (status, body) = get_json(app(&fixture), "/api/v1/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(
        body["resp_data"],
        json!([
            {
                "user_id": 10,
                "name": "Maria K.",
                "avatar": "https://intranet.example.com/api/images/users/10"
            },
            { "user_id": 11, "name": "User 11", "avatar": null }
        ])
    );
}

#[tokio::test]
async fn users_listing_survives_broken_directory() {
    let fixture = Fixture::with_sources(common::PRESENCE_CSV, "<not-xml");

    let (status, body) = get_json(app(&fixture), "/api/v1/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["resp_data"][0],
        json!({ "user_id": 10, "name": "User 10", "avatar": null })
    );
}

#[tokio::test]
async fn mean_time_weekday_view() {
    let fixture = Fixture::new();

    let (status, body) = get_json(app(&fixture), "/api/v1/mean_time_weekday/11").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["resp_data"],
        json!([
            ["Mon", 24123.0],
            ["Tue", 16564.0],
            ["Wed", 25321.0],
            ["Thu", 22984.0],
            ["Fri", 6426.0],
            ["Sat", 0.0],
            ["Sun", 0.0]
        ])
    );
}

#[tokio::test]
async fn presence_weekday_view() {
    let fixture = Fixture::new();

    let (status, body) = get_json(app(&fixture), "/api/v1/presence_weekday/11").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["resp_data"],
        json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 24123],
            ["Tue", 16564],
            ["Wed", 25321],
            ["Thu", 45968],
            ["Fri", 6426],
            ["Sat", 0],
            ["Sun", 0]
        ])
    );
}

#[tokio::test]
async fn presence_start_end_view() {
    let fixture = Fixture::new();

    let (status, body) = get_json(app(&fixture), "/api/v1/presence_start_end/11").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["resp_data"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], json!(["Mon", 32400.0, 56523.0]));
    assert_eq!(rows[3], json!(["Thu", 32400.0, 55384.0]));
    assert_eq!(rows[6], json!(["Sun", 0.0, 0.0]));
}

#[tokio::test]
async fn unknown_user_gets_empty_list() {
    let fixture = Fixture::new();
    let router = app(&fixture);

    for uri in [
        "/api/v1/mean_time_weekday/404",
        "/api/v1/presence_weekday/404",
        "/api/v1/presence_start_end/404",
    ] {
        let (status, body) = get_json(router.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["resp_data"], json!([]), "{uri}");
    }
}

#[tokio::test]
async fn users_data_view() {
    let fixture = Fixture::new();

    let (status, body) = get_json(app(&fixture), "/api/v1/users_data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resp_data"]["141"]["name"], "Adam P.");
    assert_eq!(
        body["resp_data"]["141"]["avatar"],
        "https://intranet.example.com/api/images/users/141"
    );
}

#[tokio::test]
async fn missing_source_is_server_error() {
    let fixture = Fixture::new();
    std::fs::remove_file(&fixture.config.presence_csv_path).unwrap();

    let (status, body) = get_json(app(&fixture), "/api/v1/mean_time_weekday/10").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 5000);
    assert!(body["resp_data"].is_null());
}

#[tokio::test]
async fn custom_base_uri() {
    let mut fixture = Fixture::new();
    fixture.config.api_base_uri = "/presence".to_string();

    let (status, body) = get_json(app(&fixture), "/presence/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resp_data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn root_base_uri_serves_at_root() {
    for base in ["/", ""] {
        let mut fixture = Fixture::new();
        fixture.config.api_base_uri = base.to_string();

        let (status, body) = get_json(app(&fixture), "/users").await;

        assert_eq!(status, StatusCode::OK, "{base:?}");
        assert_eq!(body["resp_data"].as_array().unwrap().len(), 2, "{base:?}");
    }
}
