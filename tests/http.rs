//! Router-level tests that never touch the database or the network:
//! a lazy pool satisfies the state without connecting.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wellbeing_api::{config::Config, router, AppState};

fn test_state() -> AppState {
    let config = Config {
        database_url: "postgres://localhost/wellbeing_test".into(),
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
        weather_api_url: "https://api.open-meteo.com/v1/forecast".into(),
        quote_api_url: "https://zenquotes.io/api/today".into(),
        fetch_timeout_secs: 5,
        default_city: "Waltham Forest".into(),
        latitude: 51.5074,
        longitude: 0.1278,
    };

    let db = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");

    AppState {
        db,
        config: Arc::new(config),
        http: reqwest::Client::new(),
    }
}

#[tokio::test]
async fn health_reports_ok_without_a_database() {
    let app = router(test_state());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "wellbeing-api");
}

#[tokio::test]
async fn analysis_requires_mood_and_username_params() {
    let app = router(test_state());

    let response = app
        .oneshot(
            Request::get("/api/analysis?username=sam")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Query extraction fails before any handler logic runs.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
