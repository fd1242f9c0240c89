//! Feed → poller → dashboard wiring through the public API.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tower::ServiceExt;

use chaos::config::AppConfig;
use chaos::dashboard::build_router;
use chaos::dashboard::routes::DashboardState;
use chaos::feed::mock::MockFeed;
use chaos::feed::poller::{refresh_once, spawn_poller};
use chaos::feed::GameSource;

#[test]
fn mock_feed_is_deterministic() {
    let feed = MockFeed::new();
    let first = tokio_test::block_on(feed.fetch_games()).unwrap();
    let second = tokio_test::block_on(feed.fetch_games()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn poller_populates_dashboard() {
    let state = Arc::new(DashboardState::new());
    let (tx, rx) = watch::channel(false);
    let handle = spawn_poller(
        Arc::new(MockFeed::new()),
        state.clone(),
        Duration::from_millis(20),
        rx,
    );

    tokio::time::sleep(Duration::from_millis(60)).await;
    tx.send(true).unwrap();
    handle.await.unwrap();

    let resp = build_router(state)
        .oneshot(Request::builder().uri("/api/overview").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["gameCount"], 2);
    assert_eq!(json["chaosLevel"], "Medium");
    assert_eq!(json["collapseLevel"], "Low Risk");
}

#[tokio::test]
async fn ticket_round_trip_over_http() {
    let state = Arc::new(DashboardState::new());
    refresh_once(&MockFeed::new(), &state).await.unwrap();

    let resp = build_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chaos-ticket")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"gameId":2,"houseTotal":215.5,"houseSpread":-1.5,"pickSide":"home","pickType":"total"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["flopRisk"], 48.0);
    assert_eq!(json["flopLevel"], "Caution");
    assert_eq!(json["tags"], serde_json::json!(["Scrubs", "Headaches"]));
    // chaos 35 → factor 3.5
    assert_eq!(json["totalBand"]["low"], serde_json::json!([204.0, 208.0]));
}

#[test]
fn default_config_binds_port_8000() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.bind_addr().unwrap().port(), 8000);
}
