// Router-level tests for the HTTP serving layer

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use erth::server::create_router;
use erth::services::metrics_exporter::MetricsExporter;
use erth::services::town_hall_client::TownHallClient;

const PAGE: &str = include_str!("../fixtures/wartezeit.html");

fn router_for(page_url: String) -> Router {
    let client = TownHallClient::with_page_url(page_url);
    let exporter = MetricsExporter::new(client);
    create_router(Arc::new(Mutex::new(exporter)))
}

#[tokio::test]
async fn metrics_endpoint_serves_prometheus_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/wartezeit")
        .with_status(200)
        .with_body(PAGE)
        .create_async()
        .await;

    let app = router_for(format!("{}/wartezeit", server.url()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("erth_people_waiting{service=\"citizen\"}\t\t12"));
    assert!(body_str.contains("erth_scrape_timestamp"));
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    // health must answer without touching the page
    let app = router_for("http://127.0.0.1:1/unreachable".to_string());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = router_for("http://127.0.0.1:1/unreachable".to_string());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scrape_failure_maps_to_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/wartezeit")
        .with_status(503)
        .create_async()
        .await;

    let app = router_for(format!("{}/wartezeit", server.url()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("scrape failed"));
}
