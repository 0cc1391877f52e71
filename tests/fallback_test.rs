//! The page client must render the server's data, or an identical copy when
//! the server is unreachable or misbehaving.

use axum::{extract::Request, ServiceExt};
use httpmock::prelude::*;
use mldev_portfolio::{
    core::catalog, create_app, AppState, PageData, PortfolioClient,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_app(Arc::new(AppState::default()));
    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

/// A port that was bound once and released, so nothing is listening on it
async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_from_live_server() {
    let client = PortfolioClient::new(spawn_server().await);

    let projects = client.try_fetch_projects().await.unwrap();
    let skills = client.try_fetch_skills().await.unwrap();

    assert_eq!(projects, catalog::projects());
    assert_eq!(skills, catalog::skills());
}

#[tokio::test]
async fn test_unreachable_server_falls_back_to_identical_data() {
    let live = PortfolioClient::new(spawn_server().await).fetch_page_data().await;
    let offline = PortfolioClient::new(dead_url().await)
        .with_timeout(Duration::from_secs(2))
        .fetch_page_data()
        .await;

    assert_eq!(live, offline);
    assert_eq!(offline, PageData::default());
}

#[tokio::test]
async fn test_error_status_falls_back() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/api/projects");
        then.status(500);
    })
    .await;

    let client = PortfolioClient::new(server.base_url());
    assert!(client.try_fetch_projects().await.is_err());
    assert_eq!(client.fetch_projects().await, catalog::projects());
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(GET).path("/api/skills");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"technical\": 42}");
    })
    .await;

    let client = PortfolioClient::new(server.base_url());
    let err = client.try_fetch_skills().await.unwrap_err();
    assert_eq!(err.code, mldev_portfolio::ErrorCode::UpstreamInvalidBody);
    assert_eq!(client.fetch_skills().await, catalog::skills());
}
