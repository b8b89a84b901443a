//! Integration tests driving a live server instance.
//!
//! Each test binds an ephemeral localhost port, serves the real router on
//! it, and issues HTTP requests with reqwest.

use std::net::SocketAddr;

use fargate_placeholder::config::GREETING;
use fargate_placeholder::routes::create_router;

/// Serve the application router on an ephemeral localhost port and return
/// the bound address.
async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("Server error");
    });

    addr
}

#[tokio::test]
async fn get_root_returns_greeting() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.text().await.expect("Failed to read body"),
        GREETING
    );
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/nonexistent"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_returns_method_not_allowed() {
    let addr = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/"))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_requests_get_independent_responses() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/");

    let (first, second) = tokio::join!(client.get(&url).send(), client.get(&url).send());

    for response in [
        first.expect("First request failed"),
        second.expect("Second request failed"),
    ] {
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.text().await.expect("Failed to read body"),
            GREETING
        );
    }
}
