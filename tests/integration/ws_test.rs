//! Integration tests for the change-feed WebSocket handshake.
//!
//! Event delivery needs a live TCP connection and is covered by the
//! change-feed unit tests; these cover the pre-upgrade authentication
//! gate.

use axum::body::Body;
use http::{Request, StatusCode};
use tower::ServiceExt;

use crate::helpers::TestApp;

/// Send a WebSocket handshake request and return the response status.
async fn ws_handshake(app: &TestApp, path: &str) -> StatusCode {
    let req = Request::builder()
        .method("GET")
        .uri(path)
        .header("Host", "localhost")
        .header("Connection", "Upgrade")
        .header("Upgrade", "websocket")
        .header("Sec-WebSocket-Version", "13")
        .header("Sec-WebSocket-Key", "dGhlIHNhbXBsZSBub25jZQ==")
        .body(Body::empty())
        .expect("Failed to build handshake request");

    app.router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send handshake")
        .status()
}

#[tokio::test]
async fn test_ws_rejects_missing_token() {
    let app = TestApp::new().await;

    assert_eq!(ws_handshake(&app, "/ws").await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ws_rejects_invalid_token() {
    let app = TestApp::new().await;

    assert_eq!(
        ws_handshake(&app, "/ws?token=not-a-real-token").await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_ws_rejects_token_with_revoked_session() {
    let app = TestApp::new().await;
    app.create_confirmed_user("wsuser@example.com", "purple-otter-balloon-42")
        .await;
    let token = app
        .signin("wsuser@example.com", "purple-otter-balloon-42")
        .await;

    app.request("POST", "/api/auth/signout", None, Some(&token))
        .await;

    assert_eq!(
        ws_handshake(&app, &format!("/ws?token={token}")).await,
        StatusCode::UNAUTHORIZED
    );
}
