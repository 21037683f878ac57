//! Integration tests for the account and session flow.

use http::StatusCode;

use crate::helpers::TestApp;

const STRONG_PASSWORD: &str = "purple-otter-balloon-42";

#[tokio::test]
async fn test_signup_creates_unconfirmed_account() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": STRONG_PASSWORD,
                "display_name": "Ada",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["confirmation_required"], true);
    assert_eq!(response.body["data"]["user"]["email"], "ada@example.com");
    assert_eq!(response.body["data"]["user"]["confirmed"], false);

    // Unconfirmed accounts cannot sign in yet.
    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_duplicate_email_conflict() {
    let app = TestApp::new().await;
    app.create_confirmed_user("dup@example.com", STRONG_PASSWORD)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "dup@example.com",
                "password": STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_signup_weak_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "weak@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_confirm_then_signin() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/api/auth/signup",
        Some(serde_json::json!({
            "email": "flow@example.com",
            "password": STRONG_PASSWORD,
            "redirect_to": "/clubs",
        })),
        None,
    )
    .await;

    let token = app
        .confirmation_token_for("flow@example.com")
        .await
        .expect("No confirmation token issued");

    let response = app
        .request(
            "GET",
            &format!("/api/auth/confirm?token={token}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["redirect_to"], "/clubs");

    let access = app.signin("flow@example.com", STRONG_PASSWORD).await;
    assert!(!access.is_empty());
}

#[tokio::test]
async fn test_confirm_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            &format!("/api/auth/confirm?token={}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_confirm_token_is_single_use() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/api/auth/signup",
        Some(serde_json::json!({
            "email": "once@example.com",
            "password": STRONG_PASSWORD,
        })),
        None,
    )
    .await;

    let token = app
        .confirmation_token_for("once@example.com")
        .await
        .expect("No confirmation token issued");
    let path = format!("/api/auth/confirm?token={token}");

    let first = app.request("GET", &path, None, None).await;
    assert_eq!(first.status, StatusCode::OK);

    // Redemption clears the token; a replay looks like a bad token.
    let second = app.request("GET", &path, None, None).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_invalid_password() {
    let app = TestApp::new().await;
    app.create_confirmed_user("wrongpw@example.com", STRONG_PASSWORD)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "email": "wrongpw@example.com",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_signin_nonexistent_user_same_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    // Identical to the wrong-password error so the response does not
    // reveal which emails are registered.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    app.create_confirmed_user("me@example.com", STRONG_PASSWORD)
        .await;
    let token = app.signin("me@example.com", STRONG_PASSWORD).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "me@example.com");
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signout_revokes_session() {
    let app = TestApp::new().await;
    app.create_confirmed_user("out@example.com", STRONG_PASSWORD)
        .await;
    let token = app.signin("out@example.com", STRONG_PASSWORD).await;

    let response = app
        .request("POST", "/api/auth/signout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The token still carries a valid signature, but its session is gone.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
