//! Integration tests for profile fetch and update.

use http::StatusCode;

use crate::helpers::TestApp;

const PASSWORD: &str = "purple-otter-balloon-42";

#[tokio::test]
async fn test_profile_created_at_signup() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/api/auth/signup",
        Some(serde_json::json!({
            "email": "newbie@example.com",
            "password": PASSWORD,
            "display_name": "Newbie",
        })),
        None,
    )
    .await;

    let token = app
        .confirmation_token_for("newbie@example.com")
        .await
        .expect("No confirmation token issued");
    app.request(
        "GET",
        &format!("/api/auth/confirm?token={token}"),
        None,
        None,
    )
    .await;
    let access = app.signin("newbie@example.com", PASSWORD).await;

    let response = app
        .request("GET", "/api/profile", None, Some(&access))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["found"], true);
    assert_eq!(response.body["data"]["profile"]["display_name"], "Newbie");
}

#[tokio::test]
async fn test_update_profile_passes_fields_through() {
    let app = TestApp::new().await;
    app.create_confirmed_user("editor@example.com", PASSWORD)
        .await;
    let token = app.signin("editor@example.com", PASSWORD).await;

    let response = app
        .request(
            "PUT",
            "/api/profile",
            Some(serde_json::json!({
                "display_name": "Editor",
                "avatar_url": "https://example.com/avatar.png",
                "bio": "I edit things.",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["display_name"], "Editor");
    assert_eq!(response.body["data"]["bio"], "I edit things.");

    let fetched = app.request("GET", "/api/profile", None, Some(&token)).await;
    assert_eq!(fetched.body["data"]["profile"]["display_name"], "Editor");
    assert_eq!(
        fetched.body["data"]["profile"]["avatar_url"],
        "https://example.com/avatar.png"
    );
}

#[tokio::test]
async fn test_update_profile_omitted_field_clears_it() {
    let app = TestApp::new().await;
    app.create_confirmed_user("clearer@example.com", PASSWORD)
        .await;
    let token = app.signin("clearer@example.com", PASSWORD).await;

    app.request(
        "PUT",
        "/api/profile",
        Some(serde_json::json!({
            "display_name": "Clearer",
            "bio": "Temporary bio",
        })),
        Some(&token),
    )
    .await;

    // Values pass through as given; an omitted field arrives as NULL.
    let response = app
        .request(
            "PUT",
            "/api/profile",
            Some(serde_json::json!({
                "display_name": "Clearer",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["bio"].is_null());
}

#[tokio::test]
async fn test_update_profile_invalid_avatar_url() {
    let app = TestApp::new().await;
    app.create_confirmed_user("badurl@example.com", PASSWORD)
        .await;
    let token = app.signin("badurl@example.com", PASSWORD).await;

    let response = app
        .request(
            "PUT",
            "/api/profile",
            Some(serde_json::json!({
                "avatar_url": "not a url",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_requires_auth() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
