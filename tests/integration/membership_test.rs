//! Integration tests for joining and leaving clubs.

use http::StatusCode;

use crate::helpers::TestApp;

const PASSWORD: &str = "purple-otter-balloon-42";

#[tokio::test]
async fn test_join_club() {
    let app = TestApp::new().await;
    app.create_confirmed_user("joiner@example.com", PASSWORD)
        .await;
    let token = app.signin("joiner@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("devclub-downtown").await;

    let response = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/membership"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["data"]["club_id"].as_str().unwrap(),
        club_id.to_string()
    );
}

#[tokio::test]
async fn test_membership_status_reflects_join() {
    let app = TestApp::new().await;
    app.create_confirmed_user("status@example.com", PASSWORD)
        .await;
    let token = app.signin("status@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("cloud-ai-society").await;
    let path = format!("/api/clubs/{club_id}/membership");

    let before = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(before.status, StatusCode::OK);
    assert_eq!(before.body["data"]["member"], false);

    app.request("POST", &path, None, Some(&token)).await;

    let after = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(after.body["data"]["member"], true);
    assert!(after.body["data"]["membership"]["id"].as_str().is_some());
}

#[tokio::test]
async fn test_double_join_conflict() {
    let app = TestApp::new().await;
    app.create_confirmed_user("twice@example.com", PASSWORD)
        .await;
    let token = app.signin("twice@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("devclub-downtown").await;
    let path = format!("/api/clubs/{club_id}/membership");

    let first = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Already a member of this club");
}

#[tokio::test]
async fn test_leave_club() {
    let app = TestApp::new().await;
    app.create_confirmed_user("leaver@example.com", PASSWORD)
        .await;
    let token = app.signin("leaver@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("gdsc-skyline-university").await;
    let status_path = format!("/api/clubs/{club_id}/membership");

    let joined = app.request("POST", &status_path, None, Some(&token)).await;
    let membership_id = joined.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/memberships/{membership_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = app.request("GET", &status_path, None, Some(&token)).await;
    assert_eq!(after.body["data"]["member"], false);
}

#[tokio::test]
async fn test_leave_twice_reports_not_found() {
    let app = TestApp::new().await;
    app.create_confirmed_user("repeat@example.com", PASSWORD)
        .await;
    let token = app.signin("repeat@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("devclub-downtown").await;

    let joined = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/membership"),
            None,
            Some(&token),
        )
        .await;
    let membership_id = joined.body["data"]["id"].as_str().unwrap().to_string();
    let leave_path = format!("/api/memberships/{membership_id}");

    let first = app.request("DELETE", &leave_path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    // Leaving is not silently idempotent; the row is gone.
    let second = app.request("DELETE", &leave_path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cannot_leave_someone_elses_membership() {
    let app = TestApp::new().await;
    app.create_confirmed_user("owner@example.com", PASSWORD)
        .await;
    app.create_confirmed_user("intruder@example.com", PASSWORD)
        .await;
    let owner_token = app.signin("owner@example.com", PASSWORD).await;
    let intruder_token = app.signin("intruder@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("cloud-ai-society").await;

    let joined = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/membership"),
            None,
            Some(&owner_token),
        )
        .await;
    let membership_id = joined.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/memberships/{membership_id}"),
            None,
            Some(&intruder_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_join_unknown_club_not_found() {
    let app = TestApp::new().await;
    app.create_confirmed_user("lost@example.com", PASSWORD)
        .await;
    let token = app.signin("lost@example.com", PASSWORD).await;

    let response = app
        .request(
            "POST",
            &format!("/api/clubs/{}/membership", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_membership_requires_auth() {
    let app = TestApp::new().await;
    let club_id = app.club_id_by_slug("devclub-downtown").await;

    let response = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/membership"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_member_count_on_club_page() {
    let app = TestApp::new().await;
    app.create_confirmed_user("counted@example.com", PASSWORD)
        .await;
    let token = app.signin("counted@example.com", PASSWORD).await;
    let club_id = app.club_id_by_slug("gdsc-skyline-university").await;

    app.request(
        "POST",
        &format!("/api/clubs/{club_id}/membership"),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/api/clubs/gdsc-skyline-university", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["member_count"], 1);
}
