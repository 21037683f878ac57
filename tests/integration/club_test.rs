//! Integration tests for the club directory.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_clubs_ordered_by_name() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/clubs", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let clubs = response.body["data"].as_array().expect("Expected array");

    let names: Vec<&str> = clubs
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Cloud & AI Society",
            "DevClub Downtown",
            "GDSC Skyline University",
        ]
    );
}

#[tokio::test]
async fn test_list_clubs_filter_matches_name_and_tags() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/clubs?q=AI", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let clubs = response.body["data"].as_array().expect("Expected array");

    // "AI" hits Cloud & AI Society by name and GDSC by tag.
    let names: Vec<&str> = clubs
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cloud & AI Society", "GDSC Skyline University"]);
}

#[tokio::test]
async fn test_list_clubs_blank_filter_returns_all() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/clubs?q=%20%20", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_clubs_filter_no_match_is_empty() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/clubs?q=underwater-basket-weaving", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_club_by_slug() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/clubs/devclub-downtown", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["found"], true);
    assert_eq!(response.body["data"]["club"]["name"], "DevClub Downtown");
    assert_eq!(response.body["data"]["member_count"], 0);
}

#[tokio::test]
async fn test_get_club_unknown_slug_is_renderable_absence() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/clubs/no-such-club", None, None)
        .await;

    // The page exists; its club does not. 200 with found: false.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["found"], false);
    assert!(response.body["data"].get("club").is_none());
}

#[tokio::test]
async fn test_create_club_not_implemented() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clubs",
            Some(serde_json::json!({"name": "New Club"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(response.body["error"], "NOT_IMPLEMENTED");
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
