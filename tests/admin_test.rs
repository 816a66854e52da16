//! Integration tests for the admin notification area.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{ADMIN_EMAIL, notification};

#[tokio::test]
async fn test_admin_routes_reject_non_admins() {
    let app = helpers::TestApp::new();
    let user = app.user_token("dev@x.com").await;
    let guest = app.guest_token("Bob").await;

    let as_user = app
        .request("GET", "/notifications/admin/all", None, Some(&user))
        .await;
    assert_eq!(as_user.status, StatusCode::FORBIDDEN);
    assert_eq!(as_user.body["message"], "Admin access required");

    let as_guest = app
        .request("GET", "/notifications/admin/check", None, Some(&guest))
        .await;
    assert_eq!(as_guest.status, StatusCode::FORBIDDEN);

    let anonymous = app
        .request(
            "POST",
            "/notifications/admin",
            Some(notification("x", "low")),
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_check() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;

    let response = app
        .request("GET", "/notifications/admin/check", None, Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAdmin"], true);
    assert_eq!(response.body["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn test_high_priority_lifecycle() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;
    let user = app.user_token("dev@x.com").await;

    let created = app
        .request(
            "POST",
            "/notifications/admin",
            Some(notification("Incident", "high")),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["createdBy"], ADMIN_EMAIL);
    assert_eq!(created.body["isActive"], true);
    let id = created.body["id"].as_i64().unwrap();

    let feed = app.feed(&user).await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["id"], id);
    assert_eq!(feed[0]["isRead"], false);
    assert_eq!(app.unread_count(&user).await, 1);

    app.request(
        "POST",
        "/notifications/mark-read",
        Some(json!({ "notificationIds": [id] })),
        Some(&user),
    )
    .await;
    let feed = app.feed(&user).await;
    assert_eq!(feed[0]["isRead"], true);
    assert_eq!(app.unread_count(&user).await, 0);

    app.request(
        "POST",
        &format!("/notifications/{id}/dismiss"),
        None,
        Some(&user),
    )
    .await;
    assert!(app.feed(&user).await.is_empty());
}

#[tokio::test]
async fn test_create_validation() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/notifications/admin",
            Some(json!({
                "title": "",
                "message": "body",
                "type": "update",
                "priority": "low",
                "actionUrl": "nope",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["title"].is_array());
    assert!(response.body["details"]["action_url"].is_array());
}

#[tokio::test]
async fn test_get_update_and_clear_expiry() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;
    let mut body = notification("Draft", "low");
    body["expiresAt"] = json!("2999-12-31T23:59:59Z");
    let id = app.create_notification(&admin, body).await;

    let updated = app
        .request(
            "PATCH",
            &format!("/notifications/admin/{id}"),
            Some(json!({ "title": "Final", "priority": "urgent", "expiresAt": "" })),
            Some(&admin),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.body["updatedBy"], ADMIN_EMAIL);
    assert_eq!(updated.body["title"], "Final");
    assert_eq!(updated.body["priority"], "urgent");
    assert!(updated.body["expiresAt"].is_null());

    let fetched = app
        .request(
            "GET",
            &format!("/notifications/admin/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "Final");
    assert_eq!(fetched.body["message"], "Draft body");

    let missing = app
        .request("GET", "/notifications/admin/4242", None, Some(&admin))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Notification not found");
}

#[tokio::test]
async fn test_deactivate_and_activate() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;
    let user = app.user_token("dev@x.com").await;
    let id = app
        .create_notification(&admin, notification("Toggle", "medium"))
        .await;

    let off = app
        .request(
            "PATCH",
            &format!("/notifications/admin/{id}/deactivate"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(off.status, StatusCode::OK);
    assert_eq!(off.body["isActive"], false);
    assert_eq!(off.body["deactivatedBy"], ADMIN_EMAIL);
    assert!(app.feed(&user).await.is_empty());

    let on = app
        .request(
            "PATCH",
            &format!("/notifications/admin/{id}/activate"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(on.status, StatusCode::OK);
    assert_eq!(on.body["isActive"], true);
    assert_eq!(on.body["activatedBy"], ADMIN_EMAIL);
    assert_eq!(app.feed(&user).await.len(), 1);
}

#[tokio::test]
async fn test_delete() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;
    let user = app.user_token("dev@x.com").await;
    let id = app
        .create_notification(&admin, notification("Gone", "medium"))
        .await;
    app.request(
        "POST",
        "/notifications/mark-read",
        Some(json!({ "notificationIds": [id] })),
        Some(&user),
    )
    .await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/notifications/admin/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["deletedBy"], ADMIN_EMAIL);
    assert!(deleted.body["deletedAt"].is_string());
    assert!(app.feed(&user).await.is_empty());

    let again = app
        .request(
            "DELETE",
            &format!("/notifications/admin/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_all_and_stats() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;
    app.create_notification(&admin, notification("one", "high"))
        .await;
    let two = app
        .create_notification(&admin, notification("two", "low"))
        .await;
    app.request(
        "PATCH",
        &format!("/notifications/admin/{two}/deactivate"),
        None,
        Some(&admin),
    )
    .await;

    let all = app
        .request("GET", "/notifications/admin/all", None, Some(&admin))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let stats = app
        .request("GET", "/notifications/admin/stats", None, Some(&admin))
        .await;
    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(stats.body["total"], 2);
    assert_eq!(stats.body["active"], 1);
    assert_eq!(stats.body["inactive"], 1);
    assert_eq!(stats.body["byType"]["announcement"], 2);
    assert_eq!(stats.body["byPriority"]["high"], 1);
    assert_eq!(stats.body["byPriority"]["low"], 1);
    assert_eq!(stats.body["recent"], 2);
}

#[tokio::test]
async fn test_broadcast() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token().await;
    let user = app.user_token("dev@x.com").await;

    let response = app
        .request(
            "POST",
            "/notifications/admin/broadcast",
            Some(notification("Heads up", "urgent")),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["broadcastBy"], ADMIN_EMAIL);
    assert!(response.body["broadcastAt"].is_string());
    assert_eq!(titles_of(&app.feed(&user).await), vec!["Heads up"]);
}

fn titles_of(feed: &[serde_json::Value]) -> Vec<&str> {
    feed.iter().map(|n| n["title"].as_str().unwrap()).collect()
}
