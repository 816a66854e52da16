//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use devboard_api::{AppState, build_app};
use devboard_core::config::{AppConfig, DatabaseProvider};
use devboard_database::Database;

/// Email on the admin allow-list.
pub const ADMIN_EMAIL: &str = "admin@devboard.test";

/// Test application context backed by the in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with fresh, empty stores.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.admin_emails = vec![ADMIN_EMAIL.to_string()];

        let state = AppState::new(config.clone(), Database::in_memory());
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Make a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Make a request with a literal body.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register a user and return the response.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/auth/register",
            Some(json!({
                "name": name,
                "email": email,
                "password": password,
                "birthDate": "1990-05-17",
                "role": "backend",
            })),
            None,
        )
        .await
    }

    /// Register a user and return its access token.
    pub async fn user_token(&self, email: &str) -> String {
        let response = self.register("Test User", email, "secret1").await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        token_of(&response)
    }

    /// Register the allow-listed admin and return its access token.
    pub async fn admin_token(&self) -> String {
        self.user_token(ADMIN_EMAIL).await
    }

    /// Start a guest session and return its access token.
    pub async fn guest_token(&self, name: &str) -> String {
        let response = self
            .request("POST", "/auth/guest", Some(json!({ "name": name })), None)
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        token_of(&response)
    }

    /// Create a notification as admin and return its id.
    pub async fn create_notification(&self, admin_token: &str, body: Value) -> i64 {
        let response = self
            .request("POST", "/notifications/admin", Some(body), Some(admin_token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().expect("notification id")
    }

    /// The caller's feed.
    pub async fn feed(&self, token: &str) -> Vec<Value> {
        let response = self.request("GET", "/notifications", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body.as_array().cloned().expect("feed array")
    }

    /// The caller's unread count.
    pub async fn unread_count(&self, token: &str) -> i64 {
        let response = self
            .request("GET", "/notifications/unread-count", None, Some(token))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["count"].as_i64().expect("count")
    }
}

/// A notification body with the given title and priority.
pub fn notification(title: &str, priority: &str) -> Value {
    json!({
        "title": title,
        "message": format!("{title} body"),
        "type": "announcement",
        "priority": priority,
    })
}

fn token_of(response: &TestResponse) -> String {
    response.body["access_token"]
        .as_str()
        .expect("access_token")
        .to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}
