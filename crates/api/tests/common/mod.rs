//! Shared helpers for HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use pocketbook_api::{AppState, Settings, Stores, create_router};
use pocketbook_core::InMemoryStore;
use pocketbook_shared::{JwtConfig, JwtService};

pub const PASSWORD: &str = "correct-horse-battery";

/// A router over a fresh in-memory store.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
}

/// Response parts the tests look at.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// A registered, logged-in user.
pub struct LoggedIn {
    pub user_id: String,
    pub email: String,
    pub token: String,
    pub cookie: String,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let jwt = Arc::new(JwtService::new(JwtConfig {
            secret: "test-secret-key-for-http-tests".to_string(),
            session_expires_secs: 3600,
        }));
        let state = AppState::new(Stores::in_memory(&store), jwt, Settings::default());
        let router = create_router(state.clone());

        Self {
            router,
            state,
            store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: &Value) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn register(&self, username: &str, email: &str) -> TestResponse {
        self.post_json(
            "/register",
            None,
            &json!({
                "username": username,
                "email": email,
                "password": PASSWORD,
                "confirm_password": PASSWORD,
                "university": "State University",
                "monthly_income": "1200.00",
            }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post_json("/login", None, &json!({"email": email, "password": password}))
            .await
    }

    /// Registers a user with a random email and logs them in.
    pub async fn logged_in(&self, username: &str) -> LoggedIn {
        let email = format!("{username}.{}", SafeEmail().fake::<String>());
        let registered = self.register(username, &email).await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.body);

        let login = self.login(&email, PASSWORD).await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.body);

        LoggedIn {
            user_id: registered.body["user_id"].as_str().unwrap().to_string(),
            email,
            token: login.body["token"].as_str().unwrap().to_string(),
            cookie: session_cookie(&login.headers).unwrap(),
        }
    }

    pub async fn add_transaction(&self, token: &str, body: &Value) -> String {
        let response = self.post_json("/api/transactions", Some(token), body).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["id"].as_str().unwrap().to_string()
    }
}

/// The `name=value` pair of the session cookie from a Set-Cookie header.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("pocketbook_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
