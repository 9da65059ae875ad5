#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use auth::HashingParams;
use auth::PasswordHasher;
use auth::SigningKey;
use auth::TokenService;
use item_service::domain::item::service::ItemService;
use item_service::domain::user::service::UserService;
use item_service::inbound::http::router::create_router;
use item_service::outbound::repositories::InMemoryItemRepository;
use item_service::outbound::repositories::InMemoryUserRepository;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "very-strong-pass";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub tokens: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let signing_key = SigningKey::from_secret(TEST_SECRET).expect("Invalid test secret");

        // Cheap parameters keep the suite fast
        let hasher = PasswordHasher::with_params(HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Invalid hashing parameters");
        let authenticator = Arc::new(Authenticator::with_hasher(&signing_key, hasher));

        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::clone(&authenticator),
            chrono::Duration::hours(12),
        ));
        let item_service = Arc::new(ItemService::new(Arc::new(InMemoryItemRepository::new())));

        let router = create_router(user_service, item_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            tokens: TokenService::new(&signing_key),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.patch(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register an account and return the response
    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/register")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register an account with [`TEST_PASSWORD`] and return its access token
    pub async fn signed_in(&self, email: &str) -> String {
        let response = self.register(email, TEST_PASSWORD).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = self.login(email, TEST_PASSWORD).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["accessToken"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}
