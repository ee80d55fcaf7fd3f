use std::sync::Arc;

use auth::TokenService;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_TTL_SECONDS: i64 = 3600;

/// Test application that spawns a real server backed by the in-memory
/// repository, so the endpoint contract tests need no database.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Token service sharing the server's signing secret, for crafting
    /// and inspecting tokens in tests.
    pub token_service: TokenService,
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

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let auth_service = Arc::new(AuthService::new(user_repository));
        let token_service = Arc::new(TokenService::new(TEST_SECRET));

        let router = create_router(auth_service, token_service, TEST_TTL_SECONDS);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TEST_SECRET),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register a user, asserting success.
    pub async fn register(&self, username: &str, password: &str, full_name: &str) {
        let response = self
            .post("/api/users")
            .json(&json!({
                "username": username,
                "password": password,
                "full_name": full_name
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log in and return the issued token, asserting success.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["authToken"]
            .as_str()
            .expect("Login response missing authToken")
            .to_string()
    }
}
