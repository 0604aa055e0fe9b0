use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use user_app::{app, auth::TokenService, database::MemoryUserStore, AppState};

pub const SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    pub tokens: TokenService,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Start the router on a free port backed by a fresh in-memory store
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let tokens = TokenService::new(SECRET, 1)?;
        // Lowest bcrypt cost keeps the suite fast
        let state = AppState::new(Arc::new(MemoryUserStore::new()), tokens.clone(), 4);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        Ok(Self {
            base_url,
            tokens,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a user and return the issued token
    pub async fn register(&self, id: i64, name: &str, email: &str, password: &str, dob: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/register"))
            .json(&json!({
                "id": id,
                "name": name,
                "email": email,
                "password": password,
                "dob": dob,
            }))
            .send()
            .await?;

        anyhow::ensure!(
            res.status() == StatusCode::CREATED,
            "register returned {}",
            res.status()
        );
        let body = res.json::<Value>().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("register response without token")
    }

    pub async fn get_authed(&self, path: &str, token: &str) -> Result<(StatusCode, Value)> {
        let res = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }
}
