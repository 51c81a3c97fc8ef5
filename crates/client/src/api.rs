//! Typed HTTP client for the four quiz endpoints.

use globetrotter_core::challenge::{Challenge, CreateChallenge};
use globetrotter_core::destination::Destination;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// Error body produced by the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest` client (proxies, timeouts).
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/destinations/random
    pub async fn random_destination(&self) -> Result<Destination, ClientError> {
        self.get_json("/api/destinations/random").await
    }

    /// GET /api/destinations/all
    pub async fn all_destinations(&self) -> Result<Vec<Destination>, ClientError> {
        self.get_json("/api/destinations/all").await
    }

    /// POST /api/challenges/create
    pub async fn create_challenge(
        &self,
        inviter_username: &str,
        inviter_score: i32,
    ) -> Result<Challenge, ClientError> {
        let body = CreateChallenge {
            inviter_username: inviter_username.to_string(),
            inviter_score,
        };
        let response = self
            .http
            .post(self.url("/api/challenges/create"))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    /// GET /api/challenges/{id}
    pub async fn get_challenge(&self, id: &str) -> Result<Challenge, ClientError> {
        self.get_json(&format!("/api/challenges/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Decode a success body, or turn an error status into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
