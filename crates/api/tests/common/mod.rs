#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use globetrotter_core::challenge::{Challenge, NewChallenge};
use globetrotter_core::destination::{Destination, NewDestination};
use globetrotter_core::types::DbId;
use globetrotter_db::{MemoryStore, QuizStore, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use globetrotter_api::config::ServerConfig;
use globetrotter_api::router::build_app_router;
use globetrotter_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        "STORE_BACKEND" => Some("memory".to_string()),
        "INVITE_BASE_URL" => Some("http://quiz.test/challenge".to_string()),
        _ => None,
    })
}

/// Build the full application router (same middleware stack as production)
/// over the given store.
pub fn build_test_app(store: Arc<dyn QuizStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn destination(city: &str, country: &str) -> NewDestination {
    NewDestination {
        city: city.to_string(),
        country: country.to_string(),
        clues: vec![format!("{city} clue one"), format!("{city} clue two")],
        fun_fact: vec![format!("{city} fun fact")],
        trivia: vec![format!("{city} trivia")],
    }
}

/// The five-city collection used across the suites.
pub fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_destinations(vec![
        destination("Paris", "France"),
        destination("Tokyo", "Japan"),
        destination("Cairo", "Egypt"),
        destination("Lima", "Peru"),
        destination("Oslo", "Norway"),
    ])
    .expect("seed cities are distinct"))
}

/// Store whose every call fails with an unexpected backend error.
pub struct BrokenStore;

impl BrokenStore {
    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::Internal("relation \"destinations\" does not exist".into()))
    }
}

#[async_trait]
impl QuizStore for BrokenStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Self::fail()
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        Self::fail()
    }

    async fn destination_at(&self, _offset: i64) -> Result<Option<Destination>, StoreError> {
        Self::fail()
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        Self::fail()
    }

    async fn insert_destinations(&self, _batch: &[NewDestination]) -> Result<u64, StoreError> {
        Self::fail()
    }

    async fn invite_link_exists(&self, _invite_link: &str) -> Result<bool, StoreError> {
        Self::fail()
    }

    async fn create_challenge(&self, _input: &NewChallenge) -> Result<Challenge, StoreError> {
        Self::fail()
    }

    async fn find_challenge(&self, _id: DbId) -> Result<Option<Challenge>, StoreError> {
        Self::fail()
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
