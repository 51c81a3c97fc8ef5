//! End-to-end tests: the client against a live in-process server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use async_trait::async_trait;
use globetrotter_api::config::ServerConfig;
use globetrotter_api::router::build_app_router;
use globetrotter_api::state::AppState;
use globetrotter_client::api::ApiClient;
use globetrotter_client::error::ClientError;
use globetrotter_client::session::GameSession;
use globetrotter_client::share::{ShareCard, ShareCardRenderer, ShareImage, ShareLauncher};
use globetrotter_core::challenge::{Challenge, NewChallenge};
use globetrotter_core::destination::{Destination, NewDestination};
use globetrotter_core::game::{Outcome, Phase};
use globetrotter_core::types::DbId;
use globetrotter_db::{MemoryStore, OfflineStore, QuizStore, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Url;

const CITIES: [(&str, &str); 5] = [
    ("Paris", "France"),
    ("Tokyo", "Japan"),
    ("Cairo", "Egypt"),
    ("Lima", "Peru"),
    ("Oslo", "Norway"),
];

fn destination(city: &str, country: &str) -> NewDestination {
    NewDestination {
        city: city.to_string(),
        country: country.to_string(),
        clues: vec![format!("{city} clue")],
        fun_fact: vec![format!("{city} fun fact")],
        trivia: vec![format!("{city} trivia")],
    }
}

fn seeded_store() -> Arc<dyn QuizStore> {
    Arc::new(
        MemoryStore::with_destinations(CITIES.iter().map(|(c, n)| destination(c, n)).collect())
            .expect("seed cities are distinct"),
    )
}

/// Seeded store whose destination reads fail while `down` is set.
struct FlakyStore {
    inner: MemoryStore,
    down: AtomicBool,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::with_destinations(
                CITIES.iter().map(|(c, n)| destination(c, n)).collect(),
            )
            .expect("seed cities are distinct"),
            down: AtomicBool::new(false),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuizStore for FlakyStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        self.check()?;
        self.inner.count_destinations().await
    }

    async fn destination_at(&self, offset: i64) -> Result<Option<Destination>, StoreError> {
        self.check()?;
        self.inner.destination_at(offset).await
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        self.check()?;
        self.inner.list_destinations().await
    }

    async fn insert_destinations(&self, batch: &[NewDestination]) -> Result<u64, StoreError> {
        self.inner.insert_destinations(batch).await
    }

    async fn invite_link_exists(&self, invite_link: &str) -> Result<bool, StoreError> {
        self.inner.invite_link_exists(invite_link).await
    }

    async fn create_challenge(&self, input: &NewChallenge) -> Result<Challenge, StoreError> {
        self.inner.create_challenge(input).await
    }

    async fn find_challenge(&self, id: DbId) -> Result<Option<Challenge>, StoreError> {
        self.inner.find_challenge(id).await
    }
}

/// Serve the full router on an ephemeral port and return its base URL.
async fn spawn_server(store: Arc<dyn QuizStore>) -> String {
    let config = ServerConfig::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "INVITE_BASE_URL" => Some("http://quiz.test/challenge".to_string()),
        _ => None,
    });
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn api_client(base_url: &str) -> ApiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiClient::with_client(http, base_url)
}

#[derive(Default, Clone)]
struct Recorder {
    cards: Arc<Mutex<Vec<ShareCard>>>,
    urls: Arc<Mutex<Vec<Url>>>,
}

impl ShareCardRenderer for Recorder {
    fn render(&self, card: &ShareCard) -> Result<ShareImage, ClientError> {
        self.cards.lock().unwrap().push(card.clone());
        Ok(ShareImage {
            mime_type: "text/plain",
            bytes: card.username.clone().into_bytes(),
        })
    }
}

impl ShareLauncher for Recorder {
    fn open(&self, url: &Url) -> Result<(), ClientError> {
        self.urls.lock().unwrap().push(url.clone());
        Ok(())
    }
}

struct FailingRenderer;

impl ShareCardRenderer for FailingRenderer {
    fn render(&self, _card: &ShareCard) -> Result<ShareImage, ClientError> {
        Err(ClientError::Render("canvas unavailable".into()))
    }
}

struct FailingLauncher;

impl ShareLauncher for FailingLauncher {
    fn open(&self, _url: &Url) -> Result<(), ClientError> {
        Err(ClientError::Launch("no handler for wa.me".into()))
    }
}

fn recorded_session(base_url: &str, recorder: &Recorder) -> GameSession {
    GameSession::with_collaborators(
        api_client(base_url),
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .with_rng(StdRng::seed_from_u64(11))
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_client_reads_destinations() {
    let base = spawn_server(seeded_store()).await;
    let api = api_client(&base);

    let all = api.all_destinations().await.unwrap();
    assert_eq!(all.len(), 5);

    let random = api.random_destination().await.unwrap();
    assert!(all.contains(&random));
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let base = spawn_server(Arc::new(MemoryStore::new())).await;
    let err = api_client(&base).random_destination().await.unwrap_err();

    assert_matches!(
        err,
        ClientError::Api { status: 404, ref message } if message == "No destinations found"
    );
}

#[tokio::test]
async fn created_challenge_can_be_fetched() {
    let base = spawn_server(seeded_store()).await;
    let api = api_client(&base);

    let created = api.create_challenge("alice", 4).await.unwrap();
    assert!(created.invite_link.starts_with("http://quiz.test/challenge/"));

    let fetched = api.get_challenge(&created.id.to_string()).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_challenge_is_api_404() {
    let base = spawn_server(seeded_store()).await;
    let err = api_client(&base).get_challenge("nope").await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, .. });
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let err = api_client("http://127.0.0.1:1")
        .all_destinations()
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Http(_));
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_loads_pool_and_first_round() {
    let base = spawn_server(seeded_store()).await;
    let mut session = recorded_session(&base, &Recorder::default());

    session.start().await.unwrap();

    let state = session.state();
    assert_eq!(state.pool.len(), 5);
    assert!(state.can_answer());

    let city = state.destination().unwrap().city.clone();
    let options = state.options();
    assert_eq!(options.len(), 4);
    assert!(options.contains(&city));
}

#[tokio::test]
async fn start_fails_when_collection_is_empty() {
    let base = spawn_server(Arc::new(MemoryStore::new())).await;
    let mut session = recorded_session(&base, &Recorder::default());

    let err = session.start().await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, .. });
    assert_eq!(session.state().phase, Phase::Loading);
}

#[tokio::test]
async fn start_with_store_down_stays_loading() {
    let base = spawn_server(Arc::new(OfflineStore::new("down"))).await;
    let mut session = recorded_session(&base, &Recorder::default());

    let err = session.start().await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 500, .. });
    assert!(session.state().pool.is_empty());
}

#[tokio::test]
async fn correct_answer_scores_and_next_round_loads() {
    let base = spawn_server(seeded_store()).await;
    let mut session = recorded_session(&base, &Recorder::default());
    session.start().await.unwrap();

    let city = session.state().destination().unwrap().city.clone();
    session.answer(city.clone());

    let feedback = session.state().feedback().unwrap();
    assert_eq!(feedback.outcome, Outcome::Correct);
    assert_eq!(feedback.correct_city, city);
    assert_eq!(feedback.fun_fact, Some(format!("{city} fun fact").as_str()));
    assert_eq!(session.state().score, 1);

    session.next_round().await.unwrap();
    assert!(session.state().can_answer());
    assert_eq!(session.state().score, 1);
    assert_eq!(session.state().pool.len(), 5);
}

#[tokio::test]
async fn wrong_answer_keeps_score() {
    let base = spawn_server(seeded_store()).await;
    let mut session = recorded_session(&base, &Recorder::default());
    session.start().await.unwrap();

    session.answer("Atlantis");
    assert_eq!(
        session.state().feedback().unwrap().outcome,
        Outcome::Incorrect
    );
    assert_eq!(session.state().score, 0);
}

#[tokio::test]
async fn next_round_before_answering_is_ignored() {
    let base = spawn_server(seeded_store()).await;
    let mut session = recorded_session(&base, &Recorder::default());
    session.start().await.unwrap();

    let before = session.state().clone();
    session.next_round().await.unwrap();
    assert_eq!(session.state(), &before);
}

#[tokio::test]
async fn challenge_requires_username() {
    let base = spawn_server(seeded_store()).await;
    let recorder = Recorder::default();
    let mut session = recorded_session(&base, &recorder);
    session.start().await.unwrap();

    let err = session.challenge_friend().await.unwrap_err();
    assert_matches!(err, ClientError::MissingUsername);
    assert!(recorder.urls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn challenge_renders_card_and_opens_whatsapp() {
    let base = spawn_server(seeded_store()).await;
    let recorder = Recorder::default();
    let mut session = recorded_session(&base, &recorder);
    session.start().await.unwrap();

    let city = session.state().destination().unwrap().city.clone();
    session.answer(city);
    session.set_username("alice");

    let share = session.challenge_friend().await.unwrap();
    assert_eq!(share.challenge.inviter_username, "alice");
    assert_eq!(share.challenge.inviter_score, 1);

    let cards = recorder.cards.lock().unwrap().clone();
    assert_eq!(
        cards,
        vec![ShareCard {
            username: "alice".into(),
            score: 1,
            invite_link: share.challenge.invite_link.clone(),
        }]
    );

    let urls = recorder.urls.lock().unwrap().clone();
    assert_eq!(urls, vec![share.share_url.clone()]);
    assert_eq!(share.share_url.host_str(), Some("wa.me"));
    let text = share
        .share_url
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert_eq!(
        text,
        format!(
            "Hey! I scored 1 in Globetrotter. Can you beat me? Play now: {}",
            share.challenge.invite_link
        )
    );

    let fetched = session
        .api()
        .get_challenge(&share.challenge.id.to_string())
        .await
        .unwrap();
    assert_eq!(fetched, share.challenge);
}

#[tokio::test]
async fn failed_next_round_keeps_feedback_and_can_be_retried() {
    let store = Arc::new(FlakyStore::new());
    let base = spawn_server(store.clone()).await;
    let mut session = recorded_session(&base, &Recorder::default());
    session.start().await.unwrap();

    let city = session.state().destination().unwrap().city.clone();
    session.answer(city.clone());

    store.down.store(true, Ordering::SeqCst);
    let err = session.next_round().await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 500, .. });

    let feedback = session.state().feedback().unwrap();
    assert_eq!(feedback.outcome, Outcome::Correct);
    assert_eq!(feedback.correct_city, city);
    assert_eq!(session.state().score, 1);

    store.down.store(false, Ordering::SeqCst);
    session.next_round().await.unwrap();
    assert!(session.state().can_answer());
    assert_eq!(session.state().score, 1);
}

#[tokio::test]
async fn render_failure_is_reported_and_nothing_is_launched() {
    let base = spawn_server(seeded_store()).await;
    let recorder = Recorder::default();
    let mut session = GameSession::with_collaborators(
        api_client(&base),
        Box::new(FailingRenderer),
        Box::new(recorder.clone()),
    );
    session.set_username("alice");

    let err = session.challenge_friend().await.unwrap_err();
    assert_matches!(err, ClientError::Render(_));
    assert!(recorder.urls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn launch_failure_is_reported() {
    let base = spawn_server(seeded_store()).await;
    let recorder = Recorder::default();
    let mut session = GameSession::with_collaborators(
        api_client(&base),
        Box::new(recorder.clone()),
        Box::new(FailingLauncher),
    );
    session.set_username("alice");

    let err = session.challenge_friend().await.unwrap_err();
    assert_matches!(err, ClientError::Launch(ref reason) if reason == "no handler for wa.me");
    assert_eq!(recorder.cards.lock().unwrap().len(), 1);
}
