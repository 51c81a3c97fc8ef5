//! Drives a [`GameState`] from user actions and API results.

use globetrotter_core::challenge::Challenge;
use globetrotter_core::game::{GameEvent, GameState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Url;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::share::{
    share_message, whatsapp_share_url, PrintLauncher, ShareCard, ShareCardRenderer, ShareImage,
    ShareLauncher, SvgCardRenderer,
};

/// Everything produced by a successful "Challenge a Friend".
#[derive(Debug, Clone)]
pub struct ChallengeShare {
    pub challenge: Challenge,
    pub image: ShareImage,
    pub share_url: Url,
}

/// One player's game against the service.
pub struct GameSession {
    api: ApiClient,
    state: GameState,
    rng: StdRng,
    renderer: Box<dyn ShareCardRenderer>,
    launcher: Box<dyn ShareLauncher>,
}

impl GameSession {
    /// A session that renders SVG cards and prints share links.
    pub fn new(api: ApiClient) -> Self {
        Self::with_collaborators(api, Box::new(SvgCardRenderer), Box::new(PrintLauncher))
    }

    pub fn with_collaborators(
        api: ApiClient,
        renderer: Box<dyn ShareCardRenderer>,
        launcher: Box<dyn ShareLauncher>,
    ) -> Self {
        Self {
            api,
            state: GameState::new(),
            rng: StdRng::from_os_rng(),
            renderer,
            launcher,
        }
    }

    /// Replace the RNG, for reproducible option order.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch the distractor pool and the first destination concurrently.
    ///
    /// A failed pool fetch is only logged; the round still starts with the
    /// correct answer as its sole option. A failed destination fetch leaves
    /// the session loading and is returned to the caller.
    pub async fn start(&mut self) -> Result<(), ClientError> {
        let (pool, first) = tokio::join!(
            self.api.all_destinations(),
            self.api.random_destination()
        );

        match pool {
            Ok(pool) => {
                tracing::debug!(count = pool.len(), "Loaded destination pool");
                self.dispatch(GameEvent::PoolLoaded(pool));
            }
            Err(e) => tracing::error!(error = %e, "Error fetching all destinations"),
        }

        let destination = first.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching random destination");
        })?;
        self.dispatch(GameEvent::DestinationLoaded(destination));
        Ok(())
    }

    /// Submit an answer. Ignored unless a round is open.
    pub fn answer(&mut self, selected: impl Into<String>) {
        self.dispatch(GameEvent::AnswerSelected(selected.into()));
    }

    /// Move past the current feedback and load a new destination.
    ///
    /// Does nothing until the current round has been answered. The round and
    /// its feedback stay in place until the fetch succeeds, so a failed call
    /// can simply be repeated.
    pub async fn next_round(&mut self) -> Result<(), ClientError> {
        if self.state.feedback().is_none() {
            return Ok(());
        }

        let destination = self.api.random_destination().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching random destination");
        })?;
        self.dispatch(GameEvent::NextRequested);
        self.dispatch(GameEvent::DestinationLoaded(destination));
        Ok(())
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.dispatch(GameEvent::UsernameChanged(username.into()));
    }

    /// Register a challenge for the current score, render the card and hand
    /// the WhatsApp link to the launcher.
    pub async fn challenge_friend(&mut self) -> Result<ChallengeShare, ClientError> {
        if !self.state.can_challenge() {
            return Err(ClientError::MissingUsername);
        }

        let score = self.state.score;
        let inviter_score = i32::try_from(score).unwrap_or(i32::MAX);
        let challenge = self
            .api
            .create_challenge(&self.state.username, inviter_score)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error creating challenge"))?;

        let card = ShareCard {
            username: challenge.inviter_username.clone(),
            score,
            invite_link: challenge.invite_link.clone(),
        };
        let image = self.renderer.render(&card)?;

        let share_url = whatsapp_share_url(&share_message(score, &challenge.invite_link))?;
        self.launcher.open(&share_url)?;

        tracing::info!(
            challenge_id = %challenge.id,
            invite_link = %challenge.invite_link,
            "Challenge shared"
        );

        Ok(ChallengeShare {
            challenge,
            image,
            share_url,
        })
    }

    fn dispatch(&mut self, event: GameEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event, &mut self.rng);
    }
}
