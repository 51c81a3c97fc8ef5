//! Round state machine for the quiz client.
//!
//! A round moves `Loading -> Answering -> Answered -> Loading`. All state
//! lives in [`GameState`] and changes only through [`GameState::apply`], one
//! call per user action or network result.

use rand::Rng;

use crate::destination::Destination;
use crate::options::generate_options;

/// Result of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Where the current round stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a random destination.
    Loading,
    /// Options are shown and selection is open.
    Answering {
        destination: Destination,
        options: Vec<String>,
    },
    /// Selection is locked and feedback is visible.
    Answered {
        destination: Destination,
        options: Vec<String>,
        selected: String,
        outcome: Outcome,
    },
}

/// Inputs that drive the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The full destination list arrived.
    PoolLoaded(Vec<Destination>),
    /// A random destination arrived; starts a new round.
    DestinationLoaded(Destination),
    /// The player picked an option.
    AnswerSelected(String),
    /// The player asked for the next destination.
    NextRequested,
    UsernameChanged(String),
}

/// What the player sees after answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub outcome: Outcome,
    pub selected: &'a str,
    pub correct_city: &'a str,
    pub fun_fact: Option<&'a str>,
    pub trivia: Option<&'a str>,
}

impl Feedback<'_> {
    pub fn message(&self) -> &'static str {
        match self.outcome {
            Outcome::Correct => "🎉 Correct!",
            Outcome::Incorrect => "😢 Incorrect!",
        }
    }
}

/// Complete client-side game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Every destination, used only as the distractor pool.
    pub pool: Vec<Destination>,
    pub phase: Phase,
    pub score: u32,
    pub username: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            phase: Phase::Loading,
            score: 0,
            username: String::new(),
        }
    }

    /// Apply one event and return the next state.
    ///
    /// Events that make no sense in the current phase (answering twice,
    /// "next" before answering) leave the state untouched. A destination
    /// arriving in any phase starts a fresh round, so a late response simply
    /// wins over an earlier one.
    pub fn apply<R: Rng + ?Sized>(mut self, event: GameEvent, rng: &mut R) -> Self {
        match event {
            GameEvent::PoolLoaded(pool) => {
                self.pool = pool;
                // The round may have started before the pool arrived; give it
                // a proper set of distractors now.
                if let Phase::Answering {
                    destination,
                    options,
                } = &mut self.phase
                {
                    *options = generate_options(&destination.city, &self.pool, rng);
                }
            }
            GameEvent::DestinationLoaded(destination) => {
                let options = generate_options(&destination.city, &self.pool, rng);
                self.phase = Phase::Answering {
                    destination,
                    options,
                };
            }
            GameEvent::AnswerSelected(selected) => {
                self.phase = match self.phase {
                    Phase::Answering {
                        destination,
                        options,
                    } => {
                        let outcome = if selected == destination.city {
                            self.score += 1;
                            Outcome::Correct
                        } else {
                            Outcome::Incorrect
                        };
                        Phase::Answered {
                            destination,
                            options,
                            selected,
                            outcome,
                        }
                    }
                    other => other,
                };
            }
            GameEvent::NextRequested => {
                if matches!(self.phase, Phase::Answered { .. }) {
                    self.phase = Phase::Loading;
                }
            }
            GameEvent::UsernameChanged(username) => {
                self.username = username;
            }
        }
        self
    }

    /// The destination of the current round, if one is loaded.
    pub fn destination(&self) -> Option<&Destination> {
        match &self.phase {
            Phase::Loading => None,
            Phase::Answering { destination, .. } | Phase::Answered { destination, .. } => {
                Some(destination)
            }
        }
    }

    pub fn options(&self) -> &[String] {
        match &self.phase {
            Phase::Loading => &[],
            Phase::Answering { options, .. } | Phase::Answered { options, .. } => options,
        }
    }

    /// Selection is locked outside of [`Phase::Answering`].
    pub fn can_answer(&self) -> bool {
        matches!(self.phase, Phase::Answering { .. })
    }

    pub fn feedback(&self) -> Option<Feedback<'_>> {
        match &self.phase {
            Phase::Answered {
                destination,
                selected,
                outcome,
                ..
            } => Some(Feedback {
                outcome: *outcome,
                selected,
                correct_city: &destination.city,
                fun_fact: destination.first_fun_fact(),
                trivia: destination.first_trivia(),
            }),
            _ => None,
        }
    }

    /// Challenging a friend only needs a username; round state is irrelevant.
    pub fn can_challenge(&self) -> bool {
        !self.username.is_empty()
    }
}
