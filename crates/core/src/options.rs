//! Multiple-choice option generation.
//!
//! The correct city is mixed with up to [`DISTRACTOR_COUNT`] other cities
//! drawn from the full destination pool. Distractors are sampled with a
//! single reservoir pass, so the cost stays linear in the pool size with no
//! full shuffle of the pool.

use std::collections::HashSet;

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::destination::{answer_key, Destination};

/// Number of incorrect options shown alongside the correct answer.
pub const DISTRACTOR_COUNT: usize = 3;

/// Build the option list for a round.
///
/// Cities equal to `correct_city` under [`answer_key`] normalization are
/// never used as distractors, and a city appears at most once. When the pool
/// has fewer than [`DISTRACTOR_COUNT`] eligible cities the result is simply
/// shorter.
pub fn generate_options<R: Rng + ?Sized>(
    correct_city: &str,
    pool: &[Destination],
    rng: &mut R,
) -> Vec<String> {
    let correct_key = answer_key(correct_city);
    let mut seen: HashSet<String> = HashSet::new();

    let eligible = pool.iter().filter(|dest| {
        let key = dest.answer_key();
        key != correct_key && seen.insert(key)
    });

    let mut options: Vec<String> = eligible
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .into_iter()
        .map(|dest| dest.city.clone())
        .collect();

    options.push(correct_city.to_string());
    options.shuffle(rng);
    options
}
