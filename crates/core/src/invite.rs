//! Invite token and link generation for challenges.

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the random token embedded in each invite link.
pub const INVITE_TOKEN_LENGTH: usize = 8;

/// Tokens are lowercase base-36.
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How many fresh tokens to try before giving up on a unique link.
pub const MAX_INVITE_LINK_ATTEMPTS: usize = 5;

/// Default base URL for invite links when none is configured.
pub const DEFAULT_INVITE_BASE_URL: &str = "http://localhost:3000/challenge";

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate an invite token from the thread-local RNG.
pub fn generate_invite_token() -> String {
    generate_invite_token_with(&mut rand::rng())
}

/// Generate an invite token from the given RNG.
pub fn generate_invite_token_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..INVITE_TOKEN_LENGTH)
        .map(|_| char::from(TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())]))
        .collect()
}

/// Compose `{base_url}/{token}`, tolerating a trailing slash on the base.
///
/// ```
/// use globetrotter_core::invite::invite_link;
///
/// assert_eq!(
///     invite_link("http://localhost:3000/challenge/", "k3x9a0pq"),
///     "http://localhost:3000/challenge/k3x9a0pq"
/// );
/// ```
pub fn invite_link(base_url: &str, token: &str) -> String {
    format!("{}/{token}", base_url.trim_end_matches('/'))
}
