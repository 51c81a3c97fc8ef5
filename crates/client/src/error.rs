/// Anything that can go wrong on the client side of a user action.
///
/// None of these are retried; the caller shows an alert and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or an undecodable response body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Please enter your username before challenging a friend.")]
    MissingUsername,

    #[error("Failed to render share card: {0}")]
    Render(String),

    #[error("Failed to open share link: {0}")]
    Launch(String),
}
