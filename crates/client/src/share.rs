//! Share card rendering and the outbound share link.
//!
//! Producing the card image is delegated to a [`ShareCardRenderer`]; opening
//! the link to a [`ShareLauncher`]. Both are fire-and-forget from the game's
//! point of view.

use reqwest::Url;

use crate::error::ClientError;

/// Base of the WhatsApp "click to chat" deep link.
pub const WHATSAPP_SHARE_BASE: &str = "https://wa.me/";

/// What goes on the share card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub username: String,
    pub score: u32,
    pub invite_link: String,
}

/// A rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Turns a [`ShareCard`] into an image asset.
pub trait ShareCardRenderer: Send + Sync {
    fn render(&self, card: &ShareCard) -> Result<ShareImage, ClientError>;
}

/// Hands a URL to whatever opens it (browser, messaging app, terminal).
pub trait ShareLauncher: Send + Sync {
    fn open(&self, url: &Url) -> Result<(), ClientError>;
}

/// The invitation text sent along with the link.
pub fn share_message(score: u32, invite_link: &str) -> String {
    format!("Hey! I scored {score} in Globetrotter. Can you beat me? Play now: {invite_link}")
}

/// `https://wa.me/?text=...` with the message percent-encoded, spaces as
/// `%20`.
pub fn whatsapp_share_url(message: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse_with_params(WHATSAPP_SHARE_BASE, &[("text", message)])
        .map_err(|e| ClientError::Launch(e.to_string()))?;
    // Form encoding writes a space as '+' and a literal '+' as %2B.
    let query = url.query().map(|q| q.replace('+', "%20"));
    url.set_query(query.as_deref());
    Ok(url)
}

// ---------------------------------------------------------------------------
// SVG renderer
// ---------------------------------------------------------------------------

/// Renders the card as a small standalone SVG document.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgCardRenderer;

impl ShareCardRenderer for SvgCardRenderer {
    fn render(&self, card: &ShareCard) -> Result<ShareImage, ClientError> {
        let svg = format!(
            concat!(
                r##"<svg xmlns="http://www.w3.org/2000/svg" width="480" height="240" viewBox="0 0 480 240">"##,
                r##"<rect width="480" height="240" rx="16" fill="#1e3a5f"/>"##,
                r##"<text x="240" y="60" font-size="28" text-anchor="middle" fill="#ffffff">Globetrotter Challenge</text>"##,
                r##"<text x="240" y="110" font-size="20" text-anchor="middle" fill="#ffffff">Inviter: {username}</text>"##,
                r##"<text x="240" y="145" font-size="20" text-anchor="middle" fill="#ffffff">Score: {score}</text>"##,
                r##"<text x="240" y="190" font-size="22" text-anchor="middle" fill="#ffd166">Can you beat me?</text>"##,
                "</svg>"
            ),
            username = escape_xml(&card.username),
            score = card.score,
        );
        Ok(ShareImage {
            mime_type: "image/svg+xml",
            bytes: svg.into_bytes(),
        })
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Terminal launcher
// ---------------------------------------------------------------------------

/// Prints the link so the player can open it themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLauncher;

impl ShareLauncher for PrintLauncher {
    fn open(&self, url: &Url) -> Result<(), ClientError> {
        tracing::info!(%url, "Share link ready");
        println!("Share your challenge: {url}");
        Ok(())
    }
}
