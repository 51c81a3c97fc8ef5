/// Default service address, matching the server's default port.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
///
/// | Env Var                | Default                 |
/// |------------------------|-------------------------|
/// | `GLOBETROTTER_API_URL` | `http://localhost:5000` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("GLOBETROTTER_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self { api_url }
    }
}
