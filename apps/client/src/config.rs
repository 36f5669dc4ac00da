//! Client configuration.
//!
//! The only environment input is the API base URL.

/// Env var naming the collaborator base URL.
pub const API_URL_VAR: &str = "WORDTRAIL_API_URL";

/// Default local backend, matching the server's mount point.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1/vocabularies";

/// Path suffix stripped from the primary base URL to reach the AI endpoint.
const VOCABULARIES_SUFFIX: &str = "/vocabularies";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Load from the environment, falling back to the local default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_base_url)
    }

    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The AI explain endpoint lives one level above the vocabularies path.
    pub fn ai_base_url(&self) -> String {
        self.api_base_url
            .strip_suffix(VOCABULARIES_SUFFIX)
            .unwrap_or(&self.api_base_url)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = Config::new("http://example.com/api/v1/vocabularies/");
        assert_eq!(config.api_base_url, "http://example.com/api/v1/vocabularies");
    }

    #[test]
    fn ai_base_strips_vocabularies_suffix() {
        let config = Config::new("http://example.com/api/v1/vocabularies");
        assert_eq!(config.ai_base_url(), "http://example.com/api/v1");
    }

    #[test]
    fn ai_base_unchanged_without_suffix() {
        let config = Config::new("http://example.com/api/v1");
        assert_eq!(config.ai_base_url(), "http://example.com/api/v1");
    }
}
