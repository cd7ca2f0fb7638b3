use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation API, including the version prefix
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://127.0.0.1:5000/api/v1.0/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config.normalized())
    }

    /// Replace the base URL, e.g. from a command-line flag
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self.normalized()
    }

    /// Relative endpoint paths are joined onto the base URL, which only keeps
    /// its last segment when it ends in a slash.
    fn normalized(mut self) -> Self {
        if !self.api_url.ends_with('/') {
            self.api_url.push('/');
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://127.0.0.1:5000/api/v1.0/");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_trailing_slash_enforced() {
        let config = Config::default().with_api_url("http://localhost:8080/api/v1.0");
        assert_eq!(config.api_url, "http://localhost:8080/api/v1.0/");

        let config = Config::default().with_api_url("http://localhost:8080/api/v1.0/");
        assert_eq!(config.api_url, "http://localhost:8080/api/v1.0/");
    }

    #[test]
    fn test_deserialize_from_pairs() {
        let vars = vec![
            ("API_URL".to_string(), "http://example.test/api".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "5".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_url, "http://example.test/api");
        assert_eq!(config.request_timeout_secs, 5);
    }
}
