use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Client configuration injected at the composition root.
///
/// The event-stream client and the board gateway both take their endpoints
/// from here rather than reading process-wide globals, so tests can stand up
/// multiple independent instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub stream_endpoint: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/trellis/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("trellis/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("trellis\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or("http://localhost:8017/v1")
    }

    pub fn effective_stream_endpoint(&self) -> String {
        self.stream_endpoint
            .clone()
            .unwrap_or_else(|| format!("{}/events", self.effective_api_base_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = AppConfig::default();
        assert_eq!(config.effective_api_base_url(), "http://localhost:8017/v1");
        assert_eq!(
            config.effective_stream_endpoint(),
            "http://localhost:8017/v1/events"
        );
    }

    #[test]
    fn test_explicit_stream_endpoint_wins() {
        let config = AppConfig {
            api_base_url: Some("https://boards.example.com/v1".to_string()),
            stream_endpoint: Some("https://stream.example.com/sse".to_string()),
            api_token: None,
        };
        assert_eq!(
            config.effective_stream_endpoint(),
            "https://stream.example.com/sse"
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = toml::from_str("api_base_url = \"https://api.example.com\"").unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.stream_endpoint, None);
        assert_eq!(config.api_token, None);
    }
}
