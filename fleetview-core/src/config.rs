use crate::error::FleetError;
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://backend-lti.onrender.com";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;
pub const DEFAULT_WINDOW_SIZE: usize = 5;

const USER_AGENT: &str = "fleetview-core/0.1";

/// Where and how to reach the acquisitions API
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the acquisitions listing endpoint
    pub fn acquisitions_url(&self) -> Result<Url, FleetError> {
        let base = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| FleetError::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(FleetError::Config(format!(
                "unsupported URL scheme '{}'",
                base.scheme()
            )));
        }

        let joined = format!("{}/aquisicoes", base.as_str().trim_end_matches('/'));
        Url::parse(&joined).map_err(|e| FleetError::Config(format!("invalid endpoint URL: {}", e)))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Paging layout of the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    pub items_per_page: usize,
    /// Maximum numbered page buttons, excluding the first/last jumps
    pub window_size: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        let url = config.acquisitions_url().unwrap();
        assert_eq!(url.as_str(), "https://backend-lti.onrender.com/aquisicoes");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let config = ClientConfig::with_base_url("http://localhost:8080/");
        let url = config.acquisitions_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/aquisicoes");
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let config = ClientConfig::with_base_url("http://localhost:8080/api/v1");
        let url = config.acquisitions_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/aquisicoes");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::with_base_url("not a url");
        assert!(matches!(config.acquisitions_url(), Err(FleetError::Config(_))));

        let config = ClientConfig::with_base_url("ftp://example.com");
        assert!(matches!(config.acquisitions_url(), Err(FleetError::Config(_))));
    }

    #[test]
    fn test_screen_defaults() {
        let config = ScreenConfig::default();
        assert_eq!(config.items_per_page, 12);
        assert_eq!(config.window_size, 5);
    }
}
