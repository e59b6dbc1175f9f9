use std::fmt;

#[derive(Debug)]
pub enum FleetError {
    Network(reqwest::Error),
    Status(u16),
    Json(serde_json::Error),
    Config(String),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Network(e) => write!(f, "Network error: {}", e),
            FleetError::Status(code) => write!(f, "Failed to fetch data (HTTP {})", code),
            FleetError::Json(e) => write!(f, "JSON parsing error: {}", e),
            FleetError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FleetError::Network(e) => Some(e),
            FleetError::Json(e) => Some(e),
            FleetError::Status(_) | FleetError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for FleetError {
    fn from(err: reqwest::Error) -> Self {
        FleetError::Network(err)
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::Json(err)
    }
}
