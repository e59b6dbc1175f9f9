use crate::config::ClientConfig;
use crate::error::FleetError;
use log::debug;
use reqwest::Url;

const ACCEPT: &str = "application/json";

#[derive(Debug, Clone)]
pub struct AcquisitionsClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl AcquisitionsClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FleetError> {
        let endpoint = config.acquisitions_url()?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FleetError::Config(format!("invalid user agent: {}", e)))?,
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(AcquisitionsClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue a GET and fail on any non-2xx status
    pub async fn call(&self, url: Url) -> Result<reqwest::Response, FleetError> {
        debug!("calling acquisitions API: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("acquisitions API answered {}", status);
            return Err(FleetError::Status(status.as_u16()));
        }

        Ok(response)
    }
}
