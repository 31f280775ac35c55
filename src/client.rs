use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{RawLeadRecord, SearchRequest};

/// Client for the two backend collaborators: the search-initiation service
/// and the lead-listing service.
#[derive(Clone)]
pub struct LeadsClient {
    client: reqwest::Client,
    search_base_url: String,
    api_base_url: String,
}

impl LeadsClient {
    /// Creates a new `LeadsClient`.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URLs and optional request timeout.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            search_base_url: config.search_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Asks the search service to run a lookup.
    ///
    /// # Returns
    ///
    /// * `Result<String, ClientError>` - The free-form response text on success.
    pub async fn start_search(&self, request: &SearchRequest) -> Result<String, ClientError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/start-search", self.search_base_url),
            request.query_pairs(),
        )
        .map_err(|e| ClientError::InvalidUrl(format!("Failed to build URL: {}", e)))?;

        tracing::info!("Starting search: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Search request failed: {}", e);
            ClientError::Unreachable(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Search service returned {}", status);
            return Err(ClientError::Rejected(status));
        }

        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read search response: {}", e);
            ClientError::InvalidBody(e.to_string())
        })?;

        tracing::info!("Search service responded: {}", text);
        Ok(text)
    }

    /// Fetches every stored lead in one response.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<RawLeadRecord>, ClientError>` - Raw records in server order.
    pub async fn list_leads(&self) -> Result<Vec<RawLeadRecord>, ClientError> {
        let url = format!("{}/list-leads", self.api_base_url);
        tracing::info!("Fetching leads: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Lead list request failed: {}", e);
            ClientError::Unreachable(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Lead list service returned {}", status);
            return Err(ClientError::Rejected(status));
        }

        let records: Vec<RawLeadRecord> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse lead list: {}", e);
            ClientError::from(e)
        })?;

        tracing::info!("Received {} leads", records.len());
        Ok(records)
    }
}
