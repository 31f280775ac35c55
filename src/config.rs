use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search-initiation service (`/start-search`).
    pub search_base_url: String,
    /// Base URL of the lead-listing service (`/list-leads`).
    pub api_base_url: String,
    /// Per-request timeout. `None` means requests may wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            search_base_url: lookup("BACKEND_SEARCH_URL")
                .or_else(|| lookup("VITE_BACKEND_SEARCH_URL"))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "BACKEND_SEARCH_URL or VITE_BACKEND_SEARCH_URL environment variable required"
                    )
                })
                .and_then(|url| validate_base_url("BACKEND_SEARCH_URL", url))?,
            api_base_url: lookup("BACKEND_API_URL")
                .or_else(|| lookup("VITE_BACKEND_API_URL"))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "BACKEND_API_URL or VITE_BACKEND_API_URL environment variable required"
                    )
                })
                .and_then(|url| validate_base_url("BACKEND_API_URL", url))?,
            request_timeout: match lookup("REQUEST_TIMEOUT_SECS").filter(|s| !s.trim().is_empty())
            {
                None => None,
                Some(raw) => {
                    let secs: u64 = raw.trim().parse().map_err(|_| {
                        anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a positive number of seconds")
                    })?;
                    if secs == 0 {
                        anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
                    }
                    Some(Duration::from_secs(secs))
                }
            },
        };

        tracing::debug!("Search Base URL: {}", config.search_base_url);
        tracing::debug!("API Base URL: {}", config.api_base_url);
        match config.request_timeout {
            Some(timeout) => tracing::debug!("Request timeout: {:?}", timeout),
            None => tracing::debug!("Request timeout: none"),
        }

        Ok(config)
    }
}

fn validate_base_url(name: &str, url: String) -> anyhow::Result<String> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    Ok(url.trim_end_matches('/').to_string())
}
