//! Builds query URLs against the WeatherAPI.com "current" endpoint.

use anyhow::{Context, Result};
use url::Url;

use crate::validate::LocationQuery;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Fixed endpoint and credential that every lookup is sent to.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: Url,
    api_key: String,
}

impl Endpoint {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid weather endpoint URL: {base_url}"))?;

        Ok(Self { base_url, api_key: api_key.into() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for `query`: credential, percent-encoded location, and
    /// `aqi=no` to leave out the air-quality block.
    pub fn build_url(&self, query: &LocationQuery) -> Url {
        self.url_with_key(&self.api_key, query)
    }

    /// Same as [`Endpoint::build_url`] with the key masked, for logs.
    pub fn redacted_url(&self, query: &LocationQuery) -> Url {
        self.url_with_key("***", query)
    }

    fn url_with_key(&self, api_key: &str, query: &LocationQuery) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!(
            "key={}&q={}&aqi=no",
            urlencoding::encode(api_key),
            urlencoding::encode(query.as_str()),
        )));
        url
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .finish()
    }
}
