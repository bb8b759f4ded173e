use async_trait::async_trait;
use std::fmt::Debug;
use url::Url;

use crate::{error::FetchError, model::WeatherResponse};

pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

/// Performs the single network call of a lookup.
///
/// Implementations make exactly one attempt: no timeout, no retry. A failed
/// attempt is returned to the caller as-is.
#[async_trait]
pub trait FetchClient: Send + Sync + Debug {
    async fn fetch(&self, url: &Url) -> Result<WeatherResponse, FetchError>;
}
