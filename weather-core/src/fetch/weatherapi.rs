use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{error::FetchError, model::WeatherResponse};

use super::FetchClient;

/// [`FetchClient`] for the WeatherAPI.com JSON API.
#[derive(Debug, Clone, Default)]
pub struct WeatherApiClient {
    http: Client,
}

impl WeatherApiClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl FetchClient for WeatherApiClient {
    async fn fetch(&self, url: &Url) -> Result<WeatherResponse, FetchError> {
        let res = self.http.get(url.clone()).send().await.map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            return Err(FetchError::Status { status, message: error_message(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        parsed.into_response()
    }
}

// Every field is optional on the wire; `into_response` decides what is required.

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: Option<f64>,
    condition: Option<WaCondition>,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: Option<WaLocation>,
    current: Option<WaCurrent>,
}

impl WaResponse {
    fn into_response(self) -> Result<WeatherResponse, FetchError> {
        let location = self.location.ok_or(FetchError::MissingField("location"))?;
        let current = self.current.ok_or(FetchError::MissingField("current"))?;

        let temperature_c = current.temp_c.ok_or(FetchError::MissingField("temp_c"))?;
        let condition = current
            .condition
            .and_then(|c| c.text)
            .ok_or(FetchError::MissingField("condition.text"))?;

        Ok(WeatherResponse {
            temperature_c,
            condition,
            location_name: location.name.ok_or(FetchError::MissingField("location.name"))?,
            country: location.country.ok_or(FetchError::MissingField("location.country"))?,
            observed_at: current
                .last_updated_epoch
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: String,
}

/// Prefer the API's own `{"error":{"message":..}}`, else a clipped raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<WaErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
