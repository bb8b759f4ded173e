use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one place, as returned by a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub temperature_c: f64,
    pub condition: String,
    pub location_name: String,
    pub country: String,
    pub observed_at: Option<DateTime<Utc>>,
}
