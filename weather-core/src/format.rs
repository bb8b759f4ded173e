//! Turns a [`WeatherResponse`] into what the user sees.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::model::WeatherResponse;

/// Shown when the condition text matches no category.
pub const FALLBACK_EMOJI: &str = "🌡️";

/// Condition families, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunder,
    Fog,
    Windy,
}

impl ConditionCategory {
    pub const fn all() -> &'static [ConditionCategory] {
        &[
            ConditionCategory::Clear,
            ConditionCategory::Cloudy,
            ConditionCategory::Rain,
            ConditionCategory::Snow,
            ConditionCategory::Thunder,
            ConditionCategory::Fog,
            ConditionCategory::Windy,
        ]
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Clear => &["clear", "sunny"],
            Self::Cloudy => &["cloud", "overcast"],
            Self::Rain => &["rain", "drizzle", "shower"],
            Self::Snow => &["snow", "sleet", "blizzard"],
            Self::Thunder => &["thunder", "storm"],
            Self::Fog => &["fog", "mist", "haze"],
            Self::Windy => &["wind"],
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Cloudy => "☁️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunder => "⛈️",
            Self::Fog => "🌫️",
            Self::Windy => "💨",
        }
    }

    /// First category with a keyword contained in `condition`, ignoring case.
    pub fn classify(condition: &str) -> Option<Self> {
        let lower = condition.to_lowercase();

        Self::all()
            .iter()
            .copied()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
    }
}

pub fn emoji_for(condition: &str) -> &'static str {
    ConditionCategory::classify(condition).map_or(FALLBACK_EMOJI, |c| c.emoji())
}

/// One rendered lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFragment {
    /// Rounded Celsius, e.g. `"18°C"`.
    pub temperature: String,
    /// `"{name}, {country}"`.
    pub place: String,
    pub condition: String,
    pub emoji: &'static str,
    pub observed_at: Option<DateTime<Utc>>,
}

pub fn format_weather(weather: &WeatherResponse) -> DisplayFragment {
    DisplayFragment {
        temperature: format!("{}°C", round_celsius(weather.temperature_c)),
        place: format!("{}, {}", weather.location_name, weather.country),
        condition: weather.condition.clone(),
        emoji: emoji_for(&weather.condition),
        observed_at: weather.observed_at,
    }
}

fn round_celsius(value: f64) -> i64 {
    // Half away from zero; `as` saturates on out-of-range values.
    value.round() as i64
}

impl fmt::Display for DisplayFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.emoji, self.temperature)?;
        writeln!(f, "{}", self.place)?;
        write!(f, "{}", self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temp: f64, condition: &str) -> WeatherResponse {
        WeatherResponse {
            temperature_c: temp,
            condition: condition.to_string(),
            location_name: "Paris".to_string(),
            country: "France".to_string(),
            observed_at: None,
        }
    }

    #[test]
    fn temperature_is_rounded() {
        assert_eq!(format_weather(&weather(21.6, "Sunny")).temperature, "22°C");
        assert_eq!(format_weather(&weather(18.4, "Sunny")).temperature, "18°C");
        assert_eq!(format_weather(&weather(-3.7, "Snow")).temperature, "-4°C");
        assert_eq!(format_weather(&weather(-0.2, "Clear")).temperature, "0°C");
    }

    #[test]
    fn place_combines_name_and_country() {
        assert_eq!(format_weather(&weather(10.0, "Sunny")).place, "Paris, France");
    }

    #[test]
    fn classify_matches_case_insensitively() {
        assert_eq!(ConditionCategory::classify("SUNNY"), Some(ConditionCategory::Clear));
        assert_eq!(ConditionCategory::classify("Partly cloudy"), Some(ConditionCategory::Cloudy));
        assert_eq!(ConditionCategory::classify("Overcast"), Some(ConditionCategory::Cloudy));
        assert_eq!(ConditionCategory::classify("Light drizzle"), Some(ConditionCategory::Rain));
        assert_eq!(ConditionCategory::classify("Blizzard"), Some(ConditionCategory::Snow));
        assert_eq!(
            ConditionCategory::classify("Thundery outbreaks possible"),
            Some(ConditionCategory::Thunder)
        );
        assert_eq!(ConditionCategory::classify("Freezing fog"), Some(ConditionCategory::Fog));
        assert_eq!(ConditionCategory::classify("Mist"), Some(ConditionCategory::Fog));
        assert_eq!(ConditionCategory::classify("Windy"), Some(ConditionCategory::Windy));
    }

    #[test]
    fn first_matching_category_wins() {
        assert_eq!(emoji_for("Patchy rain possible"), ConditionCategory::Rain.emoji());
        // "rain" is listed before "thunder".
        assert_eq!(
            ConditionCategory::classify("Patchy light rain with thunder"),
            Some(ConditionCategory::Rain)
        );
        // "cloud" is listed before "rain".
        assert_eq!(
            ConditionCategory::classify("Cloudy with rain showers"),
            Some(ConditionCategory::Cloudy)
        );
    }

    #[test]
    fn unknown_condition_uses_fallback() {
        assert_eq!(ConditionCategory::classify("Volcanic ash"), None);
        assert_eq!(emoji_for("Volcanic ash"), FALLBACK_EMOJI);
        assert_eq!(emoji_for(""), FALLBACK_EMOJI);
    }

    #[test]
    fn display_renders_all_parts() {
        let text = format_weather(&weather(18.4, "Sunny")).to_string();

        assert!(text.contains("18°C"));
        assert!(text.contains("Paris, France"));
        assert!(text.contains("Sunny"));
        assert!(text.contains("☀️"));
    }
}
