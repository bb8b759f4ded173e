//! Error types for the lookup pipeline.

use reqwest::StatusCode;
use thiserror::Error;

use crate::controller::{Element, MessageKind};

/// Raw input was rejected before anything touched the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Location must not be empty")]
    EmptyQuery,
}

/// A single fetch attempt failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to reach weather service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Weather request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Weather response is missing field `{0}`")]
    MissingField(&'static str),
}

impl FetchError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Required page elements were not found at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required UI elements: {}", format_elements(.missing))]
pub struct InitializationError {
    pub missing: Vec<Element>,
}

fn format_elements(elements: &[Element]) -> String {
    elements.iter().map(Element::as_str).collect::<Vec<_>>().join(", ")
}

/// Anything that can end a single user-triggered lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LookupError {
    /// User-facing text for the result container.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::EmptyQuery) => {
                "Please enter a location.".to_string()
            }
            Self::Fetch(FetchError::Transport(_)) => {
                "Could not reach the weather service. Check your connection.".to_string()
            }
            Self::Fetch(FetchError::Status { status, message }) => {
                format!("Weather lookup failed ({}): {message}", status.as_u16())
            }
            Self::Fetch(FetchError::Parse(_)) => {
                "The weather service sent an unreadable response.".to_string()
            }
            Self::Fetch(FetchError::MissingField(field)) => {
                format!("The weather service response had no {field}.")
            }
        }
    }

    /// Empty input is a warning; everything else is an error.
    pub fn severity(&self) -> MessageKind {
        match self {
            Self::Validation(_) => MessageKind::Warning,
            Self::Fetch(_) => MessageKind::Error,
        }
    }
}
