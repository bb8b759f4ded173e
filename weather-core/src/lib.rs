//! Core library for the `weather` app.
//!
//! This crate defines:
//! - The lookup pipeline: validate, build the request, fetch, format
//! - The presentation controller and the [`Surface`] it drives
//! - Configuration & credentials handling
//! - Shared domain models and error types
//!
//! It is used by `weather-cli`, but any other front end can implement
//! [`Surface`] and reuse the same controller.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod request;
pub mod validate;

pub use config::Config;
pub use controller::{
    AppState, Controller, ControllerState, Element, Key, MessageKind, Outcome, Surface, UiEvent,
};
pub use error::{FetchError, InitializationError, LookupError, ValidationError};
pub use fetch::{FetchClient, WeatherApiClient};
pub use format::{DisplayFragment, format_weather};
pub use model::WeatherResponse;
pub use request::Endpoint;
pub use validate::LocationQuery;
