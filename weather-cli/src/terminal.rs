use chrono::{DateTime, Local, Utc};
use tracing::trace;
use weather_core::{DisplayFragment, Element, MessageKind, Surface, animation::Transition};

/// Draws the widget as plain lines on stdout.
///
/// The prompt is the text field and Enter is the trigger, so every element
/// is always present.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    input: String,
}

impl TerminalSurface {
    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }
}

impl Surface for TerminalSurface {
    fn has_element(&self, _element: Element) -> bool {
        true
    }

    fn field_value(&self) -> String {
        self.input.clone()
    }

    // The prompt is not shown again until the lookup returns.
    fn set_trigger_enabled(&mut self, enabled: bool) {
        trace!(enabled, "trigger");
    }

    fn start_loading(&mut self, transition: &Transition) {
        trace!(?transition, "start loading");
        eprintln!("Looking up weather for {}...", self.input.trim());
    }

    fn stop_loading(&mut self) {}

    fn render_weather(&mut self, fragment: &DisplayFragment, transition: &Transition) {
        trace!(?transition, "render weather");
        println!("{}", render_fragment(fragment));
    }

    fn render_message(&mut self, kind: MessageKind, text: &str, transition: &Transition) {
        trace!(?transition, ?kind, "render message");
        eprintln!("{}", render_message(kind, text));
    }
}

fn render_fragment(fragment: &DisplayFragment) -> String {
    match fragment.observed_at {
        Some(at) => format!("{fragment}\n(updated {})", local_time(at)),
        None => fragment.to_string(),
    }
}

fn render_message(kind: MessageKind, text: &str) -> String {
    match kind {
        MessageKind::Warning => format!("⚠️  {text}"),
        MessageKind::Error => format!("❌ {text}"),
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
