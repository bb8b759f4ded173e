//! Presentation controller: drives one lookup from user input to rendered result.
//!
//! The controller never draws anything itself. Everything visible goes through
//! a [`Surface`], which owns the text field, the trigger control, the loading
//! indicator and the result container.

use tracing::{debug, error, warn};

use crate::{
    animation::{Transition, TransitionKind},
    error::{InitializationError, LookupError},
    fetch::FetchClient,
    format::{DisplayFragment, format_weather},
    request::Endpoint,
    validate::LocationQuery,
};

/// Page elements the controller cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    TextField,
    TriggerControl,
    ResultContainer,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::TextField => "text field",
            Element::TriggerControl => "trigger control",
            Element::ResultContainer => "result container",
        }
    }

    pub const fn all() -> &'static [Element] {
        &[Element::TextField, Element::TriggerControl, Element::ResultContainer]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Bad input; the user should try again.
    Warning,
    /// The lookup itself failed.
    Error,
}

impl MessageKind {
    pub fn transition(self) -> &'static Transition {
        match self {
            MessageKind::Warning => TransitionKind::Warning.transition(),
            MessageKind::Error => TransitionKind::Error.transition(),
        }
    }
}

/// The page the controller drives.
pub trait Surface {
    fn has_element(&self, element: Element) -> bool;

    /// Current raw contents of the text field.
    fn field_value(&self) -> String;

    fn set_trigger_enabled(&mut self, enabled: bool);

    fn start_loading(&mut self, transition: &Transition);

    fn stop_loading(&mut self);

    fn render_weather(&mut self, fragment: &DisplayFragment, transition: &Transition);

    fn render_message(&mut self, kind: MessageKind, text: &str, transition: &Transition);

    /// Called on every controller state change.
    fn state_changed(&mut self, _state: ControllerState) {}
}

/// Everything the controller owns for the lifetime of the app.
#[derive(Debug)]
pub struct AppState<S> {
    surface: S,
    endpoint: Endpoint,
}

impl<S: Surface> AppState<S> {
    /// Checks that every required element exists before anything else runs.
    pub fn init(surface: S, endpoint: Endpoint) -> Result<Self, InitializationError> {
        let missing: Vec<Element> =
            Element::all().iter().copied().filter(|e| !surface.has_element(*e)).collect();

        if !missing.is_empty() {
            let err = InitializationError { missing };
            error!("Weather widget not initialized: {err}");
            return Err(err);
        }

        Ok(Self { surface, endpoint })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click,
    Key(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
}

/// Which events start which action. Events not listed are ignored.
pub const BINDINGS: &[(UiEvent, Action)] = &[
    (UiEvent::Click, Action::Submit),
    (UiEvent::Key(Key::Enter), Action::Submit),
];

pub fn action_for(event: UiEvent) -> Option<Action> {
    BINDINGS.iter().find(|(bound, _)| *bound == event).map(|(_, action)| *action)
}

/// How a submit ended.
#[derive(Debug)]
pub enum Outcome {
    Displayed(DisplayFragment),
    Rejected(LookupError),
    Failed(LookupError),
}

impl Outcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, Outcome::Displayed(_))
    }
}

#[derive(Debug)]
pub struct Controller<S, C> {
    app: AppState<S>,
    client: C,
    state: ControllerState,
}

impl<S: Surface, C: FetchClient> Controller<S, C> {
    pub fn new(app: AppState<S>, client: C) -> Self {
        Self { app, client, state: ControllerState::Idle }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn app(&self) -> &AppState<S> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut AppState<S> {
        &mut self.app
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Runs the action bound to `event`, if any.
    pub async fn dispatch(&mut self, event: UiEvent) -> Option<Outcome> {
        match action_for(event)? {
            Action::Submit => Some(self.submit().await),
        }
    }

    /// One full lookup for whatever is in the text field.
    pub async fn submit(&mut self) -> Outcome {
        let Self { app, client, state } = self;
        let raw = app.surface.field_value();

        let query = match LocationQuery::parse(&raw) {
            Ok(query) => query,
            Err(err) => {
                warn!("Rejected lookup: {err}");
                let err = LookupError::from(err);
                enter(state, &mut app.surface, ControllerState::Failure);
                show_error(&mut app.surface, &err);
                enter(state, &mut app.surface, ControllerState::Idle);
                return Outcome::Rejected(err);
            }
        };

        let mut busy = Busy::start(&mut app.surface, state);

        let url = app.endpoint.build_url(&query);
        debug!(url = %app.endpoint.redacted_url(&query), "Fetching weather");

        match client.fetch(&url).await {
            Ok(weather) => {
                let fragment = format_weather(&weather);
                enter(busy.state, busy.surface, ControllerState::Success);
                busy.surface.render_weather(&fragment, TransitionKind::Success.transition());
                Outcome::Displayed(fragment)
            }
            Err(err) => {
                error!(query = %query, "Weather lookup failed: {err}");
                let err = LookupError::from(err);
                enter(busy.state, busy.surface, ControllerState::Failure);
                show_error(busy.surface, &err);
                Outcome::Failed(err)
            }
        }
    }
}

/// Holds the trigger disabled and the loading indicator running while a
/// lookup is in flight. Dropping it always restores both and returns to
/// `Idle`, including when the submit future is dropped mid-fetch.
struct Busy<'a, S: Surface> {
    surface: &'a mut S,
    state: &'a mut ControllerState,
}

impl<'a, S: Surface> Busy<'a, S> {
    fn start(surface: &'a mut S, state: &'a mut ControllerState) -> Self {
        enter(state, surface, ControllerState::Loading);
        surface.set_trigger_enabled(false);
        surface.start_loading(TransitionKind::Loading.transition());
        Self { surface, state }
    }
}

impl<S: Surface> Drop for Busy<'_, S> {
    fn drop(&mut self) {
        self.surface.stop_loading();
        self.surface.set_trigger_enabled(true);
        enter(self.state, self.surface, ControllerState::Idle);
    }
}

fn enter<S: Surface>(state: &mut ControllerState, surface: &mut S, next: ControllerState) {
    debug!(from = ?*state, to = ?next, "Controller state change");
    *state = next;
    surface.state_changed(next);
}

fn show_error<S: Surface>(surface: &mut S, err: &LookupError) {
    let kind = err.severity();
    surface.render_message(kind, &err.user_message(), kind.transition());
}
