//! Timing for the visual transitions played by the controller.
//!
//! Purely cosmetic: surfaces may honor or ignore these values.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Loading,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Elastic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub duration: Duration,
    pub easing: Easing,
}

const TRANSITIONS: &[Transition] = &[
    Transition {
        kind: TransitionKind::Loading,
        duration: Duration::from_millis(1200),
        easing: Easing::Linear,
    },
    Transition {
        kind: TransitionKind::Success,
        duration: Duration::from_millis(600),
        easing: Easing::EaseOut,
    },
    Transition {
        kind: TransitionKind::Warning,
        duration: Duration::from_millis(400),
        easing: Easing::EaseInOut,
    },
    Transition {
        kind: TransitionKind::Error,
        duration: Duration::from_millis(500),
        easing: Easing::Elastic,
    },
];

impl TransitionKind {
    /// `TRANSITIONS` is laid out in variant order.
    pub fn transition(self) -> &'static Transition {
        &TRANSITIONS[self as usize]
    }
}
