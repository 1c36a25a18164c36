// Seqkeys Input Layer - Raw Key Events
// The host-level keydown/keyup event the chord listener consumes

use crate::action::Action;

/// Which listener list an event is delivered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    KeyDown,
    KeyUp,
}

impl EventType {
    /// Auto-repeats are delivered as keydowns
    pub fn of(action: Action) -> Self {
        if action.is_keydown() {
            EventType::KeyDown
        } else {
            EventType::KeyUp
        }
    }
}

/// A raw keyboard event as the host reports it: the physical key code, the
/// modifier flags held at that instant, and the two flags a handler may set
/// to suppress default behavior and stop delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub action: Action,
    /// Physical key code, e.g. "KeyQ", "Digit1", "Enter", "ShiftLeft"
    pub code: String,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl RawKeyEvent {
    pub fn new(action: Action, code: impl Into<String>) -> Self {
        Self {
            action,
            code: code.into(),
            meta: false,
            ctrl: false,
            alt: false,
            shift: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn keydown(code: impl Into<String>) -> Self {
        Self::new(Action::Press, code)
    }

    pub fn keyup(code: impl Into<String>) -> Self {
        Self::new(Action::Release, code)
    }

    pub fn with_meta(mut self, on: bool) -> Self {
        self.meta = on;
        self
    }

    pub fn with_ctrl(mut self, on: bool) -> Self {
        self.ctrl = on;
        self
    }

    pub fn with_alt(mut self, on: bool) -> Self {
        self.alt = on;
        self
    }

    pub fn with_shift(mut self, on: bool) -> Self {
        self.shift = on;
        self
    }

    pub fn event_type(&self) -> EventType {
        EventType::of(self.action)
    }

    /// True if any of the four modifier flags is set
    pub fn has_modifiers(&self) -> bool {
        self.meta || self.ctrl || self.alt || self.shift
    }

    /// Ask the host not to perform the key's default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop delivery to any later listener
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
