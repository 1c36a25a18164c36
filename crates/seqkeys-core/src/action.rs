// Seqkeys Key Actions
// Keydown, keyup and auto-repeat as reported by the host

use std::fmt;

/// Represents the kind of a raw key event.
///
/// Hosts report a keydown when a key goes down (and again for every
/// auto-repeat) and a keyup when it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Release,
    Press,
    Repeat,
}

impl Action {
    /// Returns true if this is a keydown (PRESS or REPEAT)
    pub fn is_keydown(self) -> bool {
        matches!(self, Action::Press | Action::Repeat)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Release => write!(f, "release"),
            Action::Press => write!(f, "press"),
            Action::Repeat => write!(f, "repeat"),
        }
    }
}
