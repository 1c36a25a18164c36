// Seqkeys Modifier System
// The four chord modifiers (Meta, Ctrl, Alt, Shift) and pure-modifier key codes

use std::fmt;

use strum_macros::{EnumIter, IntoStaticStr};

/// One of the four independent chord modifier flags.
///
/// Declaration order is the canonical order used by the chord string form:
/// meta, ctrl, alt, shift. `ChordModifier::iter()` walks them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
pub enum ChordModifier {
    Meta,
    Ctrl,
    Alt,
    Shift,
}

impl ChordModifier {
    /// Token used in the canonical chord string ("M", "C", "A", "S")
    pub fn token(self) -> char {
        match self {
            ChordModifier::Meta => 'M',
            ChordModifier::Ctrl => 'C',
            ChordModifier::Alt => 'A',
            ChordModifier::Shift => 'S',
        }
    }

    /// Parse a canonical token back into a modifier
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "M" => Some(ChordModifier::Meta),
            "C" => Some(ChordModifier::Ctrl),
            "A" => Some(ChordModifier::Alt),
            "S" => Some(ChordModifier::Shift),
            _ => None,
        }
    }

    /// Resolve a host-side modifier name ("Ctrl", "Control", "Cmd", ...)
    ///
    /// `Mod` is platform dependent and handled by the caller.
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "Meta" | "Cmd" | "Command" | "Super" | "Win" => Some(ChordModifier::Meta),
            "Ctrl" | "Control" => Some(ChordModifier::Ctrl),
            "Alt" | "Opt" | "Option" => Some(ChordModifier::Alt),
            "Shift" => Some(ChordModifier::Shift),
            _ => None,
        }
    }

    /// The key-code name the host reports for this modifier
    pub fn code_name(self) -> &'static str {
        match self {
            ChordModifier::Meta => "Meta",
            ChordModifier::Ctrl => "Control",
            ChordModifier::Alt => "Alt",
            ChordModifier::Shift => "Shift",
        }
    }
}

impl fmt::Display for ChordModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Returns the modifier a physical key code belongs to, if it is a pure modifier key.
///
/// Accepts the bare names (`"Shift"`) as well as the sided physical codes
/// (`"ShiftLeft"`, `"ControlRight"`, `"OSLeft"`).
pub fn modifier_for_code(code: &str) -> Option<ChordModifier> {
    let base = code
        .strip_suffix("Left")
        .or_else(|| code.strip_suffix("Right"))
        .unwrap_or(code);
    match base {
        "Meta" | "OS" => Some(ChordModifier::Meta),
        "Control" => Some(ChordModifier::Ctrl),
        "Alt" => Some(ChordModifier::Alt),
        "Shift" => Some(ChordModifier::Shift),
        _ => None,
    }
}

/// Check if a key code is a pure modifier key.
///
/// A pure-modifier press carries no base key, so no chord can be formed
/// from it until the press resolves.
pub fn is_modifier(code: &str) -> bool {
    modifier_for_code(code).is_some()
}
