// Seqkeys Chord Type
// One physical key press together with the modifiers held at that instant

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;

use crate::input::RawKeyEvent;
use crate::key::{code_to_string, Platform};
use crate::modifier::{is_modifier, ChordModifier};

/// Errors that can occur when parsing a canonical chord string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordParseError {
    #[error("unknown modifier token '{token}' in chord '{chord}'")]
    UnknownModifier { token: String, chord: String },
}

/// A single key chord: four independent modifier flags plus a physical key code.
///
/// Equality is structural: two chords are equal iff all four flags and the
/// key code match. The canonical string form (`"M-C-A-S-KeyG"`) exists for
/// persistence only and is never used for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyChord {
    meta: bool,
    ctrl: bool,
    alt: bool,
    shift: bool,
    key: String,
}

impl KeyChord {
    /// Create a chord for `key` with no modifiers held
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Create a chord from a key code and the modifiers held with it
    pub fn with_modifiers(
        modifiers: impl IntoIterator<Item = ChordModifier>,
        key: impl Into<String>,
    ) -> Self {
        let mut chord = Self::new(key);
        for modifier in modifiers {
            chord.set_modifier(modifier, true);
        }
        chord
    }

    /// Build the chord a raw keydown represents
    ///
    /// A pure-modifier press has no base key, so its key is left empty
    /// ("modifier pressed alone").
    pub fn from_event(event: &RawKeyEvent) -> Self {
        let key = if is_modifier(&event.code) {
            String::new()
        } else {
            event.code.clone()
        };
        Self {
            meta: event.meta,
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
            key,
        }
    }

    pub fn meta(&self) -> bool {
        self.meta
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn alt(&self) -> bool {
        self.alt
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    /// The physical key code (empty for a modifier-alone chord)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Check whether a modifier flag is set
    pub fn has_modifier(&self, modifier: ChordModifier) -> bool {
        match modifier {
            ChordModifier::Meta => self.meta,
            ChordModifier::Ctrl => self.ctrl,
            ChordModifier::Alt => self.alt,
            ChordModifier::Shift => self.shift,
        }
    }

    /// Modifiers set on this chord, in canonical order
    pub fn modifiers(&self) -> impl Iterator<Item = ChordModifier> + '_ {
        ChordModifier::iter().filter(|m| self.has_modifier(*m))
    }

    /// Override a single modifier flag.
    ///
    /// Only used when translating host-native keybinding formats; chords
    /// are otherwise treated as immutable.
    pub fn set_modifier(&mut self, modifier: ChordModifier, on: bool) {
        match modifier {
            ChordModifier::Meta => self.meta = on,
            ChordModifier::Ctrl => self.ctrl = on,
            ChordModifier::Alt => self.alt = on,
            ChordModifier::Shift => self.shift = on,
        }
    }

    /// Return a copy with one modifier flag overridden
    pub fn with_modifier(&self, modifier: ChordModifier, on: bool) -> Self {
        let mut chord = self.clone();
        chord.set_modifier(modifier, on);
        chord
    }

    /// Canonical machine string: modifier tokens in meta, ctrl, alt, shift
    /// order, then the key, hyphen separated.
    pub fn to_canonical_string(&self) -> String {
        let mut out = String::new();
        for modifier in self.modifiers() {
            out.push(modifier.token());
            out.push('-');
        }
        out.push_str(&self.key);
        out
    }

    /// Whether the canonical string parses back to this chord. A key code
    /// containing '-' cannot be told apart from a modifier separator.
    pub fn is_storable(&self) -> bool {
        !self.key.contains('-')
    }

    /// Parse a canonical chord string.
    ///
    /// The last hyphen-separated token is the key (possibly empty, as in
    /// `"S-"`); every token before it must be a modifier token. Modifier
    /// order in the input does not matter and repeats are harmless.
    pub fn parse(s: &str) -> Result<Self, ChordParseError> {
        let mut parts: Vec<&str> = s.split('-').collect();
        // split always yields at least one element
        let key = parts.pop().unwrap_or_default();

        let mut chord = Self::new(key);
        for token in parts {
            let modifier =
                ChordModifier::from_token(token).ok_or_else(|| ChordParseError::UnknownModifier {
                    token: token.to_string(),
                    chord: s.to_string(),
                })?;
            chord.set_modifier(modifier, true);
        }
        Ok(chord)
    }

    /// Human display string for a platform.
    ///
    /// macOS: glyphs concatenated (`⌘⇧G`); elsewhere: names joined by `+`
    /// (`Win+Shift+G`).
    pub fn to_display_string(&self, platform: Platform) -> String {
        let mut parts: Vec<String> = self
            .modifiers()
            .map(|m| code_to_string(m.code_name(), platform))
            .collect();
        if !self.key.is_empty() {
            parts.push(code_to_string(&self.key, platform));
        }
        match platform {
            Platform::MacOs => parts.concat(),
            Platform::Other => parts.join("+"),
        }
    }
}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string(Platform::current()))
    }
}

impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
