// Seqkeys Config API - Host Keybindings
// Translates a host application's own single-chord hotkeys into chords

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::chord_parser::parse_modifier_alias;
use crate::key::{key_code_from_name, Platform};
use crate::modifier::ChordModifier;
use crate::KeyChord;

/// A host-native hotkey: modifier names plus a key name, e.g.
/// `{ modifiers = ["Mod", "Shift"], key = "P" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostHotkey {
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub key: String,
}

impl HostHotkey {
    pub fn new<S: Into<String>>(modifiers: impl IntoIterator<Item = S>, key: impl Into<String>) -> Self {
        Self {
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            key: key.into(),
        }
    }

    /// The equivalent chord. `Mod` becomes meta on macOS and ctrl
    /// elsewhere; unrecognized modifier names are skipped. A shifted symbol
    /// key such as `"+"` adds shift.
    pub fn to_chord(&self, platform: Platform) -> KeyChord {
        let (code, shifted) = key_code_from_name(&self.key);
        let mut chord = KeyChord::new(code);
        if shifted {
            chord.set_modifier(ChordModifier::Shift, true);
        }
        for name in &self.modifiers {
            match parse_modifier_alias(name, platform) {
                Some(modifier) => chord.set_modifier(modifier, true),
                None => log::trace!("Skipping unknown host modifier '{}'", name),
            }
        }
        chord
    }
}

/// Merge a host's default and user-customized keybindings into one
/// command -> chords map.
///
/// Defaults come first in their own order. A custom entry replaces the
/// default for its command, except that an empty custom list, or a command
/// `is_known` rejects, removes the command altogether.
pub fn merge_command_keys<F>(
    defaults: &IndexMap<String, Vec<HostHotkey>>,
    custom: &IndexMap<String, Vec<HostHotkey>>,
    is_known: F,
    platform: Platform,
) -> IndexMap<String, Vec<KeyChord>>
where
    F: Fn(&str) -> bool,
{
    let translate = |keys: &[HostHotkey]| -> Vec<KeyChord> {
        keys.iter().map(|k| k.to_chord(platform)).collect()
    };

    let mut merged: IndexMap<String, Vec<KeyChord>> = defaults
        .iter()
        .map(|(command, keys)| (command.clone(), translate(keys)))
        .collect();

    for (command, keys) in custom {
        if keys.is_empty() || !is_known(command) {
            merged.shift_remove(command);
            continue;
        }
        merged.insert(command.clone(), translate(keys));
    }
    merged
}
