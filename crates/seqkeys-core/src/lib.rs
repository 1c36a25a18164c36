// Seqkeys Core Library
// Key-chord sequence hotkeys: chord model, matching engine and chord listener

pub mod action;
pub mod chord;
pub mod config;
pub mod input;
pub mod key;
pub mod matching;
pub mod modifier;
pub mod sequence;
pub mod trigger;

pub use action::Action;
pub use chord::{ChordParseError, KeyChord};
pub use config::{
    conflicts_with, find_conflicts, merge_command_keys, parse_sequence, Config, ConfigError,
    Conflict, ConflictKind, HostHotkey, HotkeyEntry,
};
pub use input::{
    CaptureOutcome, ChordCapture, ChordListener, EventHub, EventType, InputHost, ListenerId, Phase,
    RawKeyEvent,
};
pub use key::{code_to_string, Platform};
pub use matching::{HotkeyManager, MatchOutcome, Registration};
pub use modifier::{is_modifier, ChordModifier};
pub use sequence::{
    chords_equal, chords_prefix_equal, sequence_to_canonical_string, sequence_to_display_string,
    starts_with,
};
pub use trigger::{ChordConsumer, Trigger};
