// Seqkeys Config API
// Sequence parsing, TOML persistence, conflict checks and host keybinding import

pub mod chord_parser;
pub mod conflict;
pub mod host_keys;
pub mod store;

pub use chord_parser::{parse_modifier_alias, parse_sequence};
pub use conflict::{conflicts_with, find_conflicts, Conflict, ConflictKind};
pub use host_keys::{merge_command_keys, HostHotkey};
pub use store::{Config, ConfigError, GeneralConfig, HotkeyEntry};
