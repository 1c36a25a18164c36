// Seqkeys Config Store - TOML with Serde
// Persists sequence bindings and feeds them to the matching engine

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::conflict::{find_conflicts, Conflict};
use crate::chord::ChordParseError;
use crate::key::Platform;
use crate::matching::HotkeyManager;
use crate::sequence::{chords_equal, sequence_to_canonical_string};
use crate::trigger::Trigger;
use crate::KeyChord;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),

    #[error("Invalid chord in hotkey '{command}': {source}")]
    InvalidChord {
        command: String,
        #[source]
        source: ChordParseError,
    },

    #[error("No source path set")]
    NoSourcePath,
}

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Display platform override; the build platform when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl GeneralConfig {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// One persisted binding: a command id and the sequence that fires it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyEntry {
    pub command: String,
    pub chords: Vec<KeyChord>,
}

impl HotkeyEntry {
    pub fn new(command: impl Into<String>, chords: Vec<KeyChord>) -> Self {
        Self {
            command: command.into(),
            chords,
        }
    }
}

/// Root TOML table
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    #[serde(default, skip_serializing_if = "GeneralConfig::is_default")]
    general: GeneralConfig,

    #[serde(default, rename = "hotkey")]
    hotkeys: Vec<HotkeyToml>,
}

/// A `[[hotkey]]` table. Chords stay strings until the owning command is
/// known so parse errors can name it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct HotkeyToml {
    command: String,
    chords: Vec<String>,
}

impl HotkeyToml {
    fn into_entry(self) -> Result<HotkeyEntry, ConfigError> {
        let chords = self
            .chords
            .iter()
            .map(|s| KeyChord::parse(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::InvalidChord {
                command: self.command.clone(),
                source,
            })?;
        Ok(HotkeyEntry::new(self.command, chords))
    }
}

impl From<&HotkeyEntry> for HotkeyToml {
    fn from(entry: &HotkeyEntry) -> Self {
        Self {
            command: entry.command.clone(),
            chords: entry.chords.iter().map(KeyChord::to_canonical_string).collect(),
        }
    }
}

/// The persisted set of sequence bindings, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    general: GeneralConfig,
    hotkeys: Vec<HotkeyEntry>,
    /// Path to the config file (for reload)
    source_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.source_path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        let mut hotkeys = Vec::with_capacity(raw.hotkeys.len());
        for hotkey in raw.hotkeys {
            let entry = hotkey.into_entry()?;
            if entry.chords.is_empty() {
                log::warn!("Skipping empty sequence for '{}'", entry.command);
                continue;
            }
            hotkeys.push(entry);
        }

        let config = Self {
            general: raw.general,
            hotkeys,
            source_path: None,
        };
        for conflict in config.conflicts() {
            log::warn!("Conflicting bindings: {}", conflict);
        }
        log::debug!("Loaded {} sequence hotkeys", config.hotkeys.len());
        Ok(config)
    }

    /// Get the default config path (`<config_dir>/seqkeys/hotkeys.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("seqkeys").join("hotkeys.toml"))
    }

    /// Load from `path`, or start empty (remembering `path`) if it does not exist
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_toml_path(path);
        }
        log::debug!("No config at {}, starting empty", path.display());
        Ok(Self {
            source_path: Some(path.to_path_buf()),
            ..Self::default()
        })
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_or_empty(path),
            None => Ok(Self::new()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let raw = ConfigToml {
            general: self.general.clone(),
            hotkeys: self.hotkeys.iter().map(HotkeyToml::from).collect(),
        };
        toml::to_string(&raw).map_err(|e| ConfigError::TomlSerialize(e.to_string()))
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        log::debug!("Saved {} sequence hotkeys to {}", self.hotkeys.len(), path.display());
        Ok(())
    }

    /// Write back to the file this configuration was loaded from
    pub fn save_to_source(&self) -> Result<(), ConfigError> {
        let path = self.source_path.as_ref().ok_or(ConfigError::NoSourcePath)?;
        self.save(path)
    }

    /// Reload configuration from the original file
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let path = self.source_path.clone().ok_or(ConfigError::NoSourcePath)?;
        *self = Self::from_toml_path(path)?;
        Ok(())
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn general(&self) -> &GeneralConfig {
        &self.general
    }

    /// Display platform: the configured override or the build platform
    pub fn platform(&self) -> Platform {
        self.general.platform.unwrap_or_default()
    }

    pub fn set_platform(&mut self, platform: Option<Platform>) {
        self.general.platform = platform;
    }

    pub fn hotkeys(&self) -> &[HotkeyEntry] {
        &self.hotkeys
    }

    /// Append a binding. Returns false (and stores nothing) for an empty
    /// sequence or one with a chord that would not load back from the file.
    pub fn add_hotkey(&mut self, command: impl Into<String>, chords: Vec<KeyChord>) -> bool {
        let command = command.into();
        if chords.is_empty() {
            log::warn!("Ignoring empty sequence for '{}'", command);
            return false;
        }
        if let Some(chord) = chords.iter().find(|c| !c.is_storable()) {
            log::warn!(
                "Ignoring sequence for '{}': key code '{}' contains '-'",
                command,
                chord.key()
            );
            return false;
        }
        log::debug!(
            "Binding '{}' to [{}]",
            command,
            sequence_to_canonical_string(&chords)
        );
        self.hotkeys.push(HotkeyEntry::new(command, chords));
        true
    }

    /// Remove every binding of `command` to exactly `chords`. Returns the
    /// number removed.
    pub fn delete_hotkey(&mut self, command: &str, chords: &[KeyChord]) -> usize {
        let before = self.hotkeys.len();
        self.hotkeys
            .retain(|h| h.command != command || !chords_equal(&h.chords, chords));
        let removed = before - self.hotkeys.len();
        log::debug!("Removed {} binding(s) of '{}'", removed, command);
        removed
    }

    /// Bindings of one command, in order
    pub fn hotkeys_for<'a>(&'a self, command: &'a str) -> impl Iterator<Item = &'a HotkeyEntry> + 'a {
        self.hotkeys.iter().filter(move |h| h.command == command)
    }

    pub fn conflicts(&self) -> Vec<Conflict> {
        find_conflicts(&self.hotkeys)
    }

    /// Replace every registration in `manager` with this configuration's
    /// bindings, in file order
    pub fn apply_to<T: Trigger>(&self, manager: &mut HotkeyManager<T>) {
        manager.reset();
        for entry in &self.hotkeys {
            manager.add_hotkey(entry.command.clone(), entry.chords.clone());
        }
    }
}
