// Seqkeys Key Codes
// Display names for physical key codes (KeyboardEvent.code style)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Platform flavor used when rendering chords for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Glyph rendering (⌘⌃⌥⇧), no separators
    #[strum(to_string = "macos", serialize = "mac")]
    #[serde(alias = "mac")]
    MacOs,
    /// Word rendering joined with '+'
    Other,
}

impl Platform {
    /// The platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Display name for a key code
///
/// Letters and digits collapse to their character, punctuation codes to the
/// symbol they print, and a handful of named keys to glyphs on macOS. Codes
/// without a mapping are returned unchanged.
pub fn code_to_string(code: &str, platform: Platform) -> String {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 {
            return letter.to_string();
        }
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        if digit.len() == 1 {
            return digit.to_string();
        }
    }

    // (macOS, elsewhere)
    let (mac, other) = match code {
        "Control" => ("⌃", "Ctrl"),
        "Alt" => ("⌥", "Alt"),
        "Shift" => ("⇧", "Shift"),
        "Meta" => ("⌘", "Win"),
        "Enter" => ("↵", "Enter"),
        "Escape" => ("⎋", "Esc"),
        "Backspace" => ("⌫", "Backspace"),
        "Tab" => ("⇥", "Tab"),
        "Space" => ("Space", "Space"),
        "ArrowUp" => ("↑", "↑"),
        "ArrowDown" => ("↓", "↓"),
        "ArrowLeft" => ("←", "←"),
        "ArrowRight" => ("→", "→"),
        "Minus" => ("-", "-"),
        "Equal" => ("=", "="),
        "BracketLeft" => ("[", "["),
        "BracketRight" => ("]", "]"),
        "Backslash" => ("\\", "\\"),
        "Semicolon" => (";", ";"),
        "Quote" => ("'", "'"),
        "Backquote" => ("`", "`"),
        "Comma" => (",", ","),
        "Period" => (".", "."),
        "Slash" => ("/", "/"),
        _ => (code, code),
    };
    let name = match platform {
        Platform::MacOs => mac,
        Platform::Other => other,
    };
    name.to_string()
}

/// Physical code of the key that prints `c` on a US layout, and whether
/// shift is needed to print it. Covers space and punctuation only.
pub fn symbol_code(c: char) -> Option<(&'static str, bool)> {
    let entry = match c {
        ' ' => ("Space", false),
        '-' => ("Minus", false),
        '_' => ("Minus", true),
        '=' => ("Equal", false),
        '+' => ("Equal", true),
        '[' => ("BracketLeft", false),
        '{' => ("BracketLeft", true),
        ']' => ("BracketRight", false),
        '}' => ("BracketRight", true),
        '\\' => ("Backslash", false),
        '|' => ("Backslash", true),
        ';' => ("Semicolon", false),
        ':' => ("Semicolon", true),
        '\'' => ("Quote", false),
        '"' => ("Quote", true),
        '`' => ("Backquote", false),
        '~' => ("Backquote", true),
        ',' => ("Comma", false),
        '<' => ("Comma", true),
        '.' => ("Period", false),
        '>' => ("Period", true),
        '/' => ("Slash", false),
        '?' => ("Slash", true),
        '!' => ("Digit1", true),
        '@' => ("Digit2", true),
        '#' => ("Digit3", true),
        '$' => ("Digit4", true),
        '%' => ("Digit5", true),
        '^' => ("Digit6", true),
        '&' => ("Digit7", true),
        '*' => ("Digit8", true),
        '(' => ("Digit9", true),
        ')' => ("Digit0", true),
        _ => return None,
    };
    Some(entry)
}

/// Normalize a host-facing key name ("Q", "7", "-", "Enter") to a physical
/// key code, plus whether the name implies shift (`"+"` is shifted `Equal`).
///
/// Single ASCII letters map to `KeyX`, single digits to `DigitN` and single
/// symbols through [`symbol_code`]; anything else is assumed to already be
/// a code.
pub fn key_code_from_name(name: &str) -> (String, bool) {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            (format!("Key{}", c.to_ascii_uppercase()), false)
        }
        (Some(c), None) if c.is_ascii_digit() => (format!("Digit{}", c), false),
        (Some(c), None) => match symbol_code(c) {
            Some((code, shifted)) => (code.to_string(), shifted),
            None => (name.to_string(), false),
        },
        _ => (name.to_string(), false),
    }
}
