// Seqkeys Config API - Sequence Parser
// Parses sequence strings like "C-KeyW C-KeyQ" into chord lists

use crate::chord::ChordParseError;
use crate::key::Platform;
use crate::modifier::ChordModifier;
use crate::KeyChord;

/// Parse a whitespace-separated list of canonical chords
///
/// Blank input yields an empty sequence, which callers treat as "no binding".
///
/// # Examples
/// ```
/// use seqkeys_core::config::parse_sequence;
/// let chords = parse_sequence("C-KeyW  C-KeyQ").unwrap();
/// assert_eq!(chords.len(), 2);
/// assert!(chords[0].ctrl());
/// assert_eq!(chords[1].key(), "KeyQ");
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<KeyChord>, ChordParseError> {
    text.split_whitespace().map(KeyChord::parse).collect()
}

/// Resolve a host-side modifier name, including the platform-dependent
/// `Mod` (meta on macOS, ctrl elsewhere). Matching ignores ASCII case.
pub fn parse_modifier_alias(alias: &str, platform: Platform) -> Option<ChordModifier> {
    if alias.eq_ignore_ascii_case("mod") {
        return Some(match platform {
            Platform::MacOs => ChordModifier::Meta,
            Platform::Other => ChordModifier::Ctrl,
        });
    }
    let mut normalized = alias.to_ascii_lowercase();
    if let Some(first) = normalized.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    ChordModifier::from_alias(&normalized)
}
