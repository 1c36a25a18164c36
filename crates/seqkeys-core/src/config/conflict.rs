// Seqkeys Config API - Conflict Detection
// Advisory checks for bindings that shadow or duplicate each other

use std::fmt;

use super::store::HotkeyEntry;
use crate::sequence::{chords_equal, chords_prefix_equal, sequence_to_canonical_string};
use crate::KeyChord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Both bindings use the identical sequence; the earlier one wins
    Exact,
    /// One sequence is a strict prefix of the other; the shorter one always
    /// fires first, so the longer is unreachable
    Prefix,
}

/// A pair of bindings whose sequences collide, in configuration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub first: HotkeyEntry,
    pub second: HotkeyEntry,
    pub kind: ConflictKind,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = sequence_to_canonical_string(&self.first.chords);
        let second = sequence_to_canonical_string(&self.second.chords);
        match self.kind {
            ConflictKind::Exact => write!(
                f,
                "'{}' and '{}' are both bound to [{}]",
                self.first.command, self.second.command, first
            ),
            ConflictKind::Prefix => write!(
                f,
                "'{}' [{}] and '{}' [{}] overlap; the shorter sequence always fires first",
                self.first.command, first, self.second.command, second
            ),
        }
    }
}

fn classify(a: &[KeyChord], b: &[KeyChord]) -> Option<ConflictKind> {
    if a.is_empty() || b.is_empty() {
        None
    } else if chords_equal(a, b) {
        Some(ConflictKind::Exact)
    } else if chords_prefix_equal(a, b) {
        Some(ConflictKind::Prefix)
    } else {
        None
    }
}

/// Compare every pair of entries
pub fn find_conflicts(entries: &[HotkeyEntry]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            if let Some(kind) = classify(&first.chords, &second.chords) {
                conflicts.push(Conflict {
                    first: first.clone(),
                    second: second.clone(),
                    kind,
                });
            }
        }
    }
    conflicts
}

/// Entries a candidate sequence would collide with
pub fn conflicts_with<'a>(entries: &'a [HotkeyEntry], chords: &[KeyChord]) -> Vec<&'a HotkeyEntry> {
    entries
        .iter()
        .filter(|entry| classify(&entry.chords, chords).is_some())
        .collect()
}
