// Seqkeys Matching - Registrations
// One action id bound to one ordered chord sequence

use crate::sequence::{sequence_to_canonical_string, starts_with};
use crate::KeyChord;

/// A binding from one opaque action id to an ordered chord sequence.
///
/// Order matters and repeated chords are kept as-is. Several registrations
/// may share an id, and several may share a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: String,
    chords: Vec<KeyChord>,
}

impl Registration {
    pub fn new(id: impl Into<String>, chords: Vec<KeyChord>) -> Self {
        Self {
            id: id.into(),
            chords,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn chords(&self) -> &[KeyChord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// True if `pending` matches this registration's leading chords
    pub fn is_prefixed_by(&self, pending: &[KeyChord]) -> bool {
        starts_with(&self.chords, pending)
    }
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.id, sequence_to_canonical_string(&self.chords))
    }
}
