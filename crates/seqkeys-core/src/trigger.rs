// Seqkeys Trigger Traits
// Capabilities the engine fires into and the listener feeds chords to

use crate::KeyChord;

/// Receives the action id of a completed sequence.
///
/// The matching engine calls `fire` synchronously, exactly once per
/// completed exact match, and never batches. Implementations must not
/// assume the engine guards against re-entrancy.
pub trait Trigger {
    fn fire(&mut self, id: &str);
}

impl<F> Trigger for F
where
    F: FnMut(&str),
{
    fn fire(&mut self, id: &str) {
        self(id)
    }
}

/// Consumes one logical chord press.
///
/// Returns true when the chord was meaningfully consumed and the physical
/// key's default behavior should be suppressed; false to let it through.
pub trait ChordConsumer {
    fn consume(&mut self, chord: &KeyChord) -> bool;
}

impl<F> ChordConsumer for F
where
    F: FnMut(&KeyChord) -> bool,
{
    fn consume(&mut self, chord: &KeyChord) -> bool {
        self(chord)
    }
}
