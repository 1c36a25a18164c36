// Seqkeys Sequence Matching Engine
// Consumes one chord at a time against the registered sequences
//
// Per chord:
// - extend the pending sequence and collect registrations it prefixes
// - with no candidates and earlier history, retry from the chord just pressed
// - fire the first-registered exact match, keep waiting, or pass the key through

use smallvec::SmallVec;

use crate::matching::Registration;
use crate::sequence::sequence_to_canonical_string;
use crate::trigger::{ChordConsumer, Trigger};
use crate::KeyChord;

/// Result of consuming a single chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Mid-sequence: the pending chords prefix at least one registration
    Pending,
    /// A registration matched exactly; its trigger has been fired
    Fired(String),
    /// Nothing matches; the key must pass through untouched
    PassThrough,
}

impl MatchOutcome {
    /// True if the caller should suppress the key's default behavior
    pub fn is_consumed(&self) -> bool {
        !matches!(self, MatchOutcome::PassThrough)
    }
}

/// The sequence matching engine.
///
/// Owns the registration set and the pending-sequence cursor. The machine is
/// either idle (nothing pending) or pending (the chords typed so far prefix
/// at least one registration); every chord is classified as continue, fire
/// and reset, or reset and pass through. There are no error paths.
///
/// Nothing here detects conflicting registrations. When several
/// registrations match exactly at the same length, the one registered first
/// wins.
pub struct HotkeyManager<T: Trigger> {
    trigger: T,
    registrations: Vec<Registration>,
    /// Chords typed since the last trigger or mismatch
    pending: SmallVec<[KeyChord; 4]>,
}

impl<T: Trigger> HotkeyManager<T> {
    /// Create an engine with no registrations that fires into `trigger`
    pub fn new(trigger: T) -> Self {
        Self {
            trigger,
            registrations: Vec::new(),
            pending: SmallVec::new(),
        }
    }

    /// Register an additional binding.
    ///
    /// Never replaces: a second call with the same id adds another sequence
    /// for that action. An empty sequence can never match and is skipped.
    pub fn add_hotkey(&mut self, id: impl Into<String>, chords: Vec<KeyChord>) {
        let id = id.into();
        if chords.is_empty() {
            log::warn!("Ignoring empty chord sequence for '{}'", id);
            return;
        }
        log::debug!(
            "Registering '{}' -> [{}]",
            id,
            sequence_to_canonical_string(&chords)
        );
        self.registrations.push(Registration::new(id, chords));
    }

    /// Remove every registration bound to `id` (no-op if there are none)
    pub fn remove_hotkey(&mut self, id: &str) {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id() != id);
        let removed = before - self.registrations.len();
        if removed > 0 {
            log::debug!("Removed {} registration(s) for '{}'", removed, id);
        }
    }

    /// Drop every registration and the pending sequence.
    ///
    /// Afterwards the engine behaves as if newly constructed.
    pub fn reset(&mut self) {
        log::debug!(
            "Resetting hotkeys ({} registrations dropped)",
            self.registrations.len()
        );
        self.registrations.clear();
        self.pending.clear();
    }

    /// Consume one chord press.
    ///
    /// Returns true if the key was consumed (sequence continued or completed)
    /// and its default behavior should be suppressed, false if it must pass
    /// through.
    pub fn handle_chord_press(&mut self, chord: KeyChord) -> bool {
        self.process_chord(chord).is_consumed()
    }

    /// Consume one chord press and report what happened
    pub fn process_chord(&mut self, chord: KeyChord) -> MatchOutcome {
        self.pending.push(chord);
        let mut candidates = self.candidates();

        // A chord that breaks the sequence in progress may start a new one
        if candidates.is_empty() && self.pending.len() > 1 {
            let last = self.pending.len() - 1;
            self.pending.drain(..last);
            log::trace!(
                "Sequence broken, restarting from {}",
                sequence_to_canonical_string(&self.pending)
            );
            candidates = self.candidates();
        }

        if candidates.is_empty() {
            log::trace!(
                "No match for {}, passing through",
                sequence_to_canonical_string(&self.pending)
            );
            self.pending.clear();
            return MatchOutcome::PassThrough;
        }

        // Candidates are in registration order, so the first exact one wins
        let exact = candidates
            .iter()
            .copied()
            .find(|&i| self.registrations[i].len() == self.pending.len());

        match exact {
            Some(index) => {
                self.pending.clear();
                let id = self.registrations[index].id().to_string();
                log::debug!("Sequence complete, firing '{}'", id);
                self.trigger.fire(&id);
                MatchOutcome::Fired(id)
            }
            None => {
                log::trace!(
                    "Pending {} ({} candidate(s))",
                    sequence_to_canonical_string(&self.pending),
                    candidates.len()
                );
                MatchOutcome::Pending
            }
        }
    }

    /// Indices of registrations prefixed by the pending sequence, in registration order
    fn candidates(&self) -> SmallVec<[usize; 8]> {
        self.registrations
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_prefixed_by(&self.pending))
            .map(|(i, _)| i)
            .collect()
    }

    /// Chords typed so far in the sequence in progress
    pub fn pending(&self) -> &[KeyChord] {
        &self.pending
    }

    /// True while mid-sequence
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// All registrations, in registration order
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn trigger_mut(&mut self) -> &mut T {
        &mut self.trigger
    }
}

impl<T: Trigger> ChordConsumer for HotkeyManager<T> {
    fn consume(&mut self, chord: &KeyChord) -> bool {
        self.handle_chord_press(chord.clone())
    }
}
