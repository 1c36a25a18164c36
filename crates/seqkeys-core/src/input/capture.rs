// Seqkeys Input Layer - Chord Capture
// Records a new chord sequence from live keydowns

use super::event::RawKeyEvent;
use crate::key::Platform;
use crate::modifier::is_modifier;
use crate::sequence::sequence_to_display_string;
use crate::KeyChord;

/// What a keydown did to an in-progress capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A lone modifier keydown; the chord it belongs to comes later
    Ignored,
    /// A chord was appended
    Updated,
    /// Unmodified Enter: the captured sequence
    Completed(Vec<KeyChord>),
    /// Unmodified Escape
    Cancelled,
}

/// Collects chords for a new binding until Enter or Escape.
///
/// Every keydown it handles is default-prevented and stopped so the host
/// does not act on keys being recorded. Enter and Escape with any modifier
/// held are recorded like any other chord. Once completed or cancelled the
/// capture ignores all further input.
#[derive(Debug, Default, Clone)]
pub struct ChordCapture {
    chords: Vec<KeyChord>,
    done: bool,
}

impl ChordCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_keydown(&mut self, event: &mut RawKeyEvent) -> CaptureOutcome {
        if self.done {
            return CaptureOutcome::Ignored;
        }
        event.prevent_default();
        event.stop_propagation();

        if is_modifier(&event.code) {
            return CaptureOutcome::Ignored;
        }
        if !event.has_modifiers() {
            match event.code.as_str() {
                "Enter" => return CaptureOutcome::Completed(self.finish()),
                "Escape" => {
                    self.chords.clear();
                    self.done = true;
                    return CaptureOutcome::Cancelled;
                }
                _ => {}
            }
        }

        self.push_chord(KeyChord::from_event(event));
        CaptureOutcome::Updated
    }

    /// Append a chord directly, e.g. to bind Enter or Escape themselves
    pub fn push_chord(&mut self, chord: KeyChord) {
        if self.done {
            return;
        }
        log::trace!("Captured {}", chord.to_canonical_string());
        self.chords.push(chord);
    }

    /// Complete the capture and take its chords
    pub fn finish(&mut self) -> Vec<KeyChord> {
        self.done = true;
        std::mem::take(&mut self.chords)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn chords(&self) -> &[KeyChord] {
        &self.chords
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Progress text for a prompt, e.g. "Ctrl+W Ctrl+Q"
    pub fn display(&self, platform: Platform) -> String {
        sequence_to_display_string(&self.chords, platform)
    }
}
