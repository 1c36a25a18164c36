// Seqkeys Sequence Utilities
// Pure comparisons over ordered chord lists

use crate::key::Platform;
use crate::KeyChord;

/// Exact sequence equality: same length and equal chords at every position.
///
/// Two empty sequences are equal.
pub fn chords_equal(a: &[KeyChord], b: &[KeyChord]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Partial equality: one sequence is a prefix of the other.
///
/// An empty sequence never partially matches anything, not even another
/// empty sequence: it stands for "no binding", not a wildcard. Two equal
/// sequences satisfy this (the whole is a degenerate prefix).
pub fn chords_prefix_equal(a: &[KeyChord], b: &[KeyChord]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    starts_with(longer, shorter)
}

/// Check whether `sequence` begins with every chord of `prefix`, in order.
pub fn starts_with(sequence: &[KeyChord], prefix: &[KeyChord]) -> bool {
    prefix.len() <= sequence.len() && chords_equal(&sequence[..prefix.len()], prefix)
}

/// Canonical text form of a sequence: canonical chords separated by spaces
pub fn sequence_to_canonical_string(chords: &[KeyChord]) -> String {
    chords
        .iter()
        .map(KeyChord::to_canonical_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human display form of a sequence
pub fn sequence_to_display_string(chords: &[KeyChord], platform: Platform) -> String {
    chords
        .iter()
        .map(|c| c.to_display_string(platform))
        .collect::<Vec<_>>()
        .join(" ")
}
