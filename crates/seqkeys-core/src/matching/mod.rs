// Seqkeys Matching Module
// Incremental matching of typed chords against registered sequences

pub mod engine;
pub mod registration;

pub use engine::{HotkeyManager, MatchOutcome};
pub use registration::Registration;
