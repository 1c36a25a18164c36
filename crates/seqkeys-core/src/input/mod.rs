// Seqkeys Input Layer
// Raw key events, listener registration and chord coalescing

mod capture;
mod event;
mod host;
mod listener;

#[cfg(feature = "terminal")]
pub mod terminal;

pub use capture::{CaptureOutcome, ChordCapture};
pub use event::{EventType, RawKeyEvent};
pub use host::{EventHub, InputHost, KeyHandler, ListenerId, Phase};
pub use listener::ChordListener;
