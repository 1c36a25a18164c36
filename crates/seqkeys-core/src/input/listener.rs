// Seqkeys Input Layer - Chord Listener
// Coalesces raw keydown/keyup events into one chord per physical press

use std::cell::RefCell;
use std::rc::Rc;

use super::event::{EventType, RawKeyEvent};
use super::host::{InputHost, ListenerId, Phase};
use crate::modifier::is_modifier;
use crate::trigger::ChordConsumer;
use crate::KeyChord;

struct ListenerState<C> {
    consumer: C,
    last_keydown: Option<RawKeyEvent>,
}

impl<C: ChordConsumer> ListenerState<C> {
    fn on_keydown(&mut self, event: &mut RawKeyEvent) {
        self.last_keydown = Some(event.clone());
        // Modifier-only presses resolve on keyup
        if is_modifier(&event.code) {
            return;
        }
        self.chord_press(event);
    }

    fn on_keyup(&mut self, event: &mut RawKeyEvent) {
        self.chord_press(event);
    }

    /// Emit the remembered keydown as a chord. Suppression is applied to the
    /// event currently being handled, which for a modifier-only chord is the
    /// keyup.
    fn chord_press(&mut self, event: &mut RawKeyEvent) {
        let Some(keydown) = self.last_keydown.take() else {
            return;
        };
        let chord = KeyChord::from_event(&keydown);
        log::trace!("Chord press: {}", chord.to_canonical_string());
        if self.consumer.consume(&chord) {
            event.prevent_default();
            event.stop_propagation();
        }
    }
}

/// Watches a host's key events at the capture phase and forwards exactly
/// one `KeyChord` per physical chord press to a consumer.
///
/// Holding a key sends one chord for the first keydown and one per
/// auto-repeat; releasing it sends nothing more. A modifier pressed and
/// released on its own sends a chord with an empty key on release.
pub struct ChordListener<C: ChordConsumer + 'static> {
    state: Rc<RefCell<ListenerState<C>>>,
    keydown_id: Option<ListenerId>,
    keyup_id: Option<ListenerId>,
}

impl<C: ChordConsumer + 'static> ChordListener<C> {
    /// Register capture-phase keydown and keyup handlers on `host`
    pub fn new<H: InputHost + ?Sized>(host: &mut H, consumer: C) -> Self {
        let state = Rc::new(RefCell::new(ListenerState {
            consumer,
            last_keydown: None,
        }));

        let down = Rc::clone(&state);
        let keydown_id = host.add_listener(
            EventType::KeyDown,
            Phase::Capture,
            Box::new(move |event: &mut RawKeyEvent| down.borrow_mut().on_keydown(event)),
        );
        let up = Rc::clone(&state);
        let keyup_id = host.add_listener(
            EventType::KeyUp,
            Phase::Capture,
            Box::new(move |event: &mut RawKeyEvent| up.borrow_mut().on_keyup(event)),
        );
        log::debug!("Chord listener attached");

        Self {
            state,
            keydown_id: Some(keydown_id),
            keyup_id: Some(keyup_id),
        }
    }

    /// Remove both handlers from `host`. Calling this again is a no-op.
    pub fn destruct<H: InputHost + ?Sized>(&mut self, host: &mut H) {
        let mut removed = false;
        if let Some(id) = self.keydown_id.take() {
            removed |= host.remove_listener(id);
        }
        if let Some(id) = self.keyup_id.take() {
            removed |= host.remove_listener(id);
        }
        self.state.borrow_mut().last_keydown = None;
        if removed {
            log::debug!("Chord listener detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.keydown_id.is_some() || self.keyup_id.is_some()
    }

    /// The keydown held back waiting for its release, if any
    pub fn pending_keydown(&self) -> Option<RawKeyEvent> {
        self.state.borrow().last_keydown.clone()
    }

    /// Run `f` against the consumer
    pub fn with_consumer<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.state.borrow_mut().consumer)
    }
}

impl<C: ChordConsumer + 'static> Drop for ChordListener<C> {
    fn drop(&mut self) {
        if self.is_attached() {
            log::warn!("Chord listener dropped while attached; its handlers stay on the host");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EventHub;

    type Seen = Rc<RefCell<Vec<String>>>;

    fn recording_listener(
        hub: &mut EventHub,
        consume: bool,
    ) -> (ChordListener<impl ChordConsumer + 'static>, Seen) {
        let seen: Seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let listener = ChordListener::new(hub, move |chord: &KeyChord| {
            sink.borrow_mut().push(chord.to_canonical_string());
            consume
        });
        (listener, seen)
    }

    #[test]
    fn test_plain_key_fires_on_keydown() {
        let mut hub = EventHub::new();
        let (mut listener, seen) = recording_listener(&mut hub, false);

        hub.dispatch(RawKeyEvent::keydown("KeyA"));
        assert_eq!(*seen.borrow(), vec!["KeyA"]);

        hub.dispatch(RawKeyEvent::keyup("KeyA"));
        assert_eq!(seen.borrow().len(), 1);
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_modified_key_single_chord() {
        let mut hub = EventHub::new();
        let (mut listener, seen) = recording_listener(&mut hub, false);

        hub.dispatch(RawKeyEvent::keydown("ControlLeft").with_ctrl(true));
        hub.dispatch(RawKeyEvent::keydown("KeyQ").with_ctrl(true));
        hub.dispatch(RawKeyEvent::keyup("KeyQ").with_ctrl(true));
        hub.dispatch(RawKeyEvent::keyup("ControlLeft"));

        assert_eq!(*seen.borrow(), vec!["C-KeyQ"]);
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_modifier_alone_fires_on_keyup() {
        let mut hub = EventHub::new();
        let (mut listener, seen) = recording_listener(&mut hub, false);

        hub.dispatch(RawKeyEvent::keydown("ShiftLeft").with_shift(true));
        assert!(seen.borrow().is_empty());
        assert!(listener.pending_keydown().is_some());

        hub.dispatch(RawKeyEvent::keyup("ShiftLeft"));
        assert_eq!(*seen.borrow(), vec!["S-"]);
        assert!(listener.pending_keydown().is_none());
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_auto_repeat_fires_each_time() {
        let mut hub = EventHub::new();
        let (mut listener, seen) = recording_listener(&mut hub, false);

        hub.dispatch(RawKeyEvent::keydown("KeyJ"));
        hub.dispatch(RawKeyEvent::new(crate::Action::Repeat, "KeyJ"));
        hub.dispatch(RawKeyEvent::new(crate::Action::Repeat, "KeyJ"));
        hub.dispatch(RawKeyEvent::keyup("KeyJ"));

        assert_eq!(seen.borrow().len(), 3);
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_consumed_chord_is_suppressed() {
        let mut hub = EventHub::new();
        let (mut listener, _seen) = recording_listener(&mut hub, true);

        let event = hub.dispatch(RawKeyEvent::keydown("KeyA"));
        assert!(event.is_default_prevented());
        assert!(event.is_propagation_stopped());
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_passed_chord_is_untouched() {
        let mut hub = EventHub::new();
        let (mut listener, _seen) = recording_listener(&mut hub, false);

        let event = hub.dispatch(RawKeyEvent::keydown("KeyA"));
        assert!(!event.is_default_prevented());
        assert!(!event.is_propagation_stopped());
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_consumed_modifier_chord_suppresses_keyup() {
        let mut hub = EventHub::new();
        let (mut listener, _seen) = recording_listener(&mut hub, true);

        let down = hub.dispatch(RawKeyEvent::keydown("AltLeft").with_alt(true));
        assert!(!down.is_default_prevented());
        let up = hub.dispatch(RawKeyEvent::keyup("AltLeft"));
        assert!(up.is_default_prevented());
        listener.destruct(&mut hub);
    }

    #[test]
    fn test_destruct_removes_handlers() {
        let mut hub = EventHub::new();
        let (mut listener, seen) = recording_listener(&mut hub, false);
        assert_eq!(hub.listener_count(), 2);
        assert!(listener.is_attached());

        listener.destruct(&mut hub);
        assert!(!listener.is_attached());
        assert!(hub.is_empty());

        hub.dispatch(RawKeyEvent::keydown("KeyA"));
        assert!(seen.borrow().is_empty());

        listener.destruct(&mut hub);
        assert!(hub.is_empty());
    }

    #[test]
    fn test_with_consumer() {
        let mut hub = EventHub::new();
        let count = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&count);
        let mut listener = ChordListener::new(&mut hub, move |_chord: &KeyChord| {
            *counter.borrow_mut() += 1;
            false
        });

        hub.dispatch(RawKeyEvent::keydown("KeyA"));
        let consumed = listener.with_consumer(|c| c.consume(&KeyChord::new("KeyB")));
        assert!(!consumed);
        assert_eq!(*count.borrow(), 2);
        listener.destruct(&mut hub);
    }
}
