// Seqkeys Input Layer - Listener Host
// Registration of key handlers and two-phase event delivery

use super::event::{EventType, RawKeyEvent};

/// Delivery phase. Capture handlers see an event before any bubble handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Capture,
    Bubble,
}

/// Handle returned by `InputHost::add_listener`, used to remove the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type KeyHandler = Box<dyn FnMut(&mut RawKeyEvent)>;

/// Anything that can deliver keydown/keyup events to registered handlers
pub trait InputHost {
    fn add_listener(&mut self, event_type: EventType, phase: Phase, handler: KeyHandler)
        -> ListenerId;

    /// Returns false if the id was not registered
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

struct Registered {
    id: ListenerId,
    event_type: EventType,
    phase: Phase,
    handler: KeyHandler,
}

/// In-process listener host.
///
/// `dispatch` runs every capture handler for the event's type in
/// registration order, then every bubble handler. Once a handler stops
/// propagation no later handler runs.
#[derive(Default)]
pub struct EventHub {
    next_id: u64,
    listeners: Vec<Registered>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event and hand it back with whatever flags handlers set
    pub fn dispatch(&mut self, mut event: RawKeyEvent) -> RawKeyEvent {
        let event_type = event.event_type();
        for phase in [Phase::Capture, Phase::Bubble] {
            for entry in self
                .listeners
                .iter_mut()
                .filter(|l| l.phase == phase && l.event_type == event_type)
            {
                (entry.handler)(&mut event);
                if event.is_propagation_stopped() {
                    log::trace!(
                        "Propagation of {} {} stopped in {:?} phase",
                        event.code,
                        event.action,
                        phase
                    );
                    return event;
                }
            }
        }
        event
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl InputHost for EventHub {
    fn add_listener(
        &mut self,
        event_type: EventType,
        phase: Phase,
        handler: KeyHandler,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Registered {
            id,
            event_type,
            phase,
            handler,
        });
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }
}
