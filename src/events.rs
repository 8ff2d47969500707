//! Discrete signals the core emits for presentation (audio cues, window
//! caption). Pushed during input handling and ticks, drained once a frame.
//! Nothing in the core waits on or reacts to them.

use crate::phase::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player committed a one-tile move.
    Step,
    /// A dialogue session opened.
    Talk,
    /// The NPC editor panel was shown or hidden.
    MenuToggle,
    /// Free play just began.
    PhaseEnterPlay,
    /// Any phase transition, including the one into play.
    PhaseChanged { phase: Phase },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
