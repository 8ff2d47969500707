//! Scripted intro phases. The session only ever moves forward:
//! title -> intro1 -> intro2 -> play.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Title,
    Intro1,
    Intro2,
    Play,
}

impl Phase {
    /// The phase an advance action leads to. `Play` is terminal.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Title => Some(Phase::Intro1),
            Phase::Intro1 => Some(Phase::Intro2),
            Phase::Intro2 => Some(Phase::Play),
            Phase::Play => None,
        }
    }

    pub fn is_play(self) -> bool {
        self == Phase::Play
    }
}

/// Current phase plus the one-shot latch for the first entry into play.
#[derive(Debug, Default)]
pub struct PhaseMachine {
    phase: Phase,
    play_entered: bool,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Phase {
        self.phase
    }

    /// Move to the next phase. Returns the new phase, or `None` when already
    /// in the terminal phase.
    pub fn advance(&mut self) -> Option<Phase> {
        let next = self.phase.next()?;
        self.phase = next;
        Some(next)
    }

    /// `true` exactly once per session: the first call made while in play.
    pub fn take_first_play_entry(&mut self) -> bool {
        if self.phase.is_play() && !self.play_entered {
            self.play_entered = true;
            return true;
        }
        false
    }

    /// Back to the title screen with the latch re-armed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
