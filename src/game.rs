use std::time::Duration;

use log::{debug, info};

use crate::editor::{self, EditorInput, EditorPanel, NpcSummary};
use crate::entity::{INTRO_NPC_ID, Npc, NpcRoster, PlayerState};
use crate::events::{EventQueue, GameEvent};
use crate::grid::ObstacleGrid;
use crate::input::{Control, InputTracker};
use crate::interaction::{DialogueSession, Interaction};
use crate::movement::{MoveOutcome, MovementEngine};
use crate::phase::{Phase, PhaseMachine};
use crate::ticker::MoveTicker;

/// Movement tick period and minimum time between committed moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    pub tick_period: Duration,
    pub move_cooldown: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(50),
            move_cooldown: Duration::from_millis(150),
        }
    }
}

/// Read-only view of everything presentation needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub player: &'a PlayerState,
    pub npcs: &'a [Npc],
    pub grid: &'a ObstacleGrid,
    pub dialogue: Option<&'a DialogueSession>,
    pub editor: &'a EditorPanel,
}

impl Snapshot<'_> {
    pub fn dialogue_text(&self) -> Option<&str> {
        self.dialogue.map(|s| s.text.as_str())
    }
}

/// Owns the whole session state. Only input dispatch, ticks and the editor
/// contract mutate it; presentation reads it through [`Game::snapshot`].
///
/// All times are offsets from session start.
pub struct Game {
    grid: ObstacleGrid,
    npcs: NpcRoster,
    player: PlayerState,
    phase: PhaseMachine,
    input: InputTracker,
    movement: MovementEngine,
    ticker: MoveTicker,
    dialogue: Interaction,
    editor: EditorPanel,
    events: EventQueue,
    intro_npc: u32,
}

impl Game {
    /// A session on the village map with the default villagers.
    pub fn new(timing: Timing) -> Self {
        Self::with_world(ObstacleGrid::village(), NpcRoster::village(), timing)
    }

    pub fn with_world(grid: ObstacleGrid, npcs: NpcRoster, timing: Timing) -> Self {
        Self {
            grid,
            npcs,
            player: PlayerState::session_start(),
            phase: PhaseMachine::new(),
            input: InputTracker::new(),
            movement: MovementEngine::new(timing.move_cooldown),
            ticker: MoveTicker::new(timing.tick_period),
            dialogue: Interaction::new(),
            editor: EditorPanel::new(),
            events: EventQueue::new(),
            intro_npc: INTRO_NPC_ID,
        }
    }

    /// Choose which NPC speaks first on entering play.
    pub fn with_intro_npc(mut self, id: u32) -> Self {
        self.intro_npc = id;
        self
    }

    /// Return to the title screen with fresh player state. NPC texts are
    /// left as edited.
    pub fn reset(&mut self) {
        self.phase.reset();
        self.player = PlayerState::session_start();
        self.dialogue.close();
        self.input.clear();
        self.ticker.stop();
        self.movement.arm(Duration::ZERO);
        self.events = EventQueue::new();
    }

    /// End of session: cancel the recurring movement tick.
    pub fn shutdown(&mut self) {
        self.ticker.stop();
        self.input.clear();
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase { self.phase.current() }
    pub fn player(&self) -> &PlayerState { &self.player }
    pub fn npcs(&self) -> &NpcRoster { &self.npcs }
    pub fn grid(&self) -> &ObstacleGrid { &self.grid }
    pub fn dialogue(&self) -> Option<&DialogueSession> { self.dialogue.session() }
    pub fn dialogue_text(&self) -> Option<&str> { self.dialogue.text() }
    pub fn editor(&self) -> &EditorPanel { &self.editor }
    pub fn input(&self) -> &InputTracker { &self.input }
    pub fn ticker(&self) -> &MoveTicker { &self.ticker }
    pub fn last_move(&self) -> Duration { self.movement.last_move() }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase.current(),
            player: &self.player,
            npcs: self.npcs.as_slice(),
            grid: &self.grid,
            dialogue: self.dialogue.session(),
            editor: &self.editor,
        }
    }

    /// Signals emitted since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    // ── Input dispatch ─────────────────────────────────────────────────────

    /// Handle a key-down for `control`. Movement is held state: any press in
    /// play (repeats included) holds the direction. Every other control fires
    /// once per press; repeats of a control already down are ignored.
    pub fn key_down(&mut self, control: Control, now: Duration) {
        let fresh = self.input.press(control);
        if let Control::Move(dir) = control {
            if self.phase.current().is_play() {
                self.input.hold(dir);
            }
            return;
        }
        if !fresh {
            return;
        }
        match control {
            Control::Move(_) => {}
            Control::Talk => self.talk(),
            Control::Confirm => self.confirm(now),
            Control::ToggleEditor => self.toggle_editor(),
            // Sound is a presentation concern; the core has nothing to do.
            Control::ToggleSound => {}
        }
    }

    pub fn key_up(&mut self, control: Control) {
        self.input.release(control);
    }

    /// Treat every key as released, e.g. after the window loses focus.
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Talk to the first NPC in reach. Only in play and only with no open
    /// dialogue.
    pub fn talk(&mut self) {
        if !self.phase.current().is_play() {
            return;
        }
        if let Some(session) = self.dialogue.talk(self.player.position, &self.npcs) {
            info!("dialogue opened with {} (npc {})", session.speaker, session.npc_id);
            self.events.push(GameEvent::Talk);
        }
    }

    /// Confirm: closing an open dialogue takes priority over advancing the
    /// phase, so the intro can never be skipped from inside a dialogue.
    pub fn confirm(&mut self, now: Duration) {
        if self.dialogue.close() {
            info!("dialogue closed");
            return;
        }
        self.advance_phase(now);
    }

    fn advance_phase(&mut self, now: Duration) {
        let Some(next) = self.phase.advance() else {
            return;
        };
        info!("phase -> {next:?}");
        self.events.push(GameEvent::PhaseChanged { phase: next });

        if !next.is_play() {
            self.input.clear_moves();
            self.ticker.stop();
            return;
        }

        self.player = PlayerState::play_start();
        self.input.hold_down_moves();
        self.movement.arm(now);
        self.ticker.start(now);
        self.events.push(GameEvent::PhaseEnterPlay);

        if self.phase.take_first_play_entry() {
            if let Some(npc) = self.npcs.get(self.intro_npc) {
                if self.dialogue.open_with(npc) {
                    info!("intro dialogue opened with {}", npc.name);
                    self.events.push(GameEvent::Talk);
                }
            }
        }
    }

    // ── Movement ───────────────────────────────────────────────────────────

    /// Run every movement tick that has come due by `now`. Returns how many
    /// ticks ran.
    pub fn advance_clock(&mut self, now: Duration) -> u32 {
        if !self.phase.current().is_play() {
            self.ticker.stop();
            return 0;
        }
        let due = self.ticker.poll(now);
        for _ in 0..due {
            self.tick(now);
        }
        due
    }

    /// One movement tick at `now`, regardless of the schedule.
    pub fn tick(&mut self, now: Duration) -> MoveOutcome {
        if self.dialogue.is_open() || !self.phase.current().is_play() {
            return MoveOutcome::Suspended;
        }
        let held = self.input.held_direction();
        let outcome = self.movement.tick(now, held, &mut self.player, &self.grid, &self.npcs);
        match outcome {
            MoveOutcome::Moved { from, to, .. } => {
                debug!("moved ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
                self.events.push(GameEvent::Step);
            }
            MoveOutcome::Blocked { target, reason, .. } => {
                debug!("move to ({}, {}) refused: {reason:?}", target.x, target.y);
            }
            _ => {}
        }
        outcome
    }

    // ── Editor ─────────────────────────────────────────────────────────────

    pub fn list_npcs(&self) -> Vec<NpcSummary> {
        editor::list_npcs(&self.npcs)
    }

    /// Replace an NPC's text. An open dialogue keeps the text it opened with.
    pub fn set_npc_text(&mut self, id: u32, text: &str) {
        editor::set_text(&mut self.npcs, id, text);
    }

    pub fn toggle_editor(&mut self) {
        let visible = self.editor.toggle();
        info!("npc editor {}", if visible { "shown" } else { "hidden" });
        self.events.push(GameEvent::MenuToggle);
    }

    /// Route a key to the editor panel. Ignored while the panel is hidden.
    pub fn editor_input(&mut self, input: EditorInput) -> bool {
        if !self.editor.is_visible() {
            return false;
        }
        self.editor.apply(input, &mut self.npcs)
    }
}

impl Default for Game {
    fn default() -> Self { Self::new(Timing::default()) }
}
