use serde::Serialize;

use crate::geometry::{Direction, Position};

/// Where the player stands when a session starts (title screen).
pub const SESSION_START: Position = Position::new(5, 5);
/// Where the player is placed when free play begins.
pub const PLAY_START: Position = Position::new(8, 5);
/// Facing used on entering play.
pub const PLAY_START_FACING: Direction = Direction::Up;
/// The NPC whose dialogue opens by itself on entering play.
pub const INTRO_NPC_ID: u32 = 1;

// ── Player ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub position: Position,
    pub facing: Direction,
    /// Walk animation frame, 0 or 1. Advances only on a committed move.
    pub frame: u8,
}

impl PlayerState {
    pub fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing, frame: 0 }
    }

    pub fn session_start() -> Self {
        Self::new(SESSION_START, Direction::Down)
    }

    pub fn play_start() -> Self {
        Self::new(PLAY_START, PLAY_START_FACING)
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % 2;
    }
}

impl Default for PlayerState {
    fn default() -> Self { Self::session_start() }
}

// ── NPCs ───────────────────────────────────────────────────────────────────

/// A stationary character. Only `text` may change after startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Npc {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub text: String,
    /// CSS-style `#rrggbb` tag used by the renderer.
    pub color: String,
    pub facing: Direction,
}

/// Fixed set of NPCs. Iteration order is insertion order and is the
/// tie-break when several NPCs are in talk range.
#[derive(Clone, Debug, Default)]
pub struct NpcRoster {
    npcs: Vec<Npc>,
}

impl NpcRoster {
    pub fn new(npcs: Vec<Npc>) -> Self {
        Self { npcs }
    }

    /// The three villagers the game starts with.
    pub fn village() -> Self {
        Self::new(vec![
            Npc {
                id: 1,
                name: "King Fina".into(),
                position: Position::new(8, 4),
                text: "Oh, Wakana...\nFancy being sick on the floor. How pitiful.".into(),
                color: "#4a9eff".into(),
                facing: Direction::Down,
            },
            Npc {
                id: 2,
                name: "Hartech".into(),
                position: Position::new(12, 7),
                text: "They say Wakana met her husband through work,\nand they were dating within a month!".into(),
                color: "#ff6b6b".into(),
                facing: Direction::Left,
            },
            Npc {
                id: 3,
                name: "Reizo".into(),
                position: Position::new(3, 9),
                text: "Just between us...\nWakana was quite the handful as a student.\nNever kept a part-time job for a year, kept vanishing.\n\nEveryone was amazed she stayed nine years at her last company."
                    .into(),
                color: "#95e1d3".into(),
                facing: Direction::Right,
            },
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.iter()
    }

    pub fn as_slice(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn len(&self) -> usize { self.npcs.len() }
    pub fn is_empty(&self) -> bool { self.npcs.is_empty() }

    pub fn get(&self, id: u32) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.id == id)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.npcs.iter().any(|n| n.position == pos)
    }

    /// First NPC, in roster order, within one tile of `pos` (diagonals and
    /// the same cell included).
    pub fn first_within_reach(&self, pos: Position) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.position.chebyshev(pos) <= 1)
    }

    /// Replace an NPC's text verbatim. Returns `false` for an unknown id.
    pub(crate) fn set_text(&mut self, id: u32, text: &str) -> bool {
        match self.npcs.iter_mut().find(|n| n.id == id) {
            Some(npc) => {
                npc.text = text.to_string();
                true
            }
            None => false,
        }
    }
}
