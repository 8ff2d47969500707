//! Tile-by-tile player movement.
//!
//! One call to [`MovementEngine::tick`] resolves at most one step. Only the
//! highest-priority held direction is tried; if that cell is blocked the tick
//! ends there and lower-priority keys are not consulted.

use std::time::Duration;

use crate::entity::{NpcRoster, PlayerState};
use crate::geometry::{Direction, Position};
use crate::grid::ObstacleGrid;

/// Why a step attempt did or did not move the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockReason {
    OutOfBounds,
    Obstacle,
    Npc,
}

/// Result of a single movement tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Movement is not active (dialogue open, or not in play).
    Suspended,
    /// Less than one cooldown since the last committed move.
    CoolingDown,
    /// No movement key held.
    Idle,
    /// Turned to face `facing` but the target cell was refused.
    Blocked { facing: Direction, target: Position, reason: BlockReason },
    /// Stepped from `from` to `to`.
    Moved { from: Position, to: Position, facing: Direction },
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Rate-limits committed moves and applies the step rules.
#[derive(Debug, Clone)]
pub struct MovementEngine {
    cooldown: Duration,
    last_move: Duration,
}

impl MovementEngine {
    pub fn new(cooldown: Duration) -> Self {
        Self { cooldown, last_move: Duration::ZERO }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Timestamp of the last committed move (or of the last `arm`).
    pub fn last_move(&self) -> Duration {
        self.last_move
    }

    /// Restart the cooldown window at `now`.
    pub fn arm(&mut self, now: Duration) {
        self.last_move = now;
    }

    /// Resolve one tick for the player.
    pub fn tick(
        &mut self,
        now: Duration,
        held: Option<Direction>,
        player: &mut PlayerState,
        grid: &ObstacleGrid,
        npcs: &NpcRoster,
    ) -> MoveOutcome {
        if now.saturating_sub(self.last_move) < self.cooldown {
            return MoveOutcome::CoolingDown;
        }
        let Some(dir) = held else {
            return MoveOutcome::Idle;
        };

        // Turning in place never needs a free tile.
        player.facing = dir;
        let from = player.position;
        let target = from.step(dir);

        let refused = if !grid.in_bounds(target) {
            Some(BlockReason::OutOfBounds)
        } else if grid.is_blocked(target) {
            Some(BlockReason::Obstacle)
        } else if npcs.occupies(target) {
            Some(BlockReason::Npc)
        } else {
            None
        };
        if let Some(reason) = refused {
            return MoveOutcome::Blocked { facing: dir, target, reason };
        }

        player.position = target;
        player.advance_frame();
        self.last_move = now;
        MoveOutcome::Moved { from, to: target, facing: dir }
    }
}
