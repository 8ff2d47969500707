use std::time::Duration;

use introquest::entity::{NpcRoster, PlayerState};
use introquest::geometry::{Direction, Position};
use introquest::grid::ObstacleGrid;
use introquest::movement::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn engine() -> MovementEngine {
    MovementEngine::new(ms(150))
}

#[test]
fn cooling_down_before_first_window() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(5, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    assert_eq!(e.tick(ms(100), Some(Direction::Up), &mut p, &g, &n), MoveOutcome::CoolingDown);
    assert_eq!(p.position, Position::new(5, 5));
}

#[test]
fn idle_without_held_key() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(5, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    assert_eq!(e.tick(ms(200), None, &mut p, &g, &n), MoveOutcome::Idle);
    assert_eq!(p.facing, Direction::Down);
}

#[test]
fn committed_move_updates_position_frame_and_timestamp() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(5, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    let out = e.tick(ms(150), Some(Direction::Right), &mut p, &g, &n);
    assert_eq!(
        out,
        MoveOutcome::Moved { from: Position::new(5, 5), to: Position::new(6, 5), facing: Direction::Right }
    );
    assert!(out.moved());
    assert_eq!(p.facing, Direction::Right);
    assert_eq!(p.frame, 1);
    assert_eq!(e.last_move(), ms(150));
}

#[test]
fn blocked_move_turns_but_keeps_position_and_cooldown() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(1, 1), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    let out = e.tick(ms(200), Some(Direction::Left), &mut p, &g, &n);
    assert_eq!(
        out,
        MoveOutcome::Blocked { facing: Direction::Left, target: Position::new(0, 1), reason: BlockReason::Obstacle }
    );
    assert_eq!(p.position, Position::new(1, 1));
    assert_eq!(p.facing, Direction::Left);
    assert_eq!(p.frame, 0);
    assert_eq!(e.last_move(), Duration::ZERO);
}

#[test]
fn npc_cell_is_refused() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(8, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    let out = e.tick(ms(150), Some(Direction::Up), &mut p, &g, &n);
    assert!(matches!(out, MoveOutcome::Blocked { reason: BlockReason::Npc, .. }));
    assert_eq!(p.position, Position::new(8, 5));
}

#[test]
fn leaving_an_open_grid_is_out_of_bounds() {
    let g = ObstacleGrid::from_rows(&[[0u8, 0], [0, 0]]);
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(0, 0), Direction::Down);
    let out = e.tick(ms(150), Some(Direction::Up), &mut p, &g, &NpcRoster::default());
    assert!(matches!(out, MoveOutcome::Blocked { reason: BlockReason::OutOfBounds, .. }));
    assert_eq!(p.position, Position::new(0, 0));
}

#[test]
fn moves_are_spaced_by_cooldown() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(1, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    let mut stamps = Vec::new();
    for t in (0..2_000).step_by(50) {
        if e.tick(ms(t), Some(Direction::Right), &mut p, &g, &n).moved() {
            stamps.push(t);
        }
    }
    assert!(stamps.len() > 1);
    for pair in stamps.windows(2) {
        assert!(pair[1] - pair[0] >= 150);
    }
}

#[test]
fn frame_alternates_per_step() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(1, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    e.tick(ms(150), Some(Direction::Right), &mut p, &g, &n);
    assert_eq!(p.frame, 1);
    e.tick(ms(300), Some(Direction::Right), &mut p, &g, &n);
    assert_eq!(p.frame, 0);
}

#[test]
fn arm_restarts_cooldown_window() {
    let mut e = engine();
    let mut p = PlayerState::new(Position::new(5, 5), Direction::Down);
    let (g, n) = (ObstacleGrid::village(), NpcRoster::village());
    e.arm(ms(1_000));
    assert_eq!(e.tick(ms(1_100), Some(Direction::Down), &mut p, &g, &n), MoveOutcome::CoolingDown);
    assert!(e.tick(ms(1_150), Some(Direction::Down), &mut p, &g, &n).moved());
}
