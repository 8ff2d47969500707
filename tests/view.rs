use introquest::engine::{Color, editor_input_for};
use introquest::editor::EditorInput;
use introquest::game::Game;
use introquest::geometry::Position;
use introquest::grid::ObstacleGrid;
use introquest::input::{Control, KeyCode};
use introquest::view::*;
use std::time::Duration;

fn enter_play(game: &mut Game) {
    for _ in 0..3 {
        game.key_down(Control::Confirm, Duration::ZERO);
        game.key_up(Control::Confirm);
    }
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Color::from_hex("#ffffff"), Some(Color::WHITE));
    assert_eq!(Color::from_hex("000000"), Some(Color::BLACK));
    assert_eq!(Color::from_hex("#4a9eff"), Some(Color::rgb8(0x4a, 0x9e, 0xff)));
    assert_eq!(Color::from_hex("#fff"), None);
    assert_eq!(Color::from_hex("#gg0000"), None);
}

#[test]
fn obstacle_kinds_on_village() {
    let g = ObstacleGrid::village();
    assert_eq!(obstacle_kind(&g, Position::new(0, 4)), ObstacleKind::Fence);
    assert_eq!(obstacle_kind(&g, Position::new(3, 2)), ObstacleKind::House);
    assert_eq!(obstacle_kind(&g, Position::new(9, 9)), ObstacleKind::Rock);
    assert_eq!(obstacle_kind(&g, Position::new(6, 9)), ObstacleKind::Tree);
}

#[test]
fn title_screen_draws_nothing_and_captions_prompt() {
    let game = Game::default();
    let snap = game.snapshot();
    assert!(build_scene(&snap, 32.0).is_empty());
    assert!(caption(&snap, "INTRO QUEST").contains("Press Enter"));
}

#[test]
fn play_scene_covers_the_map() {
    let mut game = Game::default();
    enter_play(&mut game);
    game.key_down(Control::Confirm, Duration::ZERO);
    let snap = game.snapshot();
    let quads = build_scene(&snap, 32.0);
    assert!(quads.len() >= 16 * 12);
    assert!(quads.iter().all(|q| q.x >= 0.0 && q.y >= 0.0 && q.x + q.w <= 512.0 && q.y + q.h <= 384.0));
}

#[test]
fn dialogue_shows_in_caption_and_adds_message_box() {
    let mut game = Game::default();
    enter_play(&mut game);
    let open = build_scene(&game.snapshot(), 32.0).len();
    let text = caption(&game.snapshot(), "INTRO QUEST");
    assert!(text.starts_with("King Fina: Oh, Wakana... / Fancy"));

    game.key_down(Control::Confirm, Duration::ZERO);
    let closed = build_scene(&game.snapshot(), 32.0).len();
    assert!(open > closed);
}

#[test]
fn editor_draft_takes_over_caption() {
    let mut game = Game::default();
    game.toggle_editor();
    game.editor_input(EditorInput::NextNpc);
    let text = caption(&game.snapshot(), "INTRO QUEST");
    assert!(text.starts_with("[edit King Fina]"));
}

#[test]
fn editor_keys_map_to_inputs() {
    assert_eq!(editor_input_for(KeyCode::Backspace, None), vec![EditorInput::Backspace]);
    assert_eq!(editor_input_for(KeyCode::Enter, Some("\r")), vec![EditorInput::Newline]);
    assert_eq!(editor_input_for(KeyCode::Tab, Some("\t")), vec![EditorInput::NextNpc]);
    assert_eq!(editor_input_for(KeyCode::F5, None), vec![EditorInput::Save]);
    assert_eq!(editor_input_for(KeyCode::Escape, None), vec![EditorInput::Cancel]);
    assert_eq!(editor_input_for(KeyCode::KeyA, Some("a")), vec![EditorInput::Char('a')]);
    assert!(editor_input_for(KeyCode::ShiftLeft, None).is_empty());
}
