use introquest::editor::*;
use introquest::entity::NpcRoster;
use introquest::geometry::Position;

#[test]
fn list_npcs_is_in_roster_order() {
    let roster = NpcRoster::village();
    let list = list_npcs(&roster);
    let names: Vec<&str> = list.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["King Fina", "Hartech", "Reizo"]);
    assert_eq!(list[0].color, "#4a9eff");
}

#[test]
fn set_text_replaces_verbatim_and_keeps_position() {
    let mut roster = NpcRoster::village();
    set_text(&mut roster, 2, "line one\nline two");
    let npc = roster.get(2).unwrap();
    assert_eq!(npc.text, "line one\nline two");
    assert_eq!(npc.position, Position::new(12, 7));
}

#[test]
fn set_text_for_unknown_id_is_noop() {
    let mut roster = NpcRoster::village();
    let before = list_npcs(&roster);
    set_text(&mut roster, 99, "nobody");
    assert_eq!(list_npcs(&roster), before);
}

#[test]
fn panel_starts_hidden_and_hiding_drops_draft() {
    let roster = NpcRoster::village();
    let mut panel = EditorPanel::new();
    assert!(!panel.is_visible());
    assert!(panel.toggle());
    assert!(panel.begin_edit(&roster, 1));
    assert!(panel.draft().is_some());
    assert!(!panel.toggle());
    assert!(panel.draft().is_none());
}

#[test]
fn next_npc_cycles_and_wraps() {
    let mut roster = NpcRoster::village();
    let mut panel = EditorPanel::new();
    let mut ids = Vec::new();
    for _ in 0..4 {
        panel.apply(EditorInput::NextNpc, &mut roster);
        ids.push(panel.draft().unwrap().npc_id);
    }
    assert_eq!(ids, [1, 2, 3, 1]);
}

#[test]
fn typing_then_save_writes_through() {
    let mut roster = NpcRoster::village();
    let mut panel = EditorPanel::new();
    panel.begin_edit(&roster, 3);
    for _ in 0..roster.get(3).unwrap().text.chars().count() {
        panel.apply(EditorInput::Backspace, &mut roster);
    }
    for ch in "Hi".chars() {
        panel.apply(EditorInput::Char(ch), &mut roster);
    }
    panel.apply(EditorInput::Newline, &mut roster);
    panel.apply(EditorInput::Char('!'), &mut roster);
    assert!(panel.apply(EditorInput::Save, &mut roster));
    assert_eq!(roster.get(3).unwrap().text, "Hi\n!");
    assert!(panel.draft().is_none());
}

#[test]
fn cancel_discards_draft() {
    let mut roster = NpcRoster::village();
    let original = roster.get(1).unwrap().text.clone();
    let mut panel = EditorPanel::new();
    panel.begin_edit(&roster, 1);
    panel.apply(EditorInput::Char('x'), &mut roster);
    assert!(panel.apply(EditorInput::Cancel, &mut roster));
    assert_eq!(roster.get(1).unwrap().text, original);
}

#[test]
fn input_without_draft_changes_nothing() {
    let mut roster = NpcRoster::village();
    let mut panel = EditorPanel::new();
    assert!(!panel.apply(EditorInput::Char('a'), &mut roster));
    assert!(!panel.apply(EditorInput::Backspace, &mut roster));
    assert!(!panel.apply(EditorInput::Save, &mut roster));
}

#[test]
fn control_characters_are_rejected() {
    let mut roster = NpcRoster::village();
    let mut panel = EditorPanel::new();
    panel.begin_edit(&roster, 1);
    assert!(!panel.apply(EditorInput::Char('\u{7}'), &mut roster));
}

#[test]
fn draft_is_capped() {
    let mut roster = NpcRoster::village();
    let mut panel = EditorPanel::new();
    panel.begin_edit(&roster, 1);
    for _ in 0..MAX_DRAFT_CHARS + 10 {
        panel.apply(EditorInput::Char('a'), &mut roster);
    }
    assert_eq!(panel.draft().unwrap().text.chars().count(), MAX_DRAFT_CHARS);
}
