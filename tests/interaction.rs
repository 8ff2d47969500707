use introquest::entity::NpcRoster;
use introquest::geometry::Position;
use introquest::interaction::*;

#[test]
fn talk_opens_with_npc_in_reach() {
    let npcs = NpcRoster::village();
    let mut i = Interaction::new();
    let session = i.talk(Position::new(8, 5), &npcs).cloned().unwrap();
    assert_eq!(session.npc_id, 1);
    assert_eq!(session.speaker, "King Fina");
    assert!(i.is_open());
    assert_eq!(i.text(), npcs.get(1).map(|n| n.text.as_str()));
}

#[test]
fn diagonal_neighbour_is_in_reach() {
    let npcs = NpcRoster::village();
    let mut i = Interaction::new();
    assert_eq!(i.talk(Position::new(11, 6), &npcs).map(|s| s.npc_id), Some(2));
}

#[test]
fn talk_out_of_reach_is_noop() {
    let npcs = NpcRoster::village();
    let mut i = Interaction::new();
    assert!(i.talk(Position::new(5, 5), &npcs).is_none());
    assert!(!i.is_open());
}

#[test]
fn talk_while_open_does_not_replace_session() {
    let npcs = NpcRoster::village();
    let mut i = Interaction::new();
    i.talk(Position::new(8, 5), &npcs);
    assert!(i.talk(Position::new(12, 6), &npcs).is_none());
    assert_eq!(i.session().map(|s| s.npc_id), Some(1));
}

#[test]
fn close_reports_whether_anything_closed() {
    let npcs = NpcRoster::village();
    let mut i = Interaction::new();
    assert!(!i.close());
    i.talk(Position::new(8, 5), &npcs);
    assert!(i.close());
    assert!(!i.is_open());
}

#[test]
fn open_with_ignores_distance() {
    let npcs = NpcRoster::village();
    let mut i = Interaction::new();
    let reizo = npcs.get(3).unwrap();
    assert!(i.open_with(reizo));
    assert!(!i.open_with(reizo));
    assert_eq!(i.session().map(|s| s.speaker.as_str()), Some("Reizo"));
}

#[test]
fn roster_order_breaks_ties() {
    let mut npcs = NpcRoster::village().as_slice().to_vec();
    npcs[1].position = Position::new(9, 4);
    let npcs = NpcRoster::new(npcs);
    let mut i = Interaction::new();
    assert_eq!(i.talk(Position::new(9, 5), &npcs).map(|s| s.npc_id), Some(1));
}
