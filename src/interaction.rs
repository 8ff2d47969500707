//! Proximity-triggered dialogue.
//!
//! A session captures the NPC's text when it opens; later edits to that NPC
//! only show up in the next session.

use crate::entity::{Npc, NpcRoster};
use crate::geometry::Position;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueSession {
    pub npc_id: u32,
    pub speaker: String,
    pub text: String,
}

impl DialogueSession {
    fn from_npc(npc: &Npc) -> Self {
        Self { npc_id: npc.id, speaker: npc.name.clone(), text: npc.text.clone() }
    }
}

/// At most one open dialogue session.
#[derive(Debug, Default)]
pub struct Interaction {
    session: Option<DialogueSession>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DialogueSession> {
        self.session.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.text.as_str())
    }

    /// Open a session with the first NPC in reach of `player`. No-op when a
    /// session is already open or nobody is close enough.
    pub fn talk(&mut self, player: Position, npcs: &NpcRoster) -> Option<&DialogueSession> {
        if self.session.is_some() {
            return None;
        }
        let npc = npcs.first_within_reach(player)?;
        self.session = Some(DialogueSession::from_npc(npc));
        self.session.as_ref()
    }

    /// Open a session with `npc` regardless of distance. Refused while
    /// another session is open.
    pub fn open_with(&mut self, npc: &Npc) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DialogueSession::from_npc(npc));
        true
    }

    /// Close the open session. Returns `false` when there was none.
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }
}
