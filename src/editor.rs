//! NPC dialogue editor.
//!
//! Two layers:
//! - the editor contract ([`list_npcs`], [`set_text`]) that replaces an NPC's
//!   text wholesale and never touches position or collision data;
//! - [`EditorPanel`], the in-game panel that holds a draft while the player
//!   types, in the same spirit as a focused text input: while visible it
//!   consumes keyboard input so gameplay controls do not fire.
//!
//! Editing is allowed in every phase.
use log::info;
use serde::Serialize;

use crate::entity::NpcRoster;

/// Upper bound on draft length, in characters.
pub const MAX_DRAFT_CHARS: usize = 1024;

/// Read-only view of one NPC for the editor listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NpcSummary {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub text: String,
}

/// Every NPC in roster order.
pub fn list_npcs(roster: &NpcRoster) -> Vec<NpcSummary> {
    roster
        .iter()
        .map(|n| NpcSummary {
            id: n.id,
            name: n.name.clone(),
            color: n.color.clone(),
            text: n.text.clone(),
        })
        .collect()
}

/// Replace the text of NPC `id` verbatim (line breaks included). Unknown ids
/// are ignored.
pub fn set_text(roster: &mut NpcRoster, id: u32, text: &str) {
    if roster.set_text(id, text) {
        info!("npc {id} text updated ({} chars)", text.chars().count());
    }
}

/// Keyboard input routed to the panel while it is visible.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorInput {
    Char(char),
    Backspace,
    Newline,
    /// Start editing the next NPC in roster order (wraps around).
    NextNpc,
    Save,
    Cancel,
}

/// Text being edited for one NPC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub npc_id: u32,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct EditorPanel {
    visible: bool,
    draft: Option<Draft>,
}

impl EditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Show or hide the panel. Hiding drops any unsaved draft.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        if !self.visible {
            self.draft = None;
        }
        self.visible
    }

    /// Load NPC `id`'s current text into the draft. Unknown ids are ignored.
    pub fn begin_edit(&mut self, roster: &NpcRoster, id: u32) -> bool {
        match roster.get(id) {
            Some(npc) => {
                self.draft = Some(Draft { npc_id: id, text: npc.text.clone() });
                true
            }
            None => false,
        }
    }

    /// Apply one input. Returns `true` if the draft or the roster changed.
    pub fn apply(&mut self, input: EditorInput, roster: &mut NpcRoster) -> bool {
        match input {
            EditorInput::NextNpc => {
                let ids: Vec<u32> = roster.iter().map(|n| n.id).collect();
                let next = match &self.draft {
                    Some(d) => ids
                        .iter()
                        .position(|&id| id == d.npc_id)
                        .map(|i| ids[(i + 1) % ids.len()]),
                    None => ids.first().copied(),
                };
                match next {
                    Some(id) => self.begin_edit(roster, id),
                    None => false,
                }
            }
            EditorInput::Save => match self.draft.take() {
                Some(draft) => {
                    set_text(roster, draft.npc_id, &draft.text);
                    true
                }
                None => false,
            },
            EditorInput::Cancel => self.draft.take().is_some(),
            EditorInput::Char(ch) => self.push(ch),
            EditorInput::Newline => self.push('\n'),
            EditorInput::Backspace => match &mut self.draft {
                Some(d) => d.text.pop().is_some(),
                None => false,
            },
        }
    }

    fn push(&mut self, ch: char) -> bool {
        let Some(draft) = &mut self.draft else { return false };
        if ch != '\n' && ch.is_control() {
            return false;
        }
        if draft.text.chars().count() >= MAX_DRAFT_CHARS {
            return false;
        }
        draft.text.push(ch);
        true
    }
}
