use std::collections::{HashMap, HashSet};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;

use crate::geometry::Direction;

/// Logical controls the game understands, independent of physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Held-state movement key.
    Move(Direction),
    /// Talk to an adjacent NPC (edge-triggered).
    Talk,
    /// Advance the intro, or close the open dialogue (edge-triggered).
    Confirm,
    /// Show/hide the NPC editor panel.
    ToggleEditor,
    /// Mute/unmute all audio cues and music.
    ToggleSound,
}

/// Held movement keys plus edge detection for every logical control.
///
/// A control is "fresh" only on the press that takes it from up to down;
/// presses of a control that is already down are key-repeat and ignored.
#[derive(Debug, Default)]
pub struct InputTracker {
    /// Movement directions currently held and accepted for movement.
    moves_held: HashSet<Direction>,
    /// Every control currently down, movement included.
    controls_down: HashSet<Control>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns `true` when this is a fresh press.
    pub fn press(&mut self, control: Control) -> bool {
        self.controls_down.insert(control)
    }

    /// Record a key-up. Movement releases always drop the held direction.
    pub fn release(&mut self, control: Control) {
        self.controls_down.remove(&control);
        if let Control::Move(dir) = control {
            self.moves_held.remove(&dir);
        }
    }

    /// Start holding `dir` for the movement engine.
    pub fn hold(&mut self, dir: Direction) {
        self.moves_held.insert(dir);
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.moves_held.contains(&dir)
    }

    pub fn is_down(&self, control: Control) -> bool {
        self.controls_down.contains(&control)
    }

    /// Highest-priority held direction (up > down > left > right).
    pub fn held_direction(&self) -> Option<Direction> {
        Direction::PRIORITY.into_iter().find(|d| self.moves_held.contains(d))
    }

    /// Hold every movement direction whose key is already down, so a key
    /// pressed before movement was accepted takes effect without a re-press.
    pub fn hold_down_moves(&mut self) {
        for control in &self.controls_down {
            if let Control::Move(dir) = control {
                self.moves_held.insert(*dir);
            }
        }
    }

    /// Forget held movement. Edge state for other controls is kept so a key
    /// still physically down cannot fire again without a release.
    pub fn clear_moves(&mut self) {
        self.moves_held.clear();
    }

    /// Forget everything, including which controls are down.
    pub fn clear(&mut self) {
        self.moves_held.clear();
        self.controls_down.clear();
    }
}

/// Maps physical keys to logical actions (defined by the game).
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<KeyCode, A>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    pub fn action_for(&self, key: KeyCode) -> Option<A> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: A) -> Vec<KeyCode> {
        self.bindings
            .iter()
            .filter(|&(_, a)| *a == action)
            .map(|(k, _)| *k)
            .collect()
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

/// Arrows and WASD move, Space talks, Enter confirms, F2 opens the editor,
/// M toggles sound.
pub fn default_bindings() -> ActionMap<Control> {
    let mut map = ActionMap::new();
    map.bind(Control::Move(Direction::Up), KeyCode::ArrowUp);
    map.bind(Control::Move(Direction::Down), KeyCode::ArrowDown);
    map.bind(Control::Move(Direction::Left), KeyCode::ArrowLeft);
    map.bind(Control::Move(Direction::Right), KeyCode::ArrowRight);
    map.bind(Control::Move(Direction::Up), KeyCode::KeyW);
    map.bind(Control::Move(Direction::Down), KeyCode::KeyS);
    map.bind(Control::Move(Direction::Left), KeyCode::KeyA);
    map.bind(Control::Move(Direction::Right), KeyCode::KeyD);
    map.bind(Control::Talk, KeyCode::Space);
    map.bind(Control::Confirm, KeyCode::Enter);
    map.bind(Control::Confirm, KeyCode::NumpadEnter);
    map.bind(Control::ToggleEditor, KeyCode::F2);
    map.bind(Control::ToggleSound, KeyCode::KeyM);
    map
}
