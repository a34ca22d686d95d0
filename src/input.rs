//! Keyboard seam
//!
//! The host polls its keyboard and reports, per action, whether the key
//! went down this frame (edge) and whether it is down at all (level).

use crate::sim::TickInput;

/// Game actions the host maps physical keys onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
    Pause,
    Confirm,
    Restart,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::Thrust,
        Action::Fire,
        Action::Pause,
        Action::Confirm,
        Action::Restart,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// State of one key for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// Went down this frame
    pub pressed: bool,
    /// Is down
    pub held: bool,
}

/// Host keyboard query
pub trait Keyboard {
    fn key(&self, action: Action) -> KeyState;

    fn pressed(&self, action: Action) -> bool {
        self.key(action).pressed
    }

    fn held(&self, action: Action) -> bool {
        self.key(action).held
    }
}

/// Fixed per-frame keyboard state, for headless hosts and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    keys: [KeyState; Action::ALL.len()],
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down this frame (also counts as held)
    pub fn press(mut self, action: Action) -> Self {
        self.keys[action.index()] = KeyState {
            pressed: true,
            held: true,
        };
        self
    }

    /// Key is down but was already down last frame
    pub fn hold(mut self, action: Action) -> Self {
        self.keys[action.index()].held = true;
        self
    }
}

impl Keyboard for KeySnapshot {
    fn key(&self, action: Action) -> KeyState {
        self.keys[action.index()]
    }
}

impl TickInput {
    /// Steering and thrust are level-triggered; firing is edge-triggered
    pub fn from_keyboard(keys: &impl Keyboard) -> Self {
        Self {
            turn_left: keys.held(Action::TurnLeft),
            turn_right: keys.held(Action::TurnRight),
            thrust: keys.held(Action::Thrust),
            fire: keys.pressed(Action::Fire),
        }
    }
}
