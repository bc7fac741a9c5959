//! Logical input snapshot
//!
//! The driver samples its input backend once per frame into a `ButtonState`;
//! system passes never talk to the windowing layer directly. Snapshots are
//! plain data so they serialize for recording and replay (see the services
//! crate).

use serde::{Deserialize, Serialize};

/// The closed set of logical buttons the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Fire,
    ];
}

/// Instantaneous pressed state of every button.
///
/// Digital and momentary: whatever is held at sample time is what this
/// frame's passes see. No key repeat, no event queue between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl ButtonState {
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Fire => self.fire,
        }
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Up => self.up = pressed,
            Button::Down => self.down = pressed,
            Button::Left => self.left = pressed,
            Button::Right => self.right = pressed,
            Button::Fire => self.fire = pressed,
        }
    }

    /// Snapshot with exactly `buttons` held.
    pub fn holding(buttons: &[Button]) -> Self {
        let mut state = Self::default();
        for &button in buttons {
            state.set(button, true);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_pressed() {
        let state = ButtonState::default();
        for button in Button::ALL {
            assert!(!state.is_pressed(button));
        }
    }

    #[test]
    fn holding_sets_only_named_buttons() {
        let state = ButtonState::holding(&[Button::Right, Button::Fire]);
        assert!(state.is_pressed(Button::Right));
        assert!(state.is_pressed(Button::Fire));
        assert!(!state.is_pressed(Button::Left));
        assert!(!state.is_pressed(Button::Up));
    }

    #[test]
    fn set_and_clear_round_trip() {
        let mut state = ButtonState::default();
        state.set(Button::Down, true);
        assert!(state.is_pressed(Button::Down));
        state.set(Button::Down, false);
        assert!(!state.is_pressed(Button::Down));
    }
}
