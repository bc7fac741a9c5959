//! Input bindings, recording, and replay
//!
//! Bindings translate physical key names into the core's logical buttons.
//! Scripts are per-frame `ButtonState` sequences: drivers replay them for
//! headless runs, and a recorder can capture a live session into the same
//! form.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use strafe_core::input::{Button, ButtonState};

/// Physical-key-to-button mapping, keyed by winit key-code names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub fire: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: "KeyW".to_string(),
            down: "KeyS".to_string(),
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
            fire: "Space".to_string(),
        }
    }
}

impl KeyBindings {
    /// Logical button bound to `key`, if any.
    pub fn button_for(&self, key: &str) -> Option<Button> {
        if key == self.up {
            Some(Button::Up)
        } else if key == self.down {
            Some(Button::Down)
        } else if key == self.left {
            Some(Button::Left)
        } else if key == self.right {
            Some(Button::Right)
        } else if key == self.fire {
            Some(Button::Fire)
        } else {
            None
        }
    }
}

/// A per-frame sequence of input snapshots.
///
/// Reading past the end yields a released state, so a finite script drives
/// an arbitrarily long run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    frames: Vec<ButtonState>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame's snapshot (the recorder side).
    pub fn push(&mut self, state: ButtonState) {
        self.frames.push(state);
    }

    /// Snapshot for `frame`; released past the end of the script.
    pub fn frame(&self, frame: usize) -> ButtonState {
        self.frames.get(frame).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Hold `buttons` over the frame range, extending the script as needed.
    pub fn hold(mut self, frames: Range<usize>, buttons: &[Button]) -> Self {
        if frames.end > self.frames.len() {
            self.frames.resize(frames.end, ButtonState::default());
        }
        for frame in frames {
            for &button in buttons {
                self.frames[frame].set(button, true);
            }
        }
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_button() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.button_for("KeyW"), Some(Button::Up));
        assert_eq!(bindings.button_for("KeyS"), Some(Button::Down));
        assert_eq!(bindings.button_for("KeyA"), Some(Button::Left));
        assert_eq!(bindings.button_for("KeyD"), Some(Button::Right));
        assert_eq!(bindings.button_for("Space"), Some(Button::Fire));
        assert_eq!(bindings.button_for("Escape"), None);
    }

    #[test]
    fn hold_builds_overlapping_ranges() {
        let script = InputScript::new()
            .hold(0..4, &[Button::Right])
            .hold(2..6, &[Button::Fire]);

        assert_eq!(script.len(), 6);
        assert!(script.frame(0).is_pressed(Button::Right));
        assert!(!script.frame(0).is_pressed(Button::Fire));
        assert!(script.frame(3).is_pressed(Button::Right));
        assert!(script.frame(3).is_pressed(Button::Fire));
        assert!(!script.frame(5).is_pressed(Button::Right));
    }

    #[test]
    fn past_the_end_everything_is_released() {
        let script = InputScript::new().hold(0..2, &[Button::Fire]);
        assert_eq!(script.frame(100), ButtonState::default());
    }

    #[test]
    fn scripts_round_trip_through_json() {
        let script = InputScript::new().hold(0..3, &[Button::Up, Button::Fire]);
        let text = script.to_json().unwrap();
        assert_eq!(InputScript::from_json(&text).unwrap(), script);
    }

    #[test]
    fn recorder_and_replay_agree() {
        let mut recorded = InputScript::new();
        recorded.push(ButtonState::holding(&[Button::Left]));
        recorded.push(ButtonState::default());

        assert!(recorded.frame(0).is_pressed(Button::Left));
        assert!(!recorded.frame(1).is_pressed(Button::Left));
        assert_eq!(recorded.len(), 2);
    }
}
