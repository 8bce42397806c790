//! Keyboard state to paddle intent

use serde::{Deserialize, Serialize};

/// Held/not-held state of the four paddle keys for one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Per-paddle movement intent in [-1, 1]; negative moves up the screen
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputVector {
    pub left_paddle: f32,
    pub right_paddle: f32,
}

impl InputVector {
    /// Rebuild the vector from scratch; opposing keys cancel out
    pub fn from_keys(keys: KeyState) -> Self {
        Self {
            left_paddle: axis(keys.left_up, keys.left_down),
            right_paddle: axis(keys.right_up, keys.right_down),
        }
    }
}

impl From<KeyState> for InputVector {
    fn from(keys: KeyState) -> Self {
        Self::from_keys(keys)
    }
}

fn axis(up: bool, down: bool) -> f32 {
    let mut value = 0.0;
    if down {
        value += 1.0;
    }
    if up {
        value -= 1.0;
    }
    value
}
