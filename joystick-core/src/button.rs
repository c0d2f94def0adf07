//! Edge-triggered push-button state machine.

use crate::types::{KeyEvent, KeyState};

/// Tracks the logical key state across interrupt notifications.
///
/// Repeated notifications of the level the key is already in are ignored.
/// There is no timed debounce: every real level change produces an event.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ButtonMonitor {
    state: KeyState,
}

impl ButtonMonitor {
    /// Create a monitor in the released state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: KeyState::Released,
        }
    }

    /// Current key state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> KeyState {
        self.state
    }

    /// Feed the logic level reported by an interrupt.
    ///
    /// Returns the transition, if the level maps to a different state.
    pub fn on_level(&mut self, high: bool) -> Option<KeyEvent> {
        let state = KeyState::from_level(high);
        if state == self.state {
            return None;
        }

        self.state = state;
        Some(match state {
            KeyState::Pushed => KeyEvent::Push,
            KeyState::Released => KeyEvent::Release,
        })
    }
}
