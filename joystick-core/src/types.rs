//! Core joystick types: KeyState, KeyEvent, AxisChange, MiddleVoltages.

use crate::transform::MAX_VOLTAGE;

/// Logical state of the joystick push button.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    Pushed,
    #[default]
    Released,
}

impl KeyState {
    /// Map a logic level to a key state.
    ///
    /// The button is wired active-low: a high level means released.
    #[inline]
    #[must_use]
    pub const fn from_level(high: bool) -> Self {
        if high {
            Self::Released
        } else {
            Self::Pushed
        }
    }
}

/// Key transition reported by the button monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Push,
    Release,
}

/// Axes whose reading changed during one sample.
///
/// Unchanged axes are `None`, so a consumer only ever sees the keys that
/// actually moved.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisChange {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl AxisChange {
    /// No axis changed.
    pub const NONE: Self = Self { x: None, y: None };

    /// Check if neither axis changed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Rest-position voltage of each axis.
///
/// Starts at half of [`MAX_VOLTAGE`] and is replaced by calibration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MiddleVoltages {
    pub x: f32,
    pub y: f32,
}

impl MiddleVoltages {
    pub const UNCALIBRATED: Self = Self {
        x: MAX_VOLTAGE / 2.0,
        y: MAX_VOLTAGE / 2.0,
    };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for MiddleVoltages {
    fn default() -> Self {
        Self::UNCALIBRATED
    }
}
