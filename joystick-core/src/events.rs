//! Event sink trait and event type.
//!
//! The driver reports everything it observes through an [`EventSink`].
//! Each method defaults to doing nothing, so a consumer implements only
//! the events it subscribes to. Any `FnMut(JoystickEvent)` closure is a
//! sink that receives every event.

use crate::input::ReadError;
use crate::types::AxisChange;

/// One driver notification.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoystickEvent {
    /// New X reading.
    X(f32),
    /// New Y reading.
    Y(f32),
    /// Axes that changed during one sample.
    Change(AxisChange),
    /// Button went down.
    Push,
    /// Button came back up.
    Release,
    /// A sampling read failed.
    Error(ReadError),
}

impl JoystickEvent {
    /// Deliver this event to the matching method of `sink`.
    pub fn dispatch<S: EventSink + ?Sized>(self, sink: &mut S) {
        match self {
            JoystickEvent::X(x) => sink.on_x(x),
            JoystickEvent::Y(y) => sink.on_y(y),
            JoystickEvent::Change(change) => sink.on_change(change),
            JoystickEvent::Push => sink.on_push(),
            JoystickEvent::Release => sink.on_release(),
            JoystickEvent::Error(e) => sink.on_error(e),
        }
    }
}

/// Receiver for driver events.
pub trait EventSink {
    /// The X reading changed.
    fn on_x(&mut self, _x: f32) {}

    /// The Y reading changed.
    fn on_y(&mut self, _y: f32) {}

    /// At least one axis changed; `change` holds only the changed axes.
    fn on_change(&mut self, _change: AxisChange) {}

    /// The button was pushed.
    fn on_push(&mut self) {}

    /// The button was released.
    fn on_release(&mut self) {}

    /// Reading the axes failed during sampling.
    fn on_error(&mut self, _error: ReadError) {}
}

impl<F: FnMut(JoystickEvent)> EventSink for F {
    fn on_x(&mut self, x: f32) {
        self(JoystickEvent::X(x));
    }

    fn on_y(&mut self, y: f32) {
        self(JoystickEvent::Y(y));
    }

    fn on_change(&mut self, change: AxisChange) {
        self(JoystickEvent::Change(change));
    }

    fn on_push(&mut self) {
        self(JoystickEvent::Push);
    }

    fn on_release(&mut self) {
        self(JoystickEvent::Release);
    }

    fn on_error(&mut self, error: ReadError) {
        self(JoystickEvent::Error(error));
    }
}
