//! Per-tick conversion and change detection.

use crate::events::EventSink;
use crate::transform::{normalize, round};
use crate::types::{AxisChange, MiddleVoltages};

/// Last emitted reading of each axis.
///
/// Both readings start out unknown, so the first sample always reports
/// both axes, even when they sit exactly at the middle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampler {
    x: Option<f32>,
    y: Option<f32>,
    accuracy: f32,
}

impl Sampler {
    #[must_use]
    pub const fn new(accuracy: f32) -> Self {
        Self {
            x: None,
            y: None,
            accuracy,
        }
    }

    /// Last X reading, `None` before the first sample.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> Option<f32> {
        self.x
    }

    /// Last Y reading, `None` before the first sample.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> Option<f32> {
        self.y
    }

    /// Rounding granularity.
    #[inline]
    #[must_use]
    pub const fn accuracy(&self) -> f32 {
        self.accuracy
    }

    /// Convert a pair of `[x, y]` voltages and store the readings that moved.
    ///
    /// A reading is replaced only if the rounded value differs (`!=`) from
    /// the stored one. The returned change holds just those axes.
    pub fn update(&mut self, voltages: [f32; 2], middle: MiddleVoltages) -> AxisChange {
        let x = round(normalize(voltages[0], middle.x), self.accuracy);
        let y = round(normalize(voltages[1], middle.y), self.accuracy);

        AxisChange {
            x: replace_if_changed(&mut self.x, x),
            y: replace_if_changed(&mut self.y, y),
        }
    }
}

fn replace_if_changed(stored: &mut Option<f32>, value: f32) -> Option<f32> {
    if *stored == Some(value) {
        return None;
    }
    *stored = Some(value);
    Some(value)
}

/// Report `change` to `sink`: per-axis events first, then one `change`.
///
/// Nothing is reported for an empty change.
pub fn publish<S: EventSink + ?Sized>(change: AxisChange, sink: &mut S) {
    if let Some(x) = change.x {
        sink.on_x(x);
    }
    if let Some(y) = change.y {
        sink.on_y(y);
    }
    if !change.is_empty() {
        sink.on_change(change);
    }
}
