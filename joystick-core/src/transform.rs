//! Voltage-to-axis transform and rounding.

/// Supply voltage of the joystick potentiometers.
///
/// A full deflection in the positive direction reads this voltage.
pub const MAX_VOLTAGE: f32 = 5.0;

/// Convert a raw axis voltage into a displacement relative to `middle`.
///
/// The mapping is piecewise linear: `middle` maps to `0.0`, `MAX_VOLTAGE`
/// to `1.0` and `0.0` V to `-1.0`. Nothing is clamped, so voltages above
/// `MAX_VOLTAGE` overshoot and a middle voltage of `0.0` or `MAX_VOLTAGE`
/// produces infinities or `NaN`.
///
/// # Example
///
/// ```
/// use joystick_core::transform::normalize;
///
/// assert_eq!(normalize(2.5, 2.5), 0.0);
/// assert_eq!(normalize(5.0, 2.5), 1.0);
/// assert_eq!(normalize(0.0, 2.5), -1.0);
/// ```
#[inline]
#[must_use]
pub fn normalize(voltage: f32, middle: f32) -> f32 {
    if voltage > middle {
        (voltage - middle) / (MAX_VOLTAGE - middle)
    } else {
        voltage / middle - 1.0
    }
}

/// Snap `value` to the nearest multiple of `accuracy`.
///
/// Half-way values round toward positive infinity. Non-finite results
/// are returned unchanged.
#[inline]
#[must_use]
pub fn round(value: f32, accuracy: f32) -> f32 {
    round_half_up(value / accuracy) * accuracy
}

/// `floor(x + 0.5)` without relying on `std` float intrinsics.
fn round_half_up(x: f32) -> f32 {
    // Anything at or beyond 2^23 has no fractional part left.
    const INTEGRAL: f32 = 8_388_608.0;

    if !x.is_finite() || x >= INTEGRAL || x <= -INTEGRAL {
        return x;
    }

    let shifted = x + 0.5;
    let truncated = shifted as i32 as f32;
    if truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}
