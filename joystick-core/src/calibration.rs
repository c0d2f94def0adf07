//! Rest-position calibration.

use crate::input::{read_axes, AnalogInput, ReadError};
use crate::types::MiddleVoltages;

/// Measure the rest voltage of both axes.
///
/// The joystick must be centered while this runs. Readings are returned
/// verbatim, without rounding or validation.
pub async fn calibrate<A: AnalogInput>(x: &mut A, y: &mut A) -> Result<MiddleVoltages, ReadError> {
    let [x, y] = read_axes(x, y).await?;
    Ok(MiddleVoltages::new(x, y))
}
