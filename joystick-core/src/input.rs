//! Collaborator traits for the analog axes and the push button.

use core::future::Future;

use crate::join::try_join_array;

/// Error type for voltage reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// ADC conversion failed or returned an invalid sample.
    Conversion,
    /// Bus or peripheral communication error.
    Bus,
    /// The analog source is not available.
    Disconnected,
}

/// Async trait for one analog axis.
///
/// Implementations wrap an ADC channel (or an external ADC on a bus) and
/// report the measured voltage in volts.
pub trait AnalogInput {
    /// Read the current voltage on this axis.
    fn read_voltage(&mut self) -> impl Future<Output = Result<f32, ReadError>>;
}

/// Async trait for the digital push-button input.
pub trait KeyInput {
    /// Wait for the next interrupt and return the logic level it reported.
    ///
    /// `true` is a high level.
    fn wait_for_level(&mut self) -> impl Future<Output = bool>;
}

/// Read both axes concurrently, returning `[x, y]`.
///
/// Fails as a whole if either read fails.
pub async fn read_axes<A: AnalogInput>(x: &mut A, y: &mut A) -> Result<[f32; 2], ReadError> {
    try_join_array([x.read_voltage(), y.read_voltage()]).await
}
