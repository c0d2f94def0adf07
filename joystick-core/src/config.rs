//! Driver configuration and default substitution.

/// Sampling period used when none is given.
pub const DEFAULT_INTERVAL_MS: u64 = 50;

/// Rounding granularity used when none is given.
pub const DEFAULT_ACCURACY: f32 = 0.1;

/// Optional settings supplied by whoever attaches the driver.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickArgs {
    /// Milliseconds between two samples.
    pub interval_ms: Option<u64>,
    /// Granularity normalized readings are rounded to.
    pub accuracy: Option<f32>,
}

impl JoystickArgs {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval_ms: None,
            accuracy: None,
        }
    }

    #[must_use]
    pub const fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    #[must_use]
    pub const fn with_accuracy(mut self, accuracy: f32) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// Resolved driver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    pub interval_ms: u64,
    pub accuracy: f32,
}

impl JoystickConfig {
    /// Fill absent fields of `args` with the defaults.
    ///
    /// Values that are present are taken as-is: a zero interval or a
    /// negative accuracy is not rejected.
    #[must_use]
    pub fn from_args(args: JoystickArgs) -> Self {
        Self {
            interval_ms: args.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS),
            accuracy: args.accuracy.unwrap_or(DEFAULT_ACCURACY),
        }
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self::from_args(JoystickArgs::new())
    }
}

impl From<JoystickArgs> for JoystickConfig {
    fn from(args: JoystickArgs) -> Self {
        Self::from_args(args)
    }
}
