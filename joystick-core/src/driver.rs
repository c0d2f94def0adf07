//! JoystickDriver: calibration, sampling and button tracking for one joystick.

use core::pin::pin;

use embassy_futures::select::{select, Either};

use crate::button::ButtonMonitor;
use crate::calibration;
use crate::config::{JoystickArgs, JoystickConfig};
use crate::events::EventSink;
use crate::input::{read_axes, AnalogInput, KeyInput, ReadError};
use crate::sampler::{self, Sampler};
use crate::timer::{PeriodicTimer, SampleTimer};
use crate::types::{KeyEvent, KeyState, MiddleVoltages};

/// A two-axis analog joystick with an active-low push button.
///
/// The driver owns both axis inputs, the sample timer and the event sink.
/// All state lives in the instance and is only touched through `&mut self`.
/// While a read is pending only the button state may change, and readings
/// are applied once both axes resolved.
///
/// # Lifecycle
///
/// 1. [`attach`](Self::attach) calibrates the rest position and arms the
///    sample timer. No driver exists if calibration fails.
/// 2. [`run`](Self::run) samples on every tick and tracks the button.
/// 3. [`detach`](Self::detach) disarms the timer and returns the parts.
pub struct JoystickDriver<A, T, S> {
    x_axis: A,
    y_axis: A,
    timer: SampleTimer<T>,
    sink: S,
    config: JoystickConfig,
    middle: MiddleVoltages,
    sampler: Sampler,
    button: ButtonMonitor,
}

impl<A, T, S> JoystickDriver<A, T, S>
where
    A: AnalogInput,
    T: PeriodicTimer,
    S: EventSink,
{
    /// Calibrate the joystick and start sampling.
    ///
    /// The joystick must be at rest. The sample timer is armed only after
    /// calibration succeeded; on failure the read error is returned.
    pub async fn attach(
        x_axis: A,
        y_axis: A,
        timer: T,
        sink: S,
        args: JoystickArgs,
    ) -> Result<Self, ReadError> {
        let config = JoystickConfig::from_args(args);
        let mut driver = Self {
            x_axis,
            y_axis,
            timer: SampleTimer::new(timer),
            sink,
            config,
            middle: MiddleVoltages::UNCALIBRATED,
            sampler: Sampler::new(config.accuracy),
            button: ButtonMonitor::new(),
        };

        driver.calibrate().await?;
        driver.timer.arm(config.interval_ms);
        debug!(
            "joystick attached: interval={}ms accuracy={}",
            config.interval_ms,
            config.accuracy
        );

        Ok(driver)
    }

    /// Re-measure the rest position of both axes.
    ///
    /// Both middle voltages are replaced together or not at all. Stored
    /// readings stay untouched until the next sample.
    pub async fn calibrate(&mut self) -> Result<(), ReadError> {
        match calibration::calibrate(&mut self.x_axis, &mut self.y_axis).await {
            Ok(middle) => {
                debug!("calibrated: x={}V y={}V", middle.x, middle.y);
                self.middle = middle;
                Ok(())
            }
            Err(e) => {
                warn!("calibration failed: {:?}", e);
                Err(e)
            }
        }
    }

    /// Take one sample and report what changed.
    ///
    /// A failed read is reported through [`EventSink::on_error`] and leaves
    /// every reading as it was.
    pub async fn sample(&mut self) {
        let voltages = read_axes(&mut self.x_axis, &mut self.y_axis).await;
        self.apply_sample(voltages);
    }

    fn apply_sample(&mut self, voltages: Result<[f32; 2], ReadError>) {
        match voltages {
            Ok(voltages) => {
                let change = self.sampler.update(voltages, self.middle);
                if !change.is_empty() {
                    trace!("axis change: {:?}", change);
                }
                sampler::publish(change, &mut self.sink);
            }
            Err(e) => {
                warn!("sample failed: {:?}", e);
                self.sink.on_error(e);
            }
        }
    }

    /// Feed the logic level reported by a key interrupt.
    pub fn handle_key_level(&mut self, high: bool) {
        report_key_level(&mut self.button, &mut self.sink, high);
    }

    /// Sample on every timer tick and track `key`, forever.
    ///
    /// Ticks are handled one at a time: a slow read delays the following
    /// tick instead of overlapping with it. Key levels keep being handled
    /// while a read is pending, so a hung axis never silences the button.
    pub async fn run<K: KeyInput>(&mut self, key: &mut K) -> ! {
        loop {
            let wake = select(self.timer.tick(), key.wait_for_level()).await;
            match wake {
                Either::First(()) => {
                    let voltages = {
                        let mut read = pin!(read_axes(&mut self.x_axis, &mut self.y_axis));
                        loop {
                            match select(read.as_mut(), key.wait_for_level()).await {
                                Either::First(voltages) => break voltages,
                                Either::Second(level) => {
                                    report_key_level(&mut self.button, &mut self.sink, level)
                                }
                            }
                        }
                    };
                    self.apply_sample(voltages);
                }
                Either::Second(level) => self.handle_key_level(level),
            }
        }
    }

    /// Stop sampling and hand back `(x_axis, y_axis, timer, sink)`.
    pub fn detach(self) -> (A, A, T, S) {
        debug!("joystick detached");
        (
            self.x_axis,
            self.y_axis,
            self.timer.into_inner(),
            self.sink,
        )
    }

    /// Last X reading, `None` before the first sample.
    #[inline]
    #[must_use]
    pub fn x(&self) -> Option<f32> {
        self.sampler.x()
    }

    /// Last Y reading, `None` before the first sample.
    #[inline]
    #[must_use]
    pub fn y(&self) -> Option<f32> {
        self.sampler.y()
    }

    /// Current button state.
    #[inline]
    #[must_use]
    pub fn key_state(&self) -> KeyState {
        self.button.state()
    }

    /// Rest voltages in use.
    #[inline]
    #[must_use]
    pub fn middle_voltages(&self) -> MiddleVoltages {
        self.middle
    }

    /// Resolved configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    /// Check if the sample timer is armed.
    #[inline]
    #[must_use]
    pub fn is_sampling(&self) -> bool {
        self.timer.is_armed()
    }

    /// Get a reference to the event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

fn report_key_level<S: EventSink>(button: &mut ButtonMonitor, sink: &mut S, high: bool) {
    match button.on_level(high) {
        Some(KeyEvent::Push) => sink.on_push(),
        Some(KeyEvent::Release) => sink.on_release(),
        None => {}
    }
}
