//! Cancellable periodic sample timer.

use core::future::Future;

/// A periodic time source, such as an Embassy `Ticker`.
pub trait PeriodicTimer {
    /// Start firing every `interval_ms` milliseconds.
    fn start(&mut self, interval_ms: u64);

    /// Stop firing. Ticks that were not consumed yet are discarded.
    fn cancel(&mut self);

    /// Wait for the next period to elapse.
    ///
    /// Only called while the timer is started.
    fn tick(&mut self) -> impl Future<Output = ()>;
}

/// Sampler scheduling: idle until armed, then periodic.
///
/// Arming an already armed timer cancels the running schedule first, so at
/// most one schedule is ever live.
pub struct SampleTimer<T> {
    timer: T,
    armed: bool,
}

impl<T: PeriodicTimer> SampleTimer<T> {
    /// Wrap `timer` in the idle state.
    #[must_use]
    pub const fn new(timer: T) -> Self {
        Self {
            timer,
            armed: false,
        }
    }

    /// Check if sampling is scheduled.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// (Re)start the periodic schedule.
    pub fn arm(&mut self, interval_ms: u64) {
        if self.armed {
            debug!("re-arming sample timer");
            self.timer.cancel();
        }
        self.timer.start(interval_ms);
        self.armed = true;
    }

    /// Cancel the schedule, returning to idle.
    pub fn disarm(&mut self) {
        if self.armed {
            self.timer.cancel();
            self.armed = false;
        }
    }

    /// Wait for the next sample tick.
    ///
    /// Never resolves while idle.
    pub async fn tick(&mut self) {
        if !self.armed {
            core::future::pending::<()>().await;
        }
        self.timer.tick().await;
    }

    /// Disarm and hand back the underlying timer.
    pub fn into_inner(mut self) -> T {
        self.disarm();
        self.timer
    }
}
