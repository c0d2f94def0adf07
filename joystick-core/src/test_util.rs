//! Test executor and mock collaborators.

extern crate std;

use core::future::Future;
use core::pin::{pin, Pin};
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use crate::events::{EventSink, JoystickEvent};
use crate::input::{AnalogInput, KeyInput, ReadError};
use crate::types::AxisChange;
use crate::timer::PeriodicTimer;

/// Upper bound on polls before `block_on` gives up on a future.
const MAX_POLLS: usize = 100_000;

fn noop_waker() -> Waker {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    // SAFETY: every vtable function ignores the data pointer.
    unsafe { Waker::from_raw(noop_raw_waker()) }
}

/// Poll a future once with a noop waker.
pub fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    future.poll(&mut cx)
}

/// Poll a future until it completes.
///
/// Mocks never register wakers, so this simply re-polls. Panics if the
/// future is still pending after `MAX_POLLS` polls.
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    for _ in 0..MAX_POLLS {
        if let Poll::Ready(output) = poll_once(future.as_mut()) {
            return output;
        }
    }
    panic!("future still pending after {} polls", MAX_POLLS);
}

/// Returns `Pending` once, then completes.
pub async fn yield_now() {
    let mut yielded = false;
    core::future::poll_fn(|_| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            Poll::Pending
        }
    })
    .await;
}

/// Queue handle of a [`MockAxis`].
pub type Feeder = Rc<RefCell<VecDeque<Result<f32, ReadError>>>>;

/// Scripted analog axis.
///
/// Returns queued results in order; once the queue is empty the last
/// result repeats. Each read stays pending for `delay` polls first.
pub struct MockAxis {
    queue: Feeder,
    last: Result<f32, ReadError>,
    reads: Rc<Cell<usize>>,
    delay: Rc<Cell<usize>>,
}

impl MockAxis {
    pub fn new(script: &[Result<f32, ReadError>]) -> Self {
        Self {
            queue: Rc::new(RefCell::new(script.iter().copied().collect())),
            last: Err(ReadError::Disconnected),
            reads: Rc::new(Cell::new(0)),
            delay: Rc::new(Cell::new(0)),
        }
    }

    /// Handle for queueing more results after the mock was moved.
    pub fn feeder(&self) -> Feeder {
        self.queue.clone()
    }

    /// Number of completed reads.
    pub fn reads(&self) -> Rc<Cell<usize>> {
        self.reads.clone()
    }

    /// Pending polls per read. `usize::MAX` never completes.
    pub fn delay(&self) -> Rc<Cell<usize>> {
        self.delay.clone()
    }
}

impl AnalogInput for MockAxis {
    async fn read_voltage(&mut self) -> Result<f32, ReadError> {
        for _ in 0..self.delay.get() {
            yield_now().await;
        }
        if let Some(next) = self.queue.borrow_mut().pop_front() {
            self.last = next;
        }
        self.reads.set(self.reads.get() + 1);
        self.last
    }
}

/// Counters shared between a [`MockTimer`] and the test.
#[derive(Default)]
pub struct TimerStats {
    pub starts: Cell<u32>,
    pub cancels: Cell<u32>,
    pub ticks: Cell<u32>,
    pub live: Cell<i32>,
    pub interval_ms: Cell<u64>,
}

/// Periodic timer that fires on every other poll.
pub struct MockTimer {
    stats: Rc<TimerStats>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            stats: Rc::new(TimerStats::default()),
        }
    }

    pub fn stats(&self) -> Rc<TimerStats> {
        self.stats.clone()
    }
}

impl PeriodicTimer for MockTimer {
    fn start(&mut self, interval_ms: u64) {
        self.stats.starts.set(self.stats.starts.get() + 1);
        self.stats.live.set(self.stats.live.get() + 1);
        self.stats.interval_ms.set(interval_ms);
    }

    fn cancel(&mut self) {
        self.stats.cancels.set(self.stats.cancels.get() + 1);
        self.stats.live.set(self.stats.live.get() - 1);
    }

    async fn tick(&mut self) {
        yield_now().await;
        self.stats.ticks.set(self.stats.ticks.get() + 1);
    }
}

/// Scripted button: reports queued levels, then stays silent.
///
/// The first `silent_polls` polls of `wait_for_level` stay pending, counted
/// across every wait.
pub struct MockKey {
    levels: VecDeque<bool>,
    silent_polls: usize,
}

impl MockKey {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.iter().copied().collect(),
            silent_polls: 0,
        }
    }

    pub fn with_silent_polls(mut self, polls: usize) -> Self {
        self.silent_polls = polls;
        self
    }
}

impl KeyInput for MockKey {
    async fn wait_for_level(&mut self) -> bool {
        while self.silent_polls > 0 {
            self.silent_polls -= 1;
            yield_now().await;
        }
        match self.levels.pop_front() {
            Some(level) => level,
            None => core::future::pending().await,
        }
    }
}

/// Sink that records every event in order.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<JoystickEvent>,
}

impl Recorder {
    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<JoystickEvent> {
        core::mem::take(&mut self.events)
    }
}

impl EventSink for Recorder {
    fn on_x(&mut self, x: f32) {
        self.events.push(JoystickEvent::X(x));
    }

    fn on_y(&mut self, y: f32) {
        self.events.push(JoystickEvent::Y(y));
    }

    fn on_change(&mut self, change: AxisChange) {
        self.events.push(JoystickEvent::Change(change));
    }

    fn on_push(&mut self) {
        self.events.push(JoystickEvent::Push);
    }

    fn on_release(&mut self) {
        self.events.push(JoystickEvent::Release);
    }

    fn on_error(&mut self, error: ReadError) {
        self.events.push(JoystickEvent::Error(error));
    }
}
