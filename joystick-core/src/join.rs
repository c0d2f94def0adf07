//! Concurrent fan-out of independent fallible futures.
//!
//! [`try_join_array`] drives a fixed number of futures side by side and
//! resolves once with either every result, in input order, or the first
//! error any of them produced.

use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

enum Slot<F, T> {
    Pending(F),
    Done(T),
    Taken,
}

/// Future returned by [`try_join_array`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct TryJoinArray<F, T, const N: usize> {
    slots: [Slot<F, T>; N],
}

/// Run `futures` concurrently and collect their results.
///
/// Every unfinished future is polled on each wake-up, so none of them waits
/// for another to complete first. On success the output array follows the
/// order of `futures`, whatever order they finished in. The first `Err`
/// resolves the join immediately; the remaining futures are dropped and
/// their results are never observed.
///
/// # Example
///
/// ```
/// use joystick_core::join::try_join_array;
///
/// async fn read(channel: u8) -> Result<u8, ()> {
///     Ok(channel * 10)
/// }
///
/// # let _ = async {
/// let values = try_join_array([read(1), read(2)]).await;
/// assert_eq!(values, Ok([10, 20]));
/// # };
/// ```
pub fn try_join_array<F, T, E, const N: usize>(futures: [F; N]) -> TryJoinArray<F, T, N>
where
    F: Future<Output = Result<T, E>>,
{
    TryJoinArray {
        slots: futures.map(Slot::Pending),
    }
}

impl<F, T, E, const N: usize> Future for TryJoinArray<F, T, N>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<[T; N], E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // SAFETY: a future stored in `Slot::Pending` is never moved out of
        // its slot. It is only ever dropped in place by overwriting the slot.
        let this = unsafe { self.get_unchecked_mut() };
        let mut all_done = true;
        let mut failure = None;

        for slot in this.slots.iter_mut() {
            match slot {
                Slot::Pending(future) => {
                    // SAFETY: `this` is pinned, so is every pending future in it.
                    let future = unsafe { Pin::new_unchecked(future) };
                    match future.poll(cx) {
                        Poll::Ready(Ok(value)) => *slot = Slot::Done(value),
                        Poll::Ready(Err(e)) => {
                            failure = Some(e);
                            break;
                        }
                        Poll::Pending => all_done = false,
                    }
                }
                Slot::Done(_) => {}
                Slot::Taken => panic!("TryJoinArray polled after completion"),
            }
        }

        if let Some(e) = failure {
            for slot in this.slots.iter_mut() {
                *slot = Slot::Taken;
            }
            return Poll::Ready(Err(e));
        }

        if !all_done {
            return Poll::Pending;
        }

        Poll::Ready(Ok(core::array::from_fn(|i| {
            match mem::replace(&mut this.slots[i], Slot::Taken) {
                Slot::Done(value) => value,
                _ => unreachable!("every slot was checked to be done"),
            }
        })))
    }
}
