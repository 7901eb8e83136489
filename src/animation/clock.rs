//! Step clock: the single suspension point of the animation engine.
//!
//! A [`Delay`] resolves once `speed × multiplier` has elapsed on the clock's
//! [`TimeSource`], or immediately as [`DelayOutcome::Cancelled`] when the run
//! was stopped. The clock remembers the ticket of the one delay it considers
//! pending; [`StepClock::cancel_pending`] drops that ticket so a parked delay
//! can never complete normally.
//!
//! Delays never register a waker. They are meant to be re-polled on every
//! tick of the host's event loop (see [`Runner`](super::runner::Runner)).

use super::cancel::CancellationToken;
use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

/// Source of monotonic time for the step clock.
pub trait TimeSource {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by [`Instant`]
#[derive(Debug)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        MonotonicTime {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Time that only moves when told to. Used to step procedures deterministically.
#[derive(Debug, Default)]
pub struct ManualTime {
    now: Cell<Duration>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// How a [`Delay`] finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Elapsed,
    Cancelled,
}

/// Cancelable delay primitive parameterized by a base speed.
pub struct StepClock {
    time: Rc<dyn TimeSource>,
    speed: Cell<Duration>,
    next_ticket: Cell<u64>,
    pending: Cell<Option<u64>>,
}

impl StepClock {
    pub fn new(time: Rc<dyn TimeSource>, speed: Duration) -> Self {
        StepClock {
            time,
            speed: Cell::new(speed),
            next_ticket: Cell::new(0),
            pending: Cell::new(None),
        }
    }

    pub fn speed(&self) -> Duration {
        self.speed.get()
    }

    /// Change the base speed. Delays already created keep their deadline.
    pub fn set_speed(&self, speed: Duration) {
        self.speed.set(speed);
    }

    /// Whether a delay is currently parked on this clock.
    pub fn has_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Invalidate the pending delay, if any.
    pub fn cancel_pending(&self) {
        self.pending.set(None);
    }

    /// Suspend for `speed × multiplier`.
    ///
    /// When `token` is already cancelled the returned delay resolves on its
    /// first poll and the clock's pending handle is left untouched.
    pub fn delay(&self, token: &CancellationToken, multiplier: f32) -> Delay<'_> {
        let duration = self.speed.get().mul_f32(multiplier.max(0.0));
        let ticket = if token.is_cancelled() {
            None
        } else {
            let ticket = self.next_ticket.get();
            self.next_ticket.set(ticket.wrapping_add(1));
            self.pending.set(Some(ticket));
            Some(ticket)
        };

        Delay {
            clock: self,
            token: token.clone(),
            ticket,
            deadline: self.time.now() + duration,
        }
    }

    fn release(&self, ticket: u64) {
        if self.pending.get() == Some(ticket) {
            self.pending.set(None);
        }
    }
}

/// Future returned by [`StepClock::delay`]
pub struct Delay<'a> {
    clock: &'a StepClock,
    token: CancellationToken,
    ticket: Option<u64>,
    deadline: Duration,
}

impl Future for Delay<'_> {
    type Output = DelayOutcome;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        let Some(ticket) = self.ticket else {
            return Poll::Ready(DelayOutcome::Cancelled);
        };

        if self.token.is_cancelled() || self.clock.pending.get() != Some(ticket) {
            self.clock.release(ticket);
            return Poll::Ready(DelayOutcome::Cancelled);
        }

        if self.clock.time.now() >= self.deadline {
            self.clock.release(ticket);
            Poll::Ready(DelayOutcome::Elapsed)
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::cancel::CancellationSource;
    use std::task::Waker;

    fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
        let mut cx = Context::from_waker(Waker::noop());
        fut.poll(&mut cx)
    }

    fn manual_clock(speed_ms: u64) -> (Rc<ManualTime>, StepClock) {
        let time = Rc::new(ManualTime::new());
        let clock = StepClock::new(time.clone(), Duration::from_millis(speed_ms));
        (time, clock)
    }

    #[test]
    fn test_delay_waits_for_speed_times_multiplier() {
        let (time, clock) = manual_clock(100);
        let source = CancellationSource::new();
        let mut delay = std::pin::pin!(clock.delay(&source.token(), 2.0));

        assert!(poll_once(delay.as_mut()).is_pending());
        time.advance(Duration::from_millis(199));
        assert!(poll_once(delay.as_mut()).is_pending());
        time.advance(Duration::from_millis(1));
        assert_eq!(poll_once(delay.as_mut()), Poll::Ready(DelayOutcome::Elapsed));
        assert!(!clock.has_pending());
    }

    #[test]
    fn test_cancelled_token_resolves_immediately_without_pending() {
        let (_time, clock) = manual_clock(100);
        let source = CancellationSource::new();
        source.cancel();
        let mut delay = std::pin::pin!(clock.delay(&source.token(), 1.0));

        assert!(!clock.has_pending());
        assert_eq!(poll_once(delay.as_mut()), Poll::Ready(DelayOutcome::Cancelled));
    }

    #[test]
    fn test_cancel_pending_interrupts_parked_delay() {
        let (time, clock) = manual_clock(100);
        let source = CancellationSource::new();
        let mut delay = std::pin::pin!(clock.delay(&source.token(), 1.0));

        assert!(poll_once(delay.as_mut()).is_pending());
        clock.cancel_pending();
        time.advance(Duration::from_secs(1));
        assert_eq!(poll_once(delay.as_mut()), Poll::Ready(DelayOutcome::Cancelled));
    }

    #[test]
    fn test_set_speed_does_not_touch_in_flight_delay() {
        let (time, clock) = manual_clock(100);
        let source = CancellationSource::new();
        let mut delay = std::pin::pin!(clock.delay(&source.token(), 1.0));

        clock.set_speed(Duration::from_secs(10));
        time.advance(Duration::from_millis(100));
        assert_eq!(poll_once(delay.as_mut()), Poll::Ready(DelayOutcome::Elapsed));
        assert_eq!(clock.speed(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_speed_elapses_on_first_poll() {
        let (_time, clock) = manual_clock(0);
        let source = CancellationSource::new();
        let mut delay = std::pin::pin!(clock.delay(&source.token(), 3.0));
        assert_eq!(poll_once(delay.as_mut()), Poll::Ready(DelayOutcome::Elapsed));
    }
}
