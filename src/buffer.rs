//! Bounded frame ring with a selectable overflow policy.
//!
//! Reproduces the effect of the driver-owned buffer ring: a fixed-depth FIFO
//! of in-flight frames where the [`OverflowPolicy`] decides what happens to
//! an arrival when every slot is occupied. The in-tree mock device builds its
//! delivery path on this ring; hardware backends configure the equivalent
//! policy on the device instead.

use crate::config::OverflowPolicy;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Result of offering a frame to the ring.
#[derive(Debug)]
pub enum PushOutcome<T> {
    /// Frame stored in a free slot.
    Stored,
    /// Ring was full; the oldest undelivered frame was discarded to make
    /// room (KeepNewest policy). Not an error, by policy.
    DroppedOldest,
    /// Ring was full and the policy queues strictly; the frame is handed
    /// back so the producer can stall and retry.
    Rejected(T),
    /// Ring is closed; the frame is handed back.
    Closed(T),
}

struct RingState<T> {
    slots: VecDeque<T>,
    dropped: u64,
    closed: bool,
}

/// Fixed-depth ring of in-flight frames.
pub struct FrameRing<T> {
    state: Mutex<RingState<T>>,
    available: Condvar,
    depth: usize,
    policy: OverflowPolicy,
}

impl<T> FrameRing<T> {
    /// Create a ring holding at most `depth` frames (minimum one slot).
    #[must_use]
    pub fn new(depth: usize, policy: OverflowPolicy) -> Self {
        Self {
            state: Mutex::new(RingState {
                slots: VecDeque::with_capacity(depth.max(1)),
                dropped: 0,
                closed: false,
            }),
            available: Condvar::new(),
            depth: depth.max(1),
            policy,
        }
    }

    /// Offer a frame; the overflow policy resolves a full ring.
    pub fn push(&self, frame: T) -> PushOutcome<T> {
        let mut state = self.state.lock();
        if state.closed {
            return PushOutcome::Closed(frame);
        }
        if state.slots.len() >= self.depth {
            match self.policy {
                OverflowPolicy::KeepNewest => {
                    state.slots.pop_front();
                    state.dropped += 1;
                    state.slots.push_back(frame);
                    drop(state);
                    self.available.notify_one();
                    PushOutcome::DroppedOldest
                }
                OverflowPolicy::QueueAll => PushOutcome::Rejected(frame),
            }
        } else {
            state.slots.push_back(frame);
            drop(state);
            self.available.notify_one();
            PushOutcome::Stored
        }
    }

    /// Take the oldest retained frame, waiting up to `timeout` for one to
    /// arrive. Returns `None` on timeout or when the ring is closed and
    /// drained.
    pub fn pop_wait(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        loop {
            if let Some(frame) = state.slots.pop_front() {
                return Some(frame);
            }
            if state.closed {
                return None;
            }
            if self.available.wait_until(&mut state, deadline).timed_out() {
                return state.slots.pop_front();
            }
        }
    }

    /// Take the oldest retained frame without waiting.
    pub fn try_pop(&self) -> Option<T> {
        self.state.lock().slots.pop_front()
    }

    /// Close the ring; pending waiters wake and future pushes are refused.
    pub fn close(&self) {
        self.state.lock().closed = true;
        self.available.notify_all();
    }

    /// Number of frames silently discarded by the KeepNewest policy.
    pub fn dropped(&self) -> u64 {
        self.state.lock().dropped
    }

    /// Whether the ring has been closed.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of frames currently retained.
    pub fn len(&self) -> usize {
        self.state.lock().slots.len()
    }

    /// Whether no frames are retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured slot count.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Configured overflow policy.
    #[must_use]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_newest_discards_oldest_silently() {
        let ring = FrameRing::new(3, OverflowPolicy::KeepNewest);
        for id in 0..5u64 {
            assert!(matches!(
                ring.push(id),
                PushOutcome::Stored | PushOutcome::DroppedOldest
            ));
        }
        assert_eq!(ring.dropped(), 2);
        assert_eq!(ring.len(), 3);

        // The two oldest are gone; delivery continues in arrival order.
        assert_eq!(ring.try_pop(), Some(2));
        assert_eq!(ring.try_pop(), Some(3));
        assert_eq!(ring.try_pop(), Some(4));
        assert_eq!(ring.try_pop(), None);
    }

    #[test]
    fn queue_all_hands_back_overflow() {
        let ring = FrameRing::new(2, OverflowPolicy::QueueAll);
        assert!(matches!(ring.push(0u64), PushOutcome::Stored));
        assert!(matches!(ring.push(1), PushOutcome::Stored));
        assert!(matches!(ring.push(2), PushOutcome::Rejected(2)));
        assert_eq!(ring.dropped(), 0);

        assert_eq!(ring.try_pop(), Some(0));
        assert!(matches!(ring.push(2), PushOutcome::Stored));
    }

    #[test]
    fn delivery_is_fifo() {
        let ring = FrameRing::new(4, OverflowPolicy::QueueAll);
        for id in 0..4u64 {
            ring.push(id);
        }
        for id in 0..4u64 {
            assert_eq!(ring.pop_wait(Duration::from_millis(10)), Some(id));
        }
    }

    #[test]
    fn pop_wait_times_out_when_empty() {
        let ring: FrameRing<u64> = FrameRing::new(2, OverflowPolicy::KeepNewest);
        let started = Instant::now();
        assert_eq!(ring.pop_wait(Duration::from_millis(20)), None);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn close_wakes_waiters_and_refuses_pushes() {
        let ring: FrameRing<u64> = FrameRing::new(2, OverflowPolicy::KeepNewest);
        ring.close();
        assert_eq!(ring.pop_wait(Duration::from_secs(5)), None);
        assert!(matches!(ring.push(7), PushOutcome::Closed(7)));
    }

    #[test]
    fn zero_depth_still_holds_one_slot() {
        let ring = FrameRing::new(0, OverflowPolicy::KeepNewest);
        assert_eq!(ring.depth(), 1);
        assert!(matches!(ring.push(1u64), PushOutcome::Stored));
    }
}
