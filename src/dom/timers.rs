//! One-shot timer queue on a virtual clock.
//!
//! The page has no background thread; time only moves when the embedder calls
//! `Page::advance`. Timers fire in deadline order, ties broken by scheduling
//! order, which keeps tests deterministic.

use std::time::Duration;

use super::Page;

/// Callback fired when a timer comes due. Receives the owning page so the
/// queue never holds a handle back into it.
pub(crate) type TimerCallback = Box<dyn FnOnce(&Page) + Send>;

pub(crate) struct PendingTimer {
    deadline: Duration,
    seq: u64,
    callback: TimerCallback,
}

#[derive(Default)]
pub(crate) struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, callback: TimerCallback) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            deadline: self.now + delay,
            seq,
            callback,
        });
    }

    /// Move the clock forward and drain every timer whose deadline has
    /// passed, in firing order. The caller runs the callbacks outside any
    /// lock.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerCallback> {
        self.now += dt;
        let now = self.now;

        let mut due: Vec<PendingTimer> = Vec::new();
        let mut remaining: Vec<PendingTimer> = Vec::new();
        for timer in self.pending.drain(..) {
            if timer.deadline <= now {
                due.push(timer);
            } else {
                remaining.push(timer);
            }
        }
        self.pending = remaining;

        due.sort_by_key(|t| (t.deadline, t.seq));
        due.into_iter().map(|t| t.callback).collect()
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_only_when_due() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(5000), Box::new(|_| {}));

        assert!(queue.advance(Duration::from_millis(4999)).is_empty());
        assert_eq!(queue.pending_count(), 1);

        let due = queue.advance(Duration::from_millis(1));
        assert_eq!(due.len(), 1);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(300), Box::new(|_| {}));
        queue.schedule(Duration::from_millis(100), Box::new(|_| {}));
        queue.schedule(Duration::from_millis(200), Box::new(|_| {}));

        // All due at once; order must follow deadlines, not insertion.
        let due = queue.advance(Duration::from_millis(300));
        assert_eq!(due.len(), 3);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut queue = TimerQueue::new();
        queue.advance(Duration::from_millis(100));
        queue.schedule(Duration::from_millis(50), Box::new(|_| {}));
        assert!(queue.advance(Duration::from_millis(49)).is_empty());
        assert_eq!(queue.advance(Duration::from_millis(1)).len(), 1);
        assert_eq!(queue.now(), Duration::from_millis(150));
    }
}
