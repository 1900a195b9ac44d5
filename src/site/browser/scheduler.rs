//! # Scheduler
//!
//! Deferred-callback primitive on a virtual clock. Nothing runs on its own:
//! the controller advances the clock and dispatches whatever came due, so
//! timers never interleave with a running handler.

use crate::site::events::TimerId;
use std::time::Duration;

#[derive(Debug, Clone)]
struct PendingTimer<T> {
    id: TimerId,
    deadline: Duration,
    task: T,
}

/// Virtual-clock timer queue
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Time elapsed since the scheduler was created
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            deadline: self.now + delay,
            task,
        });
        tracing::debug!("Scheduled timer {:?} at {:?}", id, self.now + delay);
        id
    }

    /// Cancel a pending timer; returns false if it already fired or never existed
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        before != self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    /// Move the clock forward, returning due tasks ordered by deadline
    pub fn advance(&mut self, by: Duration) -> Vec<(TimerId, T)> {
        self.now += by;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.deadline <= now);
        self.pending = pending;

        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| (timer.id, timer.task)).collect()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_should_return_due_tasks_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(300), "late");
        scheduler.schedule(Duration::from_millis(100), "early");
        scheduler.schedule(Duration::from_millis(900), "pending");

        let due: Vec<_> = scheduler
            .advance(Duration::from_millis(500))
            .into_iter()
            .map(|(_, task)| task)
            .collect();

        assert_eq!(due, vec!["early", "late"]);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(900)));
    }

    #[test]
    fn timer_should_fire_exactly_at_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(3000), ());

        assert!(scheduler.advance(Duration::from_millis(2999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)).len(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(3000));
    }

    #[test]
    fn cancel_should_remove_pending_timer() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(Duration::from_millis(10), ());

        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn deadlines_should_be_relative_to_current_time() {
        let mut scheduler = Scheduler::new();
        scheduler.advance(Duration::from_millis(1000));
        scheduler.schedule(Duration::from_millis(500), ());

        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(1500)));
    }
}
