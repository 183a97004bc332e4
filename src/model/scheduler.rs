//! Deferred task queue
//!
//! Single-threaded: tasks never run on their own. The owner passes the
//! current time to [`Scheduler::drain_due`] on every tick and handles what
//! comes back. Cancelled tasks are removed from the queue immediately, so a
//! superseded task can never be returned.

use std::time::{Duration, Instant};

/// Identifies a scheduled task so it can be cancelled later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    deadline: Instant,
    payload: T,
}

/// Queue of payloads waiting for their deadline
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to become due `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled {
            handle,
            deadline: now + delay,
            payload,
        });
        handle
    }

    /// Cancel a pending task
    ///
    /// Returns `false` if the task already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    /// Deadline of a pending task
    pub fn deadline(&self, handle: TaskHandle) -> Option<Instant> {
        self.tasks
            .iter()
            .find(|task| task.handle == handle)
            .map(|task| task.deadline)
    }

    /// Remove and return every task whose deadline is at or before `now`
    ///
    /// Results are ordered by deadline; ties keep scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.tasks.len());
        for task in self.tasks.drain(..) {
            if task.deadline <= now {
                due.push(task);
            } else {
                remaining.push(task);
            }
        }
        self.tasks = remaining;

        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.handle.cmp(&b.handle)));
        due.into_iter()
            .map(|task| (task.handle, task.payload))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_nothing_due_before_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0, ms(3000), "hide");

        assert!(scheduler.drain_due(t0 + ms(2999)).is_empty());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_due_at_exact_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, ms(3000), "hide");

        let due = scheduler.drain_due(t0 + ms(3000));
        assert_eq!(due, vec![(handle, "hide")]);
        assert!(scheduler.is_empty());
        assert!(!scheduler.is_pending(handle));
    }

    #[test]
    fn test_drain_orders_by_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0, ms(500), "late");
        scheduler.schedule(t0, ms(100), "early");
        scheduler.schedule(t0, ms(100), "early-second");
        scheduler.schedule(t0, ms(900), "not yet");

        let payloads: Vec<_> = scheduler
            .drain_due(t0 + ms(600))
            .into_iter()
            .map(|(_, p)| p)
            .collect();
        assert_eq!(payloads, vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, ms(100), ());

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.drain_due(t0 + ms(10_000)).is_empty());
    }

    #[test]
    fn test_deadline_lookup() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, ms(250), ());

        assert_eq!(scheduler.deadline(handle), Some(t0 + ms(250)));
        scheduler.cancel(handle);
        assert_eq!(scheduler.deadline(handle), None);
    }

    #[test]
    fn test_handles_are_unique() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule(t0, ms(1), ());
        let b = scheduler.schedule(t0, ms(1), ());
        assert_ne!(a, b);
    }
}
