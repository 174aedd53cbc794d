//! Deferred task queue on a logical clock.
//!
//! Tasks carry the session generation that scheduled them. The session
//! bumps its generation on every start/reset, so a task that survives a
//! cancellation still cannot touch the replacement game.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Compare the two revealed cards.
    Resolve { pair: [CardId; 2] },
    /// Turn a mismatched pair face-down again.
    HideMismatch { pair: [CardId; 2] },
}

/// A task waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    /// Logical time at which the task fires.
    pub due: Duration,
    /// Session generation at scheduling time.
    pub generation: u64,
    pub kind: TaskKind,
}

/// Timer queue. Due tasks pop in (due, id) order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: Vec<ScheduledTask>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task to fire at `due`.
    pub fn schedule(&mut self, due: Duration, generation: u64, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.push(ScheduledTask { id, due, generation, kind });
        id
    }

    /// Cancel a task. Returns true if it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|t| t.id != id);
        self.queue.len() != before
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Earliest due time, if any task is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|t| t.due).min()
    }

    /// Remove and return the next task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledTask> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;
        Some(self.queue.swap_remove(index))
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
