//! Deadline-ordered side effects that fire independently of tick cadence.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Clears the magnification flag and decays boosted agents.
    EndMagnification,
    /// Returns the architect to idle after a batch review.
    ArchitectStandDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub deadline: Instant,
    pub action: ScheduledAction,
}

/// Pending tasks. There is no cancellation: once pushed, a task fires after its deadline.
#[derive(Debug, Default, Clone)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
    /// Deadlines nobody has armed a timer for yet.
    unarmed: Vec<Instant>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, deadline: Instant, action: ScheduledAction) {
        self.tasks.push(ScheduledTask { deadline, action });
        self.unarmed.push(deadline);
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ScheduledTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.deadline <= now);
        self.tasks = pending;
        due.sort_by_key(|t| t.deadline);
        due
    }

    /// Deadlines pushed since the last call.
    pub fn take_unarmed(&mut self) -> Vec<Instant> {
        std::mem::take(&mut self.unarmed)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
