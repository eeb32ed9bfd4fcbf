use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::{FlyId, Generation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Countdown,
    Spawn,
    FlyExpiry(FlyId),
    CatchCleanup(FlyId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub generation: Generation,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduledTimer {
    pub due: Duration,
    pub timer: Timer,
    sequence: u64,
}

// Min-heap order: earliest `due` first, then scheduling order.
impl Ord for ScheduledTimer {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for ScheduledTimer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledTimer {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Eq for ScheduledTimer {}

/// Pending timers of a controller, keyed on virtual time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BinaryHeap<ScheduledTimer>,
    next_sequence: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, timer: Timer) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.push(ScheduledTimer { due, timer, sequence });
    }

    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledTimer> {
        if self.pending.peek()?.due > now {
            return None;
        }
        self.pending.pop()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.peek().map(|scheduled| scheduled.due)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
