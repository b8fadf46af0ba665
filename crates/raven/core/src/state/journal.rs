use std::collections::VecDeque;

use goal_tree::Status;

use crate::GoalKind;

/// A sub-goal that was removed from the bot's goal tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    pub kind: GoalKind,
    /// Status the goal held when its parent removed it.
    pub status: Status,
}

/// Bounded history of removed sub-goals, oldest first.
#[derive(Clone, Debug)]
pub struct GoalJournal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl GoalJournal {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn record(&mut self, kind: GoalKind, status: Status) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry { kind, status });
    }

    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> + '_ {
        self.entries.iter()
    }

    /// Number of recorded removals of the given goal kind.
    pub fn count(&self, kind: GoalKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for GoalJournal {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
