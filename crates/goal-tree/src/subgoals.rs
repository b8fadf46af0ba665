//! Composite goal machinery.
//!
//! Composite goals own an ordered list of sub-goals and delegate processing to
//! the front of that list. [`Subgoals`] is the list plus the processing rules;
//! concrete composite goals embed one and forward to it.

use std::collections::VecDeque;

use crate::{Goal, GoalOwner, GoalReporter, Status};

/// Ordered sequence of owned sub-goals. The front is processed first.
///
/// # Semantics
///
/// [`Subgoals::process`] works through the list front to back:
/// - Terminal sub-goals at the front are terminated and removed
/// - An empty list yields `Completed`
/// - A front sub-goal that completes during the tick is removed and the next
///   sub-goal is processed within the same call
/// - A front sub-goal that fails is removed and `Failed` is returned; the
///   remaining sub-goals stay queued for the parent to decide on
///
/// Dropping the list drops every sub-goal front to back. Use
/// [`Subgoals::remove_all`] when the sub-goals' side effects must be undone.
pub struct Subgoals<O: GoalOwner> {
    goals: VecDeque<Box<dyn Goal<O>>>,
}

impl<O: GoalOwner> Subgoals<O> {
    /// Creates an empty sub-goal list.
    pub fn new() -> Self {
        Self {
            goals: VecDeque::new(),
        }
    }

    /// Pushes a goal to the front, pre-empting whatever was being processed.
    pub fn push_front(&mut self, goal: Box<dyn Goal<O>>) {
        self.goals.push_front(goal);
    }

    /// Pushes a goal to the back, to run after every goal already queued.
    pub fn push_back(&mut self, goal: Box<dyn Goal<O>>) {
        self.goals.push_back(goal);
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Type tag of the front sub-goal, if any.
    pub fn front_kind(&self) -> Option<O::Kind> {
        self.goals.front().map(|goal| goal.kind())
    }

    /// Status of the front sub-goal, if any.
    pub fn front_status(&self) -> Option<Status> {
        self.goals.front().map(|goal| goal.status())
    }

    /// Type tags of all sub-goals, front first.
    pub fn kinds(&self) -> impl Iterator<Item = O::Kind> + '_ {
        self.goals.iter().map(|goal| goal.kind())
    }

    /// Processes the front sub-goal and returns the resulting status.
    pub fn process(&mut self, owner: &mut O) -> Status {
        loop {
            self.discard_terminal_front(owner);

            let Some(front) = self.goals.front_mut() else {
                return Status::Completed;
            };

            match front.process(owner) {
                Status::Completed => {
                    self.discard_front(owner);
                }
                Status::Failed => {
                    self.discard_front(owner);
                    return Status::Failed;
                }
                status => return status,
            }
        }
    }

    /// Terminates and discards every sub-goal, front to back.
    pub fn remove_all(&mut self, owner: &mut O) {
        while !self.goals.is_empty() {
            self.discard_front(owner);
        }
    }

    /// Reports every sub-goal at `depth`.
    pub fn report(&self, depth: usize, reporter: &mut dyn GoalReporter<O::Kind>) {
        for goal in &self.goals {
            goal.report(depth, reporter);
        }
    }

    fn discard_terminal_front(&mut self, owner: &mut O) {
        while self
            .goals
            .front()
            .is_some_and(|goal| goal.status().is_terminal())
        {
            self.discard_front(owner);
        }
    }

    fn discard_front(&mut self, owner: &mut O) {
        if let Some(mut goal) = self.goals.pop_front() {
            let kind = goal.kind();
            let status = goal.status();
            goal.terminate(owner);
            owner.goal_removed(kind, status);
        }
    }
}

impl<O: GoalOwner> Default for Subgoals<O> {
    fn default() -> Self {
        Self::new()
    }
}
