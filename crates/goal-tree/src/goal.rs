//! Core goal trait.
//!
//! This module defines the [`Goal`] trait, the unit of agent intent, and the
//! [`GoalOwner`] trait implemented by the agent type goals act upon. Goals do
//! not hold a reference to their owner; the owner is passed into every
//! lifecycle call instead, so a goal can never outlive or control the agent.

use core::fmt;

use crate::{GoalReporter, Status};

/// The agent a goal tree acts upon.
///
/// The owner decides which type tags identify its goals and may observe goal
/// removal (e.g. to keep a debugging history).
pub trait GoalOwner {
    /// Type tag identifying concrete goal kinds.
    type Kind: Copy + Eq + fmt::Debug + fmt::Display + Send + 'static;

    /// Called after a sub-goal has been terminated and removed from its parent.
    ///
    /// `status` is the goal's status at the moment it was removed, before
    /// termination forced it to `Completed`.
    fn goal_removed(&mut self, _kind: Self::Kind, _status: Status) {}
}

/// A unit of agent intent with a lifecycle status.
///
/// # Contract
///
/// - [`Goal::activate`] starts the real-world action and sets the status to
///   `Active` (or straight to a terminal status if it cannot start). It must be
///   a no-op when the goal is already active.
/// - [`Goal::process`] advances the goal by one tick. If the goal was inactive
///   it activates first.
/// - [`Goal::terminate`] undoes any persistent side effect of activation and
///   forces the status to `Completed`. It must leave the owner untouched when
///   the goal never activated.
pub trait Goal<O: GoalOwner>: Send {
    /// Type tag of this goal.
    fn kind(&self) -> O::Kind;

    /// Current lifecycle status.
    fn status(&self) -> Status;

    /// Starts the goal's action.
    fn activate(&mut self, owner: &mut O);

    /// Advances the goal by one tick and returns the resulting status.
    fn process(&mut self, owner: &mut O) -> Status;

    /// Releases side effects of activation and marks the goal completed.
    fn terminate(&mut self, owner: &mut O);

    /// Activates the goal if it has not been activated yet.
    #[inline]
    fn activate_if_inactive(&mut self, owner: &mut O) {
        if self.status().is_inactive() {
            self.activate(owner);
        }
    }

    /// Reports this goal (and, for composites, its sub-goals) to a reporter.
    fn report(&self, depth: usize, reporter: &mut dyn GoalReporter<O::Kind>) {
        reporter.goal(depth, self.kind(), self.status());
    }
}

/// Blanket implementation for boxed goals.
///
/// This allows `Box<dyn Goal<O>>` to also implement `Goal<O>`, enabling
/// heterogeneous sub-goal collections.
impl<O: GoalOwner> Goal<O> for Box<dyn Goal<O>> {
    #[inline]
    fn kind(&self) -> O::Kind {
        (**self).kind()
    }

    #[inline]
    fn status(&self) -> Status {
        (**self).status()
    }

    #[inline]
    fn activate(&mut self, owner: &mut O) {
        (**self).activate(owner)
    }

    #[inline]
    fn process(&mut self, owner: &mut O) -> Status {
        (**self).process(owner)
    }

    #[inline]
    fn terminate(&mut self, owner: &mut O) {
        (**self).terminate(owner)
    }

    fn report(&self, depth: usize, reporter: &mut dyn GoalReporter<O::Kind>) {
        (**self).report(depth, reporter)
    }
}
