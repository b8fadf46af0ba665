//! Lifecycle status reported by goals.

/// The lifecycle state of a goal.
///
/// # Tick Semantics
///
/// A goal moves through `Inactive -> Active -> {Completed | Failed}`:
/// - `Inactive` goals have not started their real-world action yet
/// - `Active` goals are in progress and may stay active for many ticks
/// - `Completed` and `Failed` are terminal; the parent discards the goal
///
/// Status is the only channel a goal has to talk to its parent. There is no
/// separate error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Not yet activated.
    #[default]
    Inactive,

    /// Activated and still working towards its objective.
    Active,

    /// Objective reached (or the goal was terminated).
    Completed,

    /// Objective can no longer be reached.
    Failed,
}

impl Status {
    /// Returns `true` if this status is `Inactive`.
    #[inline]
    pub fn is_inactive(self) -> bool {
        matches!(self, Status::Inactive)
    }

    /// Returns `true` if this status is `Active`.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Status::Active)
    }

    /// Returns `true` if this status is `Completed`.
    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Returns `true` if this status is `Failed`.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, Status::Failed)
    }

    /// Returns `true` for `Completed` and `Failed`.
    ///
    /// A goal in a terminal state is expected to be removed by its parent,
    /// never reused.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Completed | Status::Failed)
    }

    /// Short lowercase label used in diagnostics output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Inactive => "inactive",
            Status::Active => "active",
            Status::Completed => "completed",
            Status::Failed => "failed",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!Status::Inactive.is_terminal());
        assert!(!Status::Active.is_terminal());
        assert!(Status::Completed.is_terminal());
        assert!(Status::Failed.is_terminal());
    }

    #[test]
    fn default_is_inactive() {
        assert_eq!(Status::default(), Status::Inactive);
    }
}
