use goal_tree::{Goal, GoalReporter, Status, Subgoals};
use raven_core::{BotBody, EntityId, GoalKind, Path};

use super::TraverseEdge;

/// Follows a planned path by traversing its edges in order.
///
/// The goal owns its own copy of the path. Activation decomposes the path
/// into one [`TraverseEdge`] per edge with the first edge at the front. The
/// goal completes once every edge has been traversed; an empty path completes
/// on the first tick without issuing any steering command.
pub struct FollowPath {
    owner: EntityId,
    status: Status,
    path: Path,
    subgoals: Subgoals<BotBody>,
}

impl FollowPath {
    pub fn new(owner: EntityId, path: Path) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            path,
            subgoals: Subgoals::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Edges not yet traversed, including the one in progress.
    pub fn remaining_edges(&self) -> usize {
        self.subgoals.len()
    }
}

impl Goal<BotBody> for FollowPath {
    fn kind(&self) -> GoalKind {
        GoalKind::FollowPath
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, _bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.status = Status::Active;

        // Pushed back to front so the first edge ends up at the front.
        let edges = self.path.edges();
        let last = edges.len().saturating_sub(1);
        for (index, edge) in edges.iter().enumerate().rev() {
            self.subgoals
                .push_front(Box::new(TraverseEdge::new(self.owner, *edge, index == last)));
        }

        tracing::debug!(bot = %self.owner, edges = edges.len(), "following path");
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        self.status = self.subgoals.process(bot);
        self.status
    }

    fn terminate(&mut self, bot: &mut BotBody) {
        self.subgoals.remove_all(bot);
        self.status = Status::Completed;
    }

    fn report(&self, depth: usize, reporter: &mut dyn GoalReporter<GoalKind>) {
        reporter.goal(depth, self.kind(), self.status);
        self.subgoals.report(depth + 1, reporter);
    }
}
