use raven_core::{ItemKind, Vector2D};

/// An external instruction injected into a bot's brain, e.g. by a script or
/// an operator. Stimuli go through the same goal-injection helpers the
/// evaluators use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stimulus {
    /// Pre-empt the current goal with a move; the current goal resumes after.
    MoveTo(Vector2D),
    /// Move once every queued goal has finished.
    QueueMoveTo(Vector2D),
    Explore,
    AttackTarget,
    GetItem(ItemKind),
    Wander,
    /// Re-run arbitration now instead of waiting for the regulator.
    Arbitrate,
}
