use super::*;
use std::time::Duration;

/// Time control and length limit for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Thinking time requested from the agent for each move.
    pub budget: Duration,
    /// Full-move pairs before the match is abandoned undecided.
    pub moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            budget: Duration::from_millis(MOVE_BUDGET_MS),
            moves: FULL_MOVE_CAP,
        }
    }
}

impl MatchConfig {
    pub fn new(budget: Duration, moves: usize) -> Self {
        Self { budget, moves }
    }
    /// Wall-clock bound on a single move request.
    pub fn deadline(&self) -> Duration {
        self.budget.saturating_mul(DEADLINE_MARGIN)
    }
    /// Most plies a match can last.
    pub fn plies(&self) -> usize {
        self.moves * 2
    }
}
