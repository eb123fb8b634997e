use super::*;

/// Contract of a rules engine, queried over whole move histories.
///
/// Implementations must be pure: the answer depends on the history alone,
/// so repeated queries agree and matches may share one engine freely.
pub trait Rules: Send + Sync {
    /// Canonical notation of every legal move after `history`.
    /// An empty history denotes the initial position.
    fn legal(&self, history: &MoveHistory) -> Result<Vec<String>, OracleError>;
    /// Classification of the position after `history`.
    fn status(&self, history: &MoveHistory) -> Result<Status, OracleError>;
}

/// Everything the referee needs to know about a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    /// Side to move has its king attacked.
    pub check: bool,
    /// Side to move is in check with no legal reply.
    pub mated: bool,
    /// Side to move is not in check and has no legal reply.
    pub stalemate: bool,
    /// Neither side can possibly mate.
    pub insufficient: bool,
    /// Current position has occurred often enough to draw.
    pub repetition: bool,
    /// Halfmove clock has run out.
    pub fifty_moves: bool,
}

impl Status {
    /// The drawing condition that applies, if any.
    /// Checked in a fixed order so a single reason is reported.
    pub fn draw(&self) -> Option<Termination> {
        if self.repetition {
            Some(Termination::Repetition)
        } else if self.fifty_moves {
            Some(Termination::FiftyMoves)
        } else if self.insufficient {
            Some(Termination::InsufficientMaterial)
        } else if self.stalemate {
            Some(Termination::Stalemate)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "check={}, mated={}, stalemate={}, insufficient={}, repetition={}, fifty={}",
            self.check,
            self.mated,
            self.stalemate,
            self.insufficient,
            self.repetition,
            self.fifty_moves
        )
    }
}
