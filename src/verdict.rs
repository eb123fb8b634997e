use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Final result of a completed match.
/// Serialized with the same labels the result is recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "WHITE")]
    WhiteWins,
    #[serde(rename = "BLACK")]
    BlackWins,
    #[serde(rename = "DRAW")]
    Draw,
    #[serde(rename = "ERROR")]
    Error,
}

impl Verdict {
    /// Decisive result crediting `side`.
    pub const fn wins(side: Side) -> Self {
        match side {
            Side::White => Self::WhiteWins,
            Side::Black => Self::BlackWins,
        }
    }
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::WhiteWins => Some(Side::White),
            Self::BlackWins => Some(Side::Black),
            Self::Draw | Self::Error => None,
        }
    }
    pub const fn is_decisive(self) -> bool {
        self.winner().is_some()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhiteWins => write!(f, "WHITE"),
            Self::BlackWins => write!(f, "BLACK"),
            Self::Draw => write!(f, "DRAW"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    Repetition,
    FiftyMoves,
    InsufficientMaterial,
    /// Agent missed its deadline.
    Timeout,
    /// Agent answered with an error.
    Failure,
    /// Agent answered with a move outside the legal set.
    Illegal,
    /// Full-move cap reached undecided.
    MoveCap,
    /// History could not be replayed by the rules engine.
    Oracle,
}

impl Termination {
    /// True for the ways a side can lose by misbehaving rather than on the board.
    pub const fn is_forfeit(self) -> bool {
        matches!(self, Self::Timeout | Self::Failure | Self::Illegal)
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkmate => write!(f, "checkmate"),
            Self::Stalemate => write!(f, "stalemate"),
            Self::Repetition => write!(f, "threefold repetition"),
            Self::FiftyMoves => write!(f, "fifty-move rule"),
            Self::InsufficientMaterial => write!(f, "insufficient material"),
            Self::Timeout => write!(f, "no move in allowed time"),
            Self::Failure => write!(f, "agent failure"),
            Self::Illegal => write!(f, "illegal move"),
            Self::MoveCap => write!(f, "move limit reached"),
            Self::Oracle => write!(f, "history replay failed"),
        }
    }
}

/// A verdict together with the reason it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ruling {
    pub verdict: Verdict,
    pub termination: Termination,
}

impl Ruling {
    pub const fn new(verdict: Verdict, termination: Termination) -> Self {
        Self {
            verdict,
            termination,
        }
    }
    /// `side` failed to produce a legal move in time; its opponent is credited.
    pub const fn forfeit(side: Side, termination: Termination) -> Self {
        Self::new(Verdict::wins(side.opponent()), termination)
    }
    pub const fn draw(termination: Termination) -> Self {
        Self::new(Verdict::Draw, termination)
    }
    pub const fn error(termination: Termination) -> Self {
        Self::new(Verdict::Error, termination)
    }
}

impl std::fmt::Display for Ruling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.verdict, self.termination)
    }
}
