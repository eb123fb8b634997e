use super::*;

/// The rules engine could not replay a move history.
/// Indicates a corrupted history or a notation mismatch with the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Entry is not valid move notation.
    Malformed { ply: usize, mv: String },
    /// Entry is valid notation but not playable in its position.
    Impossible { ply: usize, mv: String },
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { ply, mv } => write!(f, "malformed move {} at ply {}", mv, ply),
            Self::Impossible { ply, mv } => write!(f, "impossible move {} at ply {}", mv, ply),
        }
    }
}

impl std::error::Error for OracleError {}

/// Ways a match can fail to produce a verdict at all.
#[derive(Debug)]
pub enum MatchError {
    /// An agent could not be reset; it never entered the game, so it cannot lose it.
    Reset { side: Side, source: anyhow::Error },
    /// The match was abandoned while awaiting an agent.
    Interrupted,
    /// History replay failed mid-match.
    Oracle(OracleError),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reset { side, source } => write!(f, "{} failed to reset: {}", side, source),
            Self::Interrupted => write!(f, "match interrupted"),
            Self::Oracle(e) => write!(f, "rules engine failure: {}", e),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reset { source, .. } => Some(source.as_ref()),
            Self::Interrupted => None,
            Self::Oracle(e) => Some(e),
        }
    }
}

impl From<OracleError> for MatchError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    #[test]
    fn oracle_error_display() {
        let e = OracleError::Malformed {
            ply: 3,
            mv: "zz9".into(),
        };
        assert_eq!(e.to_string(), "malformed move zz9 at ply 3");
    }
    #[test]
    fn reset_error_keeps_source() {
        let e = MatchError::Reset {
            side: Side::Black,
            source: anyhow::anyhow!("engine crashed"),
        };
        assert_eq!(e.to_string(), "BLACK failed to reset: engine crashed");
        assert!(e.source().is_some());
        assert!(MatchError::Interrupted.source().is_none());
    }
}
