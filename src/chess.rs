use super::*;
use shakmaty::CastlingMode;
use shakmaty::Chess;
use shakmaty::EnPassantMode;
use shakmaty::Position;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::Zobrist64;

/// Standard chess, with moves in UCI long algebraic notation
/// (`e2e4`, `e1g1` for castling, `e7e8q` for promotion).
///
/// Every query replays the history from the start position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessRules;

impl ChessRules {
    /// Position reached by playing `history` from the start position.
    pub fn replay(history: &MoveHistory) -> Result<Chess, OracleError> {
        Self::walk(history).map(|(position, _)| position)
    }
    /// Final position, and how many times it occurred during the game.
    fn walk(history: &MoveHistory) -> Result<(Chess, usize), OracleError> {
        let mut position = Chess::default();
        let mut hashes = vec![Self::hash(&position)];
        for (i, mv) in history.iter().enumerate() {
            position = Self::play(position, i + 1, mv)?;
            hashes.push(Self::hash(&position));
        }
        let current = Self::hash(&position);
        let occurrences = hashes.iter().filter(|h| **h == current).count();
        Ok((position, occurrences))
    }
    /// Only the canonical spelling of a legal move is accepted, so a replayed
    /// history can never contain a move the referee would have rejected.
    fn play(mut position: Chess, ply: usize, mv: &str) -> Result<Chess, OracleError> {
        let uci = UciMove::from_ascii(mv.as_bytes()).map_err(|_| OracleError::Malformed {
            ply,
            mv: mv.to_string(),
        })?;
        let m = uci
            .to_move(&position)
            .ok()
            .filter(|m| m.to_uci(CastlingMode::Standard).to_string() == mv)
            .ok_or_else(|| OracleError::Impossible {
                ply,
                mv: mv.to_string(),
            })?;
        position.play_unchecked(m);
        Ok(position)
    }
    fn hash(position: &Chess) -> Zobrist64 {
        position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal)
    }
}

impl Rules for ChessRules {
    fn legal(&self, history: &MoveHistory) -> Result<Vec<String>, OracleError> {
        Ok(Self::replay(history)?
            .legal_moves()
            .iter()
            .map(|m| m.to_uci(CastlingMode::Standard).to_string())
            .collect())
    }
    fn status(&self, history: &MoveHistory) -> Result<Status, OracleError> {
        let (position, occurrences) = Self::walk(history)?;
        Ok(Status {
            check: position.is_check(),
            mated: position.is_checkmate(),
            stalemate: position.is_stalemate(),
            insufficient: position.is_insufficient_material(),
            repetition: occurrences >= REPETITION_LIMIT,
            fifty_moves: position.halfmoves() >= FIFTY_MOVE_PLIES,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;

    const FOOLS_MATE: &str = "f2f3 e7e5 g2g4 d8h4";
    const TEN_MOVE_STALEMATE: &str = "e2e3 a7a5 d1h5 a8a6 h5a5 h7h5 h2h4 a6h6 a5c7 f7f6 \
                                          c7d7 e8f7 d7b7 d8d3 b7b8 d3h7 b8c8 f7g6 c8e6";
    const KNIGHT_SHUFFLE: &str = "g1f3 g8f6 f3g1 f6g8";

    /// Last pawn move, then a hundred knight moves ending in a fresh position.
    fn fifty_quiet_moves() -> MoveHistory {
        let shuffles = vec![KNIGHT_SHUFFLE; 24].join(" ");
        let line = format!("e2e4 e7e5 {} b1c3 b8c6 g1f3 g8f6", shuffles);
        MoveHistory::from(line.as_str())
    }

    /// Plays seeded random legal moves until the position is decided.
    fn random_game(seed: u64) -> (MoveHistory, Status) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut history = MoveHistory::new();
        loop {
            let status = ChessRules.status(&history).unwrap();
            if status.mated || status.draw().is_some() {
                return (history, status);
            }
            let legal = ChessRules.legal(&history).unwrap();
            history.push(legal.choose(&mut rng).unwrap().clone());
        }
    }

    #[test]
    fn initial_position_has_twenty_moves() {
        let legal = ChessRules.legal(&MoveHistory::new()).unwrap();
        assert_eq!(legal.len(), 20);
        assert!(legal.contains(&"e2e4".to_string()));
        assert!(legal.contains(&"g1f3".to_string()));
        assert!(!legal.contains(&"e2e5".to_string()));
    }
    #[test]
    fn castling_uses_king_destination() {
        let history = MoveHistory::from("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6");
        let legal = ChessRules.legal(&history).unwrap();
        assert!(legal.contains(&"e1g1".to_string()));
        assert!(!legal.contains(&"e1h1".to_string()));
    }
    #[test]
    fn replay_rejects_malformed_notation() {
        let history = MoveHistory::from("e2e4 zz");
        assert_eq!(
            ChessRules.legal(&history),
            Err(OracleError::Malformed {
                ply: 2,
                mv: "zz".into()
            })
        );
    }
    #[test]
    fn replay_rejects_impossible_move() {
        let history = MoveHistory::from("e2e5");
        assert_eq!(
            ChessRules.status(&history),
            Err(OracleError::Impossible {
                ply: 1,
                mv: "e2e5".into()
            })
        );
    }
    #[test]
    fn fools_mate_is_checkmate() {
        let status = ChessRules.status(&MoveHistory::from(FOOLS_MATE)).unwrap();
        assert!(status.check);
        assert!(status.mated);
        assert!(!status.stalemate);
        assert_eq!(status.draw(), None);
    }
    #[test]
    fn ten_move_stalemate() {
        let history = MoveHistory::from(TEN_MOVE_STALEMATE);
        let status = ChessRules.status(&history).unwrap();
        assert!(status.stalemate);
        assert!(!status.check);
        assert!(!status.mated);
        assert!(ChessRules.legal(&history).unwrap().is_empty());
    }
    #[test]
    fn threefold_repetition() {
        let twice = MoveHistory::from(KNIGHT_SHUFFLE);
        assert!(!ChessRules.status(&twice).unwrap().repetition);
        let thrice = format!("{} {}", KNIGHT_SHUFFLE, KNIGHT_SHUFFLE);
        let status = ChessRules.status(&MoveHistory::from(thrice.as_str())).unwrap();
        assert!(status.repetition);
        assert_eq!(status.draw(), Some(Termination::Repetition));
    }
    #[test]
    fn status_is_stable_across_queries() {
        let history = MoveHistory::from("e2e4 e7e5");
        let first = ChessRules.status(&history).unwrap();
        let again = ChessRules.status(&history).unwrap();
        assert_eq!(first, again);
        assert_eq!(first, Status::default());
    }
    #[test]
    fn fifty_move_rule() {
        let history = fifty_quiet_moves();
        assert_eq!(history.len(), 102);
        let status = ChessRules.status(&history).unwrap();
        assert!(status.fifty_moves);
        assert!(!status.repetition);
        assert_eq!(status.draw(), Some(Termination::FiftyMoves));
        let short = history.iter().take(101).collect::<MoveHistory>();
        assert!(!ChessRules.status(&short).unwrap().fifty_moves);
    }
    #[test]
    fn random_games_run_out_of_material() {
        let (history, status) = (0..64)
            .map(random_game)
            .find(|(_, status)| status.draw() == Some(Termination::InsufficientMaterial))
            .expect("some random game ends with bare material");
        assert!(status.insufficient);
        let position = ChessRules::replay(&history).unwrap();
        let board = position.board();
        assert!(position.is_insufficient_material());
        assert!((board.pawns() | board.rooks() | board.queens()).is_empty());
    }
}
