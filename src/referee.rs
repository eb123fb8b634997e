use super::*;

/// Translates a move history into rules-engine queries.
///
/// Both queries are pure functions of the history: the referee keeps no
/// position of its own, and the engine replays from scratch each time.
#[derive(Debug, Clone, Default)]
pub struct Referee<R> {
    rules: R,
}

impl<R> Referee<R>
where
    R: Rules,
{
    pub fn new(rules: R) -> Self {
        Self { rules }
    }
    /// True iff `candidate` is spelled exactly like one of the legal moves.
    /// No alternate notation is normalized; agents must speak the engine's notation.
    pub fn is_legal(&self, history: &MoveHistory, candidate: &str) -> Result<bool, OracleError> {
        Ok(self
            .rules
            .legal(history)?
            .iter()
            .any(|legal| legal == candidate))
    }
    /// Decides the game after `mover` played the last move of `history`, if it is over.
    /// Draws take precedence over mate.
    pub fn classify(
        &self,
        history: &MoveHistory,
        mover: Side,
    ) -> Result<Option<Ruling>, OracleError> {
        let status = self.rules.status(history)?;
        if let Some(reason) = status.draw() {
            return Ok(Some(Ruling::draw(reason)));
        }
        if status.mated {
            return Ok(Some(Ruling::new(Verdict::wins(mover), Termination::Checkmate)));
        }
        Ok(None)
    }
}
