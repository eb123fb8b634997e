use serde::Deserialize;
use serde::Serialize;

/// Moves played so far, in canonical notation, from the initial position.
///
/// Append-only: replaying it through the rules engine *is* the game state,
/// so entries are never edited or removed once accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory(Vec<String>);

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }
    /// Appends an accepted move.
    pub fn push(&mut self, mv: impl Into<String>) {
        self.0.push(mv.into());
    }
    /// Number of plies played.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
    pub fn moves(&self) -> &[String] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for MoveHistory
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for MoveHistory {
    /// Splits a space-separated move list.
    fn from(moves: &str) -> Self {
        moves.split_whitespace().collect()
    }
}

/// Space-separated, as accepted by `position startpos moves ...`.
impl std::fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
