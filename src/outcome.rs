use super::*;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// What a completed match hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: Uuid,
    pub verdict: Verdict,
    pub termination: Termination,
    /// Every accepted move, for replay and audit.
    pub history: MoveHistory,
}

impl Outcome {
    pub fn new(id: Uuid, ruling: Ruling, history: MoveHistory) -> Self {
        Self {
            id,
            verdict: ruling.verdict,
            termination: ruling.termination,
            history,
        }
    }
    pub fn ruling(&self) -> Ruling {
        Ruling::new(self.verdict, self.termination)
    }
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "match {}: {} after {} plies",
            self.id,
            self.ruling(),
            self.history.len()
        )
    }
}
