use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Example agent that chooses randomly from legal moves.
/// Answers immediately, whatever the budget.
pub struct Fish {
    rng: SmallRng,
}

impl Fish {
    /// Reproducible mover, for replaying a game exactly.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

#[async_trait::async_trait]
impl Agent for Fish {
    async fn reset(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
    async fn propose(&mut self, history: &MoveHistory, _: Duration) -> anyhow::Result<String> {
        let legal = ChessRules.legal(history)?;
        legal
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no legal moves after {} plies", history.len()))
    }
}
