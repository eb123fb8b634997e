use super::*;
use std::time::Duration;

/// Trait for collaborators that produce moves.
/// Implementations can be engine processes over UCI, remote services,
/// scripted replays, random movers, etc.
///
/// The adjudicator holds every `propose` call to a hard deadline and drops
/// the future when it expires, so implementations must tolerate being
/// cancelled mid-request. Any error, like a missed deadline, forfeits the game.
#[async_trait::async_trait]
pub trait Agent: Send {
    /// Prepare for a new game. Awaited without a deadline before any move is requested.
    async fn reset(&mut self) -> anyhow::Result<()>;
    /// Choose a move, in the rules engine's notation, for the position after `history`.
    /// `budget` is the thinking time the agent is asked to respect.
    async fn propose(&mut self, history: &MoveHistory, budget: Duration) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
impl<A> Agent for Box<A>
where
    A: Agent + ?Sized,
{
    async fn reset(&mut self) -> anyhow::Result<()> {
        (**self).reset().await
    }
    async fn propose(&mut self, history: &MoveHistory, budget: Duration) -> anyhow::Result<String> {
        (**self).propose(history, budget).await
    }
}
