use crate::*;
use std::time::Duration;

/// Agent that plays a fixed list of moves in order, legal or not.
/// Useful for replaying recorded games and for staging edge cases.
#[derive(Debug, Clone, Default)]
pub struct Script {
    moves: Vec<String>,
    next: usize,
    delay: Duration,
}

impl Script {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            next: 0,
            delay: Duration::ZERO,
        }
    }
    /// Waits `delay` before every answer.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.next
    }
}

#[async_trait::async_trait]
impl Agent for Script {
    /// Rewinds to the first move.
    async fn reset(&mut self) -> anyhow::Result<()> {
        self.next = 0;
        Ok(())
    }
    async fn propose(&mut self, _: &MoveHistory, _: Duration) -> anyhow::Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mv = self
            .moves
            .get(self.next)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("script exhausted after {} moves", self.moves.len()))?;
        self.next += 1;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn plays_in_order_then_fails() {
        let mut script = Script::new(["e2e4", "d2d4"]);
        let history = MoveHistory::new();
        assert_eq!(script.propose(&history, Duration::ZERO).await.unwrap(), "e2e4");
        assert_eq!(script.propose(&history, Duration::ZERO).await.unwrap(), "d2d4");
        assert_eq!(script.remaining(), 0);
        assert!(script.propose(&history, Duration::ZERO).await.is_err());
    }
    #[tokio::test]
    async fn reset_rewinds() {
        let mut script = Script::new(["e2e4"]);
        let history = MoveHistory::new();
        script.propose(&history, Duration::ZERO).await.unwrap();
        script.reset().await.unwrap();
        assert_eq!(script.remaining(), 1);
    }
    #[tokio::test(start_paused = true)]
    async fn delay_holds_the_answer() {
        let mut script = Script::new(["e2e4"]).delayed(Duration::from_secs(3));
        let start = tokio::time::Instant::now();
        script.propose(&MoveHistory::new(), Duration::ZERO).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
