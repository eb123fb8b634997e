use tokio::sync::watch;

/// Cooperative cancellation signal for a running match.
///
/// The adjudicator races it against every agent await; once it fires, the
/// match is abandoned at its current await. Cloned receivers let one trigger
/// stop many matches.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Option<watch::Receiver<bool>>);

impl Interrupt {
    /// Signal that never fires.
    pub fn never() -> Self {
        Self(None)
    }
    /// Trigger and signal pair. Sending `true` fires the signal.
    pub fn channel() -> (watch::Sender<bool>, Self) {
        let (tx, rx) = watch::channel(false);
        (tx, Self(Some(rx)))
    }
    pub fn is_fired(&self) -> bool {
        self.0.as_ref().is_some_and(|rx| *rx.borrow())
    }
    /// Resolves once the signal fires. Pends forever if the trigger is dropped unfired.
    pub async fn fired(&mut self) {
        if let Some(rx) = self.0.as_mut() {
            if rx.wait_for(|fired| *fired).await.is_ok() {
                return;
            }
        }
        std::future::pending::<()>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[tokio::test(start_paused = true)]
    async fn never_does_not_fire() {
        let mut interrupt = Interrupt::never();
        assert!(!interrupt.is_fired());
        let waited = tokio::time::timeout(Duration::from_secs(1), interrupt.fired()).await;
        assert!(waited.is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn fires_after_trigger() {
        let (trigger, mut interrupt) = Interrupt::channel();
        assert!(!interrupt.is_fired());
        trigger.send(true).unwrap();
        assert!(interrupt.is_fired());
        let waited = tokio::time::timeout(Duration::from_secs(1), interrupt.fired()).await;
        assert!(waited.is_ok());
    }
    #[tokio::test(start_paused = true)]
    async fn dropped_trigger_never_fires() {
        let (trigger, mut interrupt) = Interrupt::channel();
        drop(trigger);
        let waited = tokio::time::timeout(Duration::from_secs(1), interrupt.fired()).await;
        assert!(waited.is_err());
    }
}
