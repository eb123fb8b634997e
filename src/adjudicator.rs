use super::*;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use uuid::Uuid;

/// One game between two agents, from the initial position to a verdict.
pub struct Match {
    id: Uuid,
    config: MatchConfig,
    white: Box<dyn Agent>,
    black: Box<dyn Agent>,
    history: MoveHistory,
}

impl Match {
    pub fn new<W, B>(white: W, black: B) -> Self
    where
        W: Agent + 'static,
        B: Agent + 'static,
    {
        Self {
            id: Uuid::now_v7(),
            config: MatchConfig::default(),
            white: Box::new(white),
            black: Box::new(black),
            history: MoveHistory::new(),
        }
    }
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }
    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
    /// Agent playing `side`, together with the history it moves from.
    fn seat(&mut self, side: Side) -> (&mut Box<dyn Agent>, &MoveHistory) {
        match side {
            Side::White => (&mut self.white, &self.history),
            Side::Black => (&mut self.black, &self.history),
        }
    }
}

/// Runs matches: alternates turns, enforces deadlines, and rules on the result.
///
/// Each match is driven on the caller's task with at most one agent request
/// outstanding, apart from the two resets at the start, which run together.
/// An adjudicator keeps no state between matches beyond its rules engine,
/// observer, and interrupt.
pub struct Adjudicator<R> {
    referee: Referee<R>,
    interrupt: Interrupt,
    observer: Option<Box<dyn Observer>>,
}

impl<R> Adjudicator<R>
where
    R: Rules,
{
    pub fn new(rules: R) -> Self {
        Self {
            referee: Referee::new(rules),
            interrupt: Interrupt::never(),
            observer: None,
        }
    }
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: Observer + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }
    /// Plays `game` to completion.
    ///
    /// Every completed match yields an [`Outcome`], including an `Error`
    /// verdict when the history cannot be replayed. A failed reset or an
    /// interrupt yields an error instead: such a match has no verdict.
    pub async fn run(&mut self, mut game: Match) -> Result<Outcome, MatchError> {
        let ruling = match self.play(&mut game).await {
            Ok(ruling) => ruling,
            Err(MatchError::Oracle(e)) => {
                log::error!("[match {}] game failed to complete: {}", game.id, e);
                Ruling::error(Termination::Oracle)
            }
            Err(e) => {
                log::error!("[match {}] game aborted: {}", game.id, e);
                return Err(e);
            }
        };
        log::info!("[match {}] game done, result {}", game.id, ruling);
        self.notify(Event::Verdict(ruling));
        Ok(Outcome::new(game.id, ruling, game.history))
    }
}

impl<R> Adjudicator<R>
where
    R: Rules,
{
    async fn play(&mut self, game: &mut Match) -> Result<Ruling, MatchError> {
        self.reset(game).await?;
        for _ in 0..game.config.moves {
            for side in Side::ALL {
                if let Some(ruling) = self.half_move(game, side).await? {
                    return Ok(ruling);
                }
            }
        }
        log::error!("[match {}] game failed to complete - move limit reached", game.id);
        Ok(Ruling::error(Termination::MoveCap))
    }

    /// Resets run concurrently without a deadline. Both are always awaited;
    /// White's failure is reported ahead of Black's.
    async fn reset(&mut self, game: &mut Match) -> Result<(), MatchError> {
        log::info!("[match {}] resetting agents", game.id);
        let Match { white, black, .. } = &mut *game;
        let (w, b) = guard(&mut self.interrupt, async move {
            tokio::join!(settle(white.reset()), settle(black.reset()))
        })
        .await?;
        w.map_err(|source| MatchError::Reset {
            side: Side::White,
            source,
        })?;
        b.map_err(|source| MatchError::Reset {
            side: Side::Black,
            source,
        })?;
        log::info!("[match {}] agents reset", game.id);
        self.notify(Event::Reset);
        Ok(())
    }

    /// Requests, validates, and records one move by `side`.
    /// Returns the ruling if the game ended on this ply.
    async fn half_move(&mut self, game: &mut Match, side: Side) -> Result<Option<Ruling>, MatchError> {
        let id = game.id;
        let ply = game.history.len() + 1;
        let budget = game.config.budget;
        let deadline = game.config.deadline();
        log::debug!("[match {}] {} start a move", id, side);
        self.notify(Event::Request { ply, side });
        let (agent, history) = game.seat(side);
        let request = tokio::time::timeout(deadline, settle(agent.propose(history, budget)));
        let candidate = match guard(&mut self.interrupt, request).await? {
            Ok(Ok(mv)) => mv,
            Ok(Err(e)) => {
                log::info!("[match {}] {} failed to return a move: {:#}", id, side, e);
                return Ok(Some(self.forfeit(side, Termination::Failure)));
            }
            Err(_) => {
                log::info!("[match {}] {} failed to return move in allowed time", id, side);
                return Ok(Some(self.forfeit(side, Termination::Timeout)));
            }
        };
        if !self.referee.is_legal(&game.history, &candidate)? {
            log::info!("[match {}] {} illegal move: {}", id, side, candidate);
            return Ok(Some(self.forfeit(side, Termination::Illegal)));
        }
        game.history.push(candidate.clone());
        log::debug!("[match {}] all moves after {} move: {}", id, side, game.history);
        self.notify(Event::Move {
            ply,
            side,
            mv: candidate,
        });
        let ruling = self.referee.classify(&game.history, side)?;
        if ruling.is_none() {
            log::debug!("[match {}] game continues after ply {}", id, ply);
        }
        Ok(ruling)
    }

    fn forfeit(&mut self, side: Side, reason: Termination) -> Ruling {
        self.notify(Event::Forfeit { side, reason });
        Ruling::forfeit(side, reason)
    }

    fn notify(&mut self, event: Event) {
        if let Some(observer) = self.observer.as_mut() {
            observer.observe(&event);
        }
    }
}

/// Awaits an agent call, turning a panic inside it into an error.
async fn settle<T, F>(call: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    AssertUnwindSafe(call)
        .catch_unwind()
        .await
        .unwrap_or_else(|_| Err(anyhow::anyhow!("agent panicked")))
}

/// Awaits `future` unless the interrupt fires first.
async fn guard<F>(interrupt: &mut Interrupt, future: F) -> Result<F::Output, MatchError>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = interrupt.fired() => Err(MatchError::Interrupted),
        output = future => Ok(output),
    }
}
