use super::*;

/// Steps of a match, reported to an [`Observer`] as they happen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Both agents are reset and the first move is about to be requested.
    Reset,
    /// A move was requested for the 1-indexed ply.
    Request { ply: usize, side: Side },
    /// A legal move was accepted and appended.
    Move { ply: usize, side: Side, mv: String },
    /// A side lost without a legal move.
    Forfeit { side: Side, reason: Termination },
    /// The match is over.
    Verdict(Ruling),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Reset => write!(f, "agents reset"),
            Event::Request { ply, side } => write!(f, "ply {}: {} to move", ply, side),
            Event::Move { ply, side, mv } => write!(f, "ply {}: {} plays {}", ply, side, mv),
            Event::Forfeit { side, reason } => write!(f, "{} forfeits: {}", side, reason),
            Event::Verdict(ruling) => write!(f, "result {}", ruling),
        }
    }
}

/// Hook for tracing a match step by step.
/// Purely observational: nothing an observer does changes the course of the match.
pub trait Observer: Send {
    fn observe(&mut self, event: &Event);
}

impl<F> Observer for F
where
    F: FnMut(&Event) + Send,
{
    fn observe(&mut self, event: &Event) {
        self(event)
    }
}
