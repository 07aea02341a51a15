//! Scoring: terminal sentinels and the depth-limit static evaluation.
//!
//! Every score in the search is an `f64` from the searcher's perspective.
//! True terminal positions (the mover has no legal action left) get a fixed
//! sentinel; positions cut off by the depth budget get a heuristic value from
//! an [`Evaluate`] implementation.

use crate::game::{AgentId, GameState};

/// Sentinel score for a line where an opponent ends up stuck.
pub const WIN_SCORE: f64 = 9.0;

/// Sentinel score for a line where the searcher itself ends up stuck.
pub const LOSS_SCORE: f64 = -9.0;

/// A static evaluation of a depth-limited position.
///
/// `mover` is the agent that would move next had the search continued and
/// `owner` is the searching agent; the returned score must be from the
/// owner's perspective. Implemented for any
/// `Fn(&S, AgentId, AgentId) -> f64`, so a plain closure works as an
/// evaluator.
pub trait Evaluate<S: GameState> {
    /// Score `state` from the owner's perspective.
    fn evaluate(&self, state: &S, mover: AgentId, owner: AgentId) -> f64;
}

impl<S, F> Evaluate<S> for F
where
    S: GameState,
    F: Fn(&S, AgentId, AgentId) -> f64,
{
    fn evaluate(&self, state: &S, mover: AgentId, owner: AgentId) -> f64 {
        (self)(state, mover, owner)
    }
}

/// The mobility heuristic: the number of legal actions available to the agent
/// about to move, positive when that agent is the searcher and negative
/// otherwise. Absent any game knowledge, the breadth of one's option set is
/// the proxy for positional strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mobility;

impl<S: GameState> Evaluate<S> for Mobility {
    fn evaluate(&self, state: &S, mover: AgentId, owner: AgentId) -> f64 {
        let moves = state.legal_actions(mover).len() as f64;
        if mover == owner {
            moves
        } else {
            -moves
        }
    }
}
