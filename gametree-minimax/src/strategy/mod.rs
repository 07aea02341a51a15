//! The four interchangeable search strategies and the agent that runs them.
//!
//! All four walk the same game tree with the same termination rules; they
//! differ only in how a node aggregates the scores of its children:
//!
//! - [`Strategy::Minimax`] assumes every opponent minimizes the searcher's
//!   score and takes the minimum at opponent nodes.
//! - [`Strategy::AlphaBeta`] is minimax with alpha-beta pruning. It always
//!   picks the same top-level action as plain minimax; pruning only skips
//!   score computations that cannot change the root decision.
//! - [`Strategy::Expectimax`] treats opponents as uniformly random and scores
//!   their nodes by the arithmetic mean of the children.
//! - [`Strategy::MaxN`] is kept as a separate, named strategy for games with
//!   more than two agents. In its current form it aggregates exactly like
//!   minimax; see the strategy's docs.

mod eval;
mod score;
mod search_return;

pub use eval::SearchAgent;
pub use score::{Evaluate, Mobility, LOSS_SCORE, WIN_SCORE};
pub use search_return::{NodeKind, SearchReturn};

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Which aggregation policy a [`SearchAgent`] uses at the nodes of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Maximize at own nodes, minimize at every opponent's node.
    Minimax,
    /// Minimax with alpha-beta pruning. Chooses identically to [`Strategy::Minimax`].
    AlphaBeta,
    /// Maximize at own nodes, average at opponent (chance) nodes.
    Expectimax,
    /// Generalized minimax for many agents. Currently aggregates exactly like
    /// [`Strategy::Minimax`] instead of tracking one utility per agent, so the
    /// name promises more than the implementation delivers. Kept separate as
    /// the extension point for a true per-agent-utility max-n.
    MaxN,
}

impl Strategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::Expectimax,
        Strategy::MaxN,
    ];

    /// The canonical name this strategy parses from and displays as.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::Expectimax => "expectimax",
            Strategy::MaxN => "maxn",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| SearchError::UnknownStrategy(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn unknown_name_is_a_configuration_fault() {
        assert_eq!(
            "negamax".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy("negamax".to_owned()))
        );
    }
}
