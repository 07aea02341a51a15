#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth-limited adversarial tree search for turn-based
//! games with any number of agents. You provide the game: a type implementing
//! [`game::GameState`] that can enumerate legal actions and apply them to
//! produce new immutable states. The crate provides the search: plain minimax,
//! minimax with alpha-beta pruning, expectimax for uninformed opponents, and
//! max-n.
//!
//! The searching agent always holds identity `0` in the game's turn-order
//! registry; every other agent is an opponent. All scores are reported from
//! the searcher's perspective.
//!
//! ```rust
//! use gametree_minimax::game::{AgentId, GameState};
//! use gametree_minimax::strategy::{SearchAgent, Strategy};
//!
//! // A two-agent token game: each move takes 1 or 2 tokens, and whoever is
//! // left with nothing to take is stuck.
//! #[derive(Clone, Debug)]
//! struct Countdown {
//!     tokens: usize,
//!     last: AgentId,
//! }
//!
//! impl GameState for Countdown {
//!     type Action = usize;
//!
//!     fn legal_actions(&self, _agent: AgentId) -> Vec<usize> {
//!         (1..=self.tokens.min(2)).collect()
//!     }
//!
//!     fn apply_action(&self, agent: AgentId, action: &usize) -> Self {
//!         Countdown {
//!             tokens: self.tokens - action,
//!             last: agent,
//!         }
//!     }
//!
//!     fn agent_ids(&self) -> Vec<AgentId> {
//!         vec![0, 1]
//!     }
//!
//!     fn last_agent_played(&self) -> AgentId {
//!         self.last
//!     }
//! }
//!
//! let agent = SearchAgent::new(0, Strategy::AlphaBeta, "countdown-bot");
//! let state = Countdown { tokens: 2, last: 1 };
//!
//! // Taking both tokens leaves the opponent stuck, which wins outright.
//! let action = agent.next_action(&state, None).unwrap();
//! assert_eq!(action, 2);
//! ```

pub mod error;
pub mod game;
pub mod strategy;
