//! Faults raised by the search core.
//!
//! All of these indicate caller or configuration bugs rather than recoverable
//! runtime conditions. A decision either completes and returns one action, or
//! it fails with one of these.

use thiserror::Error;

use crate::game::AgentId;

/// Error type for everything the search core can refuse to do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The agent recorded as the last mover is not present in the turn-order
    /// registry, so the next mover cannot be resolved.
    #[error("agent {0} is not present in the turn-order registry")]
    UnknownAgent(AgentId),

    /// A decision was requested for an agent that has no legal actions in the
    /// given state.
    #[error("agent {0} has no legal actions to choose from")]
    NoLegalActions(AgentId),

    /// A strategy name did not match any known search strategy.
    #[error("unknown search strategy '{0}'")]
    UnknownStrategy(String),
}
