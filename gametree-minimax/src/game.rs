//! The contract between the search core and the game it is embedded in.
//!
//! The core never inspects a game state beyond what this module describes: it
//! enumerates legal actions, applies them to get fresh states, and walks the
//! turn-order registry to figure out who moves next.

use std::fmt::Debug;

use crate::error::SearchError;

/// Identity of an agent within a single game.
///
/// Identities are stable for the whole game. Exactly one agent holds the
/// reserved identity `0`: the agent the search is run for. Opponents get
/// sequential identities starting at `1`. Upholding that convention is the
/// game's job, checked once when its agents are registered.
pub type AgentId = usize;

/// An immutable snapshot of a game, owned by the embedding game crate.
///
/// Every method is a pure read: `apply_action` returns a fresh state and must
/// yield an equivalent result for the same `(state, agent, action)` triple.
/// `legal_actions` must be deterministic and finite, since its enumeration
/// order decides ties between equally scored actions.
pub trait GameState {
    /// Whatever the game uses to label a move. The search only carries these
    /// through as edge labels; it never looks inside.
    type Action: Clone + Debug;

    /// All actions `agent` may legally take in this state, in a fixed order.
    fn legal_actions(&self, agent: AgentId) -> Vec<Self::Action>;

    /// The state reached when `agent` takes `action`. Must not mutate `self`.
    fn apply_action(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// The turn-order registry: every agent in the game, in rotation order.
    fn agent_ids(&self) -> Vec<AgentId>;

    /// Identity of the agent whose move produced this state.
    fn last_agent_played(&self) -> AgentId;
}

/// Resolves whose turn it is in `state`.
///
/// The next mover sits one position after the last mover in the registry,
/// wrapping around. The rotation is fixed and cyclic: agents are never
/// eliminated from the turn order mid-game, even once they run out of moves.
///
/// A last mover that is missing from the registry is a logic error in the
/// embedding game, not a condition correct play can produce.
pub fn next_agent_id<S: GameState>(state: &S) -> Result<AgentId, SearchError> {
    let ids = state.agent_ids();
    let last = state.last_agent_played();
    let position = ids
        .iter()
        .position(|id| *id == last)
        .ok_or(SearchError::UnknownAgent(last))?;
    Ok(ids[(position + 1) % ids.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Rotation {
        ids: Vec<AgentId>,
        last: AgentId,
    }

    impl GameState for Rotation {
        type Action = ();

        fn legal_actions(&self, _agent: AgentId) -> Vec<()> {
            vec![()]
        }

        fn apply_action(&self, agent: AgentId, _action: &()) -> Self {
            Rotation {
                ids: self.ids.clone(),
                last: agent,
            }
        }

        fn agent_ids(&self) -> Vec<AgentId> {
            self.ids.clone()
        }

        fn last_agent_played(&self) -> AgentId {
            self.last
        }
    }

    #[test]
    fn single_agent_rotates_to_itself() {
        let state = Rotation {
            ids: vec![0],
            last: 0,
        };
        assert_eq!(next_agent_id(&state), Ok(0));
    }

    #[test]
    fn two_agents_alternate() {
        let mut state = Rotation {
            ids: vec![0, 1],
            last: 1,
        };
        assert_eq!(next_agent_id(&state), Ok(0));
        state.last = 0;
        assert_eq!(next_agent_id(&state), Ok(1));
    }

    #[test]
    fn five_agents_wrap_around() {
        for last in 0..5 {
            let state = Rotation {
                ids: vec![0, 1, 2, 3, 4],
                last,
            };
            assert_eq!(next_agent_id(&state), Ok((last + 1) % 5));
        }
    }

    #[test]
    fn unknown_last_mover_is_a_fault() {
        let state = Rotation {
            ids: vec![0, 1],
            last: 7,
        };
        assert_eq!(next_agent_id(&state), Err(SearchError::UnknownAgent(7)));
    }
}
