//! The no-lookahead baseline: pick uniformly among the legal actions.
//!
//! Useful as an opponent and as a sanity reference when measuring the search
//! strategies; it is not a search strategy itself.

use rand::Rng;
use tracing::debug;

use gametree_minimax::error::SearchError;
use gametree_minimax::game::{AgentId, GameState};

/// An agent that moves at random, without exploring the tree at all.
#[derive(Debug, Clone, Copy)]
pub struct RandomBaseline {
    id: AgentId,
}

impl RandomBaseline {
    /// Build a baseline agent with the given identity.
    pub fn new(id: AgentId) -> Self {
        RandomBaseline { id }
    }

    /// This agent's identity in the turn-order registry.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Pick one of this agent's legal actions uniformly at random.
    ///
    /// The caller supplies the randomness, so tests can seed it. Fails with
    /// [`SearchError::NoLegalActions`] when the agent is stuck.
    pub fn choose<S, R>(&self, state: &S, rng: &mut R) -> Result<S::Action, SearchError>
    where
        S: GameState,
        R: Rng,
    {
        let mut actions = state.legal_actions(self.id);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions(self.id));
        }
        let pick = rng.gen_range(0..actions.len());
        let action = actions.swap_remove(pick);
        debug!(agent_id = self.id, action = ?action, "picked a random action");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::isolation::{IsolationState, Position};

    #[test]
    fn always_picks_a_legal_action() {
        let state = IsolationState::new(
            5,
            5,
            &[(0, Position::at(2, 2)), (1, Position::at(0, 0))],
        )
        .unwrap();
        let legal = state.legal_actions(0);
        let agent = RandomBaseline::new(0);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let action = agent.choose(&state, &mut rng).unwrap();
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn a_stuck_baseline_fails_fast() {
        let state = IsolationState::new(
            3,
            1,
            &[(0, Position::at(0, 0)), (1, Position::at(2, 0))],
        )
        .unwrap()
        .with_blocked(&[Position::at(1, 0)])
        .unwrap();

        let agent = RandomBaseline::new(0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            agent.choose(&state, &mut rng),
            Err(SearchError::NoLegalActions(0))
        );
    }
}
