//! Concrete agents for the isolation game, built on [`gametree_minimax`].
//!
//! This crate supplies everything the search core deliberately leaves out: a
//! real game ([`isolation`]), a JSON encoding of it ([`wire`]), a random
//! reference opponent ([`random_baseline`]) and named factories for building
//! agents from configuration strings.

#[macro_use]
extern crate serde_derive;

pub mod isolation;
pub mod random_baseline;
pub mod wire;

use gametree_minimax::error::SearchError;
use gametree_minimax::game::AgentId;
use gametree_minimax::strategy::{Mobility, SearchAgent, Strategy};

use crate::isolation::{IsolationState, Position};
use crate::random_baseline::RandomBaseline;

/// Anything that can pick the next step in an isolation game.
pub trait GameAgent {
    /// Name used for logging and factory lookup.
    fn name(&self) -> String;

    /// Produce the next step for `state`, searching at most `max_depth` extra
    /// plies (`None` searches to the end of every line).
    fn next_action(
        &self,
        state: &IsolationState,
        max_depth: Option<usize>,
    ) -> Result<Position, SearchError>;
}

/// An owned, thread-safe agent.
pub type BoxedAgent = Box<dyn GameAgent + Send + Sync>;

impl GameAgent for SearchAgent<Mobility> {
    fn name(&self) -> String {
        SearchAgent::name(self).to_owned()
    }

    fn next_action(
        &self,
        state: &IsolationState,
        max_depth: Option<usize>,
    ) -> Result<Position, SearchError> {
        SearchAgent::next_action(self, state, max_depth)
    }
}

impl GameAgent for RandomBaseline {
    fn name(&self) -> String {
        "random".to_owned()
    }

    fn next_action(
        &self,
        state: &IsolationState,
        _max_depth: Option<usize>,
    ) -> Result<Position, SearchError> {
        self.choose(state, &mut rand::thread_rng())
    }
}

/// Builds agents of one flavor for any identity.
pub trait AgentFactory {
    /// The name this factory answers to.
    fn name(&self) -> String;

    /// Build an agent with the given identity.
    fn build(&self, id: AgentId) -> BoxedAgent;
}

/// Factory for [`SearchAgent`]s of a fixed strategy.
#[derive(Debug, Clone, Copy)]
pub struct SearchAgentFactory {
    strategy: Strategy,
}

impl AgentFactory for SearchAgentFactory {
    fn name(&self) -> String {
        self.strategy.as_str().to_owned()
    }

    fn build(&self, id: AgentId) -> BoxedAgent {
        Box::new(SearchAgent::new(id, self.strategy, self.strategy.as_str()))
    }
}

/// Factory for the [`RandomBaseline`].
#[derive(Debug, Clone, Copy)]
pub struct RandomBaselineFactory;

impl AgentFactory for RandomBaselineFactory {
    fn name(&self) -> String {
        "random".to_owned()
    }

    fn build(&self, id: AgentId) -> BoxedAgent {
        Box::new(RandomBaseline::new(id))
    }
}

/// Every factory this crate knows about.
pub fn all_factories() -> Vec<Box<dyn AgentFactory>> {
    let mut factories: Vec<Box<dyn AgentFactory>> = Strategy::ALL
        .into_iter()
        .map(|strategy| Box::new(SearchAgentFactory { strategy }) as Box<dyn AgentFactory>)
        .collect();
    factories.push(Box::new(RandomBaselineFactory));
    factories
}

/// Look a factory up by name, for building agents from configuration.
pub fn factory_for_name(name: &str) -> Result<Box<dyn AgentFactory>, SearchError> {
    all_factories()
        .into_iter()
        .find(|factory| factory.name() == name)
        .ok_or_else(|| SearchError::UnknownStrategy(name.to_owned()))
}
