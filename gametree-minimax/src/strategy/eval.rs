use derivative::Derivative;
use itertools::Itertools;
use tracing::{debug, info_span};

use crate::error::SearchError;
use crate::game::{next_agent_id, AgentId, GameState};

use super::score::{Evaluate, Mobility, LOSS_SCORE, WIN_SCORE};
use super::search_return::{NodeKind, SearchReturn};
use super::Strategy;

/// A decision-making agent that owns an identity and a [`Strategy`] and can
/// produce the next action for any [`GameState`].
///
/// The agent is stateless between decisions: every call to
/// [`SearchAgent::next_action`] explores its own tree and discards it once
/// the top-level action is chosen. Nothing is cached across turns.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct SearchAgent<E = Mobility> {
    id: AgentId,
    strategy: Strategy,
    name: &'static str,
    #[derivative(Debug = "ignore")]
    evaluator: E,
}

impl SearchAgent<Mobility> {
    /// Build an agent that scores depth-limited positions with the
    /// [`Mobility`] heuristic.
    pub fn new(id: AgentId, strategy: Strategy, name: &'static str) -> Self {
        Self {
            id,
            strategy,
            name,
            evaluator: Mobility,
        }
    }
}

impl<E> SearchAgent<E> {
    /// Build an agent with a custom static evaluator. Any
    /// `Fn(&S, AgentId, AgentId) -> f64` closure qualifies.
    pub fn with_evaluator(
        id: AgentId,
        strategy: Strategy,
        name: &'static str,
        evaluator: E,
    ) -> Self {
        Self {
            id,
            strategy,
            name,
            evaluator,
        }
    }

    /// This agent's identity in the turn-order registry.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// The strategy this agent searches with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The agent's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Pick the next action for `state`.
    ///
    /// Enumerates the agent's own legal actions, scores the subtree behind
    /// each one to `max_depth` extra plies (`None` searches until every line
    /// reaches a terminal state), and returns the first action achieving the
    /// strictly greatest score. Fails with
    /// [`SearchError::NoLegalActions`] when the agent cannot move at all.
    pub fn next_action<S>(
        &self,
        state: &S,
        max_depth: Option<usize>,
    ) -> Result<S::Action, SearchError>
    where
        S: GameState,
        E: Evaluate<S>,
    {
        let span = info_span!(
            "decide",
            agent = self.name,
            agent_id = self.id,
            strategy = %self.strategy,
            max_depth = ?max_depth,
            chosen_action = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        );
        span.in_scope(|| {
            let root = self.search(state, max_depth)?;
            let action = root
                .best_action()
                .cloned()
                .ok_or(SearchError::NoLegalActions(self.id))?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_action", format!("{:?}", action).as_str());
            current_span.record("chosen_score", root.score());

            Ok(action)
        })
    }

    /// Run the search and return the whole explored tree.
    ///
    /// The root is always a maximizing node for this agent; its options are
    /// the agent's own legal actions in enumeration order, so
    /// [`SearchReturn::best_action`] on the result is exactly the action
    /// [`SearchAgent::next_action`] would return.
    pub fn search<S>(
        &self,
        state: &S,
        max_depth: Option<usize>,
    ) -> Result<SearchReturn<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluate<S>,
    {
        let options = self.evaluate_actions(state, max_depth)?;

        let summary = options
            .iter()
            .map(|(action, subtree)| format!("{:?}={}", action, subtree.score()))
            .join(", ");
        debug!(agent = self.name, %summary, "scored root options");

        let score = options
            .iter()
            .map(|(_, subtree)| subtree.score())
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(SearchReturn::Node {
            kind: NodeKind::Maximizing,
            moving_agent: self.id,
            options,
            score,
            cutoff: false,
        })
    }

    /// Score each of this agent's legal actions in `state`.
    ///
    /// Every action is explored with a fresh `(-inf, +inf)` alpha-beta
    /// window, so under [`Strategy::AlphaBeta`] the returned root scores are
    /// exact and identical to plain minimax's, not mere bounds.
    pub fn evaluate_actions<S>(
        &self,
        state: &S,
        max_depth: Option<usize>,
    ) -> Result<Vec<(S::Action, SearchReturn<S::Action>)>, SearchError>
    where
        S: GameState,
        E: Evaluate<S>,
    {
        let actions = state.legal_actions(self.id);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions(self.id));
        }

        actions
            .into_iter()
            .map(|action| {
                let child = state.apply_action(self.id, &action);
                let subtree = self.score_subtree(
                    &child,
                    max_depth,
                    0,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                )?;
                Ok((action, subtree))
            })
            .collect()
    }

    /// The recursive walk shared by all four strategies.
    ///
    /// At every entry: resolve whose turn it is, then
    /// 1. no legal actions for the mover means the position is terminal and
    ///    scores a fixed sentinel, `LOSS_SCORE` when the stuck mover is this
    ///    agent and `WIN_SCORE` when it is an opponent;
    /// 2. an exhausted depth budget means the position is statically
    ///    evaluated;
    /// 3. otherwise the children are explored and aggregated by the active
    ///    strategy's policy.
    ///
    /// The terminal check comes first: a stuck mover scores its sentinel even
    /// when the depth budget runs out on the same node.
    fn score_subtree<S>(
        &self,
        state: &S,
        max_depth: Option<usize>,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<SearchReturn<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluate<S>,
    {
        let mover = next_agent_id(state)?;
        let actions = state.legal_actions(mover);

        if actions.is_empty() {
            let score = if mover == self.id {
                LOSS_SCORE
            } else {
                WIN_SCORE
            };
            return Ok(SearchReturn::Leaf { score });
        }

        if max_depth == Some(depth) {
            return Ok(SearchReturn::Leaf {
                score: self.evaluator.evaluate(state, mover, self.id),
            });
        }

        let kind = if mover == self.id {
            NodeKind::Maximizing
        } else if self.strategy == Strategy::Expectimax {
            NodeKind::Chance
        } else {
            NodeKind::Minimizing
        };

        let prune = self.strategy == Strategy::AlphaBeta;
        let mut options = Vec::with_capacity(actions.len());
        let mut cutoff = false;

        let score = match kind {
            NodeKind::Maximizing => {
                let mut best = f64::NEG_INFINITY;
                for action in actions {
                    let child = state.apply_action(mover, &action);
                    let subtree = self.score_subtree(&child, max_depth, depth + 1, alpha, beta)?;
                    best = best.max(subtree.score());
                    options.push((action, subtree));
                    if prune {
                        alpha = alpha.max(best);
                        if alpha >= beta {
                            cutoff = true;
                            break;
                        }
                    }
                }
                best
            }
            NodeKind::Minimizing => {
                let mut best = f64::INFINITY;
                for action in actions {
                    let child = state.apply_action(mover, &action);
                    let subtree = self.score_subtree(&child, max_depth, depth + 1, alpha, beta)?;
                    best = best.min(subtree.score());
                    options.push((action, subtree));
                    if prune {
                        beta = beta.min(best);
                        if alpha >= beta {
                            cutoff = true;
                            break;
                        }
                    }
                }
                best
            }
            NodeKind::Chance => {
                // Each legal action of an uninformed opponent is equally likely.
                let probability = 1.0 / actions.len() as f64;
                let mut expected = 0.0;
                for action in actions {
                    let child = state.apply_action(mover, &action);
                    let subtree = self.score_subtree(&child, max_depth, depth + 1, alpha, beta)?;
                    expected += probability * subtree.score();
                    options.push((action, subtree));
                }
                expected
            }
        };

        Ok(SearchReturn::Node {
            kind,
            moving_agent: mover,
            options,
            score,
            cutoff,
        })
    }
}
