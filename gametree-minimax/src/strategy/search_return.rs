//! The explored-tree value returned from a search.
//!
//! Rather than a bare score, the recursive walk returns the whole tree it
//! explored. That keeps the top-level decision honest (the chosen score is
//! right there next to the options it beat) and makes the search debuggable:
//! `to_text_tree` renders the exploration for human eyes.

use std::fmt::Debug;

use text_trees::StringTreeNode;

use crate::game::AgentId;

/// How a node aggregated the scores of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The searcher was moving: the node's score is the maximum child score.
    Maximizing,
    /// An adversarial opponent was moving: the minimum child score.
    Minimizing,
    /// A uniformly random opponent was moving: the mean child score.
    Chance,
}

/// One node of the explored game tree.
#[derive(Debug, Clone)]
pub enum SearchReturn<A: Clone + Debug> {
    /// An interior node whose children were explored.
    Node {
        /// The aggregation this node applied.
        kind: NodeKind,
        /// The agent that was moving here.
        moving_agent: AgentId,
        /// Every explored action with its subtree, in enumeration order. When
        /// `cutoff` is set the tail of the action list was never explored.
        options: Vec<(A, SearchReturn<A>)>,
        /// The aggregated score of this node.
        score: f64,
        /// Whether alpha-beta pruning stopped sibling exploration early.
        cutoff: bool,
    },
    /// A leaf: either a true terminal (the mover was stuck) or the depth
    /// budget ran out and the position was statically evaluated.
    Leaf {
        /// The sentinel or static-evaluation score.
        score: f64,
    },
}

impl<A: Clone + Debug> SearchReturn<A> {
    /// The score of this node, from the searcher's perspective.
    pub fn score(&self) -> f64 {
        match self {
            SearchReturn::Node { score, .. } => *score,
            SearchReturn::Leaf { score } => *score,
        }
    }

    /// The first explored action achieving this node's score.
    ///
    /// Ties go to the earliest action, matching the strict-improvement rule
    /// used at the top level of a decision. Chance nodes and leaves have no
    /// single best action, so they return `None`.
    pub fn best_action(&self) -> Option<&A> {
        match self {
            SearchReturn::Leaf { .. } => None,
            SearchReturn::Node {
                kind: NodeKind::Chance,
                ..
            } => None,
            SearchReturn::Node { options, score, .. } => options
                .iter()
                .find(|(_, subtree)| subtree.score() == *score)
                .map(|(action, _)| action),
        }
    }

    /// Renders the explored tree as indented text, one line per node.
    pub fn to_text_tree(&self) -> String {
        format!("{}", self.to_text_tree_node("root".to_owned()))
    }

    fn to_text_tree_node(&self, label: String) -> StringTreeNode {
        match self {
            SearchReturn::Leaf { score } => StringTreeNode::new(format!("{} {}", label, score)),
            SearchReturn::Node {
                kind,
                moving_agent,
                options,
                score,
                cutoff,
            } => {
                let cutoff = if *cutoff { " (cutoff)" } else { "" };
                let mut node = StringTreeNode::new(format!(
                    "{} {:?} by agent {} = {}{}",
                    label, kind, moving_agent, score, cutoff
                ));
                for (action, subtree) in options {
                    node.push_node(subtree.to_text_tree_node(format!("{:?}", action)));
                }
                node
            }
        }
    }
}
