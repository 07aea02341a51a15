//! An isolation-style pawn game used to exercise the search core.
//!
//! Each agent owns one pawn on a rectangular grid. A move steps the pawn to
//! one of its up to eight neighboring cells; the vacated cell is permanently
//! blocked. Blocked and occupied cells cannot be entered, so the board shrinks
//! every ply until somebody has nowhere left to go.

use anyhow::{ensure, Result};
use itertools::iproduct;

use gametree_minimax::game::{AgentId, GameState};

/// A cell on the board. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column, `0..width`.
    pub x: i8,
    /// Row, `0..height`.
    pub y: i8,
}

impl Position {
    /// Shorthand constructor.
    pub fn at(x: i8, y: i8) -> Self {
        Position { x, y }
    }
}

/// Full immutable snapshot of an isolation game.
///
/// Implements [`GameState`], so any [`SearchAgent`](gametree_minimax::strategy::SearchAgent)
/// can search it directly. Applying an action never mutates the source state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolationState {
    width: i8,
    height: i8,
    blocked: Vec<bool>,
    registry: Vec<AgentId>,
    pawns: Vec<Position>,
    last_played: AgentId,
}

impl IsolationState {
    /// Set up a fresh board with the given pawns, in turn order.
    ///
    /// The agent identities must be exactly `0..n` with the searcher at `0`
    /// and opponents numbered sequentially from `1`; that reservation is
    /// validated here, once, rather than on every search call. The last slot
    /// in the registry is considered to have moved last, so the searcher is
    /// first to act.
    pub fn new(width: i8, height: i8, pawns: &[(AgentId, Position)]) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "board must have positive dimensions, got {width}x{height}"
        );
        ensure!(!pawns.is_empty(), "a game needs at least one agent");

        let registry: Vec<AgentId> = pawns.iter().map(|(id, _)| *id).collect();
        let mut sorted = registry.clone();
        sorted.sort_unstable();
        for (expected, got) in sorted.iter().enumerate() {
            ensure!(
                *got == expected,
                "agent identities must be 0..{} with the searcher at 0, got {:?}",
                pawns.len(),
                registry
            );
        }

        let positions: Vec<Position> = pawns.iter().map(|(_, position)| *position).collect();
        for (i, position) in positions.iter().enumerate() {
            ensure!(
                position.x >= 0 && position.x < width && position.y >= 0 && position.y < height,
                "pawn of agent {} is off the board at {:?}",
                registry[i],
                position
            );
            ensure!(
                !positions[..i].contains(position),
                "two pawns share the cell {:?}",
                position
            );
        }

        let last_played = *registry.last().expect("registry is non-empty");
        Ok(IsolationState {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
            registry,
            pawns: positions,
            last_played,
        })
    }

    /// Mark cells as blocked, as if they had been vacated earlier in the game.
    pub fn with_blocked(mut self, cells: &[Position]) -> Result<Self> {
        for cell in cells {
            ensure!(
                self.in_bounds(*cell),
                "blocked cell {:?} is off the board",
                cell
            );
            ensure!(
                self.occupant(*cell).is_none(),
                "blocked cell {:?} is occupied by a pawn",
                cell
            );
            let index = self.index(*cell);
            self.blocked[index] = true;
        }
        Ok(self)
    }

    /// Override which agent moved last, shifting whose turn it is.
    pub fn with_last_played(mut self, agent: AgentId) -> Result<Self> {
        ensure!(
            self.registry.contains(&agent),
            "agent {} is not part of this game",
            agent
        );
        self.last_played = agent;
        Ok(self)
    }

    /// Board width in cells.
    pub fn width(&self) -> i8 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> i8 {
        self.height
    }

    /// Whether `position` lies on the board.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Whether `position` has been vacated and blocked.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.blocked[self.index(position)]
    }

    /// The agent whose pawn stands on `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<AgentId> {
        self.pawns
            .iter()
            .position(|pawn| *pawn == position)
            .map(|i| self.registry[i])
    }

    /// Where `agent`'s pawn stands.
    pub fn pawn(&self, agent: AgentId) -> Option<Position> {
        self.registry
            .iter()
            .position(|id| *id == agent)
            .map(|i| self.pawns[i])
    }

    /// Every pawn with its owner, in registry order.
    pub fn pawns(&self) -> Vec<(AgentId, Position)> {
        self.registry
            .iter()
            .copied()
            .zip(self.pawns.iter().copied())
            .collect()
    }

    /// Every blocked cell, in row-major order.
    pub fn blocked_cells(&self) -> Vec<Position> {
        iproduct!(0..self.height, 0..self.width)
            .map(|(y, x)| Position { x, y })
            .filter(|cell| self.is_blocked(*cell))
            .collect()
    }

    fn index(&self, position: Position) -> usize {
        position.y as usize * self.width as usize + position.x as usize
    }
}

impl GameState for IsolationState {
    type Action = Position;

    fn legal_actions(&self, agent: AgentId) -> Vec<Position> {
        let from = self.pawn(agent).expect("agent is not part of this game");
        iproduct!(-1i8..=1, -1i8..=1)
            .filter(|step| *step != (0, 0))
            .map(|(dx, dy)| Position {
                x: from.x + dx,
                y: from.y + dy,
            })
            .filter(|to| self.in_bounds(*to) && !self.is_blocked(*to) && self.occupant(*to).is_none())
            .collect()
    }

    fn apply_action(&self, agent: AgentId, action: &Position) -> Self {
        debug_assert!(
            self.legal_actions(agent).contains(action),
            "agent {} stepping to illegal cell {:?}",
            agent,
            action
        );
        let mut next = self.clone();
        let slot = next
            .registry
            .iter()
            .position(|id| *id == agent)
            .expect("agent is not part of this game");
        let vacated = next.index(next.pawns[slot]);
        next.blocked[vacated] = true;
        next.pawns[slot] = *action;
        next.last_played = agent;
        next
    }

    fn agent_ids(&self) -> Vec<AgentId> {
        self.registry.clone()
    }

    fn last_agent_played(&self) -> AgentId {
        self.last_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duel() -> IsolationState {
        IsolationState::new(
            5,
            5,
            &[(0, Position::at(2, 2)), (1, Position::at(4, 4))],
        )
        .unwrap()
    }

    #[test]
    fn center_pawn_has_eight_moves() {
        assert_eq!(duel().legal_actions(0).len(), 8);
    }

    #[test]
    fn corner_pawn_has_three_moves() {
        assert_eq!(duel().legal_actions(1).len(), 3);
    }

    #[test]
    fn blocked_and_occupied_cells_are_not_legal() {
        let state = duel().with_blocked(&[Position::at(1, 1)]).unwrap();
        let moves = state.legal_actions(0);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::at(1, 1)));

        let crowded = IsolationState::new(
            5,
            5,
            &[(0, Position::at(2, 2)), (1, Position::at(2, 3))],
        )
        .unwrap();
        assert!(!crowded.legal_actions(0).contains(&Position::at(2, 3)));
    }

    #[test]
    fn applying_an_action_blocks_the_vacated_cell_and_keeps_the_source_intact() {
        let before = duel();
        let after = before.apply_action(0, &Position::at(3, 3));

        assert_eq!(after.pawn(0), Some(Position::at(3, 3)));
        assert!(after.is_blocked(Position::at(2, 2)));
        assert_eq!(after.last_agent_played(), 0);

        // The source state is untouched.
        assert_eq!(before.pawn(0), Some(Position::at(2, 2)));
        assert!(!before.is_blocked(Position::at(2, 2)));
        assert_eq!(before.last_agent_played(), 1);
    }

    #[test]
    fn searcher_moves_first_from_a_fresh_board() {
        let state = duel();
        assert_eq!(gametree_minimax::game::next_agent_id(&state), Ok(0));
    }

    #[test]
    fn walled_in_pawn_has_no_moves() {
        let state = IsolationState::new(
            3,
            1,
            &[(0, Position::at(0, 0)), (1, Position::at(2, 0))],
        )
        .unwrap()
        .with_blocked(&[Position::at(1, 0)])
        .unwrap();
        assert!(state.legal_actions(0).is_empty());
    }

    #[test]
    fn identity_zero_is_reserved() {
        // No searcher at all.
        assert!(IsolationState::new(
            5,
            5,
            &[(1, Position::at(0, 0)), (2, Position::at(4, 4))]
        )
        .is_err());

        // Two searchers.
        assert!(IsolationState::new(
            5,
            5,
            &[(0, Position::at(0, 0)), (0, Position::at(4, 4))]
        )
        .is_err());

        // A gap in the opponent numbering.
        assert!(IsolationState::new(
            5,
            5,
            &[(0, Position::at(0, 0)), (3, Position::at(4, 4))]
        )
        .is_err());
    }

    #[test]
    fn pawns_must_fit_on_the_board_without_overlap() {
        assert!(IsolationState::new(2, 2, &[(0, Position::at(2, 0))]).is_err());
        assert!(IsolationState::new(
            5,
            5,
            &[(0, Position::at(1, 1)), (1, Position::at(1, 1))]
        )
        .is_err());
    }

    #[test]
    fn last_played_must_name_a_registered_agent() {
        assert!(duel().with_last_played(7).is_err());
        let state = duel().with_last_played(0).unwrap();
        assert_eq!(gametree_minimax::game::next_agent_id(&state), Ok(1));
    }
}
