//! JSON representation of an isolation game.
//!
//! Fixture boards and driver programs speak this format; [`WireState`]
//! converts it into the validated in-memory [`IsolationState`] and back.

use anyhow::{Context, Result};

use gametree_minimax::game::{AgentId, GameState};

use crate::isolation::{IsolationState, Position};

/// The serialized form of a full game snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WireState {
    /// Board width in cells.
    pub width: i8,
    /// Board height in cells.
    pub height: i8,
    /// Every pawn, in turn order.
    pub pawns: Vec<WirePawn>,
    /// Cells vacated earlier in the game.
    #[serde(default)]
    pub blocked: Vec<WireCell>,
    /// Identity of the agent whose move produced this snapshot.
    pub last_agent_played: AgentId,
}

/// A pawn on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct WirePawn {
    /// The owning agent.
    pub id: AgentId,
    /// Column of the pawn.
    pub x: i8,
    /// Row of the pawn.
    pub y: i8,
}

/// A bare cell coordinate on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct WireCell {
    /// Column of the cell.
    pub x: i8,
    /// Row of the cell.
    pub y: i8,
}

impl WireState {
    /// Validate this snapshot and build the in-memory state.
    pub fn into_state(self) -> Result<IsolationState> {
        let pawns: Vec<(AgentId, Position)> = self
            .pawns
            .iter()
            .map(|pawn| (pawn.id, Position::at(pawn.x, pawn.y)))
            .collect();
        let blocked: Vec<Position> = self
            .blocked
            .iter()
            .map(|cell| Position::at(cell.x, cell.y))
            .collect();

        IsolationState::new(self.width, self.height, &pawns)?
            .with_blocked(&blocked)?
            .with_last_played(self.last_agent_played)
    }

    /// Snapshot an in-memory state for serialization.
    pub fn from_state(state: &IsolationState) -> Self {
        WireState {
            width: state.width(),
            height: state.height(),
            pawns: state
                .pawns()
                .into_iter()
                .map(|(id, position)| WirePawn {
                    id,
                    x: position.x,
                    y: position.y,
                })
                .collect(),
            blocked: state
                .blocked_cells()
                .into_iter()
                .map(|cell| WireCell {
                    x: cell.x,
                    y: cell.y,
                })
                .collect(),
            last_agent_played: state.last_agent_played(),
        }
    }
}

/// Parse a JSON snapshot straight into a validated [`IsolationState`].
pub fn from_json(json: &str) -> Result<IsolationState> {
    let wire: WireState =
        serde_json::from_str(json).context("malformed isolation state json")?;
    wire.into_state()
}
