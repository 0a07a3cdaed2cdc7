use std::time::Instant;

use crate::game::{BoardState, Cell, Player};

/// Interface for automated players.
///
/// Agents only read the board; the caller applies the chosen move. Any
/// simulation must happen on a clone, and `deadline` is advisory: honoring it
/// is up to the agent.
pub trait Agent {
    /// Pick a move for `player`, or `None` when no legal move exists.
    fn select_move(
        &mut self,
        board: &BoardState,
        player: Player,
        deadline: Instant,
    ) -> Option<Cell>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
