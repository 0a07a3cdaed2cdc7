use std::time::Instant;

use super::agent::Agent;
use crate::game::{BoardState, Cell, Player};

/// Baseline player: the first empty cell scanning rows bottom-up, columns
/// left to right.
///
/// On a gravity board this is always a legal landing cell, since the bottom
/// row fills before anything can stack above it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFreeAgent;

impl Agent for FirstFreeAgent {
    fn select_move(
        &mut self,
        board: &BoardState,
        _player: Player,
        _deadline: Instant,
    ) -> Option<Cell> {
        let legal = board.legal_moves();
        (0..board.rows())
            .rev()
            .flat_map(|row| (0..board.cols()).map(move |col| Cell::new(row, col)))
            .find(|cell| legal.contains(cell))
    }

    fn name(&self) -> &str {
        "FirstFree"
    }
}
