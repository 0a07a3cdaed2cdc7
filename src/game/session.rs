use tracing::debug;

use super::win::{self, GameOutcome};
use super::{BoardConfig, BoardState, Cell, Player};
use crate::error::BoardError;

/// Where a session stands. Everything but `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Turn-alternating game over a single board.
///
/// `BoardState` accepts any legal placement so search code can simulate
/// freely; the terminal guard lives here. Once the outcome is set every
/// further `play` fails with `GameAlreadyOver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: BoardState,
    current_player: Player,
    outcome: Option<GameOutcome>,
    last_move: Option<Cell>,
}

impl GameSession {
    /// Create a session with an empty board; `first` moves first.
    pub fn new(config: BoardConfig, first: Player) -> Self {
        GameSession {
            board: BoardState::new(config),
            current_player: first,
            outcome: None,
            last_move: None,
        }
    }

    /// Discard the current game and start over with a new config.
    pub fn new_game(&mut self, config: BoardConfig, first: Player) {
        *self = GameSession::new(config, first);
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            None => GameStatus::InProgress,
            Some(GameOutcome::Winner(player)) => GameStatus::Won(player),
            Some(GameOutcome::Draw) => GameStatus::Draw,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The most recent successful placement, `None` before the first move.
    pub fn last_move(&self) -> Option<Cell> {
        self.last_move
    }

    /// Legal moves for the current player; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Cell> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Place the current player's mark, update the outcome, and pass the turn.
    pub fn play(&mut self, col: usize, row: Option<usize>) -> Result<Cell, BoardError> {
        if self.is_terminal() {
            return Err(BoardError::GameAlreadyOver);
        }

        let player = self.current_player;
        let cell = self.board.place(col, row, player.to_mark())?;
        self.outcome = win::outcome_after(&self.board, cell)?;
        self.last_move = Some(cell);
        self.current_player = player.other();

        debug!(player = player.name(), row = cell.row, col = cell.col, "placed");
        if let Some(outcome) = self.outcome {
            debug!(?outcome, moves = self.board.move_count(), "game over");
        }
        Ok(cell)
    }

    /// Play at a resolved cell, as returned by `legal_moves` or an agent.
    pub fn play_cell(&mut self, cell: Cell) -> Result<Cell, BoardError> {
        self.play(cell.col, Some(cell.row))
    }
}
