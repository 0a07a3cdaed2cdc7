use std::path::PathBuf;

use crate::game::Cell;

/// Errors raised by the board core and the game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board config: {0}")]
    InvalidConfig(String),

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {col} is outside the {cols}-column board")]
    ColumnOutOfBounds { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cannot place an empty mark")]
    InvalidMark,

    #[error("a row is required when gravity is off (column {0})")]
    MissingRow(usize),

    #[error("cannot undo cell ({row}, {col}): {reason}")]
    InvalidUndo {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur while two agents play a game.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("agent {0} returned no move on a live board")]
    NoMove(String),

    #[error("agent {agent} chose illegal move {cell}: {source}")]
    IllegalMove {
        agent: String,
        cell: Cell,
        source: BoardError,
    },

    #[error("game should be terminal but has no outcome")]
    MissingOutcome,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = BoardError::OutOfBounds {
            row: 6,
            col: 2,
            rows: 6,
            cols: 7,
        };
        assert_eq!(err.to_string(), "cell (6, 2) is outside the 6x7 board");
    }

    #[test]
    fn test_invalid_undo_display() {
        let err = BoardError::InvalidUndo {
            row: 4,
            col: 0,
            reason: "not the top of its column",
        };
        assert_eq!(
            err.to_string(),
            "cannot undo cell (4, 0): not the top of its column"
        );
    }

    #[test]
    fn test_config_error_wraps_board_error() {
        let err: ConfigError =
            BoardError::InvalidConfig("rows must be > 0".into()).into();
        assert_eq!(
            err.to_string(),
            "board error: invalid board config: rows must be > 0"
        );
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalMove {
            agent: "Random".to_string(),
            cell: Cell::new(1, 1),
            source: BoardError::CellOccupied { row: 1, col: 1 },
        };
        assert_eq!(
            err.to_string(),
            "agent Random chose illegal move (1, 1): cell (1, 1) is already occupied"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("match.move_deadline_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: match.move_deadline_ms must be > 0"
        );
    }
}
