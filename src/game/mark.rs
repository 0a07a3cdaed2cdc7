use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Mark {
    /// The player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::PlayerA => Some(Player::A),
            Mark::PlayerB => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Board symbol: `X` for player A, `O` for player B, `.` for empty.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::PlayerA => 'X',
            Mark::PlayerB => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to the mark it places
    pub fn to_mark(self) -> Mark {
        match self {
            Player::A => Mark::PlayerA,
            Player::B => Mark::PlayerB,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "Player A (X)",
            Player::B => "Player B (O)",
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Mark {
        player.to_mark()
    }
}
