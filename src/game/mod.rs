//! Core game logic: board configuration and state, K-in-a-row detection, and
//! the turn-alternating session state machine.

mod board;
mod mark;
mod session;
pub mod win;

pub use board::{BoardConfig, BoardState, Cell};
pub use mark::{Mark, Player};
pub use session::{GameSession, GameStatus};
pub use win::{Axis, GameOutcome};
