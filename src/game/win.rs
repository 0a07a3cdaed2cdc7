//! K-in-a-row detection through the most recent placement.
//!
//! Only the four lines passing through the placed cell can newly complete a
//! run, so each check walks at most `win_length - 1` cells per direction
//! instead of rescanning the board.

use super::{BoardState, Cell, Player};
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The four line directions a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Top-right to bottom-left (/)
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Step as (row delta, col delta).
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Count same-mark cells stepping away from `cell` by (dr, dc), capped at `limit`.
fn count_direction(
    board: &BoardState,
    cell: Cell,
    dr: isize,
    dc: isize,
    limit: usize,
) -> usize {
    let mark = board.get(cell.row, cell.col);
    let (rows, cols) = (board.rows() as isize, board.cols() as isize);
    let mut r = cell.row as isize + dr;
    let mut c = cell.col as isize + dc;
    let mut count = 0;
    while count < limit && r >= 0 && r < rows && c >= 0 && c < cols {
        if board.get(r as usize, c as usize) != mark {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

fn run_length_capped(board: &BoardState, cell: Cell, axis: Axis, limit: usize) -> usize {
    if board.get(cell.row, cell.col).is_empty() {
        return 0;
    }
    let (dr, dc) = axis.delta();
    1 + count_direction(board, cell, dr, dc, limit)
        + count_direction(board, cell, -dr, -dc, limit)
}

/// Length of the run through `cell` along `axis`, or 0 if the cell is empty.
pub fn run_length(board: &BoardState, cell: Cell, axis: Axis) -> Result<usize, BoardError> {
    board.mark_at(cell)?;
    Ok(run_length_capped(board, cell, axis, usize::MAX))
}

/// Check if the mark at `cell` is part of a run of at least `win_length`.
pub fn check_win(board: &BoardState, cell: Cell) -> Result<Option<Player>, BoardError> {
    let player = match board.mark_at(cell)?.player() {
        Some(player) => player,
        None => return Ok(None),
    };
    let k = board.config().win_length();
    let won = Axis::ALL
        .iter()
        .any(|&axis| run_length_capped(board, cell, axis, k - 1) >= k);
    Ok(won.then_some(player))
}

/// Classify the board right after a placement at `cell`.
///
/// A win on the final placement takes precedence over a full board.
pub fn outcome_after(board: &BoardState, cell: Cell) -> Result<Option<GameOutcome>, BoardError> {
    if let Some(player) = check_win(board, cell)? {
        return Ok(Some(GameOutcome::Winner(player)));
    }
    if board.is_full() {
        return Ok(Some(GameOutcome::Draw));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardConfig, Mark};

    fn board(rows: usize, cols: usize, k: usize, gravity: bool) -> BoardState {
        BoardState::new(BoardConfig::new(rows, cols, k, gravity).unwrap())
    }

    #[test]
    fn test_connect_four_bottom_row_win() {
        let mut board = BoardState::new(BoardConfig::connect_four());
        let mut last = None;
        for col in 0..4 {
            let cell = board.drop_piece(col, Mark::PlayerA).unwrap();
            if col < 3 {
                assert_eq!(check_win(&board, cell).unwrap(), None);
            }
            last = Some(cell);
        }
        let last = last.unwrap();
        assert_eq!(last, Cell::new(5, 3));
        assert_eq!(check_win(&board, last).unwrap(), Some(Player::A));
    }

    #[test]
    fn test_tic_tac_toe_diagonal_win() {
        let mut board = BoardState::new(BoardConfig::tic_tac_toe());
        let a = board.place_at(Cell::new(0, 0), Mark::PlayerA).unwrap();
        assert_eq!(check_win(&board, a).unwrap(), None);
        let b = board.place_at(Cell::new(1, 1), Mark::PlayerA).unwrap();
        assert_eq!(check_win(&board, b).unwrap(), None);
        let c = board.place_at(Cell::new(2, 2), Mark::PlayerA).unwrap();
        assert_eq!(check_win(&board, c).unwrap(), Some(Player::A));
    }

    #[test]
    fn test_win_detected_from_any_end_on_every_axis() {
        let k = 4;
        for axis in Axis::ALL {
            let (dr, dc) = axis.delta();
            // Start far enough from the edges for DiagonalUp's negative column step.
            let start = Cell::new(1, 5);
            let run: Vec<Cell> = (0..k as isize)
                .map(|i| {
                    Cell::new(
                        (start.row as isize + i * dr) as usize,
                        (start.col as isize + i * dc) as usize,
                    )
                })
                .collect();

            for last in 0..k {
                let mut b = board(8, 10, k, false);
                for (i, &cell) in run.iter().enumerate() {
                    if i != last {
                        b.place_at(cell, Mark::PlayerB).unwrap();
                        assert_eq!(check_win(&b, cell).unwrap(), None, "{axis:?}");
                    }
                }
                b.place_at(run[last], Mark::PlayerB).unwrap();
                assert_eq!(
                    check_win(&b, run[last]).unwrap(),
                    Some(Player::B),
                    "{axis:?} completed at index {last}"
                );
                assert_eq!(run_length(&b, run[last], axis).unwrap(), k);
            }
        }
    }

    #[test]
    fn test_no_win_with_k_minus_one_blocked() {
        let mut b = board(1, 6, 4, false);
        b.place_at(Cell::new(0, 0), Mark::PlayerB).unwrap();
        for col in 1..4 {
            b.place_at(Cell::new(0, col), Mark::PlayerA).unwrap();
        }
        b.place_at(Cell::new(0, 4), Mark::PlayerB).unwrap();
        for col in 1..4 {
            assert_eq!(check_win(&b, Cell::new(0, col)).unwrap(), None);
        }
        assert_eq!(run_length(&b, Cell::new(0, 2), Axis::Horizontal).unwrap(), 3);
    }

    #[test]
    fn test_no_win_with_k_minus_one_at_edges() {
        // Two-row column: both ends of the vertical pair are board edges.
        let mut b = board(2, 3, 3, true);
        b.drop_piece(1, Mark::PlayerA).unwrap();
        let top = b.drop_piece(1, Mark::PlayerA).unwrap();
        assert_eq!(check_win(&b, top).unwrap(), None);
        assert_eq!(run_length(&b, top, Axis::Vertical).unwrap(), 2);
    }

    #[test]
    fn test_longer_run_still_wins() {
        let mut b = board(1, 7, 3, false);
        for col in [0, 1, 3, 4] {
            b.place_at(Cell::new(0, col), Mark::PlayerA).unwrap();
        }
        let gap = b.place_at(Cell::new(0, 2), Mark::PlayerA).unwrap();
        assert_eq!(check_win(&b, gap).unwrap(), Some(Player::A));
        assert_eq!(run_length(&b, gap, Axis::Horizontal).unwrap(), 5);
    }

    #[test]
    fn test_win_length_one() {
        let mut b = board(2, 2, 1, false);
        let cell = b.place_at(Cell::new(1, 0), Mark::PlayerB).unwrap();
        assert_eq!(check_win(&b, cell).unwrap(), Some(Player::B));
    }

    #[test]
    fn test_empty_cell_is_not_a_win() {
        let b = board(3, 3, 1, false);
        assert_eq!(check_win(&b, Cell::new(1, 1)).unwrap(), None);
        assert_eq!(run_length(&b, Cell::new(1, 1), Axis::Vertical).unwrap(), 0);
    }

    #[test]
    fn test_check_win_out_of_bounds() {
        let b = board(3, 3, 3, false);
        assert!(matches!(
            check_win(&b, Cell::new(3, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_tic_tac_toe_draw() {
        // X O X
        // X O O
        // O X X
        let layout = [
            (0, 0, Mark::PlayerA),
            (0, 1, Mark::PlayerB),
            (0, 2, Mark::PlayerA),
            (1, 1, Mark::PlayerB),
            (1, 0, Mark::PlayerA),
            (2, 0, Mark::PlayerB),
            (2, 2, Mark::PlayerA),
            (1, 2, Mark::PlayerB),
            (2, 1, Mark::PlayerA),
        ];
        let mut b = BoardState::new(BoardConfig::tic_tac_toe());
        let mut last = None;
        for (row, col, mark) in layout {
            let cell = b.place_at(Cell::new(row, col), mark).unwrap();
            let outcome = outcome_after(&b, cell).unwrap();
            if b.is_full() {
                assert_eq!(outcome, Some(GameOutcome::Draw));
            } else {
                assert_eq!(outcome, None);
            }
            last = Some(cell);
        }
        assert!(b.is_full());
        assert_eq!(check_win(&b, last.unwrap()).unwrap(), None);
    }

    #[test]
    fn test_connect_four_draw() {
        // Pairs of columns alternate each row, so no line holds more than two.
        let mut b = BoardState::new(BoardConfig::connect_four());
        let mut outcome = None;
        for col in 0..b.cols() {
            for row in (0..b.rows()).rev() {
                let mark = if (col / 2 + row) % 2 == 0 {
                    Mark::PlayerA
                } else {
                    Mark::PlayerB
                };
                let cell = b.drop_piece(col, mark).unwrap();
                assert_eq!(cell.row, row);
                outcome = outcome_after(&b, cell).unwrap();
                if !b.is_full() {
                    assert_eq!(outcome, None);
                }
            }
        }
        assert_eq!(outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_win_on_final_cell_beats_draw() {
        let mut b = board(1, 3, 3, false);
        b.place_at(Cell::new(0, 0), Mark::PlayerA).unwrap();
        b.place_at(Cell::new(0, 2), Mark::PlayerA).unwrap();
        let last = b.place_at(Cell::new(0, 1), Mark::PlayerA).unwrap();
        assert!(b.is_full());
        assert_eq!(
            outcome_after(&b, last).unwrap(),
            Some(GameOutcome::Winner(Player::A))
        );
    }
}
