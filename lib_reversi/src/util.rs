use crate::reversi_board::{BoardPosition, Directions, BOARD_SIZE};

/// Walks the board from (but not including) an origin in one direction,
/// stopping at the edge.
pub(crate) struct BoardDirectionIter {
    direction: Directions,

    /// for iteration -- what position are we currently at?
    cursor: BoardPosition,
}

impl BoardDirectionIter {
    pub fn new(origin: BoardPosition, direction: Directions) -> Self {
        debug_assert!(
            direction.col_dir != 0 || direction.row_dir != 0,
            "an iterator with both column and row direction as 0 would never move"
        );

        BoardDirectionIter {
            direction,
            cursor: origin,
        }
    }
}

impl Iterator for BoardDirectionIter {
    type Item = BoardPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let next_row = self.cursor.row as i32 + self.direction.row_dir;
        let next_col = self.cursor.col as i32 + self.direction.col_dir;

        if next_col < 0 || next_row < 0 {
            return None;
        }

        if next_col >= BOARD_SIZE as i32 || next_row >= BOARD_SIZE as i32 {
            return None;
        }

        self.cursor = BoardPosition::new(next_row as usize, next_col as usize);

        Some(self.cursor)
    }
}
