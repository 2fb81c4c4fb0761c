//! The Reversi rules as pure functions over a board.
//!
//! Nothing here knows whose turn it is; `ReversiState` layers the turn
//! and pass bookkeeping on top.

use crate::reversi_board::{BoardPosition, Directions, ReversiBoard, ReversiPiece, DIRECTIONS};
use crate::util::BoardDirectionIter;
use lib_boardgame::PlayerColor;

/// Given a position on the board, find the sibling piece in a given direction.
///
/// A sibling piece is defined as a piece of the same color that,
/// combined with a piece at the origin, traps one or more enemies in a straight line.
///
/// Examples:
///    In the below case, the pieces at 'a' and 'b'
///    are siblings, since together they surround the 3 enemy pieces.
///        X O O O X
///        a       b
///
///    In the below case, the pieces at 'a' and 'b'
///    are NOT siblings, since there is a gap (empty space) at 'x' preventing them
///    from trapping the other pieces.
///        X O _ O X
///        a   x   b
///
/// If a sibling is found, it returns the BoardPosition of that sibling.
/// Otherwise, it gives None.
fn find_sibling_piece_pos(
    board: &ReversiBoard,
    origin: BoardPosition,
    origin_color: ReversiPiece,
    direction: Directions,
) -> Option<BoardPosition> {
    for (index, position) in BoardDirectionIter::new(origin, direction).enumerate() {
        match board.get_piece(position) {
            // an empty space before any sibling means nothing is trapped.
            None => return None,
            // our own color right next to the origin traps nothing either.
            Some(piece) if piece == origin_color && index == 0 => return None,
            Some(piece) if piece == origin_color => return Some(position),
            // the enemy color, so keep walking.
            Some(_) => continue,
        }
    }

    // walked off the board without finding a sibling.
    None
}

fn is_open(board: &ReversiBoard, position: BoardPosition) -> bool {
    position.within_board_bounds() && board.get_piece(position).is_none()
}

/// The opponent pieces that placing `player`'s piece at `position` would flip,
/// collected direction by direction (see `DIRECTIONS`), nearest first.
///
/// Empty when the position is off the board, already occupied,
/// or brackets nothing in any direction.
pub fn capture_set(
    board: &ReversiBoard,
    player: PlayerColor,
    position: BoardPosition,
) -> Vec<BoardPosition> {
    let mut captured = Vec::new();

    if !is_open(board, position) {
        return captured;
    }

    let piece = ReversiPiece::from(player);

    for &direction in DIRECTIONS.iter() {
        if let Some(sibling) = find_sibling_piece_pos(board, position, piece, direction) {
            let between = BoardDirectionIter::new(position, direction);
            captured.extend(between.take_while(|p| *p != sibling));
        }
    }

    captured
}

/// True if placing at `position` would capture at least one piece.
pub fn is_legal(board: &ReversiBoard, player: PlayerColor, position: BoardPosition) -> bool {
    if !is_open(board, position) {
        return false;
    }

    let piece = ReversiPiece::from(player);

    DIRECTIONS.iter().any(|&direction| {
        let sibling = find_sibling_piece_pos(board, position, piece, direction);
        sibling.is_some()
    })
}

/// Every legal placement for `player`, in row-major order.
pub fn legal_moves(board: &ReversiBoard, player: PlayerColor) -> Vec<BoardPosition> {
    BoardPosition::all()
        .filter(|&position| is_legal(board, player, position))
        .collect()
}

/// Places `player`'s piece at `position` and flips everything it captures.
/// Returns the flipped positions.
///
/// Does not check legality: only call this for a position `is_legal` accepted.
///
/// Example:
///    O X X X *
///          X X
///        O   X
///            X
///
/// Placing a white piece ('O') at the position marked with the * results in:
///
///    O O O O O
///          O X
///        O   X
///            X
pub fn apply_move(
    board: &mut ReversiBoard,
    player: PlayerColor,
    position: BoardPosition,
) -> Vec<BoardPosition> {
    let captured = capture_set(board, player, position);
    let piece = Some(ReversiPiece::from(player));

    board.set_piece(position, piece);
    for &flipped in captured.iter() {
        board.set_piece(flipped, piece);
    }

    captured
}

/// (black, white) disc counts.
pub fn count_discs(board: &ReversiBoard) -> (usize, usize) {
    BoardPosition::all().fold((0, 0), |(black, white), position| {
        match board.get_piece(position) {
            Some(ReversiPiece::Black) => (black + 1, white),
            Some(ReversiPiece::White) => (black, white + 1),
            None => (black, white),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(row: usize, col: usize) -> BoardPosition {
        BoardPosition::new(row, col)
    }

    fn no_capture(board: &ReversiBoard, player: PlayerColor, position: BoardPosition) -> bool {
        capture_set(board, player, position).is_empty()
    }

    #[test]
    fn black_has_four_opening_moves() {
        let board = ReversiBoard::standard();

        assert_eq!(
            vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)],
            legal_moves(&board, PlayerColor::Black)
        );
    }

    #[test]
    fn white_has_four_opening_moves() {
        let board = ReversiBoard::standard();

        assert_eq!(
            vec![pos(2, 4), pos(3, 5), pos(4, 2), pos(5, 3)],
            legal_moves(&board, PlayerColor::White)
        );
    }

    #[test]
    fn capture_set_is_empty_for_occupied_or_off_board() {
        let board = ReversiBoard::standard();

        assert!(no_capture(&board, PlayerColor::Black, pos(3, 3)));
        assert!(no_capture(&board, PlayerColor::Black, pos(8, 3)));
        assert!(!is_legal(&board, PlayerColor::Black, pos(3, 3)));
        assert!(!is_legal(&board, PlayerColor::Black, pos(3, 9)));
    }

    #[test]
    fn zero_capture_move_is_rejected() {
        let board = ReversiBoard::standard();

        // empty, on the board, but next to nothing.
        assert!(no_capture(&board, PlayerColor::Black, pos(0, 0)));
        assert!(!is_legal(&board, PlayerColor::Black, pos(0, 0)));

        // adjacent to an enemy disc, but nothing brackets it.
        assert!(!is_legal(&board, PlayerColor::Black, pos(2, 2)));
    }

    #[test]
    fn capture_requires_own_piece_at_far_end() {
        // X O O . : nothing to bracket from the right
        let board = ReversiBoard::from_rows([
            "XOO.....", "........", "........", "........", "........", "........", "........",
            "........",
        ]);

        assert_eq!(
            vec![pos(0, 2), pos(0, 1)],
            capture_set(&board, PlayerColor::Black, pos(0, 3))
        );
        assert!(no_capture(&board, PlayerColor::White, pos(0, 3)));
    }

    #[test]
    fn walk_stops_at_gap() {
        // X O . O * : the gap means no capture leftwards
        let board = ReversiBoard::from_rows([
            "XO.O....", "........", "........", "........", "........", "........", "........",
            "........",
        ]);

        assert!(no_capture(&board, PlayerColor::Black, pos(0, 4)));
    }

    #[test]
    fn apply_move_flips_pieces_simple() {
        // X O *
        let mut board = ReversiBoard::from_rows([
            "........", "........", "..XO....", "........", "........", "........", "........",
            "........",
        ]);

        let flipped = apply_move(&mut board, PlayerColor::Black, pos(2, 4));

        assert_eq!(vec![pos(2, 3)], flipped);
        assert_eq!(Some(ReversiPiece::Black), board.get_piece(pos(2, 2)));
        assert_eq!(Some(ReversiPiece::Black), board.get_piece(pos(2, 3)));
        assert_eq!(Some(ReversiPiece::Black), board.get_piece(pos(2, 4)));
    }

    #[test]
    fn apply_move_flips_pieces_complex() {
        // We have this arrangement of pieces on the board:
        //       X
        //     O
        //   O
        // * O O O X
        let mut board = ReversiBoard::from_rows([
            "........", "........", "....X...", "...O....", "..O.....", ".*OOOX..", "........",
            "........",
        ]);

        let flipped = apply_move(&mut board, PlayerColor::Black, pos(5, 1));

        assert_eq!(5, flipped.len());
        assert_eq!((8, 0), count_discs(&board));
    }

    #[test]
    fn apply_move_captures_in_several_directions_at_once() {
        let mut board = ReversiBoard::from_rows([
            "X.X.X...", ".OOO....", "XO.OX...", ".OOO....", "X.X.X...", "........", "........",
            "........",
        ]);

        let flipped = apply_move(&mut board, PlayerColor::Black, pos(2, 2));

        assert_eq!(8, flipped.len());
        assert_eq!((17, 0), count_discs(&board));
    }

    #[test]
    fn count_discs_on_standard_board() {
        assert_eq!((2, 2), count_discs(&ReversiBoard::standard()));
        assert_eq!((0, 0), count_discs(&ReversiBoard::empty()));
    }

    #[test]
    fn queries_are_idempotent() {
        let board = ReversiBoard::standard();

        assert_eq!(
            legal_moves(&board, PlayerColor::White),
            legal_moves(&board, PlayerColor::White)
        );
        assert_eq!(
            capture_set(&board, PlayerColor::Black, pos(2, 3)),
            capture_set(&board, PlayerColor::Black, pos(2, 3))
        );
        assert_eq!(ReversiBoard::standard(), board);
    }

    /// Plays random legal moves from the opening, passing when stuck.
    fn random_board(choices: &[u8]) -> (ReversiBoard, PlayerColor) {
        let mut board = ReversiBoard::standard();
        let mut player = PlayerColor::Black;

        for &choice in choices {
            let moves = legal_moves(&board, player);
            if !moves.is_empty() {
                let position = moves[choice as usize % moves.len()];
                apply_move(&mut board, player, position);
            }
            player = player.opponent();
        }

        (board, player)
    }

    proptest! {
        #[test]
        fn legal_moves_match_is_legal(choices in prop::collection::vec(any::<u8>(), 0..60)) {
            let (board, player) = random_board(&choices);

            let expected: Vec<_> = BoardPosition::all()
                .filter(|&p| is_legal(&board, player, p))
                .collect();

            prop_assert_eq!(expected, legal_moves(&board, player));
        }

        #[test]
        fn is_legal_matches_capture_set(
            choices in prop::collection::vec(any::<u8>(), 0..60),
            row in 0usize..8,
            col in 0usize..8,
        ) {
            let (board, player) = random_board(&choices);
            let position = pos(row, col);

            prop_assert_eq!(
                !capture_set(&board, player, position).is_empty(),
                is_legal(&board, player, position)
            );
        }

        #[test]
        fn applying_never_removes_discs(
            choices in prop::collection::vec(any::<u8>(), 0..60),
            pick in any::<u8>(),
        ) {
            let (board, player) = random_board(&choices);
            let moves = legal_moves(&board, player);
            prop_assume!(!moves.is_empty());

            let position = moves[pick as usize % moves.len()];
            let mut after = board;
            let flipped = apply_move(&mut after, player, position);

            prop_assert_eq!(board.occupied_count() + 1, after.occupied_count());
            for p in BoardPosition::all() {
                if board.get_piece(p).is_some() {
                    prop_assert!(after.get_piece(p).is_some());
                }
            }

            let (black_before, white_before) = count_discs(&board);
            let (black_after, white_after) = count_discs(&after);
            let gained = flipped.len() + 1;
            match player {
                PlayerColor::Black => {
                    prop_assert_eq!(black_before + gained, black_after);
                    prop_assert_eq!(white_before - flipped.len(), white_after);
                }
                PlayerColor::White => {
                    prop_assert_eq!(white_before + gained, white_after);
                    prop_assert_eq!(black_before - flipped.len(), black_after);
                }
            }
        }

        #[test]
        fn disc_counts_sum_to_occupied(choices in prop::collection::vec(any::<u8>(), 0..80)) {
            let (board, _) = random_board(&choices);
            let (black, white) = count_discs(&board);

            prop_assert_eq!(board.occupied_count(), black + white);
            prop_assert!(black + white <= 64);
        }
    }
}
