use crate::bitboard::{BitBoard, EMPTY};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::Error;
use crate::piece::{ColoredPiece, Piece};
use crate::square::Square;
use arrayvec::ArrayVec;

/// The most destinations a single piece can ever have (a queen in the middle of an empty board).
pub const MAX_PIECE_MOVES: usize = 27;

/// The moves of one piece.  Never allocates.
pub type MoveList = ArrayVec<Move, MAX_PIECE_MOVES>;

/// The only thing move generation needs to know about a position.
pub trait BoardView {
    /// What, if anything, is standing on this square?
    fn occupant_at(&self, square: Square) -> Option<ColoredPiece>;
}

/// The eight knight jumps as (row, col) offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
];

/// One step in each of the eight directions.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Apply each offset to `origin` and keep the destinations that are still on the board.
///
/// ```
/// use chesscore::{filter_out_of_bounds, KNIGHT_OFFSETS, Square};
///
/// let a1: Square = "a1".parse().unwrap();
/// let mut labels: Vec<String> = filter_out_of_bounds(&KNIGHT_OFFSETS, a1)
///     .iter()
///     .map(|sq| sq.to_string())
///     .collect();
/// labels.sort();
/// assert_eq!(labels, ["b3", "c2"]);
/// ```
pub fn filter_out_of_bounds(offsets: &[(i8, i8)], origin: Square) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(row_offset, col_offset)| origin.offset(row_offset, col_offset))
        .collect()
}

/// How a move by `mover` to `dest` would play out, or None if `dest` holds one of our own.
#[inline]
fn classify<B: BoardView + ?Sized>(board: &B, mover: ColoredPiece, dest: Square) -> Option<MoveKind> {
    match board.occupant_at(dest) {
        None => Some(MoveKind::Quiet),
        Some(target) if target.get_color() == mover.get_color() => None,
        Some(target) if target.get_piece() == Piece::King => Some(MoveKind::CheckThreat),
        Some(_) => Some(MoveKind::Capture),
    }
}

/// Generate the pseudo-legal moves (moves that *may* leave you in check) of whatever stands on
/// `source`.
///
/// ```
/// use chesscore::{legal_moves, Board, Error};
///
/// let board = Board::from_start_pos();
/// let moves = legal_moves(&board, "g1".parse()?)?;
/// let mut rendered: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
/// rendered.sort();
/// assert_eq!(rendered, ["Nf3", "Nh3"]);
/// # Ok::<(), Error>(())
/// ```
pub fn legal_moves<B: BoardView + ?Sized>(board: &B, source: Square) -> Result<MoveList, Error> {
    legal_moves_avoiding(board, source, EMPTY)
}

/// Same as `legal_moves`, but a king on `source` will not step onto any square in
/// `enemy_control`.
pub fn legal_moves_avoiding<B: BoardView + ?Sized>(
    board: &B,
    source: Square,
    enemy_control: BitBoard,
) -> Result<MoveList, Error> {
    let mover = board.occupant_at(source).ok_or_else(|| Error::EmptySquare {
        square: source.to_string(),
    })?;
    let mut moves = MoveList::new();
    match mover.get_piece() {
        Piece::Pawn => pawn_moves(board, source, mover, &mut moves),
        Piece::Knight => jump_moves(board, source, mover, &KNIGHT_OFFSETS, EMPTY, &mut moves),
        Piece::Bishop => slide_moves(board, source, mover, &BISHOP_DIRECTIONS, &mut moves),
        Piece::Rook => slide_moves(board, source, mover, &ROOK_DIRECTIONS, &mut moves),
        Piece::Queen => {
            slide_moves(board, source, mover, &ROOK_DIRECTIONS, &mut moves);
            slide_moves(board, source, mover, &BISHOP_DIRECTIONS, &mut moves);
        }
        Piece::King => jump_moves(board, source, mover, &KING_OFFSETS, enemy_control, &mut moves),
    }
    Ok(moves)
}

fn pawn_moves<B: BoardView + ?Sized>(
    board: &B,
    source: Square,
    mover: ColoredPiece,
    moves: &mut MoveList,
) {
    let color: Color = mover.get_color();

    // promotion is not generated, so a pawn on the last rank has nowhere to go
    if source.get_rank() == color.to_their_backrank() {
        return;
    }

    if let Some(front) = source.forward(color) {
        if board.occupant_at(front).is_none() {
            moves.push(Move::new(source, front, mover, MoveKind::Quiet));

            if source.get_rank() == color.to_second_rank() {
                if let Some(double_front) = front.forward(color) {
                    if board.occupant_at(double_front).is_none() {
                        moves.push(
                            Move::new(source, double_front, mover, MoveKind::Quiet)
                                .with_en_passant(front),
                        );
                    }
                }
            }
        }
    }

    for &col_offset in &[-1i8, 1] {
        if let Some(diag) = source.offset(color.forward(), col_offset) {
            if board.occupant_at(diag).is_some() {
                if let Some(kind) = classify(board, mover, diag) {
                    moves.push(Move::new(source, diag, mover, kind));
                }
            }
        }
    }
}

fn jump_moves<B: BoardView + ?Sized>(
    board: &B,
    source: Square,
    mover: ColoredPiece,
    offsets: &[(i8, i8)],
    enemy_control: BitBoard,
    moves: &mut MoveList,
) {
    for dest in filter_out_of_bounds(offsets, source) {
        if enemy_control.contains(dest) {
            continue;
        }
        if let Some(kind) = classify(board, mover, dest) {
            moves.push(Move::new(source, dest, mover, kind));
        }
    }
}

fn slide_moves<B: BoardView + ?Sized>(
    board: &B,
    source: Square,
    mover: ColoredPiece,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(row_step, col_step) in directions {
        let mut cursor = source.offset(row_step, col_step);
        while let Some(dest) = cursor {
            match classify(board, mover, dest) {
                Some(MoveKind::Quiet) => moves.push(Move::new(source, dest, mover, MoveKind::Quiet)),
                Some(kind) => {
                    moves.push(Move::new(source, dest, mover, kind));
                    break;
                }
                None => break,
            }
            cursor = dest.offset(row_step, col_step);
        }
    }
}
