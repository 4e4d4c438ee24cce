//! A chess position core.
//!
//! Load a position from FEN, look at its squares, ask any piece for its pseudo-legal moves, and
//! shove pieces around with raw move strings.  `Game` sits on top and keeps the bookkeeping
//! straight for a front end.
//!
//! ```
//! use chesscore::{Board, Error};
//!
//! let mut board = Board::from_start_pos();
//! let knight_moves = board.legal_moves("b1".parse()?)?;
//! assert_eq!(knight_moves.len(), 2);
//!
//! board.move_piece("e2e4")?;
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```

mod board;
pub use crate::board::*;

mod bitboard;
pub use crate::bitboard::{BitBoard, EMPTY};

mod castle_rights;
pub use crate::castle_rights::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod error;
pub use crate::error::*;

mod fen;

mod file;
pub use crate::file::*;

mod game;
pub use crate::game::*;

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;
