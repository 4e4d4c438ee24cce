use crate::castle_rights::CastleRights;
use crate::chess_move::{disambiguate, parse_move_string, Move};
use crate::color::{Color, NUM_COLORS};
use crate::error::Error;
use crate::movegen::{legal_moves, BoardView, MoveList};
use crate::piece::ColoredPiece;
use crate::square::{Square, ALL_SQUARES};
use log::trace;
use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A representation of a chess board.  That's why you're here, right?
///
/// `squares[row][col]` holds at most one piece; row 0 is rank 1.  The metadata fields are
/// read from and written to FEN, but `move_piece` never touches them.  `Game` keeps them current.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<ColoredPiece>; 8]; 8],
    side_to_move: Color,
    castle_rights: [CastleRights; NUM_COLORS],
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    white_in_check: bool,
    black_in_check: bool,
}

impl Board {
    /// A board with no pieces, White to move, no castle rights.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castle_rights: [CastleRights::NoRights, CastleRights::NoRights],
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            white_in_check: false,
            black_in_check: false,
        }
    }

    /// Construct a board from an FEN string.
    ///
    /// ```
    /// use chesscore::{Board, Color, Error};
    ///
    /// let board = Board::from_fen("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2")?;
    /// assert_eq!(board.side_to_move(), Color::White);
    /// assert_eq!(board.en_passant().map(|sq| sq.to_string()), Some("c6".to_string()));
    /// assert_eq!(board.fullmove_number(), 2);
    ///
    /// assert!(Board::from_fen("not a fen").is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board, Error> {
        fen.parse()
    }

    /// The standard starting position.
    pub fn from_start_pos() -> Board {
        Board::default()
    }

    /// What is on this square?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<ColoredPiece> {
        self[square]
    }

    /// Read a square by raw (row, col).  Anything off the board is `OutOfBounds`.
    pub fn get(&self, row: i32, col: i32) -> Result<Option<ColoredPiece>, Error> {
        Square::new(row, col).map(|sq| self[sq])
    }

    /// Write a square by raw (row, col), returning whatever was there.  `None` clears it.
    pub fn set(
        &mut self,
        row: i32,
        col: i32,
        piece: Option<ColoredPiece>,
    ) -> Result<Option<ColoredPiece>, Error> {
        let sq = Square::new(row, col)?;
        Ok(self.set_piece(sq, piece))
    }

    /// Put `piece` on `square` (or clear it), returning whatever was there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<ColoredPiece>) -> Option<ColoredPiece> {
        std::mem::replace(&mut self[square], piece)
    }

    /// Move whatever is on `source` to `dest`, no questions asked.  Returns the piece that was on
    /// `dest`.
    pub fn move_squares(&mut self, source: Square, dest: Square) -> Option<ColoredPiece> {
        let piece = self.set_piece(source, None);
        let captured = self.set_piece(dest, piece);
        trace!("moved {:?} {}{}, took {:?}", piece, source, dest, captured);
        captured
    }

    /// Apply a move string such as `e2e4` directly to the squares.
    ///
    /// This does not know how to play chess.  Whose piece it is, whether the move is legal, and
    /// whether it hangs a king are all ignored, and no metadata (side to move, clocks, castle
    /// rights, en passant) is updated.  The piece that stood on the arrival square is returned.
    ///
    /// ```
    /// use chesscore::{Board, Error};
    ///
    /// let mut board = Board::from_start_pos();
    /// assert_eq!(board.move_piece("e2e4")?, None);
    /// assert_eq!(board.to_string().lines().nth(4), Some("----P---"));
    /// assert!(board.move_piece("e2e").is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn move_piece(&mut self, move_string: &str) -> Result<Option<ColoredPiece>, Error> {
        let (source, dest) = parse_move_string(move_string)?;
        Ok(self.move_squares(source, dest))
    }

    /// The pseudo-legal moves of the piece on `square`.
    pub fn legal_moves(&self, square: Square) -> Result<MoveList, Error> {
        legal_moves(self, square)
    }

    /// Every pseudo-legal move of `color`, with clashing moves switched to full notation.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves: Vec<Move> = ALL_SQUARES
            .iter()
            .filter(|sq| self[**sq].map(|p| p.get_color()) == Some(color))
            .filter_map(|sq| self.legal_moves(*sq).ok())
            .flatten()
            .collect();
        disambiguate(&mut moves);
        moves
    }

    /// Who's turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// What castle rights does a particular player have?
    #[inline]
    pub fn castle_rights(&self, color: Color) -> CastleRights {
        self.castle_rights[color.to_index()]
    }

    #[inline]
    pub fn set_castle_rights(&mut self, color: Color, castle_rights: CastleRights) {
        self.castle_rights[color.to_index()] = castle_rights;
    }

    /// The square a pawn just passed over, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    /// Always false until check detection exists.
    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_in_check,
            Color::Black => self.black_in_check,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        START_FEN.parse().expect("Valid FEN")
    }
}

impl BoardView for Board {
    #[inline]
    fn occupant_at(&self, square: Square) -> Option<ColoredPiece> {
        self[square]
    }
}

impl Index<Square> for Board {
    type Output = Option<ColoredPiece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.get_row() as usize][index.get_col() as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.squares[index.get_row() as usize][index.get_col() as usize]
    }
}

impl fmt::Display for Board {
    /// Eight lines, rank 8 first, `-` for an empty square.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.squares.iter().rev().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            for square in row.iter() {
                match square {
                    Some(piece) => write!(f, "{}", piece.get_letter())?,
                    None => write!(f, "-")?,
                }
            }
        }
        Ok(())
    }
}
