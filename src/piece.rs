use crate::color::Color;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a chess piece as a very simple enum
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Material value in pawns.  The king has none.
    ///
    /// ```
    /// use chesscore::Piece;
    ///
    /// assert_eq!(Piece::Rook.value(), Some(5));
    /// assert_eq!(Piece::King.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<u32> {
        match *self {
            Piece::Pawn => Some(1),
            Piece::Knight | Piece::Bishop => Some(3),
            Piece::Rook => Some(5),
            Piece::Queen => Some(9),
            Piece::King => None,
        }
    }

    /// Convert a piece with a color to a FEN letter.  White pieces are uppercase.
    ///
    /// ```
    /// use chesscore::{Piece, Color};
    ///
    /// assert_eq!(Piece::Knight.to_char(Color::White), 'N');
    /// assert_eq!(Piece::Knight.to_char(Color::Black), 'n');
    /// ```
    #[inline]
    pub fn to_char(&self, color: Color) -> char {
        let letter = match *self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    /// Read a FEN letter.  The case of the letter decides the color.
    pub fn from_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char(Color::Black))
    }
}

/// A piece standing on a board: its kind and its side.
///
/// Neither ever changes.  A captured piece is handed back to the caller, not mutated.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct ColoredPiece {
    piece: Piece,
    color: Color,
}

impl ColoredPiece {
    #[inline]
    pub fn new(piece: Piece, color: Color) -> ColoredPiece {
        ColoredPiece { piece, color }
    }

    #[inline]
    pub fn get_piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn get_color(&self) -> Color {
        self.color
    }

    /// The FEN letter for this piece, uppercase for White.
    #[inline]
    pub fn get_letter(&self) -> char {
        self.piece.to_char(self.color)
    }

    /// Parse a FEN letter.
    pub fn from_letter(c: char) -> Option<ColoredPiece> {
        Piece::from_char(c).map(|(piece, color)| ColoredPiece::new(piece, color))
    }
}

impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for c in "pnbrqkPNBRQK".chars() {
            let piece = ColoredPiece::from_letter(c).unwrap();
            assert_eq!(piece.get_letter(), c);
        }
    }

    #[test]
    fn letter_case_picks_side() {
        let white_queen = ColoredPiece::from_letter('Q').unwrap();
        assert_eq!(white_queen.get_piece(), Piece::Queen);
        assert_eq!(white_queen.get_color(), Color::White);
        let black_pawn = ColoredPiece::from_letter('p').unwrap();
        assert_eq!(black_pawn.get_color(), Color::Black);
    }

    #[test]
    fn material_values() {
        let total: u32 = "RNBQKBNRPPPPPPPP"
            .chars()
            .filter_map(|c| ColoredPiece::from_letter(c))
            .filter_map(|p| p.get_piece().value())
            .sum();
        assert_eq!(total, 39);
        assert_eq!(Piece::Knight.value(), Piece::Bishop.value());
        assert_eq!(Piece::King.value(), None);
    }

    #[test]
    fn unknown_letters() {
        for c in "xX1/ ".chars() {
            assert_eq!(ColoredPiece::from_letter(c), None);
        }
    }
}
