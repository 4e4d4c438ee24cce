use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a square on the chess board as a (row, col) pair.
///
/// Row 0 is rank "1" and col 0 is file "a".  A `Square` is always on the board; every
/// constructor that takes raw numbers checks the range.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Square {
    row: u8,
    col: u8,
}

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// A list of every square on the chessboard, a1, b1, ... h8.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square { row: 0, col: 0 }; NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square {
            row: (i / 8) as u8,
            col: (i % 8) as u8,
        };
        i += 1;
    }
    squares
};

impl Square {
    /// Create a new square from a row and a column, both in 0..8.
    ///
    /// ```
    /// use chesscore::{Error, Square};
    ///
    /// assert_eq!(Square::new(3, 4)?.to_string(), "e4");
    /// assert!(Square::new(8, 0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(row: i32, col: i32) -> Result<Square, Error> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    /// Make a square given a rank and a file
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square {
            row: rank.to_index() as u8,
            col: file.to_index() as u8,
        }
    }

    /// Return the row (0 for rank 1).
    #[inline]
    pub fn get_row(&self) -> u8 {
        self.row
    }

    /// Return the column (0 for file a).
    #[inline]
    pub fn get_col(&self) -> u8 {
        self.col
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index(self.row as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index(self.col as usize)
    }

    /// The (row, col) pair.
    #[inline]
    pub fn to_coords(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Convert this `Square` to a `usize` from 0 (a1) to 63 (h8).
    #[inline]
    pub fn to_index(&self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    /// Shift this square by a (row, col) offset.  If that walks off the board, None.
    #[inline]
    pub fn offset(&self, row_offset: i8, col_offset: i8) -> Option<Square> {
        let row = self.row as i8 + row_offset;
        let col = self.col as i8 + col_offset;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(color.forward(), 0)
    }

    /// Convert a two character label such as "e4" to a square.
    pub fn from_label(label: &str) -> Result<Square, Error> {
        let invalid = || Error::InvalidNotation {
            notation: label.to_string(),
        };
        let mut chars = label.chars();
        let file = chars.next().and_then(File::from_char).ok_or_else(invalid)?;
        let rank = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Square::make_square(rank, file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.get_file(), self.get_rank())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_label(s)
    }
}

/// Convert algebraic notation to a zero-based (row, col) pair.
///
/// ```
/// use chesscore::{label_to_coord, Error};
///
/// assert_eq!(label_to_coord("a1")?, (0, 0));
/// assert_eq!(label_to_coord("e4")?, (3, 4));
/// assert!(label_to_coord("i9").is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn label_to_coord(label: &str) -> Result<(u8, u8), Error> {
    Square::from_label(label).map(|sq| sq.to_coords())
}

/// Convert a zero-based (row, col) pair back to algebraic notation.
pub fn coord_to_label(coord: (u8, u8)) -> Result<String, Error> {
    Square::new(coord.0 as i32, coord.1 as i32).map(|sq| sq.to_string())
}
