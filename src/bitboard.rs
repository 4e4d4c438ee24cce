use crate::square::{Square, ALL_SQUARES};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitOr, Not};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A set of squares packed into 64 bits, a1 in the low bit and h8 in the high bit.
///
/// The king's generator uses one of these as the set of squares the enemy controls.
///
/// ```
/// use chesscore::{BitBoard, Square};
///
/// let bb = BitBoard(7); // a1, b1, c1
///
/// assert_eq!(bb.popcnt(), 3);
/// assert!(bb.contains("b1".parse::<Square>().unwrap()));
/// assert_eq!(bb.map(|sq| sq.to_string()).collect::<Vec<_>>(), ["a1", "b1", "c1"]);
/// ```
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct BitBoard(pub u64);

/// An empty bitboard.  It is sometimes useful to use !EMPTY to get the universe of squares.
pub const EMPTY: BitBoard = BitBoard(0);

impl BitBoard {
    /// A bitboard holding exactly one square.
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_index())
    }

    /// Is this square in the set?
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.0 & (1u64 << sq.to_index()) != 0
    }

    /// Count the number of squares in the set.
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Lowest square in the set.  Only meaningful on a non-empty set.
    #[inline]
    fn to_square(&self) -> Square {
        ALL_SQUARES[self.0.trailing_zeros() as usize]
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    fn bitor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 | other.0)
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl FromIterator<Square> for BitBoard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> BitBoard {
        iter.into_iter()
            .fold(EMPTY, |bb, sq| bb | BitBoard::from_square(sq))
    }
}

impl Iterator for BitBoard {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let result = self.to_square();
            self.0 &= self.0 - 1;
            Some(result)
        }
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                if self.0 & (1u64 << (row * 8 + col)) != 0 {
                    write!(f, "X")?;
                } else {
                    write!(f, ".")?;
                }
            }
            if row != 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_and_iterate() {
        let squares: Vec<Square> = ["c2", "a1", "h8"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let bb: BitBoard = squares.iter().cloned().collect();
        assert_eq!(bb.popcnt(), 3);
        let labels: Vec<String> = bb.map(|sq| sq.to_string()).collect();
        assert_eq!(labels, ["a1", "c2", "h8"]);
    }

    #[test]
    fn universe() {
        assert_eq!((!EMPTY).popcnt(), 64);
        assert!(!EMPTY.contains(ALL_SQUARES[17]));
        assert!((!EMPTY).contains(ALL_SQUARES[17]));
    }
}
