use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::square::Square;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// What castle rights does a particular player have?
///
/// These are read from FEN and kept up to date by `Game`, but nothing here decides whether a
/// castle is actually playable.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug, Hash)]
pub enum CastleRights {
    NoRights,
    KingSide,
    QueenSide,
    Both,
}

/// How many different types of `CastleRights` are there?
pub const NUM_CASTLE_RIGHTS: usize = 4;

/// Enumerate all castle rights.
pub const ALL_CASTLE_RIGHTS: [CastleRights; NUM_CASTLE_RIGHTS] = [
    CastleRights::NoRights,
    CastleRights::KingSide,
    CastleRights::QueenSide,
    CastleRights::Both,
];

impl CastleRights {
    /// Can I castle kingside?
    pub fn has_kingside(&self) -> bool {
        self.to_index() & 1 == 1
    }

    /// Can I castle queenside?
    pub fn has_queenside(&self) -> bool {
        self.to_index() & 2 == 2
    }

    /// Build from the two wing flags.
    pub fn from_flags(kingside: bool, queenside: bool) -> CastleRights {
        CastleRights::from_index(kingside as usize | (queenside as usize) << 1)
    }

    /// Which rights does a piece leaving (or being captured on) `sq` take with it?
    ///
    /// Only the king's and rooks' home squares on `color`'s back rank matter.
    pub fn square_to_castle_rights(color: Color, sq: Square) -> CastleRights {
        if sq.get_rank() != color.to_my_backrank() {
            return CastleRights::NoRights;
        }
        match sq.get_file() {
            File::A => CastleRights::QueenSide,
            File::E => CastleRights::Both,
            File::H => CastleRights::KingSide,
            _ => CastleRights::NoRights,
        }
    }

    /// Remove castle rights, and return a new `CastleRights`.
    pub fn remove(&self, remove: CastleRights) -> CastleRights {
        CastleRights::from_index(self.to_index() & !remove.to_index())
    }

    /// Convert `CastleRights` to `usize` for table lookups
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Convert `usize` to `CastleRights`.  Only the low two bits are used.
    pub fn from_index(i: usize) -> CastleRights {
        ALL_CASTLE_RIGHTS[i & 3]
    }

    /// Convert the castle rights to an FEN compatible string.
    ///
    /// ```
    /// use chesscore::{CastleRights, Color};
    ///
    /// assert_eq!(CastleRights::NoRights.to_string(Color::White), "");
    /// assert_eq!(CastleRights::Both.to_string(Color::Black), "kq");
    /// assert_eq!(CastleRights::KingSide.to_string(Color::White), "K");
    /// assert_eq!(CastleRights::QueenSide.to_string(Color::Black), "q");
    /// ```
    pub fn to_string(&self, color: Color) -> String {
        let mut result = String::new();
        if self.has_kingside() {
            result.push(Piece::King.to_char(color));
        }
        if self.has_queenside() {
            result.push(Piece::Queen.to_char(color));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        label.parse().unwrap()
    }

    #[test]
    fn home_squares_carry_rights() {
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::White, sq("a1")),
            CastleRights::QueenSide
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::White, sq("e1")),
            CastleRights::Both
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::Black, sq("h8")),
            CastleRights::KingSide
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::Black, sq("h1")),
            CastleRights::NoRights
        );
    }

    #[test]
    fn flags_and_remove() {
        let rights = CastleRights::from_flags(true, true);
        assert_eq!(rights, CastleRights::Both);
        assert_eq!(rights.remove(CastleRights::KingSide), CastleRights::QueenSide);
        assert_eq!(rights.remove(CastleRights::Both), CastleRights::NoRights);
        assert!(!CastleRights::QueenSide.has_kingside());
        assert!(CastleRights::QueenSide.has_queenside());
    }
}
