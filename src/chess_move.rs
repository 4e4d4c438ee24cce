use crate::color::Color;
use crate::error::Error;
use crate::piece::{ColoredPiece, Piece};
use crate::square::Square;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// What happens on the destination square.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MoveKind {
    /// The destination is empty.
    Quiet,
    /// The destination holds an enemy piece other than the king.
    Capture,
    /// The destination holds the enemy king.
    CheckThreat,
}

/// Represent a pseudo-legal move in memory.
///
/// Moves are produced by the generators in `movegen` and are not stored on the `Board`.  The
/// only thing that changes after construction is the notation flag, which a disambiguation pass
/// flips when two moves would otherwise render the same.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    piece: ColoredPiece,
    kind: MoveKind,
    en_passant: Option<Square>,
    use_full_notation: bool,
}

impl Move {
    /// Create a new move of `piece` from `source` to `dest`.
    #[inline]
    pub fn new(source: Square, dest: Square, piece: ColoredPiece, kind: MoveKind) -> Move {
        Move {
            source,
            dest,
            piece,
            kind,
            en_passant: None,
            use_full_notation: false,
        }
    }

    /// Tag a pawn double advance with the square it passed over.
    #[inline]
    pub fn with_en_passant(mut self, square: Square) -> Move {
        self.en_passant = Some(square);
        self
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// The piece making the move.
    #[inline]
    pub fn get_piece(&self) -> ColoredPiece {
        self.piece
    }

    #[inline]
    pub fn get_kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.kind == MoveKind::Capture
    }

    #[inline]
    pub fn is_check_threat(&self) -> bool {
        self.kind == MoveKind::CheckThreat
    }

    /// The en-passant target left behind by a pawn double advance.
    #[inline]
    pub fn get_en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn use_full_notation(&self) -> bool {
        self.use_full_notation
    }

    #[inline]
    pub fn set_use_full_notation(&mut self, full: bool) {
        self.use_full_notation = full;
    }

    fn capture_marker(&self) -> &'static str {
        if self.is_capture() {
            "x"
        } else {
            ""
        }
    }

    fn prefix(&self) -> String {
        match self.piece.get_piece() {
            Piece::Pawn => String::new(),
            piece => piece.to_char(Color::White).to_string(),
        }
    }

    /// Departure and arrival, e.g. `Nb1c3` or `Nd5xe7`.
    pub fn full_notation(&self) -> String {
        format!(
            "{}{}{}{}",
            self.prefix(),
            self.source,
            self.capture_marker(),
            self.dest
        )
    }

    /// Arrival only, e.g. `Nc3` or `Nxe7`.
    pub fn reduced_notation(&self) -> String {
        format!("{}{}{}", self.prefix(), self.capture_marker(), self.dest)
    }

    /// The 4 character form understood by `Board::move_piece`, e.g. `e2e4`.
    pub fn to_move_string(&self) -> String {
        format!("{}{}", self.source, self.dest)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.use_full_notation {
            write!(f, "{}", self.full_notation())
        } else {
            write!(f, "{}", self.reduced_notation())
        }
    }
}

/// Split a move string such as `e2e4` into its departure and arrival squares.
///
/// ```
/// use chesscore::{parse_move_string, Error};
///
/// let (from, to) = parse_move_string("g1f3")?;
/// assert_eq!((from.to_string(), to.to_string()), ("g1".to_string(), "f3".to_string()));
/// assert!(parse_move_string("e2e").is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn parse_move_string(move_string: &str) -> Result<(Square, Square), Error> {
    let invalid = || Error::InvalidMoveString {
        move_string: move_string.to_string(),
    };
    if move_string.chars().count() != 4 {
        return Err(invalid());
    }
    let source = move_string.get(0..2).ok_or_else(invalid)?;
    let dest = move_string.get(2..4).ok_or_else(invalid)?;
    Ok((Square::from_label(source)?, Square::from_label(dest)?))
}

/// Switch every move that shares its destination and piece kind with a move from another
/// square over to full notation.
pub fn disambiguate(moves: &mut [Move]) {
    for i in 0..moves.len() {
        let clash = moves.iter().any(|other| {
            other.dest == moves[i].dest
                && other.piece == moves[i].piece
                && other.source != moves[i].source
        });
        if clash {
            moves[i].use_full_notation = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        label.parse().unwrap()
    }

    fn knight(color: Color) -> ColoredPiece {
        ColoredPiece::new(Piece::Knight, color)
    }

    #[test]
    fn quiet_notation() {
        let mut mv = Move::new(sq("b1"), sq("c3"), knight(Color::White), MoveKind::Quiet);
        assert_eq!(mv.to_string(), "Nc3");
        mv.set_use_full_notation(true);
        assert_eq!(mv.to_string(), "Nb1c3");
        assert_eq!(mv.to_move_string(), "b1c3");
    }

    #[test]
    fn capture_notation() {
        let mut mv = Move::new(sq("d5"), sq("e7"), knight(Color::Black), MoveKind::Capture);
        assert_eq!(mv.reduced_notation(), "Nxe7");
        assert_eq!(mv.full_notation(), "Nd5xe7");
        mv.set_use_full_notation(true);
        assert_eq!(mv.to_string(), "Nd5xe7");
    }

    #[test]
    fn pawns_have_no_prefix() {
        let pawn = ColoredPiece::new(Piece::Pawn, Color::White);
        let push = Move::new(sq("e2"), sq("e4"), pawn, MoveKind::Quiet).with_en_passant(sq("e3"));
        assert_eq!(push.to_string(), "e4");
        assert_eq!(push.full_notation(), "e2e4");
        assert_eq!(push.get_en_passant(), Some(sq("e3")));
        let take = Move::new(sq("e4"), sq("d5"), pawn, MoveKind::Capture);
        assert_eq!(take.to_string(), "xd5");
        assert_eq!(take.full_notation(), "e4xd5");
    }

    #[test]
    fn check_threats_render_without_capture_marker() {
        let mut mv = Move::new(sq("f6"), sq("e8"), knight(Color::White), MoveKind::CheckThreat);
        assert!(!mv.is_capture());
        assert!(mv.is_check_threat());
        assert_eq!(mv.to_string(), "Ne8");
        mv.set_use_full_notation(true);
        assert_eq!(mv.to_string(), "Nf6e8");
    }

    #[test]
    fn move_strings() {
        assert_eq!(parse_move_string("e2e4"), Ok((sq("e2"), sq("e4"))));
        for bad in &["", "e2", "e2e4q", "e2e44"] {
            assert_eq!(
                parse_move_string(bad),
                Err(Error::InvalidMoveString {
                    move_string: bad.to_string()
                })
            );
        }
        assert_eq!(
            parse_move_string("z2e4"),
            Err(Error::InvalidNotation {
                notation: "z2".to_string()
            })
        );
        assert!(parse_move_string("é2e4").is_err());
    }

    #[test]
    fn disambiguation_only_touches_clashes() {
        let white = knight(Color::White);
        let mut moves = [
            Move::new(sq("b1"), sq("d2"), white, MoveKind::Quiet),
            Move::new(sq("f3"), sq("d2"), white, MoveKind::Quiet),
            Move::new(sq("f3"), sq("e5"), white, MoveKind::Quiet),
            Move::new(sq("c1"), sq("d2"), ColoredPiece::new(Piece::Bishop, Color::White), MoveKind::Quiet),
        ];
        disambiguate(&mut moves);
        let rendered: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, ["Nb1d2", "Nf3d2", "Ne5", "Bd2"]);
    }
}
