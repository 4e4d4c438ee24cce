use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::file::ALL_FILES;
use crate::piece::ColoredPiece;
use crate::rank::{Rank, ALL_RANKS};
use crate::square::Square;
use log::debug;
use std::str::FromStr;

impl Board {
    /// Write the position as a six-field FEN record.
    ///
    /// ```
    /// use chesscore::{Board, START_FEN};
    ///
    /// assert_eq!(Board::from_start_pos().to_fen(), START_FEN);
    /// ```
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in ALL_RANKS.iter().rev() {
            let mut count = 0;
            for file in ALL_FILES.iter() {
                match self[Square::make_square(*rank, *file)] {
                    Some(piece) => {
                        if count != 0 {
                            fen.push_str(&count.to_string());
                            count = 0;
                        }
                        fen.push(piece.get_letter());
                    }
                    None => count += 1,
                }
            }
            if count != 0 {
                fen.push_str(&count.to_string());
            }
            if *rank != Rank::First {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move().to_fen_char());
        fen.push(' ');

        let castles: String = ALL_COLORS
            .iter()
            .map(|color| self.castle_rights(*color).to_string(*color))
            .collect();
        if castles.is_empty() {
            fen.push('-');
        } else {
            fen.push_str(&castles);
        }

        match self.en_passant() {
            Some(sq) => fen.push_str(&format!(" {}", sq)),
            None => fen.push_str(" -"),
        }
        fen.push_str(&format!(
            " {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        ));

        fen
    }
}

fn malformed(fen: &str, reason: impl Into<String>) -> Error {
    Error::MalformedFen {
        fen: fen.to_string(),
        reason: reason.into(),
    }
}

/// Fill one rank of `board` from its FEN substring, reading files a through h.
fn parse_rank(board: &mut Board, fen: &str, rank: Rank, placement: &str) -> Result<(), Error> {
    let mut col = 0usize;
    let mut after_digit = false;
    for token in placement.chars() {
        if let Some(skip) = token.to_digit(10) {
            // "44" would add up, but is not how FEN counts empty squares
            if skip == 0 || skip > 8 || after_digit {
                return Err(malformed(fen, format!("bad empty-square count in '{}'", placement)));
            }
            col += skip as usize;
            after_digit = true;
        } else {
            after_digit = false;
            let piece = ColoredPiece::from_letter(token)
                .ok_or_else(|| malformed(fen, format!("unknown piece letter '{}'", token)))?;
            if col >= 8 {
                return Err(malformed(fen, format!("rank {} has more than 8 files", rank.to_char())));
            }
            board.set_piece(Square::make_square(rank, ALL_FILES[col]), Some(piece));
            col += 1;
        }
        if col > 8 {
            return Err(malformed(fen, format!("rank {} has more than 8 files", rank.to_char())));
        }
    }
    if col != 8 {
        return Err(malformed(
            fen,
            format!("rank {} covers {} files, not 8", rank.to_char(), col),
        ));
    }
    Ok(())
}

fn parse_castles(fen: &str, field: &str) -> Result<[CastleRights; 2], Error> {
    if field == "-" {
        return Ok([CastleRights::NoRights, CastleRights::NoRights]);
    }
    // a subsequence of "KQkq": each letter at most once, in that order
    let mut rest = field.chars().peekable();
    for letter in "KQkq".chars() {
        rest.next_if_eq(&letter);
    }
    if field.is_empty() || rest.peek().is_some() {
        return Err(malformed(fen, format!("bad castling field '{}'", field)));
    }
    Ok([
        CastleRights::from_flags(field.contains('K'), field.contains('Q')),
        CastleRights::from_flags(field.contains('k'), field.contains('q')),
    ])
}

fn parse_counter(fen: &str, field: &str, name: &str) -> Result<u32, Error> {
    field
        .parse()
        .map_err(|_| malformed(fen, format!("bad {} '{}'", name, field)))
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a six-field FEN record.
    ///
    /// The placement field is read from rank 8 down to rank 1 and stored bottom-up, so row 0
    /// ends up holding rank 1.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() != 6 {
            return Err(malformed(
                value,
                format!("expected 6 fields, found {}", tokens.len()),
            ));
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = tokens[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(malformed(
                value,
                format!("expected 8 ranks, found {}", ranks.len()),
            ));
        }
        for (placement, rank) in ranks.iter().zip(ALL_RANKS.iter().rev()) {
            parse_rank(&mut board, value, *rank, placement)?;
        }

        board.set_side_to_move(match tokens[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(malformed(value, format!("bad side to move '{}'", other))),
        });

        let [white, black] = parse_castles(value, tokens[2])?;
        board.set_castle_rights(Color::White, white);
        board.set_castle_rights(Color::Black, black);

        board.set_en_passant(match tokens[3] {
            "-" => None,
            label => match Square::from_label(label) {
                Ok(sq) if sq.get_rank() == Rank::Third || sq.get_rank() == Rank::Sixth => Some(sq),
                _ => return Err(malformed(value, format!("bad en passant square '{}'", label))),
            },
        });

        board.set_halfmove_clock(parse_counter(value, tokens[4], "halfmove clock")?);
        board.set_fullmove_number(parse_counter(value, tokens[5], "fullmove number")?);

        debug!("parsed fen {}", value);
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;
    use crate::piece::Piece;

    fn sq(label: &str) -> Square {
        label.parse().unwrap()
    }

    #[test]
    fn placement_is_stored_bottom_up() {
        let board = Board::from_str(START_FEN).unwrap();
        assert_eq!(
            board.get(0, 0),
            Ok(Some(ColoredPiece::new(Piece::Rook, Color::White)))
        );
        assert_eq!(
            board.get(7, 4),
            Ok(Some(ColoredPiece::new(Piece::King, Color::Black)))
        );
        assert_eq!(
            board.get(6, 3),
            Ok(Some(ColoredPiece::new(Piece::Pawn, Color::Black)))
        );
        assert_eq!(board.get(3, 3), Ok(None));
    }

    #[test]
    fn metadata_fields() {
        let board =
            Board::from_str("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b Kq e3 7 42")
                .unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.castle_rights(Color::White), CastleRights::KingSide);
        assert_eq!(board.castle_rights(Color::Black), CastleRights::QueenSide);
        assert_eq!(board.en_passant(), Some(sq("e3")));
        assert_eq!(board.halfmove_clock(), 7);
        assert_eq!(board.fullmove_number(), 42);
    }

    #[test]
    fn fen_round_trip() {
        for fen in &[
            START_FEN,
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b Kq - 3 19",
            "8/8/8/8/8/8/8/8 w - - 0 1",
        ] {
            assert_eq!(Board::from_str(fen).unwrap().to_fen(), *fen);
        }
    }

    #[test]
    fn partial_castling_fields() {
        for (field, white, black) in &[
            ("Kk", CastleRights::KingSide, CastleRights::KingSide),
            ("Qq", CastleRights::QueenSide, CastleRights::QueenSide),
            ("q", CastleRights::NoRights, CastleRights::QueenSide),
        ] {
            let fen = format!("8/8/8/8/8/8/8/8 w {} a6 0 1", field);
            let board = Board::from_str(&fen).unwrap();
            assert_eq!(board.castle_rights(Color::White), *white);
            assert_eq!(board.castle_rights(Color::Black), *black);
            assert_eq!(board.to_fen(), fen);
        }
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        let board = Board::from_str("  8/8/8/8/8/8/8/K7   w  -  -  0  1 ").unwrap();
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/K7 w - - 0 1");
    }

    fn assert_malformed(fen: &str) {
        match Board::from_str(fen) {
            Err(Error::MalformedFen { fen: reported, .. }) => assert_eq!(reported, fen),
            other => panic!("{:?} parsed as {:?}", fen, other),
        }
    }

    #[test]
    fn malformed_fens() {
        assert_malformed("");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8 w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KK - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KkKk - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w QK - 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq a1 0 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1");
        assert_malformed("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 one");
    }
}
