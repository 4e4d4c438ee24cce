use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{parse_move_string, Move};
use crate::color::Color;
use crate::error::Error;
use crate::piece::{ColoredPiece, Piece};
use log::debug;
use std::str::FromStr;

/// For UI/CLI front ends, store a board together with the moves played on it.
///
/// `Board::move_piece` moves pieces and nothing else.  `Game::play` is the layer above it: it
/// only accepts pseudo-legal moves of the side to move, and it keeps the side to move, the move
/// clocks, the en-passant target and the castle rights up to date.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use chesscore::{Game, Board};
    ///
    /// let game = Game::new();
    /// assert_eq!(*game.board(), Board::default());
    /// ```
    pub fn new() -> Game {
        Game::new_with_board(Board::default())
    }

    /// Create a new `Game` with a specific starting position.
    pub fn new_with_board(board: Board) -> Game {
        Game {
            board,
            history: vec![],
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access to the position, for setting up studies and the like.  Nothing done through
    /// this is recorded in the history.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Every move played through `play`, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// The pseudo-legal moves of the side to move, disambiguated for display.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.all_legal_moves(self.side_to_move())
    }

    /// Play a move given as a string such as `e2e4`, returning whatever it captured.
    ///
    /// ```
    /// use chesscore::{Color, Error, Game};
    ///
    /// let mut game = Game::new();
    /// game.play("e2e4")?;
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// assert_eq!(game.board().en_passant().map(|sq| sq.to_string()), Some("e3".to_string()));
    ///
    /// // white cannot move twice
    /// assert!(game.play("d2d4").is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play(&mut self, move_string: &str) -> Result<Option<ColoredPiece>, Error> {
        let (source, dest) = parse_move_string(move_string)?;
        let color = self.side_to_move();

        let chosen = match self.board.piece_on(source) {
            Some(piece) if piece.get_color() == color => self
                .board
                .legal_moves(source)?
                .into_iter()
                .find(|m| m.get_dest() == dest),
            _ => None,
        };
        let chosen = chosen.ok_or_else(|| Error::IllegalMove {
            move_string: move_string.to_string(),
        })?;

        let captured = self.board.move_piece(move_string)?;
        self.update_metadata(&chosen, captured);
        self.history.push(chosen);

        debug!(
            "{:?} played {} ({}), now {}",
            color,
            chosen.to_move_string(),
            chosen,
            self.board.to_fen()
        );
        Ok(captured)
    }

    fn update_metadata(&mut self, chosen: &Move, captured: Option<ColoredPiece>) {
        let color = chosen.get_piece().get_color();

        if chosen.get_piece().get_piece() == Piece::Pawn || captured.is_some() {
            self.board.set_halfmove_clock(0);
        } else {
            self.board
                .set_halfmove_clock(self.board.halfmove_clock().saturating_add(1));
        }
        if color == Color::Black {
            self.board
                .set_fullmove_number(self.board.fullmove_number().saturating_add(1));
        }

        self.board.set_en_passant(chosen.get_en_passant());

        let mine = self.board.castle_rights(color).remove(
            CastleRights::square_to_castle_rights(color, chosen.get_source()),
        );
        self.board.set_castle_rights(color, mine);
        let theirs = self.board.castle_rights(!color).remove(
            CastleRights::square_to_castle_rights(!color, chosen.get_dest()),
        );
        self.board.set_castle_rights(!color, theirs);

        self.board.set_side_to_move(!color);
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Ok(Game::new_with_board(Board::from_str(fen)?))
    }
}
