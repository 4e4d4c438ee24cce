use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, PartialEq, Eq, Fail)]
pub enum Error {
    /// The FEN string is invalid
    #[fail(display = "Invalid FEN string {:?}: {}", fen, reason)]
    MalformedFen { fen: String, reason: String },

    /// A move string was not a departure label followed by an arrival label
    #[fail(
        display = "Invalid move string {:?}: expected 4 characters such as \"e2e4\"",
        move_string
    )]
    InvalidMoveString { move_string: String },

    /// A square label outside of a1..h8
    #[fail(display = "Invalid square notation: {:?}", notation)]
    InvalidNotation { notation: String },

    /// A (row, col) pair that does not name a square on the board
    #[fail(display = "Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds { row: i32, col: i32 },

    /// Move generation was asked about a square with nothing on it
    #[fail(display = "There is no piece on {}", square)]
    EmptySquare { square: String },

    /// The move is not among the pseudo-legal moves of the side to move
    #[fail(display = "Illegal move: {}", move_string)]
    IllegalMove { move_string: String },
}
