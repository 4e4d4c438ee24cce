#[macro_use]
extern crate bencher;

use bencher::Bencher;
use chesscore::{legal_moves, Board, Color, Square, ALL_SQUARES};

const MIDDLEGAME_FEN: &str = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b kq - 1 7";

fn parse_fen(bench: &mut Bencher) {
    bench.iter(|| {
        let pos = Board::from_fen(MIDDLEGAME_FEN).expect("valid fen");
        assert_eq!(pos.side_to_move(), Color::Black);
    });
}

fn write_fen(bench: &mut Bencher) {
    let pos = Board::from_fen(MIDDLEGAME_FEN).expect("valid fen");
    bench.iter(|| assert_eq!(pos.to_fen(), MIDDLEGAME_FEN));
}

fn queen_moves(bench: &mut Bencher) {
    let pos = Board::from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").expect("valid fen");
    let d4: Square = "d4".parse().expect("valid square");
    bench.iter(|| assert_eq!(legal_moves(&pos, d4).expect("occupied").len(), 27));
}

fn every_square(bench: &mut Bencher) {
    let pos = Board::from_fen(MIDDLEGAME_FEN).expect("valid fen");
    bench.iter(|| {
        ALL_SQUARES
            .iter()
            .filter_map(|sq| legal_moves(&pos, *sq).ok())
            .map(|moves| moves.len())
            .sum::<usize>()
    });
}

fn side_to_move_moves(bench: &mut Bencher) {
    let pos = Board::from_fen(MIDDLEGAME_FEN).expect("valid fen");
    bench.iter(|| pos.all_legal_moves(pos.side_to_move()).len());
}

fn raw_moves(bench: &mut Bencher) {
    let pos = Board::from_start_pos();
    bench.iter(|| {
        let mut after = pos;
        after.move_piece("e2e4").expect("valid move string");
        after
    });
}

benchmark_group!(
    benches,
    parse_fen,
    write_fen,
    queen_moves,
    every_square,
    side_to_move_moves,
    raw_moves
);
benchmark_main!(benches);
