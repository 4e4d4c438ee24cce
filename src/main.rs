use chesscore::{Error, Game};
use std::env;
use log::warn;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn print_position(game: &Game) {
    println!("{}", game.board());
    let moves: Vec<String> = game.legal_moves().iter().map(|m| m.to_string()).collect();
    println!("{:?} to move: {}", game.side_to_move(), moves.join(" "));
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut game = match env::args().nth(1) {
        Some(fen) => Game::from_str(&fen)?,
        None => Game::new(),
    };
    print_position(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            warn!("could not flush stdout: {}", e);
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("could not read stdin: {}", e);
                break;
            }
        }
        match line.trim() {
            "" => continue,
            "quit" => break,
            "fen" => println!("{}", game.board().to_fen()),
            m => match game.play(m) {
                Ok(Some(taken)) => {
                    println!("took {}", taken);
                    print_position(&game);
                }
                Ok(None) => print_position(&game),
                Err(e) => println!("{}", e),
            },
        }
    }
    Ok(())
}
