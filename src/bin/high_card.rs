use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use high_card_rs::engine::MatchEngine;
use high_card_rs::game::{Game, GameError};

fn main() {
    println!("Welcome to High Card Game!");

    let player1 = prompt_name("Enter Player 1 name: ", "Player 1");
    let player2 = prompt_name("Enter Player 2 name: ", "Player 2");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = match Game::try_new(player1, player2, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to start game: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_match(&mut game) {
        eprintln!("Game aborted: {err}");
        std::process::exit(1);
    }
}

fn run_match<E: MatchEngine>(game: &mut E) -> Result<(), GameError> {
    println!("Starting High Card Game!");
    println!(
        "Players: {} vs {}",
        game.player(0).name(),
        game.player(1).name()
    );

    game.deal()?;
    println!("\nCards have been dealt:");
    println!("{}'s hand: {}", game.player(0).name(), game.player(0));
    println!("{}'s hand: {}", game.player(1).name(), game.player(1));

    while !game.is_finished() {
        let outcome = game.play_round()?;
        println!("\n--- Round {} ---", outcome.round);
        for seat in 0..2 {
            let name = game.player(seat).name();
            match &outcome.plays[seat] {
                Some(card) => println!("{name} plays: {card} (Value: {})", card.value()),
                None => println!("{name} has no cards left and forfeits the round!"),
            }
        }
        match outcome.winner {
            Some(seat) => println!("{} wins this round!", game.player(seat).name()),
            None => println!("It's a tie! No points awarded."),
        }
        println!(
            "Current Score: {} {} - {} {}",
            game.player(0).name(),
            outcome.scores[0],
            game.player(1).name(),
            outcome.scores[1]
        );
    }

    if let Some(result) = game.final_result() {
        println!("\n=== FINAL RESULTS ===");
        println!("{}: {} points", result.names[0], result.scores[0]);
        println!("{}: {} points", result.names[1], result.scores[1]);
        match result.winner {
            Some(seat) => println!("{} WINS THE GAME!", result.names[seat]),
            None => println!("THE GAME IS A TIE!"),
        }
    }
    Ok(())
}

/// Prompt for one trimmed line; empty input falls back to the default name.
fn prompt_name(prompt: &str, fallback: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return fallback.to_string();
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
