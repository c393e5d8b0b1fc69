//! Terminal blackjack table.
//!
//! Environment:
//! - `BJTABLE_SEED`: seed for the card generator (defaults to the clock).
//! - `BJTABLE_HIGHSCORE`: path of the high score file (defaults to `highscore.txt`).
//! - `RUST_LOG`: log filter, logs go to stderr.

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    CardFace, Command, FileStore, Flow, HandView, RoundState, Suit, Table, TableOptions,
    TableSnapshot,
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let seed = env::var("BJTABLE_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let store = env::var("BJTABLE_HIGHSCORE").map_or_else(|_| FileStore::default(), FileStore::new);

    println!("Blackjack table (type 'q' to quit)");
    let mut table = Table::seeded(TableOptions::default(), seed, store);

    loop {
        print_table(&table.snapshot());
        println!("{}", format_keys(table.state()));

        let Some(line) = prompt_line("> ") else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            println!("Unknown command.");
            continue;
        };

        if table.apply(command) == Flow::Quit {
            println!("Goodbye. High score: ${}", table.high_score());
            break;
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "" | "deal" => Some(Command::Deal),
        "up" | "raise" => Some(Command::RaiseBet),
        "down" | "lower" => Some(Command::LowerBet),
        "hit" => Some(Command::Hit),
        "stand" => Some(Command::Stand),
        "continue" => Some(Command::Continue),
        "quit" | "exit" => Some(Command::Quit),
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => Command::from_key(key),
                _ => None,
            }
        }
    }
}

fn format_keys(state: RoundState) -> &'static str {
    match state {
        RoundState::AwaitingBet => "[enter]deal [+]raise [-]lower [q]quit",
        RoundState::PlayerTurn => "[h]hit [s]stand [q]quit",
        RoundState::DealerTurn => "[q]quit",
        RoundState::RoundOver => "[r]continue [q]quit",
    }
}

fn print_table(snapshot: &TableSnapshot) {
    println!(
        "\nMoney: ${}    High Score: ${}",
        snapshot.bankroll, snapshot.high_score
    );
    if let Some(bet) = snapshot.bet {
        println!("Current Bet: ${bet}");
    }

    if snapshot.state.is_round_active() {
        println!("Dealer {}", format_hand(&snapshot.dealer));
        println!("Player {}", format_hand(&snapshot.player));
    }

    println!("{}", snapshot.message);
    if snapshot.bankrupt {
        println!("{}", colorize("GAME OVER", "31"));
    }
}

fn format_hand(hand: &HandView) -> String {
    let score = hand
        .score
        .map_or_else(|| "?".to_string(), |score| score.to_string());
    let cards = hand
        .cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("(Score: {score}): {cards}")
}

fn format_card(face: &CardFace) -> String {
    let Some(card) = face.card() else {
        return "??".to_string();
    };
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
