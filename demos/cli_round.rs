//! CLI blackjack round example.
//!
//! Renders the controller's events in the terminal and paces the dealer with
//! a short sleep between dealer steps. Set `RUST_LOG=debug` to see the
//! engine's state transitions.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjround::{
    Card, FaceState, Outcome, Participant, RoundController, RoundEvent, RoundOptions, RoundState,
    Suit,
};

const DEALER_PACE: Duration = Duration::from_millis(600);

fn main() {
    env_logger::init();
    println!("Blackjack round example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = RoundController::new(RoundOptions::default(), seed);

    loop {
        if let Err(err) = round.start_round() {
            println!("Start error: {err}");
            break;
        }
        render(&mut round);

        while round.state() == RoundState::PlayerTurn {
            match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = round.player_hit() {
                        println!("Hit error: {err}");
                    }
                }
                "s" | "stand" => {
                    if let Err(err) = round.player_stand() {
                        println!("Stand error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
            render(&mut round);
        }

        while !round.is_dealer_turn_complete() {
            thread::sleep(DEALER_PACE);
            if let Err(err) = round.dealer_step() {
                println!("Dealer error: {err}");
                break;
            }
            render(&mut round);
        }

        if let Some(result) = round.result() {
            println!(
                "\nPlayer {} vs dealer {}\n",
                result.player_value, result.dealer_value
            );
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => break,
        }
    }
}

fn render(round: &mut RoundController) {
    for event in round.drain_events() {
        match event {
            RoundEvent::CardDealt { owner, card, face } => {
                let shown = match face {
                    FaceState::FaceUp => format_card(&card),
                    FaceState::FaceDown => "??".to_string(),
                };
                println!("{} receives {shown}", name(owner));
            }
            RoundEvent::CardRevealed { owner, card, .. } => {
                println!("{} reveals {}", name(owner), format_card(&card));
            }
            RoundEvent::ScoreChanged { owner, total } => {
                println!("  {} shows {total}", name(owner));
            }
            RoundEvent::StateChanged(RoundState::DealerTurn) => println!("\nDealer plays."),
            RoundEvent::StateChanged(_) => {}
            RoundEvent::RoundResolved(outcome) => {
                let text = match outcome {
                    Outcome::PlayerWins => colorize("You win!", "32"),
                    Outcome::DealerWins => colorize("Dealer wins.", "31"),
                    Outcome::Push => colorize("Push.", "33"),
                };
                println!("\n{text}");
            }
        }
    }
}

const fn name(owner: Participant) -> &'static str {
    match owner {
        Participant::Player => "Player",
        Participant::Dealer => "Dealer",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_card(card: &Card) -> String {
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
