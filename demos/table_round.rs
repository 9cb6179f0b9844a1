//! Hot-seat table example: several players share one terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use croupier::{
    Card, Game, GameId, GameOptions, HandOutcome, MemoryAccounts, MemoryStore, Phase, Play,
    PlayKind, PlayerId, PlayerStatus, RoundResult, Suit, Table, hand,
};

const STARTING_MONEY: u64 = 500;

fn main() {
    env_logger::init();
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let names = prompt_names();
    if names.is_empty() {
        return;
    }

    let accounts = MemoryAccounts::new();
    for name in &names {
        accounts.open(PlayerId::from(name.as_str()), STARTING_MONEY);
    }
    let table = Table::new(accounts, MemoryStore::new(), GameOptions::default(), seed);

    loop {
        let seated: Vec<&String> = names
            .iter()
            .filter(|name| balance(&table, name) > 0)
            .collect();
        let Some((first, rest)) = seated.split_first() else {
            println!("Everyone is out of money. Game over.");
            break;
        };

        let id = match table.create_game(PlayerId::from(first.as_str()), first.as_str()) {
            Ok(id) => id,
            Err(err) => {
                println!("Create error: {err}");
                break;
            }
        };
        for name in rest {
            if let Err(err) = table.join_game(id, PlayerId::from(name.as_str()), name.as_str()) {
                println!("Join error: {err}");
            }
        }

        let Some(result) = play_round(&table, id) else {
            break;
        };
        if let Ok(game) = table.game(id) {
            print_table(&game, true);
        }
        print_result(&result);

        if let Err(err) = table.delete_game(id) {
            println!("Delete error: {err}");
        }
    }
}

/// Prompts the active participant until the round concludes.
///
/// Returns `None` if a player quits.
fn play_round(table: &Table<MemoryAccounts, MemoryStore>, id: GameId) -> Option<RoundResult> {
    loop {
        let game = table.game(id).ok()?;
        let active = game.active_participant()?;
        let player_id = active.player_id().clone();

        let play = if game.phase() == Phase::Betting {
            let money = balance(table, &player_id.0);
            let bet = prompt_number(&format!("{}: bet amount (1-{money}): ", active.name()))?;
            Play::new(player_id, PlayKind::InitialBet, bet)
        } else {
            print_table(&game, false);
            println!("{}", format_actions(&game));
            let kind = match prompt_line(&format!("{}: action: ", active.name())).as_str() {
                "h" | "hit" => PlayKind::Hit,
                "s" | "stand" => PlayKind::Stand,
                "d" | "double" => PlayKind::Double,
                "p" | "split" => PlayKind::Split,
                "u" | "surrender" => PlayKind::Surrender,
                "q" | "quit" => return None,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            Play::new(player_id, kind, 0)
        };

        match table.execute_play(id, &play) {
            Ok(Some(result)) => return Some(result),
            Ok(None) => {}
            Err(err) => println!("Play error: {err}"),
        }
    }
}

fn balance(table: &Table<MemoryAccounts, MemoryStore>, name: &str) -> u64 {
    table
        .accounts()
        .balance(&PlayerId::from(name))
        .unwrap_or(0)
}

fn prompt_names() -> Vec<String> {
    let input = prompt_line("Player names (comma separated): ");
    if input == "q" || input == "quit" {
        return Vec::new();
    }
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
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

fn prompt_number(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, reveal: bool) {
    println!("\nShoe: {} cards remaining", game.cards_remaining());

    let dealer = game.dealer_cards();
    if reveal {
        println!(
            "Dealer: {} (value {})",
            format_cards(dealer),
            hand::value(dealer)
        );
    } else if let Some(up) = dealer.first() {
        println!("Dealer: {} ??", format_card(up));
    }

    let active = (!game.is_concluded()).then(|| game.active_index());
    for (index, participant) in game.participants().iter().enumerate() {
        let marker = if active == Some(index) { "*" } else { " " };
        println!(
            "{} {}: {} | value {} | bet {} | {:?}",
            marker,
            participant.name(),
            format_cards(participant.cards()),
            hand::value(participant.cards()),
            participant.bet(),
            participant.status()
        );
    }
    println!();
}

fn print_result(result: &RoundResult) {
    println!("Round complete.");
    for hand in &result.hands {
        let outcome = match hand.outcome {
            HandOutcome::Win => "win",
            HandOutcome::BlackjackWin => "blackjack",
            HandOutcome::Push => "push",
            HandOutcome::HalfLoss => "surrendered",
            HandOutcome::Loss => "loss",
        };
        println!("{}: {outcome}, paid {}", hand.player_id, hand.payout);
    }
    for failed in result.failed_credits() {
        println!("Credit failed for {}", failed.player_id);
    }
}

fn format_actions(game: &Game) -> String {
    let Some(active) = game.active_participant() else {
        return String::new();
    };
    let live = active.status() == PlayerStatus::Playing;
    let first = live && active.cards().len() == 2;

    let parts = [
        format_action("hit", "h", live),
        format_action("stand", "s", live),
        format_action("double", "d", first),
        format_action("split", "p", first && hand::is_pair(active.cards())),
        format_action("surrender", "u", first && game.options().surrender),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };
    colorize(&format!("{rank}{suit}"), color_code)
}
