//! CLI tower solitaire example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tower_solitaire::{
    ActionKind, Actions, Card, Color, DealOptions, Game, GameState, Outcome, Selection,
};

fn main() {
    println!("Tower solitaire CLI example (type 'q' to quit)");
    println!("Enter an action and cards, e.g. 'kill 9s', 'kill 2h+3h', 'build kd', 'draw'.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = match Game::new(DealOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    loop {
        match game.outcome() {
            Outcome::Won => {
                println!("Every enemy card is beaten. You won!");
                break;
            }
            Outcome::Lost => {
                print_table(&game.state());
                println!("No moves left. You lost.");
                break;
            }
            Outcome::InProgress => {}
        }

        print_table(&game.state());
        println!("{}", format_actions(&game.actions()));

        let input = prompt_line("Action: ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }

        let (name, cards) = input.split_once(' ').unwrap_or((input.as_str(), ""));
        let Ok(kind) = name.parse::<ActionKind>() else {
            println!("Unknown action {name}.");
            continue;
        };
        let selection = match cards.to_uppercase().parse::<Selection>() {
            Ok(selection) => selection,
            Err(err) => {
                println!("Selection error: {err}");
                continue;
            }
        };

        match game.perform(kind, &selection) {
            Ok(true) => {}
            Ok(false) => println!("Cannot {kind} with '{selection}'."),
            Err(err) => {
                println!("Game state is corrupt ({err}); dealing a new game.");
                if let Err(err) = game.reset(game.seed().wrapping_add(1)) {
                    println!("Deal error: {err}");
                    break;
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("=================================");
    println!("Hand:  {}", format_cards(&state.player_hand));
    println!(
        "Enemy: {}",
        state
            .enemy_card
            .map_or_else(|| "-".to_string(), |card| format_card(&card))
    );
    println!(
        "Tower (+{}): {}",
        state.bonus(),
        format_cards(&state.tower)
    );
    println!(
        "Player deck: {} | Enemy deck: {}",
        state.player_deck.len(),
        state.enemy_deck.len()
    );
}

fn format_actions(actions: &Actions) -> String {
    let mut parts = Vec::new();
    for kind in ActionKind::ALL {
        let label = kind.name().to_lowercase();
        let text = match actions.get(kind).and_then(|action| action.options.cards().cloned()) {
            Some(options) if !options.combos.is_empty() => {
                let combos: Vec<String> = options
                    .combos
                    .into_iter()
                    .map(|combo| Selection::Combo(combo).to_string())
                    .collect();
                format!("{label} {} | {}", format_cards(&options.singles), combos.join(" "))
            }
            Some(options) => format!("{label} {}", format_cards(&options.singles)),
            None => label,
        };
        parts.push(format_action(&text, actions.contains(kind)));
    }
    format!("Actions: {}", parts.join("  "))
}

fn format_action(text: &str, allowed: bool) -> String {
    if allowed {
        colorize(text, "32")
    } else {
        colorize(text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "37",
    };
    colorize(&card.to_string(), code)
}
