//! CLI table example.
//!
//! Set `RUST_LOG=bjtable=debug` to trace every transition.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Action, Card, DealerHand, GameOptions, GameState, Hand, Phase, PlayerAction, Seat, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut state = GameState::new(GameOptions::default(), seed);

    loop {
        state = match state.phase() {
            Phase::Menu | Phase::BuyIn => {
                if !state.message().is_empty() {
                    println!("{}", state.message());
                }
                let Some(chips) = prompt_usize("Buy-in chips (0 to quit): ") else {
                    break;
                };
                if chips == 0 {
                    println!("Goodbye.");
                    break;
                }
                state.apply(Action::StartSession {
                    starting_chips: chips,
                })
            }
            Phase::Betting => match betting(&state) {
                Some(next) => next,
                None => break,
            },
            Phase::Dealing => state.apply(Action::DealOneCard),
            Phase::PlayerTurn => {
                if state.active_player().is_some_and(|player| !player.is_human()) {
                    let next = state.apply(Action::AutomatedPlayerStep);
                    println!("{}", next.message());
                    next
                } else {
                    match player_turn(&state) {
                        Some(next) => next,
                        None => break,
                    }
                }
            }
            Phase::DealerTurn => {
                if state.dealer().has_hidden_card() {
                    state.apply(Action::DealerReveal)
                } else {
                    state.apply(Action::DealerHit)
                }
            }
            Phase::Settlement => state.apply(Action::Settle),
            Phase::RoundEnd => {
                print_table(&state, true);
                print_results(&state);
                state.apply(Action::StartNewRound)
            }
        };
    }
}

fn betting(state: &GameState) -> Option<GameState> {
    let human = state.human();
    println!(
        "\nRound {} | chips {} | shoe {} cards",
        state.round(),
        human.chips(),
        state.cards_remaining()
    );
    print_seats(state);

    let prompt = if human.bet() > 0 {
        format!("Bet (enter to repeat {}, +l/+r or -l/-r to seat players): ", human.bet())
    } else {
        String::from("Bet (+l/+r or -l/-r to seat players): ")
    };

    let input = prompt_line(&prompt);
    let next = match input.as_str() {
        "q" | "quit" => return None,
        "" => state.apply(Action::ConfirmBets),
        "+l" => state.apply(Action::AddAutomatedPlayer(Seat::Left)),
        "+r" => state.apply(Action::AddAutomatedPlayer(Seat::Right)),
        "-l" => state.apply(Action::RemoveAutomatedPlayer(Seat::Left)),
        "-r" => state.apply(Action::RemoveAutomatedPlayer(Seat::Right)),
        other => match other.parse::<usize>() {
            Ok(amount) => state
                .apply(Action::ClearBet)
                .apply(Action::PlaceBet(amount))
                .apply(Action::ConfirmBets),
            Err(_) => {
                println!("Please enter a number.");
                return Some(state.clone());
            }
        },
    };

    if next.phase() == Phase::Betting && !next.message().is_empty() {
        println!("{}", next.message());
    }
    Some(next)
}

fn player_turn(state: &GameState) -> Option<GameState> {
    print_table(state, false);
    if let Some(advice) = state.recommendation() {
        println!("Hint: {}", advice.reason);
    }

    let action = match prompt_line("Action ([h]it [s]tand [d]ouble s[p]lit): ").as_str() {
        "h" | "hit" => PlayerAction::Hit,
        "s" | "stand" => PlayerAction::Stand,
        "d" | "double" => PlayerAction::Double,
        "p" | "split" => PlayerAction::Split,
        "q" | "quit" => return None,
        _ => {
            println!("Unknown action.");
            return Some(state.clone());
        }
    };

    let next = state.apply(Action::Player(action));
    if !next.message().is_empty() {
        println!("{}", next.message());
    }
    Some(next)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_seats(state: &GameState) {
    for player in state.players() {
        if player.is_active() && !player.is_human() {
            println!(
                "  {} | chips {} | streak x{}",
                player.name(),
                player.chips(),
                player.bet_multiplier()
            );
        }
    }
}

fn print_table(state: &GameState, final_view: bool) {
    let dealer = state.dealer();
    let value = if final_view || !dealer.has_hidden_card() {
        dealer.value()
    } else {
        dealer.visible_value()
    };
    println!("\nDealer: {} (value {value})", format_dealer(dealer));

    for player in state.players() {
        if !player.in_round() {
            continue;
        }
        let on_turn = state
            .active_player()
            .is_some_and(|active| active.seat() == player.seat());
        for (index, hand) in player.hands().iter().enumerate() {
            let marker = if on_turn && index == player.active_hand_index() {
                "*"
            } else {
                " "
            };
            println!(
                "{marker} {:<8} {} | value {} | bet {}",
                player.name(),
                format_hand(hand),
                hand.value(),
                hand.bet()
            );
        }
    }
    println!();
}

fn print_results(state: &GameState) {
    for player in state.players() {
        if !player.in_round() {
            continue;
        }
        let outcomes = player
            .hands()
            .iter()
            .filter_map(Hand::result)
            .map(|outcome| format!("{outcome:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: {outcomes} | chips {}", player.name(), player.chips());
    }
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    dealer
        .cards()
        .iter()
        .map(|card| {
            if card.face_up {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
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
    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
