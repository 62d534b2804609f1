//! Basic strategy advisor.
//!
//! [`recommend`] maps a hand, the dealer's upcard and the player's current
//! options to the chart-optimal move and an explanation a player can read.
//! The advice is never stored in the game state; it is recomputed on demand.

use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::hand::{hand_value, is_soft, pair_rank};

mod tables;

/// A decision available to a player on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw exactly one card, and end the hand.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl PlayerAction {
    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double",
            Self::Split => "Split",
        }
    }
}

/// A recommended move with its rationale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// The move to make.
    pub action: PlayerAction,
    /// Why the move is right, in plain words.
    pub reason: String,
}

/// Returns the basic-strategy move for `cards` against `dealer_upcard`.
///
/// `can_split` and `can_double` say whether those moves are open to the player
/// right now. Pairs are checked first; a pair the chart does not split is
/// played as an ordinary total. A chart double the player cannot make becomes
/// a hit, except on soft 18 and up where it becomes a stand.
#[must_use]
pub fn recommend(
    cards: &[Card],
    dealer_upcard: &Card,
    can_split: bool,
    can_double: bool,
) -> Recommendation {
    let dealer = dealer_upcard.value();
    let total = hand_value(cards);
    let dealer_name = upcard_name(dealer);

    if can_split {
        if let Some(value) = pair_rank(cards) {
            if tables::pair(value, dealer) == PlayerAction::Split {
                return Recommendation {
                    action: PlayerAction::Split,
                    reason: pair_reason(value, &dealer_name),
                };
            }
        }
    }

    if is_soft(cards) {
        // Soft 12 (two aces that cannot be split) is off the chart.
        let action = if (13..=21).contains(&total) {
            match tables::soft(total, dealer) {
                PlayerAction::Double if !can_double && total >= 18 => PlayerAction::Stand,
                PlayerAction::Double if !can_double => PlayerAction::Hit,
                action => action,
            }
        } else {
            PlayerAction::Hit
        };
        return Recommendation {
            action,
            reason: soft_reason(total, &dealer_name, action),
        };
    }

    let action = match tables::hard(total, dealer) {
        PlayerAction::Double if !can_double => PlayerAction::Hit,
        action => action,
    };
    Recommendation {
        action,
        reason: hard_reason(total, &dealer_name, action),
    }
}

fn upcard_name(value: u8) -> String {
    if value == 11 {
        String::from("Ace")
    } else {
        format!("{value}")
    }
}

fn pair_reason(value: u8, dealer: &str) -> String {
    match value {
        11 => String::from(
            "Split Aces. Two hands that each start with an Ace beat a single soft 12 by a wide margin.",
        ),
        8 => String::from(
            "Split 8s. Hard 16 is the weakest total in the game, while two hands starting on 8 can each recover.",
        ),
        9 => format!(
            "Split 9s vs dealer {dealer}. Two hands starting on 9 earn more than standing on 18 against this upcard."
        ),
        2 | 3 => format!(
            "Split this low pair vs dealer {dealer}. The dealer busts often from here, so put twice the money on the table."
        ),
        4 => format!(
            "Split 4s vs dealer {dealer}. Against a weak upcard two fresh hands are worth more than a hard 8."
        ),
        6 => format!(
            "Split 6s vs dealer {dealer}. Hard 12 is poor, but two hands starting on 6 can improve while the dealer is vulnerable."
        ),
        7 => format!(
            "Split 7s vs dealer {dealer}. Two hands starting on 7 do better than a stiff hard 14."
        ),
        _ => format!("Split this pair vs dealer {dealer} for the best expected value."),
    }
}

fn soft_reason(total: u8, dealer: &str, action: PlayerAction) -> String {
    let hand = if total == 12 {
        String::from("soft 12 (Ace + Ace)")
    } else {
        format!("soft {total} (Ace + {})", total - 11)
    };

    match action {
        PlayerAction::Double => format!(
            "Double down on {hand} vs dealer {dealer}. One more card cannot bust a soft hand and the dealer is likely to break."
        ),
        PlayerAction::Stand if total >= 19 => format!(
            "Stand on {hand} vs dealer {dealer}. {total} already wins most rounds, so keep it."
        ),
        PlayerAction::Stand => format!(
            "Stand on {hand} vs dealer {dealer}. 18 holds up well against this upcard."
        ),
        _ => format!(
            "Hit on {hand} vs dealer {dealer}. A soft hand cannot bust on one card and it needs to improve against this upcard."
        ),
    }
}

fn hard_reason(total: u8, dealer: &str, action: PlayerAction) -> String {
    match action {
        PlayerAction::Double => format!(
            "Double down on hard {total} vs dealer {dealer}. A ten-value card makes a strong hand and the dealer is vulnerable, so press the bet."
        ),
        PlayerAction::Stand if total >= 17 => format!(
            "Stand on hard {total} vs dealer {dealer}. Hitting 17 or more busts too often to be worth it."
        ),
        PlayerAction::Stand => format!(
            "Stand on hard {total} vs dealer {dealer}. A dealer showing 2 through 6 busts often, so let the dealer take the risk."
        ),
        _ if total <= 11 => format!(
            "Hit on hard {total} vs dealer {dealer}. No card can bust this hand, so always draw."
        ),
        _ => format!(
            "Hit on hard {total} vs dealer {dealer}. The dealer's strong upcard will usually beat {total}, so the bust risk is worth taking."
        ),
    }
}
