//! Hand outcomes and settlement against the dealer.

use crate::card::Card;
use crate::hand::{Hand, hand_value, is_blackjack, is_busted};

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses to a higher dealer total or a dealer natural.
    Lose,
    /// Push (tie).
    Push,
    /// Player has a natural blackjack, paid 3:2.
    Blackjack,
    /// Player went over 21.
    Bust,
}

impl HandOutcome {
    /// Returns whether the outcome pays the player.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }

    /// Returns whether the outcome forfeits the bet.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust)
    }
}

/// Outcome of one hand plus its signed chip delta relative to the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome classification.
    pub outcome: HandOutcome,
    /// Chips won (positive) or lost (negative), excluding the returned stake.
    pub delta: isize,
}

impl Settlement {
    const fn new(outcome: HandOutcome, delta: isize) -> Self {
        Self { outcome, delta }
    }

    /// Chips handed back to the player for a hand staked with `bet`.
    ///
    /// The stake was taken when the bet was confirmed, so this is the stake
    /// plus the delta: twice the bet for a win, nothing for a loss.
    #[must_use]
    pub const fn returned(&self, bet: usize) -> usize {
        bet.saturating_add_signed(self.delta)
    }
}

/// Blackjack winnings on `bet`, paid 3:2, rounded down and capped at
/// `usize::MAX`.
#[must_use]
pub const fn blackjack_winnings(bet: usize) -> usize {
    (bet / 2).saturating_mul(3).saturating_add(bet % 2 * 3 / 2)
}

/// Settles a finished hand against the dealer's final cards.
///
/// Rules are checked in order: a player bust loses outright, then naturals
/// (which never include split hands) are compared, then a dealer bust pays,
/// then totals decide.
#[must_use]
pub fn settle_hand(hand: &Hand, dealer_cards: &[Card]) -> Settlement {
    let bet = isize::try_from(hand.bet()).unwrap_or(isize::MAX);
    let player_value = hand.value();
    let dealer_value = hand_value(dealer_cards);
    let player_natural = hand.is_natural();
    let dealer_natural = is_blackjack(dealer_cards);

    if hand.is_busted() {
        return Settlement::new(HandOutcome::Bust, -bet);
    }

    match (player_natural, dealer_natural) {
        (true, true) => return Settlement::new(HandOutcome::Push, 0),
        (true, false) => {
            let winnings = isize::try_from(blackjack_winnings(hand.bet())).unwrap_or(isize::MAX);
            return Settlement::new(HandOutcome::Blackjack, winnings);
        }
        (false, true) => return Settlement::new(HandOutcome::Lose, -bet),
        (false, false) => {}
    }

    if is_busted(dealer_cards) {
        return Settlement::new(HandOutcome::Win, bet);
    }

    match player_value.cmp(&dealer_value) {
        core::cmp::Ordering::Greater => Settlement::new(HandOutcome::Win, bet),
        core::cmp::Ordering::Less => Settlement::new(HandOutcome::Lose, -bet),
        core::cmp::Ordering::Equal => Settlement::new(HandOutcome::Push, 0),
    }
}
