//! Seated players.

use alloc::vec::Vec;

use crate::hand::Hand;
use crate::result::HandOutcome;

use super::state::Seat;

/// A player at the table, human or automated.
///
/// A player persists across rounds; only the hands, the turn pointer, the
/// last result, the chips and the streak multiplier change from round to
/// round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(crate) name: &'static str,
    pub(crate) seat: Seat,
    pub(crate) is_human: bool,
    pub(crate) chips: usize,
    /// One hand, or two after a split. Empty when not betting.
    pub(crate) hands: Vec<Hand>,
    pub(crate) active_hand: usize,
    pub(crate) is_active: bool,
    pub(crate) last_result: Option<HandOutcome>,
    /// Automated bet scaling, always within `1..=max_bet_multiplier`.
    pub(crate) bet_multiplier: u8,
}

impl Player {
    pub(crate) const fn human() -> Self {
        Self {
            name: "You",
            seat: Seat::Center,
            is_human: true,
            chips: 0,
            hands: Vec::new(),
            active_hand: 0,
            is_active: true,
            last_result: None,
            bet_multiplier: 1,
        }
    }

    pub(crate) const fn automated(seat: Seat, chips: usize) -> Self {
        let name = match seat {
            Seat::Left => "Player L",
            Seat::Center => "Player C",
            Seat::Right => "Player R",
        };
        Self {
            name,
            seat,
            is_human: false,
            chips,
            hands: Vec::new(),
            active_hand: 0,
            is_active: false,
            last_result: None,
            bet_multiplier: 1,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The seat the player occupies.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns whether the player is the human.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.is_human
    }

    /// Chips not currently staked.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// The player's hands this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Index of the hand being played.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand
    }

    /// The hand being played, if any.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active_hand)
    }

    /// Returns whether the seat is taken.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Outcome of the player's first hand last round.
    #[must_use]
    pub const fn last_result(&self) -> Option<HandOutcome> {
        self.last_result
    }

    /// Current streak multiplier.
    #[must_use]
    pub const fn bet_multiplier(&self) -> u8 {
        self.bet_multiplier
    }

    /// The bet on the first hand, or 0 without one.
    #[must_use]
    pub fn bet(&self) -> usize {
        self.hands.first().map_or(0, Hand::bet)
    }

    /// Returns whether the player holds a hand this round.
    #[must_use]
    pub fn in_round(&self) -> bool {
        self.is_active && !self.hands.is_empty()
    }

    /// Index of the first hand at or after `from` that still takes decisions.
    pub(crate) fn first_open_hand(&self, from: usize) -> Option<usize> {
        self.hands
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, hand)| !hand.is_finished())
            .map(|(index, _)| index)
    }

    /// Automated wager: the base bet scaled by the streak, capped by chips.
    pub(crate) fn automated_bet(&self, base_bet: usize) -> usize {
        base_bet
            .saturating_mul(usize::from(self.bet_multiplier))
            .min(self.chips)
    }

    /// Steps the streak multiplier after a settled round.
    ///
    /// Wins climb one step up to `max`, losses reset to 1, pushes hold.
    pub(crate) fn record_streak(&mut self, outcome: Option<HandOutcome>, max: u8) {
        match outcome {
            Some(outcome) if outcome.is_win() => {
                self.bet_multiplier = self.bet_multiplier.saturating_add(1).min(max.max(1));
            }
            Some(outcome) if outcome.is_loss() => self.bet_multiplier = 1,
            _ => {}
        }
    }

    /// Puts an automated player in the seat with a fresh bankroll.
    pub(crate) fn sit_down(&mut self, chips: usize) {
        self.is_active = true;
        self.chips = chips;
        self.hands.clear();
        self.active_hand = 0;
        self.last_result = None;
        self.bet_multiplier = 1;
    }

    /// Clears the hands for the next round.
    pub(crate) fn clear_hands(&mut self) {
        self.hands.clear();
        self.active_hand = 0;
    }
}
