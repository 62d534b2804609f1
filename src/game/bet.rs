use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{BetError, DealError};
use crate::hand::Hand;

use super::{GameState, HUMAN, Phase};

impl GameState {
    /// Adds `amount` to the human's bet.
    pub(super) fn place_bet(&self, amount: usize) -> Result<Self, BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let human = &self.players[HUMAN];
        let bet = human
            .bet()
            .checked_add(amount)
            .filter(|&bet| bet <= human.chips)
            .ok_or(BetError::InsufficientFunds)?;

        let mut next = self.clone();
        next.players[HUMAN].hands = vec![Hand::new(bet)];
        Ok(next)
    }

    /// Takes back the human's bet.
    pub(super) fn clear_bet(&self) -> Result<Self, BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        let mut next = self.clone();
        next.players[HUMAN].clear_hands();
        Ok(next)
    }

    /// Locks in the human's bet, sizes the automated bets, and takes every
    /// stake from the players' chips.
    pub(super) fn confirm_bets(&self) -> Result<Self, BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        let human = &self.players[HUMAN];
        let bet = human.bet();
        if bet == 0 {
            return Err(BetError::NoBet);
        }
        if bet > human.chips {
            return Err(BetError::InsufficientFunds);
        }

        let mut next = self.clone();
        let base_bet = next.options.ai_base_bet;

        for player in &mut next.players {
            if player.is_human {
                player.chips -= bet;
                continue;
            }
            if !player.is_active {
                continue;
            }
            if player.chips == 0 {
                player.is_active = false;
                player.clear_hands();
                continue;
            }

            let stake = player.automated_bet(base_bet);
            player.hands = vec![Hand::new(stake)];
            player.active_hand = 0;
            player.chips -= stake;
        }

        next.phase = Phase::Dealing;
        next.message = String::from("Dealing...");
        Ok(next)
    }

    /// Deals the next initial card.
    ///
    /// Cards go round-robin: each player holding a bet, then the dealer, for
    /// two passes. The dealer's second card is the face-down hole card. Once
    /// every player and the dealer hold two cards, player turns begin.
    pub(super) fn deal_one_card(&self) -> Result<Self, DealError> {
        if self.phase != Phase::Dealing {
            return Err(DealError::InvalidState);
        }

        let seats: Vec<usize> = self.participants().collect();
        let per_pass = seats.len() + 1;
        let expected = per_pass * 2;
        let dealt = seats
            .iter()
            .map(|&index| self.players[index].hands.first().map_or(0, Hand::len))
            .sum::<usize>()
            + self.dealer.len();

        let mut next = self.clone();
        if dealt >= expected {
            next.begin_turns();
            return Ok(next);
        }

        let pass = dealt / per_pass;
        if let Some(&index) = seats.get(dealt % per_pass) {
            let card = next.draw(true);
            if let Some(hand) = next.players[index].hands.first_mut() {
                hand.add_card(card);
            }
        } else {
            // Dealer's hole card goes face down on the second pass.
            let card = next.draw(pass == 0);
            next.dealer.add_card(card);
        }

        if dealt + 1 >= expected {
            next.begin_turns();
        }
        Ok(next)
    }
}
