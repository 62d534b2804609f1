use alloc::string::String;
use alloc::vec;

use crate::error::{DealerError, RoundError};
use crate::hand::{DealerHand, Hand};
use crate::result::settle_hand;
use crate::shoe::Shoe;

use super::{GameState, HUMAN, Phase};

impl GameState {
    /// Checks if every hand in play has busted.
    fn all_hands_busted(&self) -> bool {
        self.participants()
            .all(|index| self.players[index].hands.iter().all(Hand::is_busted))
    }

    /// Turns over the dealer's hole card.
    ///
    /// If every player hand has already busted the dealer does not draw and
    /// the round goes straight to settlement.
    pub(super) fn dealer_reveal(&self) -> Result<Self, DealerError> {
        if self.phase != Phase::DealerTurn {
            return Err(DealerError::InvalidState);
        }
        if !self.dealer.has_hidden_card() {
            return Err(DealerError::AlreadyRevealed);
        }

        let mut next = self.clone();
        next.dealer.reveal_hole();

        if next.all_hands_busted() {
            next.phase = Phase::Settlement;
        }
        Ok(next)
    }

    /// Dealer draws one card if the rules require it.
    ///
    /// The dealer draws below 17 and on soft 17 (unless the table stands on
    /// soft 17). Once the hand stands or busts the round moves to settlement.
    pub(super) fn dealer_hit(&self) -> Result<Self, DealerError> {
        if self.phase != Phase::DealerTurn {
            return Err(DealerError::InvalidState);
        }
        if self.dealer.has_hidden_card() {
            return Err(DealerError::HoleCardHidden);
        }

        let stand_on_soft_17 = self.options.stand_on_soft_17;
        let mut next = self.clone();

        if next.dealer.must_hit(stand_on_soft_17) {
            let card = next.draw(true);
            next.dealer.add_card(card);
        }

        if !next.dealer.must_hit(stand_on_soft_17) {
            tracing::debug!(
                dealer_value = next.dealer.value(),
                dealer_cards = next.dealer.len(),
                "dealer stands"
            );
            next.phase = Phase::Settlement;
        }
        Ok(next)
    }

    /// Settles every hand against the dealer and pays out.
    ///
    /// Stakes were taken at confirmation, so each hand returns its stake plus
    /// winnings: twice the bet for a win, the bet plus 3:2 for a blackjack,
    /// the bet for a push, nothing for a loss. Automated players' streak
    /// multipliers are updated from their first hand.
    pub(super) fn settle(&self) -> Result<Self, RoundError> {
        if self.phase != Phase::Settlement {
            return Err(RoundError::InvalidState);
        }

        let mut next = self.clone();
        let max_multiplier = next.options.max_bet_multiplier;

        for player in &mut next.players {
            if !player.in_round() {
                continue;
            }

            let mut returned: usize = 0;
            for hand in &mut player.hands {
                let settlement = settle_hand(hand, self.dealer.cards());
                hand.set_result(settlement.outcome);
                returned = returned.saturating_add(settlement.returned(hand.bet()));
            }

            player.chips = player.chips.saturating_add(returned);
            player.last_result = player.hands.first().and_then(Hand::result);
            if !player.is_human {
                player.record_streak(player.last_result, max_multiplier);
            }

            tracing::info!(
                player = player.name,
                result = ?player.last_result,
                returned,
                chips = player.chips,
                "hand settled"
            );
        }

        next.phase = Phase::RoundEnd;
        next.message.clear();
        Ok(next)
    }

    /// Clears the table for the next round.
    ///
    /// Reshuffles if the cut card has been reached. A human with no chips left
    /// is sent to buy-in selection instead. Otherwise the human's last wager is
    /// offered again if it is still affordable, and automated players who are
    /// out of chips leave the table.
    pub(super) fn start_new_round(&self) -> Result<Self, RoundError> {
        if self.phase != Phase::RoundEnd {
            return Err(RoundError::InvalidState);
        }

        let mut next = self.clone();
        if next.shoe.needs_reshuffle(next.options.penetration) {
            tracing::info!(
                remaining = next.shoe.len(),
                original = next.shoe.original_size(),
                "cut card reached, reshuffling"
            );
            next.shoe = Shoe::new(next.options.decks, &mut next.rng);
        }

        next.dealer = DealerHand::new();
        next.active_player = None;

        let human = &next.players[HUMAN];
        if human.chips == 0 {
            for player in &mut next.players {
                player.clear_hands();
            }
            next.phase = Phase::BuyIn;
            next.message = String::from("You ran out of chips!");
            return Ok(next);
        }

        let carried_bet = human
            .hands
            .first()
            .map(Hand::base_bet)
            .filter(|&bet| bet > 0 && bet <= human.chips);

        for player in &mut next.players {
            player.clear_hands();
            if player.is_human {
                if let Some(bet) = carried_bet {
                    player.hands = vec![Hand::new(bet)];
                }
            } else if player.is_active && player.chips == 0 {
                player.is_active = false;
            }
        }

        next.round += 1;
        next.phase = Phase::Betting;
        next.message = String::from("Place your bet!");
        Ok(next)
    }
}
