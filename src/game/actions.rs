use alloc::format;
use alloc::vec;

use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::strategy::{self, PlayerAction, Recommendation};

use super::{GameState, Phase, Player};

/// Basic-strategy advice for the player's active hand.
///
/// Split is only offered while the player holds a single hand.
pub(super) fn advise(player: &Player, dealer: &DealerHand) -> Option<Recommendation> {
    let hand = player.active_hand()?;
    let up_card = dealer.up_card()?;
    let can_split = player.hands.len() == 1 && hand.can_split(player.chips);

    Some(strategy::recommend(
        hand.cards(),
        up_card,
        can_split,
        hand.can_double_down(player.chips),
    ))
}

impl GameState {
    /// Index of the player on turn, provided it is the human when `human` is
    /// set and an automated player otherwise.
    fn ensure_turn(&self, human: bool) -> Result<usize, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let index = self.active_player.ok_or(ActionError::NotYourTurn)?;
        let player = self.players.get(index).ok_or(ActionError::NotYourTurn)?;
        if player.is_human != human || !player.in_round() {
            return Err(ActionError::NotYourTurn);
        }

        Ok(index)
    }

    /// Applies the human's move to their active hand.
    pub(super) fn player_action(&self, action: PlayerAction) -> Result<Self, ActionError> {
        let index = self.ensure_turn(true)?;

        let mut next = self.clone();
        next.play(index, action)?;
        next.message.clear();
        Ok(next)
    }

    /// Lets the automated player on turn make its basic-strategy move.
    ///
    /// One move per step: a hit draws a single card and the player keeps the
    /// turn until the hand stands, doubles, busts, or reaches 21.
    pub(super) fn automated_step(&self) -> Result<Self, ActionError> {
        let index = self.ensure_turn(false)?;
        let player = &self.players[index];
        let advice = advise(player, &self.dealer).ok_or(ActionError::HandNotFound)?;

        let mut next = self.clone();
        next.play(index, advice.action)?;
        next.message = format!("{}: {}", player.name, advice.action.name());
        Ok(next)
    }

    fn play(&mut self, index: usize, action: PlayerAction) -> Result<(), ActionError> {
        let player = self.players.get(index).ok_or(ActionError::NotYourTurn)?;
        let hand_index = player.active_hand;
        let hand = player
            .hands
            .get(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        let chips = player.chips;
        let bet = hand.bet();

        match action {
            PlayerAction::Hit => {
                let card = self.draw(true);
                let hand = self.hand_mut(index, hand_index)?;
                hand.add_card(card);
                if hand.is_finished() {
                    self.finish_hand(index);
                }
            }
            PlayerAction::Stand => self.finish_hand(index),
            PlayerAction::Double => {
                if hand.len() != 2 {
                    return Err(ActionError::CannotDouble);
                }
                if !hand.can_double_down(chips) {
                    return Err(ActionError::InsufficientFunds);
                }

                let card = self.draw(true);
                self.players[index].chips -= bet;
                let hand = self.hand_mut(index, hand_index)?;
                hand.double_bet();
                hand.add_card(card);
                self.finish_hand(index);
            }
            PlayerAction::Split => {
                if player.hands.len() != 1 || hand.is_from_split() || hand.pair_rank().is_none() {
                    return Err(ActionError::CannotSplit);
                }
                if !hand.can_split(chips) {
                    return Err(ActionError::InsufficientFunds);
                }
                let &[first, second] = hand.cards() else {
                    return Err(ActionError::CannotSplit);
                };

                let first_draw = self.draw(true);
                let second_draw = self.draw(true);

                let player = &mut self.players[index];
                player.chips -= bet;
                player.hands = vec![
                    Hand::from_split([first, first_draw], bet),
                    Hand::from_split([second, second_draw], bet),
                ];
                match player.first_open_hand(0) {
                    Some(open) => player.active_hand = open,
                    None => self.pass_turn(Some(index)),
                }
            }
        }

        Ok(())
    }

    fn hand_mut(&mut self, index: usize, hand_index: usize) -> Result<&mut Hand, ActionError> {
        self.players
            .get_mut(index)
            .and_then(|player| player.hands.get_mut(hand_index))
            .ok_or(ActionError::HandNotFound)
    }

    /// Moves past the active hand: to the player's next open hand, or on to
    /// the next player.
    fn finish_hand(&mut self, index: usize) {
        let player = &mut self.players[index];
        match player.first_open_hand(player.active_hand + 1) {
            Some(open) => player.active_hand = open,
            None => self.pass_turn(Some(index)),
        }
    }

    /// Hands the turn to the first player after `after` (or the first player
    /// at all) who still has a decision to make.
    ///
    /// Players whose hands are all finished, naturals included, are skipped.
    /// With nobody left the dealer's turn begins.
    fn pass_turn(&mut self, after: Option<usize>) {
        let start = after.map_or(0, |index| index + 1);
        let next = self
            .players
            .iter()
            .enumerate()
            .skip(start)
            .filter(|(_, player)| player.in_round())
            .find_map(|(index, player)| player.first_open_hand(0).map(|open| (index, open)));

        match next {
            Some((index, open)) => {
                self.players[index].active_hand = open;
                self.active_player = Some(index);
                self.phase = Phase::PlayerTurn;
            }
            None => {
                self.active_player = None;
                self.phase = Phase::DealerTurn;
            }
        }
    }

    /// Opens player turns once the initial deal is complete.
    pub(super) fn begin_turns(&mut self) {
        self.message.clear();
        self.pass_turn(None);
    }
}
