use alloc::string::String;

use crate::error::{SeatError, SessionError};
use crate::hand::DealerHand;
use crate::shoe::Shoe;

use super::{GameState, Phase, Seat};

impl GameState {
    /// Starts a session with `starting_chips` for the human.
    ///
    /// Zero chips opens buy-in selection instead.
    pub(super) fn start_session(&self, starting_chips: usize) -> Result<Self, SessionError> {
        if !matches!(self.phase, Phase::Menu | Phase::BuyIn) {
            return Err(SessionError::InvalidState);
        }

        let mut next = self.clone();
        if starting_chips == 0 {
            next.phase = Phase::BuyIn;
            next.message.clear();
            return Ok(next);
        }

        if starting_chips < self.options.min_buy_in {
            return Err(SessionError::BuyInTooSmall {
                minimum: self.options.min_buy_in,
            });
        }

        next.shoe = Shoe::new(next.options.decks, &mut next.rng);
        for player in &mut next.players {
            player.clear_hands();
            if player.is_human {
                player.chips = starting_chips;
                player.last_result = None;
            }
        }
        next.dealer = DealerHand::new();
        next.active_player = None;
        next.round = 1;
        next.phase = Phase::Betting;
        next.message = String::from("Place your bet!");

        tracing::info!(
            starting_chips,
            decks = next.options.decks,
            "session started"
        );
        Ok(next)
    }

    /// Discards the session and returns to the menu.
    pub(super) fn return_to_menu(&self) -> Self {
        Self::at_menu(self.options.clone(), self.rng.clone())
    }

    fn ensure_seat_change(&self, seat: Seat) -> Result<(), SeatError> {
        if !matches!(self.phase, Phase::Betting | Phase::RoundEnd) {
            return Err(SeatError::InvalidState);
        }
        if self.players[seat.index()].is_human {
            return Err(SeatError::HumanSeat);
        }
        Ok(())
    }

    /// Seats an automated player with a fresh bankroll.
    pub(super) fn add_automated_player(&self, seat: Seat) -> Result<Self, SeatError> {
        self.ensure_seat_change(seat)?;

        let mut next = self.clone();
        let chips = next.options.ai_starting_chips;
        next.players[seat.index()].sit_down(chips);
        Ok(next)
    }

    /// Empties an automated player's seat.
    pub(super) fn remove_automated_player(&self, seat: Seat) -> Result<Self, SeatError> {
        self.ensure_seat_change(seat)?;

        let mut next = self.clone();
        let player = &mut next.players[seat.index()];
        player.is_active = false;
        player.clear_hands();
        Ok(next)
    }
}
