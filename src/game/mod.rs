//! The round state machine.
//!
//! [`GameState`] is a plain value. Every transition borrows the current state
//! and returns a new one, so a driver may keep earlier snapshots around for
//! animation or replay. Multi-card work (dealing, automated turns, dealer
//! draws) is split into single steps that the driver invokes one at a time.

use alloc::string::{String, ToString};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::TransitionError;
use crate::hand::DealerHand;
use crate::options::GameOptions;
use crate::shoe::Shoe;
use crate::strategy::Recommendation;

mod actions;
mod bet;
mod dealer;
pub mod player;
mod session;
pub mod state;

pub use player::Player;
pub use state::{Action, Phase, Seat};

const HUMAN: usize = Seat::Center.index();

/// Complete state of the table.
///
/// Create one with [`GameState::new`] and advance it with
/// [`GameState::apply`]:
///
/// ```
/// use bjtable::{Action, GameOptions, GameState, Phase};
///
/// let state = GameState::new(GameOptions::default(), 42)
///     .apply(Action::StartSession { starting_chips: 500 })
///     .apply(Action::PlaceBet(25))
///     .apply(Action::ConfirmBets);
///
/// assert_eq!(state.phase(), Phase::Dealing);
/// assert_eq!(state.human().chips(), 475);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    options: GameOptions,
    phase: Phase,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Seats in play order; the human is in the center.
    players: [Player; 3],
    /// Dealer's hand.
    dealer: DealerHand,
    /// Player on turn during `PlayerTurn`.
    active_player: Option<usize>,
    round: u32,
    message: String,
    /// Shuffling source, carried along so sessions replay from a seed.
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates a table at the menu with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::at_menu(options, ChaCha8Rng::seed_from_u64(seed))
    }

    fn at_menu(options: GameOptions, rng: ChaCha8Rng) -> Self {
        let ai_chips = options.ai_starting_chips;
        Self {
            shoe: Shoe::empty(options.decks),
            options,
            phase: Phase::Menu,
            players: [
                Player::automated(Seat::Left, ai_chips),
                Player::human(),
                Player::automated(Seat::Right, ai_chips),
            ],
            dealer: DealerHand::new(),
            active_player: None,
            round: 0,
            message: String::new(),
            rng,
        }
    }

    /// Replaces the shoe, e.g. to replay a recorded deal.
    #[must_use]
    pub fn with_shoe(mut self, shoe: Shoe) -> Self {
        self.shoe = shoe;
        self
    }

    /// Applies one action and returns the resulting state.
    ///
    /// Never fails: an action that does not fit the phase or the player on
    /// turn returns the state unchanged. Rejections the player can act on
    /// (not enough chips, no bet, an ineligible double or split) leave their
    /// reason in [`GameState::message`].
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        let phase = self.phase;
        tracing::debug!(?action, ?phase, "applying transition");

        match self.try_apply(action) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(%err, ?phase, "transition rejected");
                let mut next = self.clone();
                if err.is_advisory() {
                    next.message = err.to_string();
                }
                next
            }
        }
    }

    /// Applies one action, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the action does not fit the current phase or the
    /// player on turn, or if the player cannot afford or is not allowed the
    /// requested bet, double, or split.
    pub fn try_apply(&self, action: Action) -> Result<Self, TransitionError> {
        let next = match action {
            Action::StartSession { starting_chips } => self.start_session(starting_chips)?,
            Action::ReturnToMenu => self.return_to_menu(),
            Action::AddAutomatedPlayer(seat) => self.add_automated_player(seat)?,
            Action::RemoveAutomatedPlayer(seat) => self.remove_automated_player(seat)?,
            Action::PlaceBet(amount) => self.place_bet(amount)?,
            Action::ClearBet => self.clear_bet()?,
            Action::ConfirmBets => self.confirm_bets()?,
            Action::DealOneCard => self.deal_one_card()?,
            Action::Player(action) => self.player_action(action)?,
            Action::AutomatedPlayerStep => self.automated_step()?,
            Action::DealerReveal => self.dealer_reveal()?,
            Action::DealerHit => self.dealer_hit()?,
            Action::Settle => self.settle()?,
            Action::StartNewRound => self.start_new_round()?,
            Action::SetMessage(message) => {
                let mut next = self.clone();
                next.message = message;
                next
            }
        };
        Ok(next)
    }

    /// Draws a card from the shoe.
    fn draw(&mut self, face_up: bool) -> Card {
        self.shoe.draw(face_up, &mut self.rng)
    }

    /// Indexes of the players holding a hand this round, in play order.
    fn participants(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.in_round())
            .map(|(index, _)| index)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns all seats in play order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the human player.
    #[must_use]
    pub const fn human(&self) -> &Player {
        &self.players[HUMAN]
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Index of the player on turn, if any.
    #[must_use]
    pub const fn active_player_index(&self) -> Option<usize> {
        self.active_player
    }

    /// The player on turn, if any.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active_player?)
    }

    /// Returns the round number, starting at 1 for a new session.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the table message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Basic-strategy advice for the human's active hand.
    ///
    /// Returns `None` unless it is the human's turn.
    #[must_use]
    pub fn recommendation(&self) -> Option<Recommendation> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }
        let player = self.active_player().filter(|player| player.is_human())?;
        actions::advise(player, &self.dealer)
    }
}
