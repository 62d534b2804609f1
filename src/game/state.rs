//! Phase, seat and action types.

use alloc::string::String;

use crate::strategy::PlayerAction;

/// Round phase.
///
/// After the session starts the phases cycle strictly in declaration order
/// from `Betting` to `RoundEnd` and back to `Betting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No session yet.
    Menu,
    /// Waiting for the human to choose a bankroll.
    BuyIn,
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards, one per step.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer reveals the hole card and draws.
    DealerTurn,
    /// Hands are ready to be settled.
    Settlement,
    /// Round has been settled.
    RoundEnd,
}

/// A seat at the table, left to right.
///
/// The human always sits in the center; automated players take the sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// Left seat, played first.
    Left,
    /// The human's seat.
    Center,
    /// Right seat, played last.
    Right,
}

impl Seat {
    /// All seats in play order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Position of the seat in play order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }
}

/// Everything that can be asked of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a session with the given bankroll; 0 opens buy-in selection.
    StartSession {
        /// The human's starting chips.
        starting_chips: usize,
    },
    /// Abandon the session.
    ReturnToMenu,
    /// Seat an automated player.
    AddAutomatedPlayer(Seat),
    /// Unseat an automated player.
    RemoveAutomatedPlayer(Seat),
    /// Add chips to the human's bet.
    PlaceBet(usize),
    /// Take back the human's bet.
    ClearBet,
    /// Lock in all bets and start dealing.
    ConfirmBets,
    /// Deal the next initial card.
    DealOneCard,
    /// The human's move on the active hand.
    Player(PlayerAction),
    /// Let the automated player on turn make one move.
    AutomatedPlayerStep,
    /// Turn over the dealer's hole card.
    DealerReveal,
    /// Let the dealer draw one card if the rules require it.
    DealerHit,
    /// Pay out every hand.
    Settle,
    /// Clear the table for the next round.
    StartNewRound,
    /// Replace the table message.
    SetMessage(String),
}
