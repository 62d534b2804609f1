//! Error types for table transitions.
//!
//! Nothing here is fatal. [`GameState::apply`](crate::GameState::apply) turns
//! every error into an unchanged state, and copies the text of
//! [advisory](TransitionError::is_advisory) errors into the table message.

use thiserror::Error;

/// Errors that can occur when starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A session is already running.
    #[error("a session is already running")]
    InvalidState,
    /// Buy-in is below the table minimum.
    #[error("minimum buy-in is {minimum}")]
    BuyInTooSmall {
        /// The table minimum.
        minimum: usize,
    },
}

/// Errors that can occur when seating or unseating an automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Seats only change between rounds.
    #[error("seats can only change between rounds")]
    InvalidState,
    /// The seat belongs to the human player.
    #[error("that seat belongs to you")]
    HumanSeat,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet would exceed the player's chips.
    #[error("not enough chips for that bet")]
    InsufficientFunds,
    /// No bet placed before confirming.
    #[error("Place a bet first!")]
    NoBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient funds for this action.
    #[error("not enough chips for this action")]
    InsufficientFunds,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer.
    #[error("invalid game state for the dealer")]
    InvalidState,
    /// The hole card has already been turned over.
    #[error("hole card already revealed")]
    AlreadyRevealed,
    /// The dealer cannot draw before revealing the hole card.
    #[error("hole card not revealed yet")]
    HoleCardHidden,
}

/// Errors that can occur when settling or starting a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this step.
    #[error("invalid game state for this step")]
    InvalidState,
}

/// Any reason a transition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Session start rejected.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Seat change rejected.
    #[error(transparent)]
    Seat(#[from] SeatError),
    /// Bet rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Deal rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Player action rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer step rejected.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// Round step rejected.
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl TransitionError {
    /// Returns whether the rejection is worth showing to the player.
    ///
    /// Phase and turn mismatches are driver noise and stay silent; chip and
    /// eligibility problems are the player's to fix.
    #[must_use]
    pub const fn is_advisory(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::BuyInTooSmall { .. })
                | Self::Seat(SeatError::HumanSeat)
                | Self::Bet(BetError::ZeroBet | BetError::InsufficientFunds | BetError::NoBet)
                | Self::Action(
                    ActionError::CannotDouble
                        | ActionError::CannotSplit
                        | ActionError::InsufficientFunds
                )
        )
    }
}
