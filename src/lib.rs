//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] value that carries the whole table:
//! shoe, seats, dealer, and round phase. [`GameState::apply`] takes one
//! [`Action`] and returns the next state without touching the previous one.
//! Automated seats play by a chart-driven basic strategy, which is also
//! available to the human as advice through [`GameState::recommendation`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, GameOptions, GameState, Phase};
//!
//! let mut state = GameState::new(GameOptions::default(), 42)
//!     .apply(Action::StartSession { starting_chips: 500 })
//!     .apply(Action::PlaceBet(20))
//!     .apply(Action::ConfirmBets);
//!
//! while state.phase() == Phase::Dealing {
//!     state = state.apply(Action::DealOneCard);
//! }
//! assert_eq!(state.dealer().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{
    ActionError, BetError, DealError, DealerError, RoundError, SeatError, SessionError,
    TransitionError,
};
pub use game::{Action, GameState, Phase, Player, Seat};
pub use hand::{DealerHand, Hand};
pub use options::GameOptions;
pub use result::{HandOutcome, Settlement, settle_hand};
pub use shoe::Shoe;
pub use strategy::{PlayerAction, Recommendation, recommend};
