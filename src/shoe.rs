//! The multi-deck shoe.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// Returns whether a shoe has been dealt past its cut card.
///
/// `ratio` is the fraction of the original shoe that may be dealt before a
/// reshuffle is due. A ratio of 0 (or an empty original shoe) disables
/// reshuffling.
#[must_use]
pub fn needs_reshuffle(current_size: usize, original_size: usize, ratio: f64) -> bool {
    if ratio <= 0.0 || original_size == 0 {
        return false;
    }

    let dealt = original_size.saturating_sub(current_size);
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let dealt_ratio = dealt as f64 / original_size as f64;

    dealt_ratio >= ratio
}

/// An ordered sequence of undealt cards.
///
/// Cards are drawn from the front. The shoe remembers how many cards it held
/// right after its last shuffle so penetration can be measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
    decks: u8,
    original_size: usize,
}

impl Shoe {
    /// Composes `decks` full decks and shuffles them uniformly.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        // Fisher-Yates
        cards.shuffle(rng);

        let original_size = cards.len();
        Self {
            cards: VecDeque::from(cards),
            decks,
            original_size,
        }
    }

    /// Creates a shoe holding no cards.
    ///
    /// Drawing from it transparently composes a fresh shoe of `decks` decks.
    #[must_use]
    pub const fn empty(decks: u8) -> Self {
        Self {
            cards: VecDeque::new(),
            decks,
            original_size: decks as usize * DECK_SIZE,
        }
    }

    /// Creates a stacked shoe that deals `cards` in the given order.
    ///
    /// When the stack runs out, a fresh shoe of `decks` decks is composed.
    #[must_use]
    pub fn from_cards<I>(cards: I, decks: u8) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let cards: VecDeque<Card> = cards.into_iter().collect();
        let original_size = cards.len();
        Self {
            cards,
            decks,
            original_size,
        }
    }

    /// Removes the front card and turns it to the requested side.
    ///
    /// An exhausted shoe is replaced with a freshly shuffled one first, so
    /// drawing never fails.
    pub fn draw<R: Rng + ?Sized>(&mut self, face_up: bool, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.cards.pop_front() {
                return card.turned(face_up);
            }
            tracing::warn!(decks = self.decks, "shoe exhausted mid-round, composing a new one");
            *self = Self::new(self.decks.max(1), rng);
        }
    }

    /// Returns whether the cut card has been reached.
    #[must_use]
    pub fn needs_reshuffle(&self, ratio: f64) -> bool {
        needs_reshuffle(self.cards.len(), self.original_size, ratio)
    }

    /// Returns the undealt cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks a fresh shoe is composed of.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards the shoe held right after its last shuffle.
    #[must_use]
    pub const fn original_size(&self) -> usize {
        self.original_size
    }
}
