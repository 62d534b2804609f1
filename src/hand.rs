//! Hand evaluation and the player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::HandOutcome;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Best total of the cards.
///
/// Aces count 11 and are demoted to 1 one at a time while the total exceeds
/// 21, so the result is the highest total not over 21 when one exists.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether an ace is still counted as 11 without busting.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the cards are exactly two totalling 21.
///
/// This says nothing about split hands; see [`Hand::is_natural`].
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

/// Returns whether the total is over 21.
#[must_use]
pub fn is_busted(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// The shared value of a two-card pair, if the cards form one.
///
/// Pairs are compared by value, so King and Jack pair as 10.
#[must_use]
pub fn pair_rank(cards: &[Card]) -> Option<u8> {
    match cards {
        [first, second] if first.value() == second.value() => Some(first.value()),
        _ => None,
    }
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Bet amount for this hand.
    bet: usize,
    /// Outcome, assigned at settlement.
    result: Option<HandOutcome>,
    /// Whether the bet was doubled.
    doubled_down: bool,
    /// Whether this hand is from a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            result: None,
            doubled_down: false,
            from_split: false,
        }
    }

    /// Creates one half of a split pair.
    #[must_use]
    pub fn from_split(cards: [Card; 2], bet: usize) -> Self {
        Self {
            cards: Vec::from(cards),
            bet,
            result: None,
            doubled_down: false,
            from_split: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the wager the hand started with, before any double.
    #[must_use]
    pub const fn base_bet(&self) -> usize {
        if self.doubled_down {
            self.bet / 2
        } else {
            self.bet
        }
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled_down = true;
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled_down(&self) -> bool {
        self.doubled_down
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the settled outcome, if the hand has been settled.
    #[must_use]
    pub const fn result(&self) -> Option<HandOutcome> {
        self.result
    }

    pub(crate) const fn set_result(&mut self, result: HandOutcome) {
        self.result = Some(result);
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// Two cards totalling 21 after a split are not a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    /// Returns whether the hand takes no further decisions.
    ///
    /// Busted hands and hands already on 21 (naturals included) are done.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.value() >= 21
    }

    /// Returns whether a player holding `chips` may split this hand.
    #[must_use]
    pub fn can_split(&self, chips: usize) -> bool {
        !self.from_split && chips >= self.bet && pair_rank(&self.cards).is_some()
    }

    /// Returns whether a player holding `chips` may double this hand.
    #[must_use]
    pub fn can_double_down(&self, chips: usize) -> bool {
        self.cards.len() == 2 && chips >= self.bet
    }

    /// Returns the shared value of the pair, if the hand is one.
    #[must_use]
    pub fn pair_rank(&self) -> Option<u8> {
        pair_rank(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The hole card is the one dealt face down; it stays hidden until
/// [`DealerHand::reveal_hole`] turns it over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether a card is still face down.
    #[must_use]
    pub fn has_hidden_card(&self) -> bool {
        self.cards.iter().any(|card| !card.face_up)
    }

    /// Turns every card face up.
    pub fn reveal_hole(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
    }

    /// Total of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        let visible: Vec<Card> = self.cards.iter().filter(|c| c.face_up).copied().collect();
        hand_value(&visible)
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_busted(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer draws below 17 and, unless `stand_on_soft_17` is set, on a
    /// soft 17.
    #[must_use]
    pub fn must_hit(&self, stand_on_soft_17: bool) -> bool {
        let value = self.value();
        value < 17 || (value == 17 && self.is_soft() && !stand_on_soft_17)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
