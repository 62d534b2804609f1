//! Table configuration.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_penetration(0.8)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks.
    pub decks: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Deck penetration (fraction of the shoe dealt before a reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
    /// Base wager of an automated player, before its streak multiplier.
    pub ai_base_bet: usize,
    /// Chips an automated player receives when it takes a seat.
    pub ai_starting_chips: usize,
    /// Ceiling of an automated player's streak multiplier.
    pub max_bet_multiplier: u8,
    /// Smallest bankroll accepted when a session starts.
    pub min_buy_in: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            stand_on_soft_17: false,
            penetration: 0.75,
            ai_base_bet: 25,
            ai_starting_chips: 1000,
            max_bet_multiplier: 4,
            min_buy_in: 10,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the automated players' base wager.
    #[must_use]
    pub const fn with_ai_base_bet(mut self, bet: usize) -> Self {
        self.ai_base_bet = bet;
        self
    }

    /// Sets the bankroll an automated player sits down with.
    #[must_use]
    pub const fn with_ai_starting_chips(mut self, chips: usize) -> Self {
        self.ai_starting_chips = chips;
        self
    }

    /// Sets the automated players' streak multiplier ceiling.
    #[must_use]
    pub const fn with_max_bet_multiplier(mut self, multiplier: u8) -> Self {
        self.max_bet_multiplier = multiplier;
        self
    }

    /// Sets the smallest accepted buy-in.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_buy_in(100);
    /// assert_eq!(options.min_buy_in, 100);
    /// ```
    #[must_use]
    pub const fn with_min_buy_in(mut self, chips: usize) -> Self {
        self.min_buy_in = chips;
        self
    }
}
