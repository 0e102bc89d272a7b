//! Table configuration options.

/// What the table does with a bet that is negative or exceeds the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[non_exhaustive]
pub enum BetPolicy {
    /// Clamp the bet into `0..=balance`.
    #[default]
    Clamp,
    /// Abort the round with a bet error.
    Reject,
    /// Debit whatever the strategy asked for. Balances may go negative.
    Unchecked,
}

/// What the table does when the deck runs out of cards mid-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Exhaustion {
    /// Append a freshly shuffled pack and keep drawing.
    #[default]
    AddPack,
    /// Abort the round with an empty-deck error.
    Fail,
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_sim::{BetPolicy, TableOptions};
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_blackjack_pays(1.2)
///     .with_bet_policy(BetPolicy::Reject);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of packs shuffled together for each round.
    pub decks: u8,
    /// Bonus ratio paid on top of the returned bet for a natural (1.5 pays 2.5x in total).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Dealer stands once the hand reaches this value.
    pub dealer_stands_on: u8,
    /// Handling of out-of-range bets.
    pub bet_policy: BetPolicy,
    /// Handling of an exhausted deck.
    pub exhaustion: Exhaustion,
    /// Maximum number of rounds a session plays.
    pub max_rounds: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            bet_policy: BetPolicy::Clamp,
            exhaustion: Exhaustion::AddPack,
            max_rounds: 10_000,
        }
    }
}

impl TableOptions {
    /// Sets the number of packs per round.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack bonus ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets how out-of-range bets are handled.
    #[must_use]
    pub const fn with_bet_policy(mut self, policy: BetPolicy) -> Self {
        self.bet_policy = policy;
        self
    }

    /// Sets how an exhausted deck is handled.
    #[must_use]
    pub const fn with_exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Sets the maximum number of rounds a session plays.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_rounds(50);
    /// assert_eq!(options.max_rounds, 50);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}
