//! Players, their running statistics, and bet reconciliation.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use core::fmt;

use crate::card::Card;
use crate::error::{BetError, StrategyError};
use crate::hand::Hand;
use crate::options::{BetPolicy, RoundingMode, TableOptions};
use crate::outcome::{Outcome, Settlement, compare};
use crate::strategy::{Action, Strategy};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

/// Cumulative results across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Rounds settled.
    pub games: u32,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Consecutive wins, reset by a loss.
    pub win_streak: u32,
    /// Consecutive losses, reset by a win.
    pub lose_streak: u32,
}

impl Statistics {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.win_streak += 1;
                self.lose_streak = 0;
            }
            Outcome::Lose => {
                self.losses += 1;
                self.lose_streak += 1;
                self.win_streak = 0;
            }
            Outcome::Push => {}
        }
    }
}

/// Read-only state handed to a [`Strategy`] when it has to decide.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    /// The acting player's name.
    pub name: &'a str,
    /// The acting player's current hand.
    pub hand: &'a Hand,
    /// Balance, with the current bet already debited.
    pub balance: i64,
    /// The bet placed this round.
    pub bet: i64,
    /// Cumulative statistics.
    pub stats: Statistics,
    /// The dealer's face-up card, once dealt.
    pub dealer_up: Option<Card>,
}

/// A seat at the table: a hand, a bankroll, and the strategy that drives them.
pub struct Player {
    name: String,
    hand: Hand,
    balance: i64,
    bet: i64,
    stats: Statistics,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a player with a starting balance and a strategy.
    pub fn new<S>(name: impl Into<String>, balance: i64, strategy: S) -> Self
    where
        S: Strategy + 'static,
    {
        Self {
            name: name.into(),
            hand: Hand::new(),
            balance,
            bet: 0,
            stats: Statistics::default(),
            strategy: Box::new(strategy),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns the bet placed this round, or 0 outside a round.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns the cumulative statistics.
    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    /// Returns the view a strategy sees for this player.
    #[must_use]
    pub fn view(&self, dealer_up: Option<Card>) -> PlayerView<'_> {
        PlayerView {
            name: self.name.as_str(),
            hand: &self.hand,
            balance: self.balance,
            bet: self.bet,
            stats: self.stats,
            dealer_up,
        }
    }

    /// Asks the strategy for the next action.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's error.
    pub fn decide(&mut self, dealer_up: Option<Card>) -> Result<Action, StrategyError> {
        let view = PlayerView {
            name: &self.name,
            hand: &self.hand,
            balance: self.balance,
            bet: self.bet,
            stats: self.stats,
            dealer_up,
        };
        self.strategy.play(&view)
    }

    /// Asks the strategy for a bet amount, without placing it.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's error.
    pub fn request_bet(&mut self) -> Result<i64, StrategyError> {
        let view = PlayerView {
            name: &self.name,
            hand: &self.hand,
            balance: self.balance,
            bet: self.bet,
            stats: self.stats,
            dealer_up: None,
        };
        self.strategy.bet(&view)
    }

    /// Validates `amount` against the policy and debits it from the balance.
    ///
    /// Returns the amount actually placed.
    ///
    /// # Errors
    ///
    /// With [`BetPolicy::Reject`], returns an error for a negative bet or one
    /// larger than the balance. Under any policy, returns
    /// [`BetError::Overflow`] if the debit does not fit in the balance.
    pub fn place_bet(&mut self, amount: i64, policy: BetPolicy) -> Result<i64, BetError> {
        let placed = match policy {
            BetPolicy::Unchecked => amount,
            BetPolicy::Reject => {
                if amount < 0 {
                    return Err(BetError::Negative { bet: amount });
                }
                if amount > self.balance {
                    return Err(BetError::InsufficientFunds {
                        bet: amount,
                        balance: self.balance,
                    });
                }
                amount
            }
            BetPolicy::Clamp => {
                let clamped = amount.clamp(0, self.balance.max(0));
                if clamped != amount {
                    log::warn!("{}: bet {amount} clamped to {clamped}", self.name);
                }
                clamped
            }
        };

        self.balance = self
            .balance
            .checked_sub(placed)
            .ok_or(BetError::Overflow {
                bet: placed,
                balance: self.balance,
            })?;
        self.bet = placed;
        Ok(placed)
    }

    /// Returns the current bet to the balance.
    pub(crate) const fn refund_bet(&mut self) {
        self.balance = self.balance.saturating_add(self.bet);
        self.bet = 0;
    }

    /// Adds a dealt card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Settles the bet against the dealer's final hand and updates statistics.
    ///
    /// A winning natural pays the bet plus `bet * blackjack_pays` (rounded as
    /// configured); any other win pays twice the bet; a push returns the bet.
    /// Payouts and the new balance saturate at the bounds of `i64`. The bet is
    /// always cleared afterwards.
    pub fn reconcile(&mut self, dealer: &Hand, options: &TableOptions) -> Settlement {
        let outcome = compare(&self.hand, dealer);
        let bet = self.bet;
        let blackjack = outcome == Outcome::Win && self.hand.is_blackjack();

        let payout = match outcome {
            Outcome::Win if blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let bonus = round_amount(
                    (bet as f64) * options.blackjack_pays,
                    options.rounding_blackjack,
                );
                bet.saturating_add(bonus)
            }
            Outcome::Win => bet.saturating_mul(2),
            Outcome::Push => bet,
            Outcome::Lose => 0,
        };

        self.balance = self.balance.saturating_add(payout);
        self.bet = 0;
        self.stats.record(outcome);

        Settlement {
            outcome,
            bet,
            payout,
            blackjack,
        }
    }

    /// Clears the hand for the next round.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    /// Formats the statistics line shown after every round.
    #[must_use]
    pub fn statistics(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has played {} games, won {}, lost {}, win streak {}, lose streak {}, balance: ${}",
            self.name,
            self.stats.games,
            self.stats.wins,
            self.stats.losses,
            self.stats.win_streak,
            self.stats.lose_streak,
            self.balance
        )
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("balance", &self.balance)
            .field("bet", &self.bet)
            .field("stats", &self.stats)
            .field("strategy", &self.strategy)
            .finish()
    }
}
