//! Hand comparison and round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::{BLACKJACK, Hand};

/// Result of a player's hand against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts or dealer has the higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
        })
    }
}

/// Compares a player's hand to the dealer's.
///
/// A busted player loses even when the dealer also busts.
#[must_use]
pub fn compare(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player_value > BLACKJACK {
        return Outcome::Lose;
    }
    if dealer_value > BLACKJACK {
        return Outcome::Win;
    }
    match player_value.cmp(&dealer_value) {
        core::cmp::Ordering::Greater => Outcome::Win,
        core::cmp::Ordering::Equal => Outcome::Push,
        core::cmp::Ordering::Less => Outcome::Lose,
    }
}

/// What reconciliation did to a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The bet that was settled.
    pub bet: i64,
    /// Amount credited back to the balance (bet included).
    pub payout: i64,
    /// Whether the win was a natural blackjack.
    pub blackjack: bool,
}

impl Settlement {
    /// Net result of the round (positive = profit).
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.payout - self.bet
    }
}

/// Result for a single player after a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index of the player.
    pub seat: usize,
    /// The player's name.
    pub name: String,
    /// The player's final cards.
    pub cards: Vec<Card>,
    /// The player's final hand value.
    pub value: u8,
    /// How the bet was settled.
    pub settlement: Settlement,
    /// Balance after settlement.
    pub balance: i64,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
}
