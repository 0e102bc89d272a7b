//! Error types for table operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors raised by a strategy while making a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy answered with something other than hit or stand.
    #[error("unrecognized action {0:?}, expected 'hit' or 'stand'")]
    UnrecognizedAction(String),
    /// The strategy answered a bet prompt with something that is not a number.
    #[error("unparsable bet {0:?}")]
    UnparsableBet(String),
    /// The input source closed before an answer was given.
    #[error("input closed")]
    InputClosed,
    /// Reading or writing the prompt failed.
    #[error("input error: {0}")]
    Input(String),
}

/// Errors that can occur when validating a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet amount is negative.
    #[error("bet {bet} is negative")]
    Negative {
        /// Requested bet.
        bet: i64,
    },
    /// The bet exceeds the player's balance.
    #[error("bet {bet} exceeds balance {balance}")]
    InsufficientFunds {
        /// Requested bet.
        bet: i64,
        /// Balance at the time of the bet.
        balance: i64,
    },
    /// Debiting the bet would overflow the balance.
    #[error("bet {bet} overflows balance {balance}")]
    Overflow {
        /// Requested bet.
        bet: i64,
        /// Balance at the time of the bet.
        balance: i64,
    },
}

/// Errors that abort a round.
///
/// When a round is aborted every bet is refunded and all hands are cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out of cards and the table does not add packs.
    #[error("the deck ran out of cards")]
    EmptyDeck,
    /// A bet was rejected.
    #[error("seat {seat}: {source}")]
    Bet {
        /// Who placed the bet.
        seat: Seat,
        /// Why the bet was rejected.
        source: BetError,
    },
    /// A strategy failed to decide.
    #[error("seat {seat}: {source}")]
    Strategy {
        /// Who was deciding.
        seat: Seat,
        /// The strategy failure.
        source: StrategyError,
    },
}

/// Identifies who acted at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// A player, by seat index.
    Player(usize),
    /// The dealer.
    Dealer,
}

impl core::fmt::Display for Seat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Player(index) => write!(f, "{index}"),
            Self::Dealer => f.write_str("dealer"),
        }
    }
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

/// Errors that end a session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SessionError {
    /// A round was aborted.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// Writing the report or reading the prompt failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
