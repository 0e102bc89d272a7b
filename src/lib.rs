//! A blackjack table simulator with optional `no_std` support.
//!
//! The crate provides a [`Table`] that runs complete rounds between a dealer
//! and any number of seated [`Player`]s: betting, dealing, the hit/stand turn
//! loop, comparison against the dealer, and bet reconciliation. Every seat is
//! driven by a [`Strategy`], so automated and human players can share a table.
//!
//! # Example
//!
//! ```
//! use blackjack_sim::{Player, Scripted, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 7);
//! table.seat(Player::new("Bruce", 100, Scripted::default()));
//!
//! for _ in 0..10 {
//!     table.play_round().unwrap();
//! }
//! assert_eq!(table.rounds_played(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod player;
#[cfg(feature = "std")]
pub mod session;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::SessionError;
pub use error::{BetError, DeckError, RoundError, Seat, StrategyError};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use options::{BetPolicy, Exhaustion, RoundingMode, TableOptions};
pub use outcome::{Outcome, PlayerResult, RoundResult, Settlement, compare};
pub use player::{Player, PlayerView, Statistics};
#[cfg(feature = "std")]
pub use session::Session;
#[cfg(feature = "std")]
pub use strategy::Interactive;
pub use strategy::{Action, Dealer, Scripted, Strategy};
pub use table::{Event, Observer, Quiet, Table, TurnState};
