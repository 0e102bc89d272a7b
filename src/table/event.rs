//! Events broadcast by the table while a round is played.

use crate::card::Card;
use crate::error::Seat;
use crate::hand::Hand;

/// Something that happened at the table during a round.
///
/// Events borrow the table's state, so they only live for the duration of
/// [`Observer::notify`].
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The initial deal is done; only the dealer's first card is face up.
    Dealt {
        /// The dealer's face-up card.
        dealer_up: Card,
    },
    /// A seat starts its turn.
    Turn {
        /// Who is acting.
        seat: Seat,
        /// Display name of the seat.
        name: &'a str,
        /// Hand at the start of the turn.
        hand: &'a Hand,
    },
    /// A seat hit and received a card.
    Draw {
        /// Who drew.
        seat: Seat,
        /// Display name of the seat.
        name: &'a str,
        /// The card drawn.
        card: Card,
        /// Hand after the draw.
        hand: &'a Hand,
    },
    /// A seat went over 21 and its turn ended.
    Bust {
        /// Who busted.
        seat: Seat,
        /// Display name of the seat.
        name: &'a str,
        /// The busted hand.
        hand: &'a Hand,
    },
}

/// Receives [`Event`]s as a round unfolds.
pub trait Observer {
    /// Called for every event, in the order the events happen.
    fn notify(&mut self, event: &Event<'_>);
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl Observer for Quiet {
    fn notify(&mut self, _event: &Event<'_>) {}
}
