//! Deck construction, shuffling and drawing.

extern crate alloc;

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered stack of cards. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds `packs` standard packs in suit/rank order without shuffling.
    #[must_use]
    pub fn ordered(packs: u8) -> Self {
        let mut cards = VecDeque::with_capacity(packs as usize * DECK_SIZE);
        for _ in 0..packs {
            push_pack(&mut cards);
        }
        Self { cards }
    }

    /// Builds `packs` standard packs and shuffles them.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(packs: u8, rng: &mut R) -> Self {
        let mut deck = Self::ordered(packs);
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit card order. The first card is drawn first.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Appends a freshly shuffled pack behind the remaining cards.
    pub fn add_pack<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut pack = Self::ordered(1);
        pack.shuffle(rng);
        self.cards.extend(pack.cards);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

fn push_pack(cards: &mut VecDeque<Card>) {
    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push_back(Card::new(suit, rank));
        }
    }
}
