//! Round controller and table state.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{RoundError, Seat};
use crate::options::{Exhaustion, TableOptions};
use crate::outcome::RoundResult;
use crate::player::Player;
use crate::strategy::Dealer;

mod bet;
pub mod event;
mod settle;
pub mod state;
mod turn;

pub use event::{Event, Observer, Quiet};
pub use state::TurnState;

/// A blackjack table: the seated players, the dealer, and the round loop.
///
/// Each round draws from its own freshly shuffled deck. The table owns the
/// random number generator, so a seed fully determines every shuffle.
///
/// # Example
///
/// ```
/// use blackjack_sim::{Player, Scripted, Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42);
/// table.seat(Player::new("Bruce", 100, Scripted::default()));
///
/// let result = table.play_round().unwrap();
/// assert_eq!(result.round, 1);
/// assert_eq!(table.player(0).unwrap().stats().games, 1);
/// ```
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Seated players, in turn order.
    players: Vec<Player>,
    /// The dealer, who always acts last.
    dealer: Player,
    /// Rounds completed so far.
    rounds_played: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given seed. The dealer is seated automatically.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let dealer = Player::new("Dealer", 0, Dealer::new(options.dealer_stands_on));
        Self {
            options,
            players: Vec::new(),
            dealer,
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a player after those already at the table.
    ///
    /// Returns the seat index.
    pub fn seat(&mut self, player: Player) -> usize {
        log::debug!("{} sits down with ${}", player.name(), player.balance());
        self.players.push(player);
        self.players.len() - 1
    }

    /// Returns the seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of rounds completed.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Plays one round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// See [`Table::play_round_with`].
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.play_round_observed(&mut Quiet)
    }

    /// Plays one round with a freshly shuffled deck, reporting every
    /// [`Event`] to `observer`.
    ///
    /// # Errors
    ///
    /// See [`Table::play_round_with`].
    pub fn play_round_observed(
        &mut self,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        let deck = Deck::new(self.options.decks, &mut self.rng);
        self.play_round_with_observed(deck, observer)
    }

    /// Plays one round drawing from `deck`.
    ///
    /// The round runs to completion: bets, the initial deal, every player's
    /// turn in seat order, the dealer's turn, then settlement. Hands are
    /// cleared before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy fails, a bet is rejected, or the deck
    /// runs dry under [`Exhaustion::Fail`]. The round is then abandoned: bets
    /// are refunded, hands cleared, and no statistics change.
    pub fn play_round_with(&mut self, deck: Deck) -> Result<RoundResult, RoundError> {
        self.play_round_with_observed(deck, &mut Quiet)
    }

    /// Plays one round drawing from `deck`, reporting every [`Event`] to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// See [`Table::play_round_with`].
    pub fn play_round_with_observed(
        &mut self,
        mut deck: Deck,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        let round = self.rounds_played + 1;
        log::debug!("round {round}: {} cards in the deck", deck.len());

        match self.run_round(round, &mut deck, observer) {
            Ok(result) => {
                self.rounds_played = round;
                self.clear_round();
                Ok(result)
            }
            Err(err) => {
                log::warn!("round {round} abandoned: {err}");
                self.abandon_round();
                Err(err)
            }
        }
    }

    fn run_round(
        &mut self,
        round: u32,
        deck: &mut Deck,
        observer: &mut dyn Observer,
    ) -> Result<RoundResult, RoundError> {
        self.take_bets()?;
        self.deal(deck)?;

        let dealer_up = self.dealer.hand().up_card();
        if let Some(up) = dealer_up {
            observer.notify(&Event::Dealt { dealer_up: up });
        }
        let mut shoe = Shoe {
            deck,
            rng: &mut self.rng,
            exhaustion: self.options.exhaustion,
        };

        for (index, player) in self.players.iter_mut().enumerate() {
            turn::play_turn(player, Seat::Player(index), dealer_up, &mut shoe, observer)?;
        }
        turn::play_turn(&mut self.dealer, Seat::Dealer, dealer_up, &mut shoe, observer)?;

        Ok(self.settle(round))
    }

    /// Clears all hands (called at the end of a round).
    fn clear_round(&mut self) {
        for player in &mut self.players {
            player.reset_hand();
        }
        self.dealer.reset_hand();
    }

    fn abandon_round(&mut self) {
        for player in &mut self.players {
            player.refund_bet();
        }
        self.dealer.refund_bet();
        self.clear_round();
    }
}

/// The round's deck together with the policy for running out of cards.
pub(crate) struct Shoe<'a> {
    deck: &'a mut Deck,
    rng: &'a mut ChaCha8Rng,
    exhaustion: Exhaustion,
}

impl Shoe<'_> {
    /// Draws a card, adding a pack first if the deck is dry and the policy allows it.
    fn draw(&mut self) -> Result<Card, RoundError> {
        if self.deck.is_empty() && self.exhaustion == Exhaustion::AddPack {
            log::info!("deck exhausted, adding a fresh pack");
            self.deck.add_pack(&mut *self.rng);
        }
        Ok(self.deck.draw()?)
    }
}
