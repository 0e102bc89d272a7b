use crate::deck::Deck;
use crate::error::{RoundError, Seat};
use crate::options::{BetPolicy, Exhaustion};
use crate::player::Player;

use super::{Shoe, Table};

fn place_bet(player: &mut Player, seat: Seat, policy: BetPolicy) -> Result<(), RoundError> {
    let requested = player
        .request_bet()
        .map_err(|source| RoundError::Strategy { seat, source })?;
    let placed = player
        .place_bet(requested, policy)
        .map_err(|source| RoundError::Bet { seat, source })?;
    log::debug!("{} bets {placed}, balance {}", player.name(), player.balance());
    Ok(())
}

impl Table {
    /// Collects and debits a bet from every seat, dealer last.
    pub(super) fn take_bets(&mut self) -> Result<(), RoundError> {
        let policy = self.options.bet_policy;
        for (index, player) in self.players.iter_mut().enumerate() {
            place_bet(player, Seat::Player(index), policy)?;
        }
        place_bet(&mut self.dealer, Seat::Dealer, policy)
    }

    /// Deals two cards to every seat: one pass over the players then the
    /// dealer, twice.
    pub(super) fn deal(&mut self, deck: &mut Deck) -> Result<(), RoundError> {
        let cards_needed = (self.players.len() + 1) * 2;
        if self.options.exhaustion == Exhaustion::Fail && deck.len() < cards_needed {
            return Err(RoundError::EmptyDeck);
        }

        let mut shoe = Shoe {
            deck,
            rng: &mut self.rng,
            exhaustion: self.options.exhaustion,
        };

        for _ in 0..2 {
            for player in &mut self.players {
                player.receive(shoe.draw()?);
            }
            self.dealer.receive(shoe.draw()?);
        }

        if let Some(up) = self.dealer.hand().up_card() {
            log::debug!("dealer shows {up}");
        }
        Ok(())
    }
}
