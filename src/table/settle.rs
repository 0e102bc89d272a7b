extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::outcome::{PlayerResult, RoundResult};

use super::Table;

impl Table {
    /// Reconciles every player against the dealer's final hand.
    ///
    /// Must run after all turns, including the dealer's, are over.
    pub(super) fn settle(&mut self, round: u32) -> RoundResult {
        let dealer = self.dealer.hand();
        let dealer_value = dealer.value();
        let dealer_bust = dealer.is_bust();

        let mut players = Vec::with_capacity(self.players.len());
        for (seat, player) in self.players.iter_mut().enumerate() {
            let settlement = player.reconcile(dealer, &self.options);
            log::debug!(
                "{} {}: {} {} (net {})",
                player.name(),
                settlement.outcome,
                player.hand().value(),
                player.hand(),
                settlement.net()
            );

            players.push(PlayerResult {
                seat,
                name: player.name().to_string(),
                cards: player.hand().cards().to_vec(),
                value: player.hand().value(),
                settlement,
                balance: player.balance(),
            });
        }

        log::info!(
            "round {round} over: dealer {dealer_value}{}",
            if dealer_bust { " (bust)" } else { "" }
        );
        for player in &self.players {
            log::info!("{player}");
        }

        RoundResult {
            round,
            dealer_cards: dealer.cards().to_vec(),
            dealer_value,
            dealer_bust,
            players,
        }
    }
}
