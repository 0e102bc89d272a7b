use crate::error::StrategyError;
use crate::player::PlayerView;

use super::{Action, Strategy};

/// A simple automated player.
///
/// Hits below a threshold and bets with a cyclic martingale: the base bet is
/// doubled for every consecutive loss, and every `max_doublings` losses the
/// progression starts over from the base bet. With the defaults a losing run
/// bets 5, 10, 20, 5, 10, 20, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scripted {
    hit_below: u8,
    base_bet: i64,
    max_doublings: u32,
}

impl Scripted {
    /// Creates a scripted strategy.
    #[must_use]
    pub const fn new(hit_below: u8, base_bet: i64, max_doublings: u32) -> Self {
        Self {
            hit_below,
            base_bet,
            max_doublings,
        }
    }
}

impl Default for Scripted {
    fn default() -> Self {
        Self::new(15, 5, 3)
    }
}

impl Strategy for Scripted {
    fn play(&mut self, view: &PlayerView<'_>) -> Result<Action, StrategyError> {
        if view.hand.value() < self.hit_below {
            Ok(Action::Hit)
        } else {
            Ok(Action::Stand)
        }
    }

    fn bet(&mut self, view: &PlayerView<'_>) -> Result<i64, StrategyError> {
        let doublings = view
            .stats
            .lose_streak
            .checked_rem(self.max_doublings)
            .unwrap_or(0);
        Ok(self.base_bet.saturating_mul(1_i64 << doublings.min(62)))
    }
}
