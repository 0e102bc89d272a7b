use crate::error::StrategyError;
use crate::player::PlayerView;

use super::{Action, Strategy};

/// The house rule: hit below a fixed value, stand otherwise. Never bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealer {
    stands_on: u8,
}

impl Dealer {
    /// Creates a dealer that stands once the hand is worth `stands_on` or more.
    #[must_use]
    pub const fn new(stands_on: u8) -> Self {
        Self { stands_on }
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(17)
    }
}

impl Strategy for Dealer {
    fn play(&mut self, view: &PlayerView<'_>) -> Result<Action, StrategyError> {
        if view.hand.value() < self.stands_on {
            Ok(Action::Hit)
        } else {
            Ok(Action::Stand)
        }
    }

    fn bet(&mut self, _view: &PlayerView<'_>) -> Result<i64, StrategyError> {
        Ok(0)
    }
}
