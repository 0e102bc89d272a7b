//! Turn state types.

/// State of a single turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the strategy to choose.
    AwaitingAction,
    /// A card is about to be drawn.
    Hit,
    /// The hand was kept. Terminal.
    Stand,
    /// The hand went over 21. Terminal.
    Bust,
}

impl TurnState {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Stand | Self::Bust)
    }
}
