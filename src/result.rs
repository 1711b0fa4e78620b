//! Game outcome.

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player still has legal moves.
    InProgress,
    /// Every enemy card has been beaten.
    Won,
    /// An upcard remains but no action is legal.
    Lost,
}

impl Outcome {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
