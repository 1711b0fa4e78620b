//! Deal configuration options.

/// How the shuffled deck is split when a game is dealt.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tower_solitaire::DealOptions;
///
/// let options = DealOptions::default()
///     .with_player_deck(20)
///     .with_hand_size(4);
/// assert_eq!(options.player_deck, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Number of cards in the player's draw deck.
    pub player_deck: u8,
    /// Number of cards in the starting hand (at most 5).
    pub hand_size: u8,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            player_deck: 25,
            hand_size: 5,
        }
    }
}

impl DealOptions {
    /// Sets the size of the player's draw deck.
    ///
    /// # Example
    ///
    /// ```
    /// use tower_solitaire::DealOptions;
    ///
    /// let options = DealOptions::default().with_player_deck(30);
    /// assert_eq!(options.player_deck, 30);
    /// ```
    #[must_use]
    pub const fn with_player_deck(mut self, cards: u8) -> Self {
        self.player_deck = cards;
        self
    }

    /// Sets the size of the starting hand.
    ///
    /// # Example
    ///
    /// ```
    /// use tower_solitaire::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, cards: u8) -> Self {
        self.hand_size = cards;
        self
    }
}
