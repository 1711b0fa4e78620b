//! Error types for engine operations.
//!
//! Illegal moves are not errors: the executor rejects them by leaving the
//! state unchanged. These types cover malformed input and broken invariants,
//! which a caller can only log and recover from by dealing a new game.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while reading a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not exactly two characters long.
    #[error("card token must be two characters, got {0}")]
    InvalidLength(usize),
    /// The rank character is not one of `2-9`, `T`, `J`, `Q`, `K`, `A`.
    #[error("invalid card rank {0:?}")]
    InvalidRank(char),
    /// The suit character is not one of `C`, `D`, `H`, `S`.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
}

/// Errors signalling a corrupt game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// Tried to remove a card that is not in the player's hand.
    #[error("card {0} is not in the player's hand")]
    CardNotInHand(Card),
    /// A card appears in more than one place.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A card is missing from every zone.
    #[error("card {0} is missing from the game")]
    MissingCard(Card),
    /// A card outside the standard deck was found.
    #[error("card {0} is not part of a standard deck")]
    UnknownCard(Card),
    /// The player's hand holds more cards than allowed.
    #[error("hand holds {0} cards")]
    HandOverflow(usize),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Requested hand is larger than the maximum hand size.
    #[error("hand size {0} exceeds the maximum")]
    HandTooLarge(u8),
    /// Not enough cards for the player deck, hand and an enemy upcard.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when parsing a card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// One of the selected tokens is malformed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The same card was selected twice.
    #[error("card {0} selected more than once")]
    DuplicateCard(Card),
}

/// Error returned when an action name is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action")]
pub struct UnknownAction;
