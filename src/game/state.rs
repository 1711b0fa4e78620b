//! Game state types.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::StateError;

/// Maximum number of cards in the player's hand.
pub const MAX_HAND: usize = 5;

/// A snapshot of a game.
///
/// The engine never mutates a state it was given: every action produces a
/// new value. Decks are stacks whose *last* element is the top card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    /// Cards left to draw, top card last.
    pub player_deck: Vec<Card>,
    /// Cards in the player's hand.
    pub player_hand: Vec<Card>,
    /// Enemy cards still to be revealed, next upcard last.
    pub enemy_deck: Vec<Card>,
    /// The enemy's face-up card, or `None` once the enemy is beaten.
    pub enemy_card: Option<Card>,
    /// The tower, bottom card first.
    pub tower: Vec<Card>,
    /// Cards that have left play, oldest first.
    pub discard: Vec<Card>,
}

impl GameState {
    /// Returns the bonus the tower grants to kills and draws.
    ///
    /// ```
    /// use tower_solitaire::GameState;
    ///
    /// let mut state = GameState::default();
    /// state.tower = vec!["AS".parse().unwrap(), "4D".parse().unwrap(), "9C".parse().unwrap()];
    /// assert_eq!(state.bonus(), 1);
    /// ```
    #[must_use]
    pub fn bonus(&self) -> u8 {
        (self.tower.len() / 2) as u8
    }

    /// Returns the top card of the tower.
    #[must_use]
    pub fn top_of_tower(&self) -> Option<Card> {
        self.tower.last().copied()
    }

    /// Iterates over every card still tracked by the state, in any zone.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.player_deck
            .iter()
            .chain(&self.player_hand)
            .chain(&self.enemy_deck)
            .chain(self.enemy_card.as_ref())
            .chain(&self.tower)
            .chain(&self.discard)
            .copied()
    }

    /// Checks that no card is tracked twice and that the hand is within its
    /// size limit.
    ///
    /// Unlike [`GameState::validate`], cards absent from every zone are
    /// allowed, so hand-built positions pass.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_integrity(&self) -> Result<(), StateError> {
        self.mark_cards().map(|_| ())
    }

    /// Checks that every card of the deck is in exactly one zone and that
    /// the hand is within its size limit.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), StateError> {
        let seen = self.mark_cards()?;

        match full_deck().find(|&card| deck_index(card).is_some_and(|i| !seen[i])) {
            Some(missing) => Err(StateError::MissingCard(missing)),
            None => Ok(()),
        }
    }

    fn mark_cards(&self) -> Result<[bool; DECK_SIZE], StateError> {
        if self.player_hand.len() > MAX_HAND {
            return Err(StateError::HandOverflow(self.player_hand.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in self.all_cards() {
            let slot = deck_index(card).ok_or(StateError::UnknownCard(card))?;
            if seen[slot] {
                return Err(StateError::DuplicateCard(card));
            }
            seen[slot] = true;
        }
        Ok(seen)
    }

    /// Removes a card from the hand, then draws a replacement if the player
    /// deck still has cards.
    pub(crate) fn spend_from_hand(&mut self, card: Card) -> Result<(), StateError> {
        let index = self
            .player_hand
            .iter()
            .position(|&c| c == card)
            .ok_or(StateError::CardNotInHand(card))?;
        self.player_hand.remove(index);

        if let Some(drawn) = self.player_deck.pop() {
            self.player_hand.push(drawn);
        }

        Ok(())
    }

    /// Discards the upcard and reveals the next enemy card, if any.
    pub(crate) fn replace_enemy_card(&mut self) {
        if let Some(beaten) = self.enemy_card.take() {
            self.discard.push(beaten);
        }
        self.enemy_card = self.enemy_deck.pop();
    }

    /// Moves the top of the tower to the discard pile.
    pub(crate) fn pop_tower(&mut self) {
        if let Some(card) = self.tower.pop() {
            self.discard.push(card);
        }
    }
}

const fn deck_index(card: Card) -> Option<usize> {
    if card.rank < 1 || card.rank > 13 {
        return None;
    }
    Some(card.suit as usize * 13 + (card.rank as usize - 1))
}
