use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, TOWER_BASE, full_deck};
use crate::error::DealError;
use crate::options::DealOptions;

use super::state::{GameState, MAX_HAND};

/// Shuffles and deals a new game from a seed.
///
/// The same seed and options always produce the same game.
///
/// # Errors
///
/// Returns an error if the options ask for more cards than the deck holds.
///
/// ```
/// use tower_solitaire::{DealOptions, deal};
///
/// let state = deal(&DealOptions::default(), 42).unwrap();
/// assert_eq!(state.player_deck.len(), 25);
/// assert_eq!(state.player_hand.len(), 5);
/// assert_eq!(state.enemy_deck.len(), 20);
/// assert_eq!(state, deal(&DealOptions::default(), 42).unwrap());
/// ```
pub fn deal(options: &DealOptions, seed: u64) -> Result<GameState, DealError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_with_rng(options, &mut rng)
}

/// Shuffles and deals a new game with the given random number generator.
///
/// # Errors
///
/// Returns an error if the options ask for more cards than the deck holds.
pub fn deal_with_rng<R: Rng + ?Sized>(
    options: &DealOptions,
    rng: &mut R,
) -> Result<GameState, DealError> {
    let hand_size = usize::from(options.hand_size);
    if hand_size > MAX_HAND {
        return Err(DealError::HandTooLarge(options.hand_size));
    }

    let mut cards: Vec<Card> = full_deck().filter(|&card| card != TOWER_BASE).collect();
    let player_deck_size = usize::from(options.player_deck);
    // At least one card has to be left over for the enemy.
    if player_deck_size + hand_size >= cards.len() {
        return Err(DealError::NotEnoughCards);
    }

    cards.shuffle(rng);

    let mut rest = cards.split_off(player_deck_size);
    let mut enemy_deck = rest.split_off(hand_size);
    let enemy_card = enemy_deck.remove(0);

    Ok(GameState {
        player_deck: cards,
        player_hand: rest,
        enemy_deck,
        enemy_card: Some(enemy_card),
        tower: alloc::vec![TOWER_BASE],
        discard: Vec::new(),
    })
}
