//! Rules engine and game host.
//!
//! The engine itself is a set of pure functions over [`GameState`]:
//! [`legal_actions`] lists what the player may do, [`apply`] plays one of
//! those actions, and [`deal`] sets up a new game. [`Game`] wraps a single
//! state behind a lock for hosts that drive it from several event handlers.

use crate::action::{ActionKind, Actions, Selection};
use crate::error::{DealError, StateError};
use crate::options::DealOptions;
use crate::result::Outcome;
use crate::sync::Mutex;

mod enumerate;
mod execute;
mod setup;
pub mod state;

pub use enumerate::legal_actions;
pub use execute::{apply, try_apply};
pub use setup::{deal, deal_with_rng};
pub use state::{GameState, MAX_HAND};

/// Returns where the game in `state` stands.
///
/// ```
/// use tower_solitaire::{GameState, Outcome, outcome};
///
/// assert_eq!(outcome(&GameState::default()), Outcome::Won);
/// ```
#[must_use]
pub fn outcome(state: &GameState) -> Outcome {
    if state.enemy_card.is_none() {
        Outcome::Won
    } else if legal_actions(state).is_empty() {
        Outcome::Lost
    } else {
        Outcome::InProgress
    }
}

/// A game in progress.
///
/// Every update goes through [`Game::perform`], which holds the lock for the
/// whole read-apply-write cycle. The `state` lock is always taken before the
/// seed lock, so a state and its seed are read and replaced together.
pub struct Game {
    /// Deal options used for this game and for [`Game::reset`].
    pub options: DealOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Seed the current game was dealt from.
    seed: Mutex<u64>,
}

impl Game {
    /// Deals a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be dealt from one deck.
    ///
    /// # Example
    ///
    /// ```
    /// use tower_solitaire::{DealOptions, Game};
    ///
    /// let game = Game::new(DealOptions::default(), 42).unwrap();
    /// assert_eq!(game.state().player_hand.len(), 5);
    /// ```
    pub fn new(options: DealOptions, seed: u64) -> Result<Self, DealError> {
        let state = deal(&options, seed)?;

        Ok(Self {
            options,
            state: Mutex::new(state),
            seed: Mutex::new(seed),
        })
    }

    /// Deals a fresh game with a new seed, keeping the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be dealt from one deck.
    pub fn reset(&self, seed: u64) -> Result<(), DealError> {
        let dealt = deal(&self.options, seed)?;
        let mut state = self.state.lock();
        *state = dealt;
        *self.seed.lock() = seed;
        Ok(())
    }

    /// Returns the seed the current game was dealt from.
    pub fn seed(&self) -> u64 {
        self.snapshot().0
    }

    /// Returns the seed and a copy of the state it was dealt into, read
    /// under one lock.
    pub fn snapshot(&self) -> (u64, GameState) {
        let state = self.state.lock();
        let seed = *self.seed.lock();
        (seed, state.clone())
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the legal actions for the current state.
    pub fn actions(&self) -> Actions {
        self.state.with(|state| legal_actions(state))
    }

    /// Returns where the current game stands.
    pub fn outcome(&self) -> Outcome {
        self.state.with(|state| outcome(state))
    }

    /// Plays an action.
    ///
    /// Returns `false` if the action or selection was not legal, in which
    /// case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the stored state is corrupt. The state is
    /// left as it was.
    pub fn perform(&self, kind: ActionKind, selection: &Selection) -> Result<bool, StateError> {
        self.state.with(|state| {
            let Some(next) = try_apply(state, kind, selection)? else {
                return Ok(false);
            };
            *state = next;
            Ok(true)
        })
    }
}
