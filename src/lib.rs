//! A rules engine for tower solitaire, with optional `no_std` support.
//!
//! The player holds a five-card hand backed by a draw deck and must beat
//! every card of a passive enemy deck, one upcard at a time. Cards are
//! beaten by a same-color card (or combo of cards) whose value, plus a bonus
//! from the player's tower, reaches the upcard's value.
//!
//! The engine is a pair of pure functions: [`legal_actions`] enumerates what
//! the player may do and [`apply`] produces the next [`GameState`]. Illegal
//! moves are rejected by returning the state unchanged.
//!
//! # Example
//!
//! ```
//! use tower_solitaire::{ActionKind, DealOptions, Outcome, Selection, apply, deal, outcome};
//!
//! let state = deal(&DealOptions::default(), 42).unwrap();
//! let next = apply(&state, ActionKind::Draw, &Selection::None).unwrap();
//! assert_eq!(next.player_deck.len(), state.player_deck.len() - 1);
//! assert_eq!(outcome(&next), Outcome::InProgress);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod combo;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use action::{Action, ActionKind, ActionOptions, Actions, CardOptions, Selection};
pub use card::{Card, Color, DECK_SIZE, Suit, TOWER_BASE};
pub use error::{CardError, DealError, SelectionError, StateError, UnknownAction};
pub use game::{
    Game, GameState, MAX_HAND, apply, deal, deal_with_rng, legal_actions, outcome, try_apply,
};
pub use options::DealOptions;
pub use result::Outcome;
