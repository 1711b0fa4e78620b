use crate::action::{ActionKind, Selection};
use crate::error::StateError;

use super::{GameState, legal_actions};

/// Applies an action and returns the resulting state.
///
/// The selection is checked against [`legal_actions`] first. An illegal
/// action or selection is rejected by returning an unchanged copy of
/// `state`, so this is safe to drive straight from UI input.
///
/// # Errors
///
/// Returns a [`StateError`] if `state` tracks a card twice, holds an
/// unknown card or has more than [`MAX_HAND`](super::MAX_HAND) cards in
/// hand (see [`GameState::check_integrity`]).
///
/// ```
/// use tower_solitaire::{ActionKind, DealOptions, Selection, apply, deal};
///
/// let state = deal(&DealOptions::default(), 3).unwrap();
/// let next = apply(&state, ActionKind::Nuke, &Selection::None).unwrap();
/// assert!(next.tower.is_empty());
/// ```
pub fn apply(
    state: &GameState,
    kind: ActionKind,
    selection: &Selection,
) -> Result<GameState, StateError> {
    Ok(try_apply(state, kind, selection)?.unwrap_or_else(|| state.clone()))
}

/// Applies an action, returning `None` if it was rejected.
///
/// # Errors
///
/// Returns a [`StateError`] if `state` itself is corrupt, as for [`apply`].
pub fn try_apply(
    state: &GameState,
    kind: ActionKind,
    selection: &Selection,
) -> Result<Option<GameState>, StateError> {
    state.check_integrity()?;

    if !legal_actions(state).allows(kind, selection) {
        return Ok(None);
    }

    let mut next = state.clone();

    match (kind, selection) {
        (ActionKind::Build, &Selection::Single(card)) => {
            next.spend_from_hand(card)?;
            next.tower.push(card);
        }
        (ActionKind::Swap, &Selection::Single(card)) => {
            next.spend_from_hand(card)?;
            next.enemy_deck.insert(0, card);
        }
        (ActionKind::Kill, &Selection::Single(card)) => {
            if next.top_of_tower() == Some(card) {
                next.pop_tower();
            } else {
                next.spend_from_hand(card)?;
                next.discard.push(card);
            }
            next.replace_enemy_card();
        }
        (ActionKind::Kill, Selection::Combo(cards)) => {
            for &card in cards {
                next.spend_from_hand(card)?;
                next.discard.push(card);
            }
            next.replace_enemy_card();
        }
        (ActionKind::Draw, _) => {
            let (Some(trial), Some(enemy)) = (next.player_deck.pop(), next.enemy_card) else {
                return Ok(None);
            };
            next.discard.push(trial);

            if trial.color() == enemy.color() && trial.value() + next.bonus() >= enemy.value() {
                next.replace_enemy_card();
            } else if next.tower.len() > 1 {
                next.pop_tower();
            }
        }
        (ActionKind::Nuke, _) => {
            next.discard.append(&mut next.tower);
            next.replace_enemy_card();
        }
        _ => return Ok(None),
    }

    Ok(Some(next))
}
