use alloc::vec::Vec;

use crate::action::{Actions, CardOptions};
use crate::card::Card;
use crate::combo::combinations;

use super::GameState;

/// Returns every action the player may take in `state`.
///
/// Nothing is legal once the enemy has no upcard left.
///
/// ```
/// use tower_solitaire::{ActionKind, DealOptions, legal_actions};
///
/// let state = tower_solitaire::deal(&DealOptions::default(), 7).unwrap();
/// let actions = legal_actions(&state);
/// assert!(actions.contains(ActionKind::Draw));
/// assert!(actions.contains(ActionKind::Nuke));
/// ```
#[must_use]
pub fn legal_actions(state: &GameState) -> Actions {
    let Some(enemy) = state.enemy_card else {
        return Actions::default();
    };

    let can_draw = !state.player_deck.is_empty();

    Actions {
        draw: can_draw,
        build: build_options(state),
        kill: kill_options(state, enemy),
        nuke: !state.tower.is_empty(),
        swap: can_draw.then(|| CardOptions::singles(state.player_hand.clone())),
    }
}

fn build_options(state: &GameState) -> Option<CardOptions> {
    let top = state.top_of_tower()?;
    let buildable: Vec<Card> = state
        .player_hand
        .iter()
        .copied()
        .filter(|card| card.value() > top.value())
        .collect();

    (!buildable.is_empty()).then(|| CardOptions::singles(buildable))
}

fn kill_options(state: &GameState, enemy: Card) -> Option<CardOptions> {
    let bonus = state.bonus();
    let kills = |value: u8| value + bonus >= enemy.value();

    let (mut singles, short): (Vec<Card>, Vec<Card>) = state
        .player_hand
        .iter()
        .copied()
        .filter(|card| card.color() == enemy.color())
        .partition(|card| kills(card.value()));

    // The tower's top only counts while something is left underneath it,
    // and it gets no help from the bonus.
    if state.tower.len() > 1 {
        singles.extend(
            state
                .top_of_tower()
                .filter(|top| top.color() == enemy.color() && top.value() >= enemy.value()),
        );
    }

    let combos: Vec<Vec<Card>> = combinations(&short)
        .into_iter()
        .filter(|combo| kills(combo.iter().map(Card::value).sum()))
        .collect();

    let options = CardOptions { singles, combos };
    (!options.is_empty()).then_some(options)
}
