use serde::Serialize;
use tower_solitaire::{
    ActionKind, ActionOptions, Card, CardOptions, DealOptions, Game, GameState, Outcome, Selection,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::new(DealOptions::default(), u64::from(seed)).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&self, seed: u32) -> Result<(), JsValue> {
        self.game.reset(u64::from(seed)).map_err(js_err)
    }

    pub fn seed(&self) -> u32 {
        self.game.seed() as u32
    }

    /// Plays an action. `selection` uses the UI encoding: `""`, `"9S"`, or
    /// `"2H+3H"`. Returns `false` if the move was not legal.
    pub fn perform(&self, action: &str, selection: &str) -> Result<bool, JsValue> {
        let kind: ActionKind = action.parse().map_err(js_err)?;
        let selection: Selection = selection.parse().map_err(js_err)?;
        self.game.perform(kind, &selection).map_err(js_err)
    }

    /// Plays an action with the cards currently highlighted in the UI.
    pub fn perform_cards(&self, action: &str, cards: Vec<String>) -> Result<bool, JsValue> {
        let kind: ActionKind = action.parse().map_err(js_err)?;
        let cards = cards
            .iter()
            .map(|token| token.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(js_err)?;
        self.game
            .perform(kind, &Selection::from_cards(cards))
            .map_err(js_err)
    }

    pub fn actions(&self) -> Result<JsValue, JsValue> {
        let actions: Vec<JsAction> = self.game.actions().iter().map(JsAction::from).collect();
        to_js_value(&actions)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let snapshot = Snapshot::new(&state, self.game.outcome());
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    player_hand: Vec<String>,
    player_deck_count: u32,
    enemy_card: Option<String>,
    enemy_deck_count: u32,
    tower: Vec<String>,
    bonus: u8,
    discard_count: u32,
    outcome: &'static str,
}

impl Snapshot {
    fn new(state: &GameState, outcome: Outcome) -> Self {
        Self {
            player_hand: tokens(&state.player_hand),
            player_deck_count: state.player_deck.len() as u32,
            enemy_card: state.enemy_card.map(|card| card.to_string()),
            enemy_deck_count: state.enemy_deck.len() as u32,
            tower: tokens(&state.tower),
            bonus: state.bonus(),
            discard_count: state.discard.len() as u32,
            outcome: outcome_to_str(outcome),
        }
    }
}

#[derive(Serialize)]
struct JsAction {
    #[serde(rename = "type")]
    kind: &'static str,
    opts: Option<JsOptions>,
}

impl From<tower_solitaire::Action> for JsAction {
    fn from(action: tower_solitaire::Action) -> Self {
        let opts = match &action.options {
            ActionOptions::None => None,
            ActionOptions::Cards(options) => Some(JsOptions::from(options)),
        };

        Self {
            kind: action.kind.name(),
            opts,
        }
    }
}

#[derive(Serialize)]
struct JsOptions {
    singles: Vec<String>,
    /// Each combo joined as `"2H+3H"`.
    combos: Vec<String>,
}

impl From<&CardOptions> for JsOptions {
    fn from(options: &CardOptions) -> Self {
        Self {
            singles: tokens(&options.singles),
            combos: options
                .combos
                .iter()
                .map(|combo| Selection::Combo(combo.clone()).to_string())
                .collect(),
        }
    }
}

fn tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(ToString::to_string).collect()
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "InProgress",
        Outcome::Won => "Won",
        Outcome::Lost => "Lost",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
