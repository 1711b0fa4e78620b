//! Action kinds, enumerated options, and player selections.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{SelectionError, UnknownAction};

/// The five things a player can do on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Flip the top of the player deck against the upcard.
    Draw,
    /// Put a hand card on the tower.
    Build,
    /// Beat the upcard with one card or a same-color combo.
    Kill,
    /// Clear the tower to discard the upcard.
    Nuke,
    /// Send a hand card to the bottom of the enemy deck.
    Swap,
}

impl ActionKind {
    /// All action kinds.
    pub const ALL: [Self; 5] = [Self::Draw, Self::Build, Self::Kill, Self::Nuke, Self::Swap];

    /// Returns the upper-case name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Draw => "DRAW",
            Self::Build => "BUILD",
            Self::Kill => "KILL",
            Self::Nuke => "NUKE",
            Self::Swap => "SWAP",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or(UnknownAction)
    }
}

/// Cards that may be used for an action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardOptions {
    /// Cards playable on their own.
    pub singles: Vec<Card>,
    /// Multi-card selections playable together.
    pub combos: Vec<Vec<Card>>,
}

impl CardOptions {
    /// Creates options holding only single cards.
    #[must_use]
    pub const fn singles(singles: Vec<Card>) -> Self {
        Self {
            singles,
            combos: Vec::new(),
        }
    }

    /// Returns whether the selection is one of these options.
    ///
    /// Combos match regardless of the order the cards were selected in.
    #[must_use]
    pub fn allows(&self, selection: &Selection) -> bool {
        match selection {
            Selection::None => false,
            Selection::Single(card) => self.singles.contains(card),
            Selection::Combo(cards) => self.combos.iter().any(|combo| {
                combo.len() == cards.len() && combo.iter().all(|card| cards.contains(card))
            }),
        }
    }

    /// Returns whether there is nothing to choose from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.combos.is_empty()
    }
}

/// The parameter an action takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOptions {
    /// The action takes no cards.
    None,
    /// The action needs one of these cards or combos.
    Cards(CardOptions),
}

impl ActionOptions {
    /// Returns the card options, if the action takes cards.
    #[must_use]
    pub const fn cards(&self) -> Option<&CardOptions> {
        match self {
            Self::None => None,
            Self::Cards(options) => Some(options),
        }
    }
}

/// A legal action together with what it can be played with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The action kind.
    pub kind: ActionKind,
    /// The cards the action may use.
    pub options: ActionOptions,
}

/// The legal actions for a state, one slot per [`ActionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Actions {
    /// Whether DRAW is legal.
    pub draw: bool,
    /// BUILD options, if legal.
    pub build: Option<CardOptions>,
    /// KILL options, if legal.
    pub kill: Option<CardOptions>,
    /// Whether NUKE is legal.
    pub nuke: bool,
    /// SWAP options, if legal.
    pub swap: Option<CardOptions>,
}

impl Actions {
    /// Returns the action of the given kind, if legal.
    #[must_use]
    pub fn get(&self, kind: ActionKind) -> Option<Action> {
        let options = match kind {
            ActionKind::Draw => self.draw.then_some(ActionOptions::None),
            ActionKind::Nuke => self.nuke.then_some(ActionOptions::None),
            ActionKind::Build => self.build.clone().map(ActionOptions::Cards),
            ActionKind::Kill => self.kill.clone().map(ActionOptions::Cards),
            ActionKind::Swap => self.swap.clone().map(ActionOptions::Cards),
        }?;

        Some(Action { kind, options })
    }

    /// Returns whether an action of the given kind is legal.
    #[must_use]
    pub const fn contains(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Draw => self.draw,
            ActionKind::Nuke => self.nuke,
            ActionKind::Build => self.build.is_some(),
            ActionKind::Kill => self.kill.is_some(),
            ActionKind::Swap => self.swap.is_some(),
        }
    }

    /// Returns whether the selection authorizes the action.
    ///
    /// Parameterless actions accept any selection.
    #[must_use]
    pub fn allows(&self, kind: ActionKind, selection: &Selection) -> bool {
        match kind {
            ActionKind::Draw => self.draw,
            ActionKind::Nuke => self.nuke,
            ActionKind::Build => self.build.as_ref().is_some_and(|o| o.allows(selection)),
            ActionKind::Kill => self.kill.as_ref().is_some_and(|o| o.allows(selection)),
            ActionKind::Swap => self.swap.as_ref().is_some_and(|o| o.allows(selection)),
        }
    }

    /// Returns the kinds of all legal actions.
    pub fn kinds(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL
            .into_iter()
            .filter(|&kind| self.contains(kind))
    }

    /// Iterates over all legal actions.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.kinds().filter_map(|kind| self.get(kind))
    }

    /// Returns the number of legal actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds().count()
    }

    /// Returns whether no action is legal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The cards a player picked for an action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected (DRAW, NUKE).
    #[default]
    None,
    /// A single card.
    Single(Card),
    /// Several cards, in the order they were picked.
    Combo(Vec<Card>),
}

impl Selection {
    /// Builds a selection from a list of cards.
    ///
    /// ```
    /// use tower_solitaire::{Card, Selection};
    ///
    /// let two: Card = "2H".parse().unwrap();
    /// assert_eq!(Selection::from_cards(vec![two]), Selection::Single(two));
    /// ```
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        match cards.len() {
            0 => Self::None,
            1 => Self::Single(cards.remove(0)),
            _ => Self::Combo(cards),
        }
    }

    /// Returns the selected cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::None => &[],
            Self::Single(card) => core::slice::from_ref(card),
            Self::Combo(cards) => cards.as_slice(),
        }
    }
}

impl FromStr for Selection {
    type Err = SelectionError;

    /// Parses the UI encoding: empty, `"9S"`, or `"2H+3H"`.
    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Ok(Self::None);
        }

        let mut cards: Vec<Card> = Vec::new();
        for token in encoded.split('+') {
            let card: Card = token.trim().parse()?;
            if cards.contains(&card) {
                return Err(SelectionError::DuplicateCard(card));
            }
            cards.push(card);
        }

        Ok(Self::from_cards(cards))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
