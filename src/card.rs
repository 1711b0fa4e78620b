//! Card types, token parsing, and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in token order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// Returns the token character for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// Parses a suit character.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for anything other than `C`, `D`, `H`, `S`.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            'C' => Ok(Self::Clubs),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'S' => Ok(Self::Spades),
            other => Err(CardError::InvalidSuit(other)),
        }
    }
}

/// Card color. Kills and draws only work against an upcard of the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Diamonds and hearts.
    Red,
    /// Clubs and spades.
    Black,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`str::parse`] to
    /// build a card from an untrusted token.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the numeric value of the card. Aces are low.
    ///
    /// ```
    /// use tower_solitaire::Card;
    ///
    /// let king: Card = "KH".parse().unwrap();
    /// assert_eq!(king.value(), 13);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the rank character used in the card's token.
    #[must_use]
    pub const fn rank_symbol(&self) -> char {
        match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            // Digits 2..=9; anything else only arises from an unchecked `new`.
            n @ 2..=9 => (b'0' + n) as char,
            _ => '?',
        }
    }
}

const fn rank_from_symbol(symbol: char) -> Result<u8, CardError> {
    match symbol {
        'A' => Ok(1),
        'T' => Ok(10),
        'J' => Ok(11),
        'Q' => Ok(12),
        'K' => Ok(13),
        '2'..='9' => Ok(symbol as u8 - b'0'),
        other => Err(CardError::InvalidRank(other)),
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidLength(token.chars().count()));
        };

        Ok(Self::new(Suit::from_symbol(suit)?, rank_from_symbol(rank)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}

/// Returns the value of a raw card token.
///
/// # Errors
///
/// Returns a [`CardError`] if the token is malformed.
///
/// ```
/// use tower_solitaire::card::value_of;
///
/// assert_eq!(value_of("AS"), Ok(1));
/// assert_eq!(value_of("TS"), Ok(10));
/// ```
pub fn value_of(token: &str) -> Result<u8, CardError> {
    token.parse::<Card>().map(|card| card.value())
}

/// Returns the color of a raw card token.
///
/// # Errors
///
/// Returns [`CardError::InvalidSuit`] for a suit outside `CDHS`, or another
/// [`CardError`] if the token is otherwise malformed.
pub fn color_of(token: &str) -> Result<Color, CardError> {
    token.parse::<Card>().map(|card| card.color())
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// The card every tower starts on. It is never dealt from a deck.
pub const TOWER_BASE: Card = Card::new(Suit::Spades, 1);

/// Returns all 52 cards, suit by suit.
pub fn full_deck() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=13).map(move |rank| Card::new(suit, rank)))
}
