use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card in a standard 52-card game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
    #[serde(rename = "♣")]
    Club,
}

/// The rank of a [card](Card), in deck order from ace to king.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

pub const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club];

pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
            Suit::Club => '♣',
        }
    }
}

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Aces, face cards and tens are worth one point when captured.
    pub fn is_scoring(self) -> bool {
        matches!(
            self,
            Rank::Ace | Rank::King | Rank::Queen | Rank::Jack | Rank::Ten
        )
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Whether playing `self` onto `top` wins the pile.
    pub fn matches(&self, top: Card) -> bool {
        self.rank == top.rank || self.suit == top.suit
    }

    /// All 52 cards, suit by suit, each suit from ace to king.
    pub fn all() -> impl Iterator<Item = Card> {
        SUITS
            .into_iter()
            .flat_map(|suit| RANKS.into_iter().map(move |rank| Card { suit, rank }))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    Empty,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::Empty => write!(f, "Card code is empty"),
            CardFromStrErr::InvalidRank => write!(f, "Card code has an invalid rank"),
            CardFromStrErr::InvalidSuit => write!(f, "Card code has an invalid suit"),
        }
    }
}

impl FromStr for Rank {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or(CardFromStrErr::InvalidRank)
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_char = s.chars().next_back().ok_or(CardFromStrErr::Empty)?;
        let suit = SUITS
            .into_iter()
            .find(|suit| suit.symbol() == suit_char)
            .ok_or(CardFromStrErr::InvalidSuit)?;
        let rank = s[..s.len() - suit_char.len_utf8()].parse()?;
        Ok(Card { suit, rank })
    }
}

/// Shorthand for creating cards from their text form.
///
/// The rank comes first (`A`, `2`..`10`, `J`, `Q`, `K`), followed by the
/// suit as a unicode character (♦, ♥, ♠, or ♣).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use indigo::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("10♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn display_then_parse_is_identity(card: Card) -> bool {
            card.to_string().parse::<Card>() == Ok(card)
        }
    }

    #[test]
    fn all_cards_are_unique() {
        let cards: BTreeSet<Card> = Card::all().collect();
        assert_eq!(cards.len(), DECK_SIZE);
    }

    #[test]
    fn ten_is_written_with_two_digits() {
        assert_eq!(card!("10♠").to_string(), "10♠");
        assert_eq!(card!("10♠").rank, Rank::Ten);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Card>(), Err(CardFromStrErr::Empty));
        assert_eq!("1♠".parse::<Card>(), Err(CardFromStrErr::InvalidRank));
        assert_eq!("♠".parse::<Card>(), Err(CardFromStrErr::InvalidRank));
        assert_eq!("Kx".parse::<Card>(), Err(CardFromStrErr::InvalidSuit));
    }

    #[test]
    fn scoring_ranks() {
        let scoring: Vec<Rank> = RANKS.into_iter().filter(|r| r.is_scoring()).collect();
        assert_eq!(
            scoring,
            vec![Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
        );
    }

    #[test]
    fn matching_by_suit_or_rank() {
        assert!(card!("3♦").matches(card!("K♦")));
        assert!(card!("K♠").matches(card!("K♦")));
        assert!(!card!("3♠").matches(card!("K♦")));
    }
}
