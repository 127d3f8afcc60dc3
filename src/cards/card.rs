//! Card values: suit, rank, and the category a suit maps to.
//!
//! Cards are plain `Copy` values. The engine never relies on card identity;
//! within a room, cards are told apart by their [`Slot`](crate::zones::Slot).

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// The four suits of a standard deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// What a card of this suit does when resolved.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Suit::Spades | Suit::Clubs => Category::Monster,
            Suit::Diamonds => Category::Weapon,
            Suit::Hearts => Category::Potion,
        }
    }

    /// Red suits lose their face cards and aces in the dungeon deck.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card category, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Monster,
    Weapon,
    Potion,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Monster => "Monster",
            Category::Weapon => "Weapon",
            Category::Potion => "Potion",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card rank in `2..=14`, where 11-14 are Jack, Queen, King, Ace.
///
/// The rank doubles as the card's strength: monster damage, weapon attack,
/// and potion healing all equal the rank value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 14;
    /// Highest rank a red card can carry.
    pub const MAX_RED: u8 = 10;

    /// Create a rank, rejecting values outside `2..=14`.
    pub const fn new(value: u8) -> Result<Self, CardError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(CardError::RankOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Rank as a health delta.
    #[must_use]
    pub const fn strength(self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            14 => f.write_str("A"),
            n => write!(f, "{}", n),
        }
    }
}

/// A dungeon card.
///
/// Construction enforces the dungeon deck invariant: Hearts and Diamonds
/// never carry a rank above 10.
///
/// ```
/// use rust_scoundrel::cards::{Card, Category, Suit};
///
/// let card = Card::new(Suit::Clubs, 12).unwrap();
/// assert_eq!(card.category(), Category::Monster);
/// assert_eq!(card.to_string(), "♣ Q");
///
/// assert!(Card::new(Suit::Hearts, 12).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

/// Wire form of a card, validated on the way in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Self::new(raw.suit, raw.rank)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank.value(),
        }
    }
}

impl Card {
    /// Create a card that belongs in the dungeon deck.
    pub fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        let rank = Rank::new(rank)?;
        if suit.is_red() && rank.value() > Rank::MAX_RED {
            return Err(CardError::RemovedFromDungeon { suit, rank: rank.value() });
        }
        Ok(Self { suit, rank })
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.suit.category()
    }

    #[must_use]
    pub const fn strength(self) -> i32 {
        self.rank.strength()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.category(), Category::Monster)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_categories() {
        assert_eq!(Suit::Spades.category(), Category::Monster);
        assert_eq!(Suit::Clubs.category(), Category::Monster);
        assert_eq!(Suit::Diamonds.category(), Category::Weapon);
        assert_eq!(Suit::Hearts.category(), Category::Potion);
    }

    #[test]
    fn test_rank_display() {
        let shown: Vec<String> = (2..=14)
            .map(|v| Rank::new(v).unwrap().to_string())
            .collect();

        assert_eq!(shown[0], "2");
        assert_eq!(shown[8], "10");
        assert_eq!(&shown[9..], &["J", "Q", "K", "A"]);
    }

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(1), Err(CardError::RankOutOfRange(1)));
        assert_eq!(Rank::new(15), Err(CardError::RankOutOfRange(15)));
        assert!(Rank::new(2).is_ok());
        assert!(Rank::new(14).is_ok());
    }

    #[test]
    fn test_red_face_cards_rejected() {
        for rank in 11..=14 {
            assert!(Card::new(Suit::Hearts, rank).is_err());
            assert!(Card::new(Suit::Diamonds, rank).is_err());
            assert!(Card::new(Suit::Spades, rank).is_ok());
            assert!(Card::new(Suit::Clubs, rank).is_ok());
        }
        assert!(Card::new(Suit::Diamonds, 10).is_ok());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Spades, 14).unwrap().to_string(), "♠ A");
        assert_eq!(Card::new(Suit::Diamonds, 6).unwrap().to_string(), "♦ 6");
    }

    #[test]
    fn test_rank_deserialization_is_validated() {
        assert!(serde_json::from_str::<Rank>("9").is_ok());
        assert!(serde_json::from_str::<Rank>("15").is_err());
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Hearts, 7).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(json, r#"{"suit":"Hearts","rank":7}"#);
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_card_deserialization_is_validated() {
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Spades","rank":14}"#).is_ok());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Hearts","rank":14}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Diamonds","rank":11}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Clubs","rank":1}"#).is_err());
    }
}
