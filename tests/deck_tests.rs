//! Deck integration tests.
//!
//! Composition of the dungeon deck, seeded shuffles, and the
//! return-and-reshuffle path used by deferral.

use proptest::prelude::*;

use rust_scoundrel::cards::{Card, Category, Suit};
use rust_scoundrel::core::GameRng;
use rust_scoundrel::error::{CardError, DeckError};
use rust_scoundrel::zones::Deck;

fn sorted(deck: &Deck) -> Vec<Card> {
    let mut cards: Vec<_> = deck.iter().copied().collect();
    cards.sort_by_key(|c| (c.suit(), c.rank()));
    cards
}

// =============================================================================
// Composition
// =============================================================================

/// The dungeon deck has no red face cards or red aces.
#[test]
fn test_no_red_court_cards() {
    let deck = Deck::dungeon();

    for card in deck.iter() {
        if card.suit().is_red() {
            assert!(card.rank().value() <= 10, "{card} should not be in the deck");
        }
    }
}

/// Every card appears exactly once.
#[test]
fn test_dungeon_cards_unique() {
    let cards = sorted(&Deck::dungeon());
    let mut deduped = cards.clone();
    deduped.dedup();

    assert_eq!(cards.len(), 40);
    assert_eq!(deduped.len(), 40);
}

#[test]
fn test_category_totals() {
    let deck = Deck::dungeon();
    let strength = |category| -> i32 {
        deck.iter()
            .filter(|c| c.category() == category)
            .map(|c| c.strength())
            .sum()
    };

    // 2 × (2 + ... + 14) and 2 + ... + 10
    assert_eq!(strength(Category::Monster), 208);
    assert_eq!(strength(Category::Weapon), 54);
    assert_eq!(strength(Category::Potion), 54);
}

#[test]
fn test_card_construction_errors() {
    assert_eq!(Card::new(Suit::Spades, 1), Err(CardError::RankOutOfRange(1)));
    assert_eq!(Card::new(Suit::Clubs, 15), Err(CardError::RankOutOfRange(15)));
    assert_eq!(
        Card::new(Suit::Diamonds, 11),
        Err(CardError::RemovedFromDungeon { suit: Suit::Diamonds, rank: 11 })
    );
    assert!(Card::new(Suit::Spades, 14).is_ok());
}

// =============================================================================
// Shuffling
// =============================================================================

/// Same seed, same order.
#[test]
fn test_seeded_shuffle_is_reproducible() {
    let mut a = Deck::dungeon();
    let mut b = Deck::dungeon();

    a.shuffle(&mut GameRng::new(2024));
    b.shuffle(&mut GameRng::new(2024));

    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let mut a = Deck::dungeon();
    let mut b = Deck::dungeon();

    a.shuffle(&mut GameRng::new(1));
    b.shuffle(&mut GameRng::new(2));

    assert_ne!(a, b);
}

#[test]
fn test_shuffle_tiny_decks() {
    let mut rng = GameRng::new(3);

    let mut empty = Deck::new();
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let only = Card::new(Suit::Hearts, 7).unwrap();
    let mut single = Deck::from_cards(vec![only]);
    single.shuffle(&mut rng);
    assert_eq!(single.draw_front(), Ok(only));
}

/// Deferring a room puts its cards back and reshuffles the whole deck.
#[test]
fn test_deferred_cards_rejoin_deck() {
    let mut rng = GameRng::new(5);
    let mut deck = Deck::dungeon();
    deck.shuffle(&mut rng);

    let room: Vec<_> = (0..4).map(|_| deck.draw_front().unwrap()).collect();
    deck.return_and_reshuffle(room, &mut rng);

    assert_eq!(sorted(&deck), sorted(&Deck::dungeon()));
}

#[test]
fn test_draw_until_empty() {
    let mut deck = Deck::dungeon();
    for _ in 0..40 {
        deck.draw_front().unwrap();
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw_front(), Err(DeckError::Empty));
}

proptest! {
    /// Any seed yields a permutation of the dungeon deck.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let mut deck = Deck::dungeon();
        deck.shuffle(&mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), 40);
        prop_assert_eq!(sorted(&deck), sorted(&Deck::dungeon()));
    }

    /// Returning any number of drawn cards keeps the multiset intact.
    #[test]
    fn prop_return_and_reshuffle_keeps_cards(seed in any::<u64>(), drawn in 0usize..=40) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::dungeon();
        let taken: Vec<_> = (0..drawn).map(|_| deck.draw_front().unwrap()).collect();

        deck.return_and_reshuffle(taken, &mut rng);

        prop_assert_eq!(sorted(&deck), sorted(&Deck::dungeon()));
    }
}
