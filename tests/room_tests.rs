//! Room building and resolution tracking tests.

use rust_scoundrel::cards::{Card, Suit};
use rust_scoundrel::core::PlayerState;
use rust_scoundrel::effects::Effect;
use rust_scoundrel::error::ActionError;
use rust_scoundrel::resolution::RoomResolution;
use rust_scoundrel::zones::{Deck, Room, Slot};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn worked_room() -> RoomResolution {
    RoomResolution::new(Room::from_cards(&[
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Hearts, 3),
        card(Suit::Spades, 2),
    ]))
}

// =============================================================================
// Room Builder
// =============================================================================

/// The carry leads the next room, topped up from the deck front.
#[test]
fn test_carry_leads_next_room() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Spades, 5),
        card(Suit::Hearts, 4),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 9),
    ]);
    let mut carried = Some(card(Suit::Clubs, 10));

    let room = Room::build(&mut carried, &mut deck);

    assert_eq!(
        room.cards(),
        &[card(Suit::Clubs, 10), card(Suit::Spades, 5), card(Suit::Hearts, 4), card(Suit::Clubs, 3)]
    );
    assert!(carried.is_none());
    assert_eq!(deck.len(), 1);
}

/// A deck of exactly three builds a three-card room.
#[test]
fn test_three_card_room() {
    let mut deck = Deck::from_cards(vec![card(Suit::Spades, 5), card(Suit::Hearts, 4), card(Suit::Clubs, 3)]);
    let room = Room::build(&mut None, &mut deck);

    assert_eq!(room.len(), 3);
    assert_eq!(RoomResolution::new(room).required(), 3);
}

/// Duplicate-looking cards are still told apart by slot.
#[test]
fn test_equal_cards_have_distinct_slots() {
    let mut resolution = RoomResolution::new(Room::from_cards(&[card(Suit::Spades, 2), card(Suit::Spades, 2)]));
    let mut player = PlayerState::new();

    resolution.resolve(Slot::new(0), &mut player).unwrap();

    assert!(!resolution.is_resolved(Slot::new(1)));
    assert!(resolution.resolve(Slot::new(1), &mut player).is_ok());
    assert_eq!(player.health(), 16);
}

// =============================================================================
// Resolution
// =============================================================================

/// Cards 2, 4, 3 of the worked room leave the Club 10 to carry.
#[test]
fn test_worked_example_resolution() {
    let mut resolution = worked_room();
    let mut player = PlayerState::new();

    let effects: Vec<_> = [2, 4, 3]
        .into_iter()
        .map(|position| {
            let slot = resolution.validate(position).unwrap();
            resolution.resolve(slot, &mut player).unwrap()
        })
        .collect();

    assert_eq!(
        effects,
        vec![
            Effect::Equipped { weapon: card(Suit::Diamonds, 6), replaced: None },
            Effect::Slain { monster: card(Suit::Spades, 2), weapon: card(Suit::Diamonds, 6) },
            Effect::Healed { potion: card(Suit::Hearts, 3), healed: 0 },
        ]
    );
    assert!(resolution.is_complete());
    assert_eq!(resolution.carry(), Some(card(Suit::Clubs, 10)));
    assert_eq!(player.health(), 20);
    assert_eq!(resolution.resolved(), &[Slot::new(1), Slot::new(3), Slot::new(2)]);
}

/// Invalid picks do not count toward the three.
#[test]
fn test_rejected_picks_change_nothing() {
    let mut resolution = worked_room();
    let mut player = PlayerState::new();
    resolution.resolve(Slot::new(0), &mut player).unwrap();
    let before = (resolution.clone(), player.clone());

    assert_eq!(
        resolution.validate(0),
        Err(ActionError::InvalidSelection { position: 0, room_size: 4 })
    );
    assert_eq!(
        resolution.validate(5),
        Err(ActionError::InvalidSelection { position: 5, room_size: 4 })
    );
    assert_eq!(
        resolution.resolve(Slot::new(0), &mut player),
        Err(ActionError::DuplicateSelection { position: 1 })
    );

    assert_eq!((resolution.clone(), player.clone()), before);
    assert_eq!(resolution.remaining(), 2);
}

#[test]
fn test_carry_only_when_complete() {
    let mut resolution = worked_room();
    let mut player = PlayerState::new();
    resolution.resolve(Slot::new(1), &mut player).unwrap();

    assert_eq!(resolution.carry(), None);
    assert_eq!(resolution.unresolved().count(), 3);
}

#[test]
fn test_short_rooms_carry_nothing() {
    let mut resolution = RoomResolution::new(Room::from_cards(&[
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
    ]));
    let mut player = PlayerState::with_health(10);
    for index in 0..3 {
        resolution.resolve(Slot::new(index), &mut player).unwrap();
    }

    assert!(resolution.is_complete());
    assert_eq!(resolution.carry(), None);
    assert_eq!(player.health(), 19);
}
