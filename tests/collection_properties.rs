use high_card_rs::cards::Card;
use high_card_rs::deck::Deck;
use high_card_rs::pile::DiscardPile;
use high_card_rs::player::Player;
use proptest::prelude::*;
use std::collections::HashMap;

prop_compose! {
    fn any_card()(
        name in "[A-Za-z0-9]{1,8}",
        suit in "[A-Za-z]{1,8}",
        value in 0i32..200,
    ) -> Card {
        Card::try_new(name, suit, value).expect("generated card is valid")
    }
}

fn multiset(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.clone()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(
        cards in prop::collection::vec(any_card(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::from_cards(cards.clone());
        deck.shuffle_seeded(seed).unwrap();
        prop_assert_eq!(multiset(deck.cards()), multiset(&cards));
    }

    #[test]
    fn draw_down_yields_each_card_once_then_none(
        cards in prop::collection::vec(any_card(), 0..30),
    ) {
        let mut deck = Deck::from_cards(cards.clone());
        for expected in cards.iter().rev() {
            let drawn = deck.draw();
            prop_assert_eq!(drawn.as_ref(), Some(expected));
        }
        prop_assert_eq!(deck.draw(), None);
    }

    #[test]
    fn take_all_returns_exactly_the_contents(
        cards in prop::collection::vec(any_card(), 0..30),
    ) {
        let mut pile = DiscardPile::from_cards(cards.clone());
        prop_assert_eq!(pile.take_all(), cards);
        prop_assert!(pile.is_empty());
    }

    #[test]
    fn highest_card_is_the_first_maximum(
        cards in prop::collection::vec(any_card(), 1..20),
    ) {
        let player = Player::try_with_hand("Prop", 20, cards.clone()).unwrap();
        let max = cards.iter().map(Card::value).max().unwrap();
        let first_max = cards.iter().find(|c| c.value() == max).unwrap();
        prop_assert_eq!(player.highest_card(), Some(first_max));
    }

    #[test]
    fn transfers_conserve_the_total_card_count(
        cards in prop::collection::vec(any_card(), 1..20),
    ) {
        let total = cards.len();
        let mut deck = Deck::from_cards(cards);
        let mut pile = DiscardPile::new();
        let mut player = Player::try_new("Prop", 20).unwrap();

        while player.draw_from(&mut deck) {}
        prop_assert_eq!(player.hand_len(), total);

        while let Some(card) = player.highest_card().cloned() {
            prop_assert!(player.discard_to(&card, &mut pile));
        }
        prop_assert_eq!(pile.len(), total);
        prop_assert_eq!(deck.len() + player.hand_len() + pile.len(), total);
    }
}
