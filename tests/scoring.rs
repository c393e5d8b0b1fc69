//! Card and scoring tests.

use std::collections::HashSet;

use bjtable::{
    Card, CardSource, Command, DECK_SIZE, Hand, MAX_HAND_SIZE, MemoryStore, RandomSource,
    RoundState, Suit, Table, TableOptions, is_bust, is_soft, score,
};
use proptest::prelude::*;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

fn any_card() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| Card::new(Suit::ALL[suit], rank))
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Deal),
        Just(Command::RaiseBet),
        Just(Command::LowerBet),
        Just(Command::Hit),
        Just(Command::Stand),
        Just(Command::Continue),
    ]
}

#[test]
fn rank_labels_and_base_values() {
    let labels: Vec<&str> = (1..=13).map(|rank| card(Suit::Hearts, rank).rank_label()).collect();
    assert_eq!(
        labels,
        ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
    );

    assert_eq!(card(Suit::Hearts, 1).base_value(), 11);
    assert_eq!(card(Suit::Hearts, 7).base_value(), 7);
    for rank in 10..=13 {
        assert_eq!(card(Suit::Hearts, rank).base_value(), 10);
    }
}

#[test]
fn asset_keys_follow_rank_and_suit() {
    assert_eq!(card(Suit::Diamonds, 1).asset_key(), "AD");
    assert_eq!(card(Suit::Spades, 10).asset_key(), "10S");
    assert_eq!(card(Suit::Hearts, 12).to_string(), "QH");
    assert_eq!(Suit::Clubs.name(), "Club");
}

#[test]
fn sampling_covers_every_card_with_replacement() {
    let mut source = RandomSource::seeded(9);
    let draws: Vec<Card> = (0..5000).map(|_| source.draw()).collect();

    assert!(draws.iter().all(|card| (1..=13).contains(&card.rank)));
    let distinct: HashSet<Card> = draws.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn single_ace_counts_high_until_it_would_bust() {
    assert_eq!(score(&cards(&[1, 9])), 20);
    assert!(is_soft(&cards(&[1, 9])));
    assert_eq!(score(&cards(&[1, 10])), 21);
    assert_eq!(score(&cards(&[1, 9, 5])), 15);
    assert!(!is_soft(&cards(&[1, 9, 5])));
}

#[test]
fn two_aces_and_eight_make_twenty() {
    assert_eq!(score(&cards(&[1, 1, 8])), 20);
    assert!(is_soft(&cards(&[1, 1, 8])));
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(score(&cards(&[11, 12])), 20);
    assert_eq!(score(&cards(&[13, 12, 2])), 22);
    assert!(is_bust(&cards(&[13, 12, 2])));
    assert_eq!(score(&[]), 0);
}

#[test]
fn hand_rejects_cards_past_the_limit() {
    let mut hand = Hand::new();
    for _ in 0..MAX_HAND_SIZE {
        hand.add_card(card(Suit::Clubs, 1)).unwrap();
    }
    assert!(hand.is_full());
    assert!(hand.add_card(card(Suit::Clubs, 1)).is_err());
    assert_eq!(hand.len(), MAX_HAND_SIZE);
    assert_eq!(hand.value(), 12);

    hand.clear();
    assert!(hand.is_empty());
}

proptest! {
    #[test]
    fn score_ignores_card_order(
        (hand, shuffled) in prop::collection::vec(any_card(), 0..=MAX_HAND_SIZE)
            .prop_flat_map(|hand| (Just(hand.clone()), Just(hand).prop_shuffle()))
    ) {
        prop_assert_eq!(score(&hand), score(&shuffled));
    }

    #[test]
    fn score_takes_an_ace_high_only_when_it_fits(
        hand in prop::collection::vec(any_card(), 0..=MAX_HAND_SIZE)
    ) {
        let hard: u32 = hand
            .iter()
            .map(|card| if card.is_ace() { 1 } else { u32::from(card.base_value()) })
            .sum();
        let has_ace = hand.iter().any(Card::is_ace);
        let expected = if has_ace && hard + 10 <= 21 { hard + 10 } else { hard };

        prop_assert_eq!(u32::from(score(&hand)), expected);
        prop_assert_eq!(is_bust(&hand), score(&hand) > 21);
    }

    #[test]
    fn table_invariants_hold_for_any_command_sequence(
        seed in any::<u64>(),
        commands in prop::collection::vec(any_command(), 0..200),
    ) {
        let mut table = Table::seeded(TableOptions::default(), seed, MemoryStore::new());
        let mut high_score = table.high_score();

        for command in commands {
            table.apply(command);
            let bankroll = table.bankroll();

            prop_assert!(table.bet() >= 10);
            if table.state() == RoundState::AwaitingBet {
                prop_assert!(table.bet() <= bankroll.amount());
            }
            if bankroll.amount() == 0 {
                prop_assert!(bankroll.is_bankrupt());
            }
            prop_assert!(table.high_score() >= high_score);
            prop_assert!(table.high_score() >= bankroll.amount());
            high_score = table.high_score();

            if let Some(result) = table.last_result() {
                prop_assert_eq!(table.state(), RoundState::RoundOver);
                if result.player_value <= 21 {
                    let dealer = table.dealer_hand();
                    prop_assert!(dealer.value() >= 17 || dealer.len() == MAX_HAND_SIZE);
                }
            }
        }
    }
}
