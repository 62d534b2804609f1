//! Hand evaluation, settlement, strategy chart and shoe tests.

use std::collections::HashMap;

use bjtable::hand::{hand_value, is_blackjack, is_soft, pair_rank};
use bjtable::result::blackjack_winnings;
use bjtable::shoe::needs_reshuffle;
use bjtable::{
    Card, DECK_SIZE, DealerHand, Hand, HandOutcome, PlayerAction, Shoe, Suit, recommend,
    settle_hand,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| Card::new(suit, rank))
        .collect()
}

fn hand(ranks: &[u8], bet: usize) -> Hand {
    let mut hand = Hand::new(bet);
    for card in cards(ranks) {
        hand.add_card(card);
    }
    hand
}

fn upcard(rank: u8) -> Card {
    Card::new(Suit::Clubs, rank)
}

#[test]
fn hand_values() {
    assert_eq!(hand_value(&cards(&[1, 13])), 21);
    assert_eq!(hand_value(&cards(&[1, 1, 9])), 21);
    assert!(is_soft(&cards(&[1, 1, 9])));
    assert_eq!(hand_value(&cards(&[1, 5, 13])), 16);
    assert!(!is_soft(&cards(&[1, 5, 13])));
    assert_eq!(hand_value(&cards(&[1, 1, 1, 1])), 14);
    assert_eq!(hand_value(&cards(&[10, 5, 7])), 22);
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn three_card_twenty_one_is_not_blackjack() {
    assert!(is_blackjack(&cards(&[1, 12])));
    assert!(!is_blackjack(&cards(&[7, 7, 7])));
    assert!(!is_blackjack(&cards(&[1, 5, 5])));
}

#[test]
fn pairs_match_by_value() {
    assert_eq!(pair_rank(&cards(&[13, 11])), Some(10));
    assert_eq!(pair_rank(&cards(&[1, 1])), Some(11));
    assert_eq!(pair_rank(&cards(&[9, 10])), None);
    assert_eq!(pair_rank(&cards(&[8, 8, 8])), None);
}

#[test]
fn split_and_double_eligibility() {
    let pair = hand(&[8, 8], 10);
    assert!(pair.can_split(10));
    assert!(!pair.can_split(9));
    assert!(pair.can_double_down(10));

    let split = Hand::from_split([Card::new(Suit::Hearts, 8), Card::new(Suit::Spades, 8)], 10);
    assert!(!split.can_split(100));

    let three = hand(&[2, 3, 4], 10);
    assert!(!three.can_double_down(100));
}

#[test]
fn dealer_hand_hides_the_hole_card() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Suit::Hearts, 10));
    dealer.add_card(Card::new(Suit::Spades, 1).turned(false));

    assert!(dealer.has_hidden_card());
    assert_eq!(dealer.visible_value(), 10);
    assert_eq!(dealer.value(), 21);

    dealer.reveal_hole();
    assert!(!dealer.has_hidden_card());
    assert!(dealer.is_blackjack());
}

#[test]
fn dealer_draw_rule() {
    let mut soft_17 = DealerHand::new();
    for card in cards(&[1, 6]) {
        soft_17.add_card(card);
    }
    assert!(soft_17.must_hit(false));
    assert!(!soft_17.must_hit(true));

    let mut hard_17 = DealerHand::new();
    for card in cards(&[10, 7]) {
        hard_17.add_card(card);
    }
    assert!(!hard_17.must_hit(false));

    let mut sixteen = DealerHand::new();
    for card in cards(&[10, 6]) {
        sixteen.add_card(card);
    }
    assert!(sixteen.must_hit(true));
}

#[test]
fn settlement_precedence() {
    let push = settle_hand(&hand(&[10, 13], 10), &cards(&[12, 10]));
    assert_eq!(push.outcome, HandOutcome::Push);
    assert_eq!(push.delta, 0);
    assert_eq!(push.returned(10), 10);

    let natural = settle_hand(&hand(&[1, 13], 10), &cards(&[10, 12]));
    assert_eq!(natural.outcome, HandOutcome::Blackjack);
    assert_eq!(natural.delta, 15);
    assert_eq!(natural.returned(10), 25);

    // A bust loses even when the dealer busts too.
    let bust = settle_hand(&hand(&[10, 5, 7], 10), &cards(&[10, 6, 8]));
    assert_eq!(bust.outcome, HandOutcome::Bust);
    assert_eq!(bust.delta, -10);
    assert_eq!(bust.returned(10), 0);

    let dealer_bust = settle_hand(&hand(&[10, 8], 10), &cards(&[10, 6, 7]));
    assert_eq!(dealer_bust.outcome, HandOutcome::Win);
    assert_eq!(dealer_bust.delta, 10);

    let both_natural = settle_hand(&hand(&[1, 11], 10), &cards(&[1, 13]));
    assert_eq!(both_natural.outcome, HandOutcome::Push);

    let dealer_natural = settle_hand(&hand(&[10, 5, 6], 10), &cards(&[1, 13]));
    assert_eq!(dealer_natural.outcome, HandOutcome::Lose);
    assert_eq!(dealer_natural.delta, -10);
}

#[test]
fn split_twenty_one_pays_even_money() {
    let split = Hand::from_split([Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 13)], 10);
    assert!(!split.is_natural());

    let settlement = settle_hand(&split, &cards(&[10, 9]));
    assert_eq!(settlement.outcome, HandOutcome::Win);
    assert_eq!(settlement.delta, 10);
}

#[test]
fn blackjack_pays_floor_of_three_to_two() {
    let settlement = settle_hand(&hand(&[1, 12], 5), &cards(&[10, 9]));
    assert_eq!(settlement.delta, 7);
    assert_eq!(settlement.returned(5), 12);
}

#[test]
fn hard_totals() {
    let advice = recommend(&cards(&[10, 6]), &upcard(10), false, true);
    assert_eq!(advice.action, PlayerAction::Hit);
    assert!(advice.reason.starts_with("Hit on hard 16 vs dealer 10"));

    assert!(
        recommend(&cards(&[10, 6]), &upcard(1), false, true)
            .reason
            .starts_with("Hit on hard 16 vs dealer Ace.")
    );
    assert_eq!(
        recommend(&cards(&[10, 2]), &upcard(4), false, true).action,
        PlayerAction::Stand
    );
    assert_eq!(
        recommend(&cards(&[10, 7]), &upcard(1), false, true).action,
        PlayerAction::Stand
    );
}

#[test]
fn double_falls_back_when_not_allowed() {
    let open = recommend(&cards(&[5, 6]), &upcard(6), false, true);
    assert_eq!(open.action, PlayerAction::Double);
    assert!(open.reason.starts_with("Double down on hard 11 vs dealer 6"));

    let closed = recommend(&cards(&[5, 6]), &upcard(6), false, false);
    assert_eq!(closed.action, PlayerAction::Hit);

    // Soft 18 doubles against a 3; without the double it stands.
    assert_eq!(
        recommend(&cards(&[1, 7]), &upcard(3), false, true).action,
        PlayerAction::Double
    );
    assert_eq!(
        recommend(&cards(&[1, 7]), &upcard(3), false, false).action,
        PlayerAction::Stand
    );
    assert_eq!(
        recommend(&cards(&[1, 6]), &upcard(4), false, false).action,
        PlayerAction::Hit
    );
}

#[test]
fn soft_totals() {
    let advice = recommend(&cards(&[1, 7]), &upcard(9), false, true);
    assert_eq!(advice.action, PlayerAction::Hit);
    assert!(advice.reason.contains("soft 18 (Ace + 7)"));

    assert_eq!(
        recommend(&cards(&[1, 8]), &upcard(6), false, true).action,
        PlayerAction::Double
    );
    assert_eq!(
        recommend(&cards(&[1, 9]), &upcard(6), false, true).action,
        PlayerAction::Stand
    );
}

#[test]
fn pairs() {
    for dealer in 1..=10 {
        assert_eq!(
            recommend(&cards(&[8, 8]), &upcard(dealer), true, true).action,
            PlayerAction::Split,
            "8s against {dealer}"
        );
        assert_eq!(
            recommend(&cards(&[1, 1]), &upcard(dealer), true, true).action,
            PlayerAction::Split,
            "Aces against {dealer}"
        );
    }

    // 5s are played as hard 10 and 10s as hard 20.
    assert_eq!(
        recommend(&cards(&[5, 5]), &upcard(6), true, true).action,
        PlayerAction::Double
    );
    assert_eq!(
        recommend(&cards(&[13, 12]), &upcard(6), true, true).action,
        PlayerAction::Stand
    );

    // Without the split open a pair of 8s is just hard 16.
    assert_eq!(
        recommend(&cards(&[8, 8]), &upcard(10), false, true).action,
        PlayerAction::Hit
    );
}

#[test]
fn unsplittable_aces_hit() {
    for dealer in 4..=6 {
        let advice = recommend(&cards(&[1, 1]), &upcard(dealer), false, true);
        assert_eq!(advice.action, PlayerAction::Hit, "Aces against {dealer}");
        assert!(advice.reason.starts_with("Hit on soft 12 (Ace + Ace)"));
    }
    assert_eq!(
        recommend(&cards(&[1, 1]), &upcard(10), false, false).action,
        PlayerAction::Hit
    );
}

#[test]
fn blackjack_winnings_saturate_on_huge_bets() {
    assert_eq!(blackjack_winnings(7), 10);
    assert_eq!(blackjack_winnings(10), 15);
    assert_eq!(blackjack_winnings(usize::MAX), usize::MAX);

    let settlement = settle_hand(&hand(&[1, 13], usize::MAX), &cards(&[10, 9]));
    assert_eq!(settlement.outcome, HandOutcome::Blackjack);
    assert_eq!(settlement.delta, isize::MAX);
    assert_eq!(settlement.returned(usize::MAX), usize::MAX);

    let loss = settle_hand(&hand(&[10, 7], usize::MAX), &cards(&[10, 9]));
    assert_eq!(loss.returned(usize::MAX), usize::MAX - isize::MAX as usize);
}

#[test]
fn fresh_shoe_holds_every_card_per_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shoe = Shoe::new(4, &mut rng);
    assert_eq!(shoe.len(), 4 * DECK_SIZE);
    assert_eq!(shoe.original_size(), 208);

    let mut counts: HashMap<(Suit, u8), usize> = HashMap::new();
    for card in shoe.cards() {
        *counts.entry((card.suit, card.rank)).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 4));
}

#[test]
fn drawing_past_the_end_composes_a_new_shoe() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut shoe = Shoe::from_cards(cards(&[2, 3]), 1);

    assert_eq!(shoe.draw(true, &mut rng).rank, 2);
    let hole = shoe.draw(false, &mut rng);
    assert_eq!(hole.rank, 3);
    assert!(!hole.face_up);
    assert!(shoe.is_empty());

    let _ = shoe.draw(true, &mut rng);
    assert_eq!(shoe.len(), DECK_SIZE - 1);
    assert_eq!(shoe.original_size(), DECK_SIZE);
}

#[test]
fn cut_card_at_three_quarters() {
    assert!(!needs_reshuffle(208, 208, 0.75));
    assert!(!needs_reshuffle(53, 208, 0.75));
    assert!(needs_reshuffle(52, 208, 0.75));
    assert!(needs_reshuffle(0, 208, 0.75));
    assert!(!needs_reshuffle(0, 208, 0.0));
    assert!(!needs_reshuffle(0, 0, 0.75));
}

fn any_cards(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((0..4_usize, 1..=13_u8), 1..=max).prop_map(|picks| {
        picks
            .into_iter()
            .map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
            .collect()
    })
}

proptest! {
    #[test]
    fn value_never_busts_when_a_low_count_fits(cards in any_cards(8)) {
        let low: u32 = cards.iter().map(|card| if card.is_ace() { 1 } else { u32::from(card.value()) }).sum();
        let value = hand_value(&cards);

        prop_assert_eq!(low <= 21, value <= 21);
        if is_soft(&cards) {
            prop_assert!(value <= 21);
            prop_assert!(cards.iter().any(Card::is_ace));
        }
    }

    #[test]
    fn blackjack_means_two_cards_on_twenty_one(cards in any_cards(5)) {
        if is_blackjack(&cards) {
            prop_assert_eq!(cards.len(), 2);
            prop_assert_eq!(hand_value(&cards), 21);
        }
    }

    #[test]
    fn settlement_returns_stake_according_to_outcome(
        player in any_cards(4),
        dealer in any_cards(4),
        bet in 1..1000_usize,
    ) {
        let mut hand = Hand::new(bet);
        for card in player {
            hand.add_card(card);
        }
        let settlement = settle_hand(&hand, &dealer);
        let returned = settlement.returned(bet);

        match settlement.outcome {
            HandOutcome::Win => prop_assert_eq!(returned, bet * 2),
            HandOutcome::Blackjack => prop_assert_eq!(returned, bet + bet * 3 / 2),
            HandOutcome::Push => prop_assert_eq!(returned, bet),
            HandOutcome::Lose | HandOutcome::Bust => prop_assert_eq!(returned, 0),
        }
    }

    #[test]
    fn cut_card_tracks_dealt_share(dealt in 0..=208_usize) {
        prop_assert_eq!(needs_reshuffle(208 - dealt, 208, 0.75), dealt * 4 >= 208 * 3);
    }
}

fn composition<'a>(cards: impl IntoIterator<Item = &'a Card>) -> HashMap<(Suit, u8), usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry((card.suit, card.rank)).or_default() += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn drawing_a_whole_shoe_returns_each_card_once(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(4, &mut rng);
        let fresh = composition(shoe.cards());

        let drawn: Vec<Card> = (0..shoe.original_size())
            .map(|_| shoe.draw(true, &mut rng))
            .collect();

        prop_assert!(shoe.is_empty());
        prop_assert_eq!(composition(&drawn), fresh);
    }
}
