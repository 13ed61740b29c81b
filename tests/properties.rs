//! Property-based tests for the deck, scoring, and dealer rules.

use bjround::{
    Card, DECK_SIZE, Deck, RoundController, RoundOptions, RoundState, Suit,
    scoring::{self, card_value},
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

// Any valid card; duplicates allowed, scoring does not care.
fn card_strategy() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| Card::new(Suit::ALL[suit], rank))
}

fn conserved(round: &RoundController) -> bool {
    round.cards_remaining() + round.player_hand().len() + round.dealer_card_count() == DECK_SIZE
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        let before: BTreeSet<Card> = deck.cards().copied().collect();

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let after: BTreeSet<Card> = deck.cards().copied().collect();

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(after.len(), DECK_SIZE);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn score_picks_best_ace_values(cards in prop::collection::vec(card_strategy(), 0..=12)) {
        let score = scoring::score(&cards);
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u16;
        let hard: u16 = cards.iter().map(|c| card_value(c.rank)).sum::<u16>() - 10 * aces;

        // Every ace counted as 1 is the floor; at most one ace can count as 11.
        prop_assert!(score.total == hard || score.total == hard + 10);
        prop_assert_eq!(score.soft, score.total == hard + 10 && aces > 0);
        if aces > 0 && hard + 10 <= 21 {
            prop_assert!(score.soft);
        }
        if score.soft {
            prop_assert!(score.total <= 21);
        }
    }

    #[test]
    fn dealer_follows_house_rule(seed in any::<u64>(), hits in 0usize..4) {
        let mut round = RoundController::new(RoundOptions::default(), seed);
        round.start_round().unwrap();
        prop_assert!(conserved(&round));

        for _ in 0..hits {
            if round.state() != RoundState::PlayerTurn {
                break;
            }
            round.player_hit().unwrap();
            prop_assert!(conserved(&round));
        }

        if round.state() == RoundState::Resolved {
            // Player bust: the dealer never played.
            prop_assert!(round.player_score().is_bust());
            prop_assert_eq!(round.dealer_card_count(), 2);
            return Ok(());
        }

        round.player_stand().unwrap();
        while !round.is_dealer_turn_complete() {
            round.dealer_step().unwrap();
            prop_assert!(conserved(&round));
        }

        let dealer: Vec<Card> = round
            .dealer_visible_cards()
            .into_iter()
            .map(Option::unwrap)
            .collect();

        // Each drawn card was taken at 16 or less; the final hand is 17+.
        for drawn_at in 2..dealer.len() {
            prop_assert!(scoring::score(&dealer[..drawn_at]).total <= 16);
        }
        prop_assert!(scoring::score(&dealer).total >= 17);
        prop_assert!(round.outcome().is_some());
    }
}
