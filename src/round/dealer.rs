use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::DealerError;
use crate::hand::{FaceState, Participant};
use crate::result::Outcome;

use super::{DealerStep, RoundController, RoundState};

impl<R: Rng> RoundController<R> {
    /// Whether the dealer's rule calls for another card.
    ///
    /// The dealer draws below `dealer_stands_at`, and on a soft total equal
    /// to it unless `stand_on_soft_17` is set.
    fn dealer_wants_card(&self) -> bool {
        let score = self.dealer.score();
        let stands_at = u16::from(self.options.dealer_stands_at);

        score.total < stands_at
            || (score.total == stands_at && score.soft && !self.options.stand_on_soft_17)
    }

    /// Returns whether there is no dealer step left to run.
    pub fn is_dealer_turn_complete(&self) -> bool {
        self.state != RoundState::DealerTurn
    }

    /// Advances the dealer's turn by one card.
    ///
    /// Draws a card if the dealer's rule calls for one. When the dealer can
    /// no longer draw (stand threshold reached or deck empty) the round is
    /// resolved in the same step. Callers pace the dealer by pausing between
    /// steps until [`is_dealer_turn_complete`](Self::is_dealer_turn_complete).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.state != RoundState::DealerTurn {
            log::warn!("dealer_step rejected in {:?}", self.state);
            return Err(DealerError::InvalidRoundState(self.state));
        }

        let drawn = if self.dealer_wants_card() {
            self.deck.draw().ok()
        } else {
            None
        };
        if let Some(card) = drawn {
            self.receive(Participant::Dealer, card, FaceState::FaceUp);
        }

        let wants_card = self.dealer_wants_card();
        if wants_card && !self.deck.is_empty() {
            return Ok(DealerStep {
                drawn,
                outcome: None,
            });
        }

        if wants_card {
            log::warn!(
                "deck exhausted, dealer stands on {}",
                self.dealer.score().total
            );
        }

        let outcome = Outcome::from_totals(self.player.score().total, self.dealer.score().total);
        let outcome = self.finish(outcome, wants_card);

        Ok(DealerStep {
            drawn,
            outcome: Some(outcome),
        })
    }

    /// Dealer plays their hand to completion without pausing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();

        loop {
            let step = self.dealer_step()?;
            drawn_cards.extend(step.drawn);
            if step.is_final() {
                return Ok(drawn_cards);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::card::{Card, Suit};
    use crate::deck::Deck;
    use crate::options::RoundOptions;
    use crate::result::Outcome;
    use crate::round::{RoundController, RoundState};

    /// Player 10♥ 5♣ (15) against dealer 2♦ 3♠ (5), with 4♥ dealt last.
    fn stood_round() -> RoundController {
        let draws = [
            Card::new(Suit::Hearts, 10),
            Card::new(Suit::Clubs, 5),
            Card::new(Suit::Diamonds, 2),
            Card::new(Suit::Spades, 3),
        ];
        let last = Card::new(Suit::Hearts, 4);

        let mut order = draws.to_vec();
        order.extend(
            Deck::standard()
                .cards()
                .filter(|c| !draws.contains(c) && **c != last)
                .copied(),
        );
        order.push(last);

        let mut round = RoundController::new(RoundOptions::default(), 5);
        round
            .start_round_with(Deck::from_order(order).unwrap())
            .unwrap();
        round.player_stand().unwrap();
        round
    }

    #[test]
    fn dealer_stands_when_last_card_is_drawn() {
        let mut round = stood_round();
        while round.deck.len() > 1 {
            round.deck.draw().unwrap();
        }

        let step = round.dealer_step().unwrap();
        assert_eq!(step.drawn, Some(Card::new(Suit::Hearts, 4)));
        assert_eq!(step.outcome, Some(Outcome::PlayerWins));
        assert_eq!(round.state(), RoundState::Resolved);

        let result = round.result().unwrap();
        assert!(result.deck_exhausted);
        assert_eq!(result.dealer_value, 9);
        assert!(round.deck.is_empty());
    }

    #[test]
    fn dealer_stands_on_empty_deck() {
        let mut round = stood_round();
        round.deck = Deck::new();

        let drawn: Vec<Card> = round.play_dealer().unwrap();
        assert!(drawn.is_empty());
        assert_eq!(round.dealer.len(), 2);
        assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
        assert!(round.result().unwrap().deck_exhausted);
    }

    #[test]
    fn full_deck_never_exhausts_dealer() {
        let mut round = stood_round();
        round.play_dealer().unwrap();
        assert!(!round.result().unwrap().deck_exhausted);
    }
}
