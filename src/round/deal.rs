use rand::Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::StartError;
use crate::hand::{FaceState, Participant};

use super::{RoundController, RoundState};

/// Cards needed for the opening deal.
const INITIAL_CARDS: usize = 4;

impl<R: Rng> RoundController<R> {
    fn ensure_can_start(&self) -> Result<(), StartError> {
        match self.state {
            RoundState::Idle | RoundState::Resolved => Ok(()),
            state => {
                log::warn!("start_round rejected in {state:?}");
                Err(StartError::InvalidRoundState(state))
            }
        }
    }

    /// Starts a new round with a freshly built deck.
    ///
    /// The deck is rebuilt from the card source and shuffled (unless
    /// shuffling is disabled in the options). The player receives two face-up
    /// cards, then the dealer receives one face-up card and one face-down
    /// hole card. The round then waits in [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the card source cannot
    /// supply every card. Nothing changes on error.
    pub fn start_round(&mut self) -> Result<(), StartError> {
        self.ensure_can_start()?;

        let mut deck = Deck::new();
        deck.reset_from(self.source.as_ref()).inspect_err(|err| {
            log::warn!("deck construction failed: {err}");
        })?;
        if self.options.shuffle {
            deck.shuffle(&mut self.rng);
        }

        self.deal(deck)
    }

    /// Starts a new round with a stacked deck, dealt in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or `deck` is not a full
    /// 52-card deck. Nothing changes on error.
    pub fn start_round_with(&mut self, deck: Deck) -> Result<(), StartError> {
        self.ensure_can_start()?;
        if deck.len() != DECK_SIZE {
            log::warn!("stacked deck holds {} cards", deck.len());
            return Err(StartError::IncompleteDeck(deck.len()));
        }
        self.deal(deck)
    }

    fn deal(&mut self, deck: Deck) -> Result<(), StartError> {
        if deck.len() < INITIAL_CARDS {
            log::warn!("deck holds {} cards, need {INITIAL_CARDS}", deck.len());
            return Err(StartError::DeckExhausted);
        }

        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.events.clear();
        self.set_state(RoundState::Dealing);

        for (owner, face) in [
            (Participant::Player, FaceState::FaceUp),
            (Participant::Player, FaceState::FaceUp),
            (Participant::Dealer, FaceState::FaceUp),
            (Participant::Dealer, FaceState::FaceDown),
        ] {
            let card = self.deck.draw()?;
            self.receive(owner, card, face);
        }

        self.set_state(RoundState::PlayerTurn);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::card::DECK_SIZE;
    use crate::deck::Deck;
    use crate::error::StartError;
    use crate::options::RoundOptions;
    use crate::round::{RoundController, RoundState};

    #[test]
    fn opening_deal_needs_four_cards() {
        let mut round = RoundController::new(RoundOptions::default(), 3);
        let mut deck = Deck::standard();
        while deck.len() > 3 {
            deck.draw().unwrap();
        }

        assert_eq!(round.deal(deck).unwrap_err(), StartError::DeckExhausted);
        assert_eq!(round.state(), RoundState::Idle);
        assert!(round.player_hand().is_empty());
        assert!(round.events().is_empty());
    }

    #[test]
    fn full_deck_deals_four_cards() {
        let mut round = RoundController::new(RoundOptions::default(), 3);
        round.deal(Deck::standard()).unwrap();

        assert_eq!(round.deck.len(), DECK_SIZE - 4);
        assert_eq!(round.player.len(), 2);
        assert_eq!(round.dealer.len(), 2);
        assert!(round.dealer.has_hidden());
    }
}
