use rand::Rng;

use crate::card::Card;
use crate::error::ActionError;
use crate::events::RoundEvent;
use crate::hand::{FaceState, Participant};
use crate::result::Outcome;

use super::{RoundController, RoundState};

/// Position of the dealer's face-down card.
const HOLE_CARD: usize = 1;

impl<R: Rng> RoundController<R> {
    fn ensure_player_turn(&self, action: &str) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            log::warn!("{action} rejected in {:?}", self.state);
            Err(ActionError::InvalidRoundState(self.state))
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately with [`Outcome::DealerWins`]; the
    /// dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self.deck.draw().map_err(|_| {
            log::warn!("hit with an empty deck");
            ActionError::DeckExhausted
        })?;
        self.receive(Participant::Player, card, FaceState::FaceUp);

        if self.player.is_bust() {
            self.finish(Outcome::DealerWins, false);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card and hands control to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn("stand")?;

        if let Some(card) = self.dealer.reveal(HOLE_CARD) {
            self.events.push(RoundEvent::CardRevealed {
                owner: Participant::Dealer,
                index: HOLE_CARD,
                card,
            });
            self.events.push(RoundEvent::ScoreChanged {
                owner: Participant::Dealer,
                total: self.dealer.score().total,
            });
        }

        self.set_state(RoundState::DealerTurn);
        Ok(())
    }
}
