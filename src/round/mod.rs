//! Round engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::{fmt, mem};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardSource, StandardCards};
use crate::deck::Deck;
use crate::error::ClearError;
use crate::events::RoundEvent;
use crate::hand::{FaceState, Hand, Participant};
use crate::options::RoundOptions;
use crate::result::{Outcome, RoundResult};
use crate::scoring::Score;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{DealerStep, RoundState};

/// A blackjack round between one player and an automated dealer.
///
/// The controller exclusively owns the deck, both hands, and the round state.
/// Every transition takes `&mut self` and only fires from the state that
/// permits it. Use [`RoundOptions`] to configure the dealer rule and
/// shuffling.
pub struct RoundController<R = ChaCha8Rng> {
    /// Cards not yet drawn.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Result of the last resolved round.
    result: Option<RoundResult>,
    /// Round options.
    options: RoundOptions,
    /// Where card identities come from.
    source: Box<dyn CardSource>,
    /// Notifications not yet drained.
    events: Vec<RoundEvent>,
    /// Random number generator.
    rng: R,
}

impl<R> fmt::Debug for RoundController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundController")
            .field("state", &self.state)
            .field("deck", &self.deck)
            .field("player", &self.player)
            .field("dealer", &self.dealer)
            .field("result", &self.result)
            .field("options", &self.options)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl RoundController<ChaCha8Rng> {
    /// Creates a new controller with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{RoundController, RoundOptions, RoundState};
    ///
    /// let mut round = RoundController::new(RoundOptions::default(), 42);
    /// round.start_round().unwrap();
    /// assert_eq!(round.state(), RoundState::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundController<R> {
    /// Creates a new controller that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: RoundOptions, rng: R) -> Self {
        Self {
            deck: Deck::new(),
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Idle,
            result: None,
            options,
            source: Box::new(StandardCards),
            events: Vec::new(),
            rng,
        }
    }

    /// Replaces the collaborator that supplies card identities.
    #[must_use]
    pub fn with_card_source<S: CardSource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    fn set_state(&mut self, state: RoundState) {
        log::debug!("round state {:?} -> {:?}", self.state, state);
        self.state = state;
        self.events.push(RoundEvent::StateChanged(state));
    }

    const fn hand_mut(&mut self, owner: Participant) -> &mut Hand {
        match owner {
            Participant::Player => &mut self.player,
            Participant::Dealer => &mut self.dealer,
        }
    }

    /// Puts a drawn card into a hand and queues the matching events.
    fn receive(&mut self, owner: Participant, card: Card, face: FaceState) {
        let hand = self.hand_mut(owner);
        hand.add(card, face);
        let total = hand.visible_score().total;

        self.events.push(RoundEvent::CardDealt { owner, card, face });
        if face == FaceState::FaceUp {
            self.events.push(RoundEvent::ScoreChanged { owner, total });
        }
    }

    /// Records the outcome and moves to [`RoundState::Resolved`].
    fn finish(&mut self, outcome: Outcome, deck_exhausted: bool) -> Outcome {
        let player = self.player.score();
        let dealer = self.dealer.score();

        self.result = Some(RoundResult {
            outcome,
            player_value: player.total,
            dealer_value: dealer.total,
            player_bust: player.is_bust(),
            dealer_bust: dealer.is_bust(),
            deck_exhausted,
        });

        log::debug!(
            "round resolved: {outcome:?} (player {}, dealer {})",
            player.total,
            dealer.total
        );
        self.set_state(RoundState::Resolved);
        self.events.push(RoundEvent::RoundResolved(outcome));
        outcome
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's cards as the player sees them.
    ///
    /// The hole card is `None` until it is revealed.
    pub fn dealer_visible_cards(&self) -> Vec<Option<Card>> {
        self.dealer.visible_cards()
    }

    /// Returns the number of cards in the dealer's hand.
    pub fn dealer_card_count(&self) -> usize {
        self.dealer.len()
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> Score {
        self.player.score()
    }

    /// Returns the score of the dealer's face-up cards.
    pub fn dealer_visible_score(&self) -> Score {
        self.dealer.visible_score()
    }

    /// Returns the dealer's full score.
    ///
    /// Returns `None` while the hole card is still face down.
    pub fn dealer_score(&self) -> Option<Score> {
        (!self.dealer.has_hidden()).then(|| self.dealer.score())
    }

    /// Returns the outcome once the round is resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|r| r.outcome)
    }

    /// Returns the full result once the round is resolved.
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the queued notifications without removing them.
    ///
    /// The queue only holds the current round's notifications.
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Removes and returns the queued notifications, oldest first.
    ///
    /// Notifications left undrained are discarded when the next round starts.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        mem::take(&mut self.events)
    }

    /// Discards the hands, the deck, and the result, returning to
    /// [`RoundState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still being played.
    pub fn clear_round(&mut self) -> Result<(), ClearError> {
        match self.state {
            RoundState::Idle | RoundState::Resolved => {}
            state => {
                log::warn!("clear_round rejected in {state:?}");
                return Err(ClearError::InvalidRoundState(state));
            }
        }

        self.deck.clear();
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        if self.state != RoundState::Idle {
            self.set_state(RoundState::Idle);
        }
        Ok(())
    }
}
