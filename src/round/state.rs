//! Round state types.

use crate::card::Card;
use crate::result::Outcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No round in progress.
    #[default]
    Idle,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is final.
    Resolved,
}

/// What a single dealer step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerStep {
    /// The card the dealer drew, if any.
    pub drawn: Option<Card>,
    /// The outcome, once this step resolved the round.
    pub outcome: Option<Outcome>,
}

impl DealerStep {
    /// Returns whether this step finished the dealer's turn.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.outcome.is_some()
    }
}
