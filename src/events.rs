//! Notifications emitted for the presentation layer.

use crate::card::Card;
use crate::hand::{FaceState, Participant};
use crate::result::Outcome;
use crate::round::RoundState;

/// Something the presentation layer should render.
///
/// Events are queued in the order they happen and collected with
/// [`RoundController::drain_events`](crate::RoundController::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The round moved to a new state.
    StateChanged(RoundState),
    /// A card was dealt into a hand.
    CardDealt {
        /// Who received the card.
        owner: Participant,
        /// The card.
        card: Card,
        /// Whether the card was dealt face up.
        face: FaceState,
    },
    /// A face-down card was turned over.
    CardRevealed {
        /// Whose card was turned.
        owner: Participant,
        /// Position of the card in the hand.
        index: usize,
        /// The card.
        card: Card,
    },
    /// A participant's visible total changed.
    ScoreChanged {
        /// Whose total changed.
        owner: Participant,
        /// The new visible total.
        total: u16,
    },
    /// The round has a winner.
    RoundResolved(Outcome),
}
