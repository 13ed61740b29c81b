//! Error types for deck and round operations.

use thiserror::Error;

use crate::card::{Card, Suit};
use crate::round::RoundState;

/// Errors that can occur while building or drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
    /// The card source had no valid definition for a card.
    #[error("missing card definition for rank {rank} of {suit:?}")]
    MissingCardDefinition {
        /// Suit of the missing card.
        suit: Suit,
        /// Rank of the missing card.
        rank: u8,
    },
    /// A card appeared more than once in a stacked deck.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is still in progress.
    #[error("cannot start a round while in {0:?}")]
    InvalidRoundState(RoundState),
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck for the initial deal")]
    DeckExhausted,
    /// A stacked deck had cards drawn from it before the round.
    #[error("stacked deck holds {0} cards, expected a full deck")]
    IncompleteDeck(usize),
    /// The card source had no valid definition for a card.
    #[error("missing card definition for rank {rank} of {suit:?}")]
    MissingCardDefinition {
        /// Suit of the missing card.
        suit: Suit,
        /// Rank of the missing card.
        rank: u8,
    },
    /// A card appeared more than once in a stacked deck.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

impl From<DeckError> for StartError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
            DeckError::MissingCardDefinition { suit, rank } => {
                Self::MissingCardDefinition { suit, rank }
            }
            DeckError::DuplicateCard(card) => Self::DuplicateCard(card),
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player actions are only accepted during the player's turn.
    #[error("player action not allowed in {0:?}")]
    InvalidRoundState(RoundState),
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The dealer only plays during the dealer's turn.
    #[error("dealer cannot play in {0:?}")]
    InvalidRoundState(RoundState),
}

/// Errors that can occur when clearing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClearError {
    /// A round is still being played.
    #[error("cannot clear the round while in {0:?}")]
    InvalidRoundState(RoundState),
}
