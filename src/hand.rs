//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::scoring::{self, Score};

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

/// Whether a dealt card is visible to the opposing party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceState {
    /// The card is visible.
    FaceUp,
    /// The card is concealed.
    FaceDown,
}

/// A card in a hand together with its face state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealtCard {
    /// The card.
    pub card: Card,
    /// Whether the card is showing.
    pub face: FaceState,
}

impl DealtCard {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn visible(&self) -> Option<Card> {
        match self.face {
            FaceState::FaceUp => Some(self.card),
            FaceState::FaceDown => None,
        }
    }
}

/// An ordered hand of dealt cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<DealtCard>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card, face: FaceState) {
        self.cards.push(DealtCard { card, face });
    }

    /// Turns the card at `index` face up.
    ///
    /// Returns the card, or `None` if there is no card at `index`.
    pub fn reveal(&mut self, index: usize) -> Option<Card> {
        let dealt = self.cards.get_mut(index)?;
        dealt.face = FaceState::FaceUp;
        Some(dealt.card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[DealtCard] {
        &self.cards
    }

    /// Returns the cards as the opposing party sees them.
    ///
    /// Face-down cards are reported as `None`.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Option<Card>> {
        self.cards.iter().map(DealtCard::visible).collect()
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|d| d.face == FaceState::FaceDown)
    }

    /// Scores every card, hidden or not.
    #[must_use]
    pub fn score(&self) -> Score {
        scoring::score(self.cards.iter().map(|d| &d.card))
    }

    /// Scores only the face-up cards.
    #[must_use]
    pub fn visible_score(&self) -> Score {
        scoring::score(
            self.cards
                .iter()
                .filter(|d| d.face == FaceState::FaceUp)
                .map(|d| &d.card),
        )
    }

    /// Returns whether the hand has gone over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
