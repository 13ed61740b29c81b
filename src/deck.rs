//! The 52-card deck and its shuffle.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, CardSource, DECK_SIZE, Suit};
use crate::error::DeckError;

const fn slot(card: Card) -> usize {
    card.suit as usize * 13 + (card.rank as usize - 1)
}

/// The undrawn cards of a round, front card first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.reset();
        deck
    }

    /// Builds a stacked deck from an explicit draw order.
    ///
    /// The first element is drawn first. `cards` must be a permutation of the
    /// 52-card universe.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice and
    /// [`DeckError::MissingCardDefinition`] if a card is invalid or absent.
    pub fn from_order(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];

        for &card in &cards {
            if !card.is_valid() {
                return Err(DeckError::MissingCardDefinition {
                    suit: card.suit,
                    rank: card.rank,
                });
            }
            let slot = slot(card);
            if seen[slot] {
                return Err(DeckError::DuplicateCard(card));
            }
            seen[slot] = true;
        }

        for suit in Suit::ALL {
            for rank in 1..=13 {
                if !seen[slot(Card::new(suit, rank))] {
                    return Err(DeckError::MissingCardDefinition { suit, rank });
                }
            }
        }

        Ok(Self {
            cards: cards.into(),
        })
    }

    /// Rebuilds the full 52-card universe in canonical order.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push_back(Card::new(suit, rank));
            }
        }
    }

    /// Rebuilds the deck from the card identities supplied by `source`.
    ///
    /// On error the deck is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::MissingCardDefinition`] if `source` has no
    /// definition for a card or supplies a card with the wrong identity.
    pub fn reset_from<S: CardSource + ?Sized>(&mut self, source: &S) -> Result<(), DeckError> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                match source.definition(suit, rank) {
                    Some(card) if card == Card::new(suit, rank) => cards.push_back(card),
                    _ => return Err(DeckError::MissingCardDefinition { suit, rank }),
                }
            }
        }

        self.cards = cards;
        Ok(())
    }

    /// Shuffles the deck in place with a Fisher–Yates pass.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted)
    }

    /// Discards every remaining card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the remaining cards in draw order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

