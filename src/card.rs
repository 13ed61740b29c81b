//! Card types and the card identity collaborator.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::is_valid`]
    /// to check that it lies in `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the rank is one of the thirteen standard ranks.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= 1 && self.rank <= 13
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit.symbol()),
            11 => write!(f, "J{}", self.suit.symbol()),
            12 => write!(f, "Q{}", self.suit.symbol()),
            13 => write!(f, "K{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Supplies the card identities a deck is built from.
///
/// The deck asks for every (suit, rank) pair in canonical order. Returning
/// `None`, or a card with a different identity, aborts deck construction.
pub trait CardSource {
    /// Returns the card definition for `suit` and `rank`, if one exists.
    fn definition(&self, suit: Suit, rank: u8) -> Option<Card>;
}

/// The standard 52-card French deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCards;

impl CardSource for StandardCards {
    fn definition(&self, suit: Suit, rank: u8) -> Option<Card> {
        let card = Card::new(suit, rank);
        card.is_valid().then_some(card)
    }
}
