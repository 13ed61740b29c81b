//! Hand scoring.

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Provisional value of a rank, counting an Ace as 11.
#[must_use]
pub const fn card_value(rank: u8) -> u16 {
    match rank {
        1 => 11,
        2..=10 => rank as u16,
        11..=13 => 10,
        _ => 0,
    }
}

/// The best total of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    /// Highest total that does not bust, or the lowest total if every
    /// arrangement busts.
    pub total: u16,
    /// Whether an Ace is still counted as 11.
    pub soft: bool,
}

impl Score {
    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Scores a set of cards.
///
/// Aces count as 11 and are demoted to 1, one at a time, while the total
/// would otherwise bust.
///
/// ```
/// use bjround::{Card, Suit, scoring};
///
/// let score = scoring::score(&[Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)]);
/// assert_eq!(score.total, 21);
/// assert!(score.soft);
/// ```
#[must_use]
pub fn score<'a, I>(cards: I) -> Score
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut total: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        total = total.saturating_add(card_value(card.rank));
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    Score {
        total,
        soft: aces > 0,
    }
}
