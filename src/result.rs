//! Round outcome types.

use crate::scoring::BLACKJACK;

/// Winner of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Decides the outcome from final totals once the player has stood.
    ///
    /// A dealer bust always loses; otherwise the higher total wins.
    #[must_use]
    pub const fn from_totals(player: u16, dealer: u16) -> Self {
        if dealer > BLACKJACK {
            Self::PlayerWins
        } else if dealer > player {
            Self::DealerWins
        } else if player > dealer {
            Self::PlayerWins
        } else {
            Self::Push
        }
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer stood early because the deck ran out.
    pub deck_exhausted: bool,
}
