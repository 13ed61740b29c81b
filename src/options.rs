//! Round configuration options.

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_dealer_stands_at(17)
///     .with_stand_on_soft_17(true)
///     .with_shuffle(false);
/// assert!(!options.shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stands_at: u8,
    /// Whether dealer stands on a soft total equal to `dealer_stands_at`.
    pub stand_on_soft_17: bool,
    /// Whether the deck is shuffled at the start of each round.
    ///
    /// When disabled, cards are dealt in canonical order.
    pub shuffle: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            stand_on_soft_17: true,
            shuffle: true,
        }
    }
}

impl RoundOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
