//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundController`] type that runs one player against
//! an automated dealer: building and shuffling the deck, the opening deal,
//! player hits and stands, dealer auto-play, and resolution. Presentation is
//! left to the caller, which renders the [`RoundEvent`]s the controller queues.
//!
//! # Example
//!
//! ```
//! use bjround::{RoundController, RoundOptions, RoundState};
//!
//! let mut round = RoundController::new(RoundOptions::default(), 42);
//! round.start_round().unwrap();
//! round.player_stand().unwrap();
//!
//! while !round.is_dealer_turn_complete() {
//!     round.dealer_step().unwrap();
//! }
//! assert_eq!(round.state(), RoundState::Resolved);
//! assert!(round.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod scoring;

// Re-export main types
pub use card::{Card, CardSource, DECK_SIZE, StandardCards, Suit};
pub use deck::Deck;
pub use error::{ActionError, ClearError, DealerError, DeckError, StartError};
pub use events::RoundEvent;
pub use hand::{DealtCard, FaceState, Hand, Participant};
pub use options::RoundOptions;
pub use result::{Outcome, RoundResult};
pub use round::{DealerStep, RoundController, RoundState};
pub use scoring::Score;
