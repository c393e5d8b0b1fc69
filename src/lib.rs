//! A single-player blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs the round flow for one
//! player against the dealer: betting, dealing, hitting and standing, dealer
//! play, settlement, and a high score that survives between sessions.
//! Cards are sampled independently for every draw rather than dealt from a
//! finite shoe.
//!
//! # Example
//!
//! ```
//! use bjtable::{Command, Flow, MemoryStore, Table, TableOptions};
//!
//! let mut table = Table::seeded(TableOptions::default(), 7, MemoryStore::new());
//! table.apply(Command::RaiseBet);
//! assert_eq!(table.bet(), 110);
//! assert_eq!(table.apply(Command::Quit), Flow::Quit);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod highscore;
pub mod options;
pub mod result;
pub mod snapshot;
pub mod source;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, ContinueError, DealError, StoreError};
pub use game::{Command, Flow, RoundState, Table};
pub use hand::{Hand, MAX_HAND_SIZE, is_bust, is_soft, score};
#[cfg(feature = "std")]
pub use highscore::FileStore;
pub use highscore::{HighScore, HighScoreStore, MemoryStore};
pub use options::TableOptions;
pub use result::{HandOutcome, RoundResult};
pub use snapshot::{CardFace, HandView, TableSnapshot};
pub use source::{CardSource, RandomSource, StackedSource};
