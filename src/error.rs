//! Error types for table operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while adjusting the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only change while no round is in progress.
    #[error("invalid table state for betting")]
    InvalidState,
    /// Raising the bet would exceed the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Lowering the bet would take it under the table minimum.
    #[error("bet would fall below the table minimum")]
    BelowMinimum,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress or has not been continued.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// The bet is larger than the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The player is bankrupt and must continue first.
    #[error("player is bankrupt")]
    Bankrupt,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// The hand already holds the maximum number of cards.
    #[error("hand is full")]
    HandFull,
}

/// Errors that can occur when moving on from a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContinueError {
    /// The round is not over yet.
    #[error("round is not over")]
    InvalidState,
}

/// Errors raised by a high-score store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[cfg(feature = "std")]
    #[error("high score storage failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stored record is not a non-negative integer.
    #[error("malformed high score record: {0:?}")]
    Malformed(String),
    /// The store refused the write.
    #[error("high score store is unavailable")]
    Unavailable,
}
