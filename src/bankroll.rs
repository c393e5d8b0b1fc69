//! The player's money.

use crate::result::HandOutcome;

/// Tracks the bankroll and whether the player has gone bankrupt.
///
/// The amount is unsigned, so it can never be observed below zero: a loss
/// that reaches or passes zero clamps to zero and raises the bankrupt flag.
/// The flag stays up until [`Bankroll::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    amount: u64,
    starting_stake: u64,
    bankrupt: bool,
}

impl Bankroll {
    /// Creates a bankroll holding `starting_stake`.
    #[must_use]
    pub const fn new(starting_stake: u64) -> Self {
        Self {
            amount: starting_stake,
            starting_stake,
            bankrupt: false,
        }
    }

    /// Current amount of money.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Amount restored by [`Bankroll::reset`].
    #[must_use]
    pub const fn starting_stake(&self) -> u64 {
        self.starting_stake
    }

    /// Returns whether the player has lost everything.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// Returns whether `amount` can be wagered.
    #[must_use]
    pub const fn can_cover(&self, amount: u64) -> bool {
        !self.bankrupt && amount <= self.amount
    }

    /// Adds a won bet.
    pub const fn apply_win(&mut self, bet: u64) {
        self.amount = self.amount.saturating_add(bet);
    }

    /// Removes a lost bet.
    pub const fn apply_loss(&mut self, bet: u64) {
        if bet >= self.amount {
            self.amount = 0;
            self.bankrupt = true;
        } else {
            self.amount -= bet;
        }
    }

    /// A tie leaves the bankroll untouched.
    pub const fn apply_push(&mut self) {}

    /// Applies `outcome` for a wager of `bet` and returns the signed change.
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in i64")]
    pub const fn settle(&mut self, outcome: HandOutcome, bet: u64) -> i64 {
        let before = self.amount;
        if outcome.is_win() {
            self.apply_win(bet);
        } else if outcome.is_loss() {
            self.apply_loss(bet);
        } else {
            self.apply_push();
        }
        self.amount as i64 - before as i64
    }

    /// Restores the starting stake and clears bankruptcy.
    pub const fn reset(&mut self) {
        self.amount = self.starting_stake;
        self.bankrupt = false;
    }
}
