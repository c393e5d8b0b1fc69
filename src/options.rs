//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_stake(500)
///     .with_default_bet(50);
/// assert_eq!(options.starting_stake, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Bankroll at the start of a session and after bankruptcy.
    pub starting_stake: u64,
    /// Bet offered at the start of every betting phase.
    pub default_bet: u64,
    /// Smallest bet allowed.
    pub min_bet: u64,
    /// Amount a single raise or lower changes the bet by.
    pub bet_step: u64,
    /// Dealer draws while below this total.
    pub dealer_stands_on: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_stake: 1000,
            default_bet: 100,
            min_bet: 10,
            bet_step: 10,
            dealer_stands_on: 17,
        }
    }
}

impl TableOptions {
    /// Sets the starting stake.
    #[must_use]
    pub const fn with_starting_stake(mut self, stake: u64) -> Self {
        self.starting_stake = stake;
        self
    }

    /// Sets the default bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_default_bet(20);
    /// assert_eq!(options.default_bet, 20);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: u64) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, bet: u64) -> Self {
        self.min_bet = bet;
        self
    }

    /// Sets the bet step.
    #[must_use]
    pub const fn with_bet_step(mut self, step: u64) -> Self {
        self.bet_step = step;
        self
    }

    /// Sets the total the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Largest bet reachable from the default in whole steps that does not
    /// exceed `bankroll`, never below the minimum.
    #[must_use]
    pub const fn opening_bet(&self, bankroll: u64) -> u64 {
        let mut bet = self.default_bet;
        while bet > bankroll && self.bet_step > 0 && bet >= self.min_bet + self.bet_step {
            bet -= self.bet_step;
        }
        bet
    }
}
