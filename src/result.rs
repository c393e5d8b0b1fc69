//! Round result types for settlement.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player has the higher total.
    Win,
    /// Dealer went over 21 while the player stood.
    DealerBust,
    /// Equal totals.
    Push,
    /// Dealer has the higher total.
    Lose,
    /// Player went over 21.
    PlayerBust,
}

impl HandOutcome {
    /// Classifies a finished round from both final totals.
    ///
    /// A player bust loses before the dealer's total is considered.
    #[must_use]
    pub const fn evaluate(player_value: u8, dealer_value: u8) -> Self {
        if player_value > 21 {
            Self::PlayerBust
        } else if dealer_value > 21 {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::Win
        } else if player_value == dealer_value {
            Self::Push
        } else {
            Self::Lose
        }
    }

    /// Returns whether the player collects the bet.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::DealerBust)
    }

    /// Returns whether the player forfeits the bet.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::PlayerBust)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: HandOutcome,
    /// The amount wagered.
    pub bet: u64,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Net bankroll change (positive = profit, negative = loss).
    pub net: i64,
    /// Whether the round left the player bankrupt.
    pub bankrupt: bool,
}

impl RoundResult {
    /// Status line describing the result.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match (self.outcome, self.bankrupt) {
            (HandOutcome::PlayerBust, true) => "Bust! You are bankrupt.",
            (_, true) => "Game over! You are bankrupt.",
            (HandOutcome::PlayerBust, false) => "Bust! You lose.",
            (HandOutcome::Win | HandOutcome::DealerBust, false) => "You win!",
            (HandOutcome::Push, false) => "Push (tie).",
            (HandOutcome::Lose, false) => "Dealer wins.",
        }
    }
}
