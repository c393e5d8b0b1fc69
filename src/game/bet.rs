use core::iter;

use tracing::info;

use crate::error::{BetError, DealError};
use crate::highscore::HighScoreStore;
use crate::source::CardSource;

use super::{PLAYER_TURN_MESSAGE, RoundState, Table};

impl<S: CardSource, H: HighScoreStore> Table<S, H> {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        Ok(())
    }

    /// Raises the bet by one step and returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the raised bet would
    /// exceed the bankroll.
    pub fn raise_bet(&mut self) -> Result<u64, BetError> {
        self.ensure_betting()?;

        let raised = self.bet.saturating_add(self.options.bet_step);
        if raised > self.bankroll.amount() {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = raised;
        Ok(raised)
    }

    /// Lowers the bet by one step and returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the lowered bet would be
    /// under the table minimum.
    pub fn lower_bet(&mut self) -> Result<u64, BetError> {
        self.ensure_betting()?;

        let lowered = self
            .bet
            .checked_sub(self.options.bet_step)
            .filter(|&bet| bet >= self.options.min_bet)
            .ok_or(BetError::BelowMinimum)?;

        self.bet = lowered;
        Ok(lowered)
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not awaiting a bet, the player is
    /// bankrupt, or the bet exceeds the bankroll.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::AwaitingBet {
            return Err(DealError::InvalidState);
        }
        if self.bankroll.is_bankrupt() {
            return Err(DealError::Bankrupt);
        }
        if !self.bankroll.can_cover(self.bet) {
            return Err(DealError::InsufficientFunds);
        }

        self.player = iter::repeat_with(|| self.source.draw()).take(2).collect();
        self.dealer = iter::repeat_with(|| self.source.draw()).take(2).collect();
        self.last_result = None;

        info!(
            bet = self.bet,
            bankroll = self.bankroll.amount(),
            player = self.player.value(),
            "dealt a new round"
        );

        self.state = RoundState::PlayerTurn;
        self.message = PLAYER_TURN_MESSAGE;
        Ok(())
    }
}
