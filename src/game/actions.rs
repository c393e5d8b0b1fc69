use tracing::{debug, info};

use crate::card::Card;
use crate::error::{ActionError, ContinueError};
use crate::highscore::HighScoreStore;
use crate::result::RoundResult;
use crate::source::CardSource;

use super::{AWAITING_BET_MESSAGE, RoundState, Table};

impl<S: CardSource, H: HighScoreStore> Table<S, H> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A card that takes the hand over 21 settles the round as a loss at
    /// once; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the hand is full.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if self.player.is_full() {
            return Err(ActionError::HandFull);
        }

        let card = self.draw();
        self.player.add_card(card)?;
        debug!(%card, total = self.player.value(), "player hits");

        if self.player.is_bust() {
            self.settle();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand and the round is settled before this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        self.state = RoundState::DealerTurn;
        let drawn = self.dealer_play();
        debug!(drawn = drawn.len(), total = self.dealer.value(), "dealer stands");

        Ok(self.settle())
    }

    /// Clears the finished round and returns to betting.
    ///
    /// A bankrupt player gets the starting stake back. The bet returns to
    /// the default, lowered in whole steps if the bankroll cannot cover it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn continue_round(&mut self) -> Result<(), ContinueError> {
        if self.state != RoundState::RoundOver {
            return Err(ContinueError::InvalidState);
        }

        if self.bankroll.is_bankrupt() {
            self.bankroll.reset();
            info!(bankroll = self.bankroll.amount(), "bankroll restored after bankruptcy");
        }

        self.player.clear();
        self.dealer.clear();
        self.bet = self.options.opening_bet(self.bankroll.amount());
        self.last_result = None;
        self.message = AWAITING_BET_MESSAGE;
        self.state = RoundState::AwaitingBet;
        Ok(())
    }
}
