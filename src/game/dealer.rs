use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::highscore::HighScoreStore;
use crate::result::{HandOutcome, RoundResult};
use crate::source::CardSource;

use super::{RoundState, Table};

impl<S: CardSource, H: HighScoreStore> Table<S, H> {
    /// Dealer draws until reaching the stand total or filling the hand.
    ///
    /// Soft totals get no special treatment: a soft 17 stands like any 17.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();

        while self.dealer.value() < self.options.dealer_stands_on && !self.dealer.is_full() {
            let card = self.draw();
            if self.dealer.add_card(card).is_err() {
                break;
            }
            debug!(%card, total = self.dealer.value(), "dealer draws");
            drawn_cards.push(card);
        }

        drawn_cards
    }

    /// Settles the bet against the final hands and ends the round.
    ///
    /// The bankroll is updated first, then the high score, then the state
    /// moves to [`RoundState::RoundOver`].
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = HandOutcome::evaluate(player_value, dealer_value);

        let net = self.bankroll.settle(outcome, self.bet);
        self.high_score.record_if_higher(self.bankroll.amount());

        let result = RoundResult {
            outcome,
            bet: self.bet,
            player_value,
            dealer_value,
            net,
            bankrupt: self.bankroll.is_bankrupt(),
        };

        if result.bankrupt {
            self.bet = self.options.default_bet;
        }

        info!(
            ?outcome,
            bet = result.bet,
            player = player_value,
            dealer = dealer_value,
            net,
            bankroll = self.bankroll.amount(),
            "round settled"
        );

        self.message = result.message();
        self.last_result = Some(result);
        self.state = RoundState::RoundOver;
        result
    }
}
