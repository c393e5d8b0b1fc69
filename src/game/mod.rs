//! Table engine and round state management.

use core::fmt;

use tracing::{debug, info};

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::hand::Hand;
use crate::highscore::{HighScore, HighScoreStore};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::snapshot::{CardFace, HandView, TableSnapshot};
use crate::source::{CardSource, RandomSource};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Command, Flow, RoundState};

const AWAITING_BET_MESSAGE: &str = "Set your bet, then deal.";
const PLAYER_TURN_MESSAGE: &str = "Hit or stand?";

/// A single-player blackjack table.
///
/// The table owns everything a session needs: the bankroll, the bet, both
/// hands, the high score and the source cards are drawn from. Drive it with
/// [`Table::apply`], or call the individual operations to get typed errors.
///
/// # Example
///
/// ```
/// use bjtable::{Command, MemoryStore, RoundState, Table, TableOptions};
///
/// let mut table = Table::seeded(TableOptions::default(), 42, MemoryStore::new());
/// table.apply(Command::Deal);
/// assert_eq!(table.state(), RoundState::PlayerTurn);
/// table.apply(Command::Stand);
/// assert_eq!(table.state(), RoundState::RoundOver);
/// ```
pub struct Table<S, H> {
    /// Table options.
    options: TableOptions,
    /// Current round state.
    state: RoundState,
    /// Player money.
    bankroll: Bankroll,
    /// Bet for the next or current round.
    bet: u64,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Best bankroll ever seen.
    high_score: HighScore<H>,
    /// Status line for the player.
    message: &'static str,
    /// Result of the round just settled.
    last_result: Option<RoundResult>,
    /// Where cards come from.
    source: S,
}

impl<H: HighScoreStore> Table<RandomSource, H> {
    /// Creates a table drawing from a generator seeded with `seed`.
    pub fn seeded(options: TableOptions, seed: u64, store: H) -> Self {
        Self::new(options, RandomSource::seeded(seed), store)
    }
}

impl<S: CardSource, H: HighScoreStore> Table<S, H> {
    /// Creates a table, loading the high score from `store`.
    pub fn new(options: TableOptions, source: S, store: H) -> Self {
        let bankroll = Bankroll::new(options.starting_stake);
        let high_score = HighScore::load(store, options.starting_stake);

        Self {
            options,
            state: RoundState::AwaitingBet,
            bankroll,
            bet: options.opening_bet(bankroll.amount()),
            player: Hand::new(),
            dealer: Hand::new(),
            high_score,
            message: AWAITING_BET_MESSAGE,
            last_result: None,
            source,
        }
    }

    /// Applies a command, ignoring it if it does not fit the current state.
    ///
    /// Returns [`Flow::Quit`] only for [`Command::Quit`], which is accepted
    /// in every state.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => {
                info!(bankroll = self.bankroll.amount(), "player left the table");
                return Flow::Quit;
            }
            Command::RaiseBet => ignore_rejected(command, self.raise_bet()),
            Command::LowerBet => ignore_rejected(command, self.lower_bet()),
            Command::Deal => ignore_rejected(command, self.deal()),
            Command::Hit => ignore_rejected(command, self.hit()),
            Command::Stand => ignore_rejected(command, self.stand()),
            Command::Continue => ignore_rejected(command, self.continue_round()),
        }
        Flow::Continue
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the bankroll.
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the current bet.
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the high score.
    pub const fn high_score(&self) -> u64 {
        self.high_score.value()
    }

    /// Returns the high-score store.
    pub const fn store(&self) -> &H {
        self.high_score.store()
    }

    /// Returns the status line.
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Returns the result of the settled round, until the next continue.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns a view of the table for display.
    ///
    /// The dealer's second card stays hidden, and the dealer's total unknown,
    /// until the round is over.
    pub fn snapshot(&self) -> TableSnapshot {
        let revealed = self.state == RoundState::RoundOver;

        let player = HandView {
            cards: self.player.cards().iter().copied().map(CardFace::Visible).collect(),
            score: (!self.player.is_empty()).then(|| self.player.value()),
        };
        let dealer = HandView {
            cards: self
                .dealer
                .cards()
                .iter()
                .enumerate()
                .map(|(index, &card)| {
                    if index == 1 && !revealed {
                        CardFace::Hidden
                    } else {
                        CardFace::Visible(card)
                    }
                })
                .collect(),
            score: (revealed && !self.dealer.is_empty()).then(|| self.dealer.value()),
        };

        TableSnapshot {
            state: self.state,
            bankroll: self.bankroll.amount(),
            high_score: self.high_score.value(),
            bet: (self.state == RoundState::AwaitingBet).then_some(self.bet),
            player,
            dealer,
            message: self.message,
            bankrupt: self.bankroll.is_bankrupt(),
        }
    }

    /// Draws one card from the source.
    fn draw(&mut self) -> Card {
        self.source.draw()
    }
}

fn ignore_rejected<T, E: fmt::Display>(command: Command, result: Result<T, E>) {
    if let Err(err) = result {
        debug!(?command, %err, "command ignored");
    }
}
