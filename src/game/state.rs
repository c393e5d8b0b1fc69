//! Round state and the command surface.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// No round in progress; the bet can be adjusted.
    AwaitingBet,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled and awaits a continue.
    RoundOver,
}

impl RoundState {
    /// Returns whether cards are on the table.
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        !matches!(self, Self::AwaitingBet)
    }
}

/// A discrete intent from whatever drives the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a round with the current bet.
    Deal,
    /// Increase the bet by one step.
    RaiseBet,
    /// Decrease the bet by one step.
    LowerBet,
    /// Draw a card.
    Hit,
    /// Keep the hand and let the dealer play.
    Stand,
    /// Clear the finished round and return to betting.
    Continue,
    /// End the session.
    Quit,
}

impl Command {
    /// Maps a key press to a command, using the classic table bindings.
    ///
    /// Enter deals, `+` and `-` move the bet, `h` hits, `s` stands, `r`
    /// continues, and `q` or Escape quits. Letters are case-insensitive.
    ///
    /// ```
    /// use bjtable::Command;
    ///
    /// assert_eq!(Command::from_key('H'), Some(Command::Hit));
    /// assert_eq!(Command::from_key('x'), None);
    /// ```
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            '\r' | '\n' | 'd' => Some(Self::Deal),
            '+' | '=' => Some(Self::RaiseBet),
            '-' | '_' => Some(Self::LowerBet),
            'h' => Some(Self::Hit),
            's' => Some(Self::Stand),
            'r' => Some(Self::Continue),
            'q' | '\u{1b}' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the session goes on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// The player asked to leave.
    Quit,
}
