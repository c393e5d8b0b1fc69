//! Card types and sampling.

use core::fmt;

use rand::Rng;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in asset order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Clubs, Self::Spades];

    /// Single-letter code used in asset names.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Human-readable suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamond",
            Self::Hearts => "Heart",
            Self::Clubs => "Club",
            Self::Spades => "Spade",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Draws a card uniformly over all 52 rank/suit combinations.
    ///
    /// Every call is independent of the previous ones: there is no deck to
    /// run out of, and the same card may come up any number of times.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let rank = rng.random_range(1..=13);
        let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
        Self::new(suit, rank)
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Rank as shown on the card face: "A", "2" through "10", "J", "Q", "K".
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Value used when scoring, counting an Ace as 11.
    #[must_use]
    pub const fn base_value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Key under which the face image of this card is looked up, e.g. `"10S"`.
    #[must_use]
    pub fn asset_key(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.letter())
    }
}

/// Number of distinct cards a draw is sampled from.
pub const DECK_SIZE: usize = 52;
