//! Hand scoring and the bounded hand container.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;

/// Maximum number of cards a hand may hold.
pub const MAX_HAND_SIZE: usize = 12;

/// Best total at or below which a hand is still live.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.base_value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Best total of `cards`.
///
/// Every Ace starts at 11 and is lowered to 1, one at a time, only while the
/// total is over 21.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` total more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Returns whether the best total of `cards` still counts an Ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// A hand of cards, held by either the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandFull`] if the hand already holds
    /// [`MAX_HAND_SIZE`] cards.
    pub fn add_card(&mut self, card: Card) -> Result<(), ActionError> {
        if self.is_full() {
            return Err(ActionError::HandFull);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand can take no more cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    /// Collects at most [`MAX_HAND_SIZE`] cards; the rest are dropped.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().take(MAX_HAND_SIZE).collect(),
        }
    }
}
