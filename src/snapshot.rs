//! Read-only views of the table for renderers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::RoundState;

/// Asset key of the card back.
pub const HIDDEN_ASSET_KEY: &str = "back";

/// A card as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    /// Face up.
    Visible(Card),
    /// Face down.
    Hidden,
}

impl CardFace {
    /// Key used to look up the image for this face.
    ///
    /// Renderers draw nothing when no image exists for the key.
    #[must_use]
    pub fn asset_key(&self) -> String {
        match self {
            Self::Visible(card) => card.asset_key(),
            Self::Hidden => String::from(HIDDEN_ASSET_KEY),
        }
    }

    /// The card, if face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Visible(card) => Some(*card),
            Self::Hidden => None,
        }
    }
}

/// One hand as seen from the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<CardFace>,
    /// Total, if it may be shown.
    pub score: Option<u8>,
}

/// Everything a renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Current round state.
    pub state: RoundState,
    /// Player money.
    pub bankroll: u64,
    /// Best bankroll ever seen.
    pub high_score: u64,
    /// The bet, shown only while it can still be changed.
    pub bet: Option<u64>,
    /// The player's hand, always face up.
    pub player: HandView,
    /// The dealer's hand.
    pub dealer: HandView,
    /// Status line.
    pub message: &'static str,
    /// Whether the player is bankrupt.
    pub bankrupt: bool,
}
