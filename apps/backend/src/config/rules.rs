//! Fixed rule constants for Dutch Blitz scoring.
//!
//! Rules are passed explicitly into validation and aggregation instead of
//! being read from globals, so tests can exercise alternate thresholds.

use std::ops::RangeInclusive;

pub const MIN_BLITZ_PILE: i32 = 0;
pub const MAX_BLITZ_PILE: i32 = 10;
pub const MIN_CARDS: i32 = 0;
pub const MAX_CARDS: i32 = 40;
pub const MIN_CARDS_ON_BLITZ: i32 = 6;
pub const WIN_THRESHOLD: i32 = 75;

/// Immutable rule set consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub min_blitz_pile: i32,
    pub max_blitz_pile: i32,
    pub min_cards: i32,
    pub max_cards: i32,
    /// Cards a blitzing player must have played for the round to count.
    pub min_cards_on_blitz: i32,
    /// Cumulative total at or above which a game may finish.
    pub win_threshold: i32,
}

impl RulesConfig {
    pub const STANDARD: RulesConfig = RulesConfig {
        min_blitz_pile: MIN_BLITZ_PILE,
        max_blitz_pile: MAX_BLITZ_PILE,
        min_cards: MIN_CARDS,
        max_cards: MAX_CARDS,
        min_cards_on_blitz: MIN_CARDS_ON_BLITZ,
        win_threshold: WIN_THRESHOLD,
    };

    pub fn blitz_pile_range(&self) -> RangeInclusive<i32> {
        self.min_blitz_pile..=self.max_blitz_pile
    }

    pub fn cards_range(&self) -> RangeInclusive<i32> {
        self.min_cards..=self.max_cards
    }

    /// Both fields of a score row sit inside their structural bounds.
    pub fn in_bounds(&self, blitz_pile_remaining: i32, total_cards_played: i32) -> bool {
        self.blitz_pile_range().contains(&blitz_pile_remaining)
            && self.cards_range().contains(&total_cards_played)
    }

    /// A blitz means the blitz pile is fully depleted.
    #[inline]
    pub fn is_blitz(&self, blitz_pile_remaining: i32) -> bool {
        blitz_pile_remaining == self.min_blitz_pile
    }

    #[inline]
    pub fn reaches_threshold(&self, total: i32) -> bool {
        total >= self.win_threshold
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Score a single round entry: cards played minus twice the cards left in the blitz pile.
///
/// Saturates rather than overflowing on values far outside the bounds.
#[inline]
pub fn round_value(blitz_pile_remaining: i32, total_cards_played: i32) -> i32 {
    total_cards_played.saturating_sub(blitz_pile_remaining.saturating_mul(2))
}
