//! # Curve probabilities
//!
//! Closed-form probabilities for "enough lands and a card by turn T" style questions.
//! The hand on turn `turn` is the opening hand plus one draw per turn, see [`hand_size`].
//! Impossible combinations (a hand larger than the deck, categories larger than the deck)
//! resolve to 0.0.
use crate::combinatorics::{binomial, hypergeometric, Ways};
use crate::outcome::{LandCardOutcomes, LandOutcomes};
use std::cmp::min;

/// Number of cards in the opening hand
pub const OPENING_HAND_SIZE: usize = 7;

/// Returns the number of cards seen by `turn`
#[inline]
pub fn hand_size(turn: usize) -> usize {
  OPENING_HAND_SIZE + turn
}

/// Returns the probability to hold at least `turn` lands and at least one of `card_count`
/// copies of a card after drawing `hand_size(turn)` cards from a deck of `deck_size` cards
/// that contains `land_count` lands
pub fn probability_on_curve(
  deck_size: usize,
  turn: usize,
  land_count: usize,
  card_count: usize,
) -> f64 {
  if card_count == 0 {
    return 0.0;
  }
  let hand = hand_size(turn);
  let total = binomial(deck_size as i64, hand as i64);
  if total.is_zero() {
    return 0.0;
  }
  let other_count = deck_size as i64 - land_count as i64 - card_count as i64;
  let p: f64 = LandCardOutcomes::new(hand, turn, card_count)
    .map(|o| {
      let ways = binomial(land_count as i64, o.lands as i64)
        * binomial(card_count as i64, o.cards as i64)
        * binomial(other_count, o.others as i64);
      ways.probability(total)
    })
    .sum();
  clamp_probability(p)
}

/// Returns the probability to hold at least `turn` lands after drawing `hand_size(turn)`
/// cards, regardless of land colors
pub fn probability_for_commander_curve(deck_size: usize, turn: usize, land_count: usize) -> f64 {
  let hand = hand_size(turn);
  let total = binomial(deck_size as i64, hand as i64);
  if total.is_zero() {
    return 0.0;
  }
  let other_count = deck_size as i64 - land_count as i64;
  let p: f64 = LandOutcomes::new(hand, turn)
    .map(|o| {
      let ways: Ways =
        binomial(land_count as i64, o.lands as i64) * binomial(other_count, o.others as i64);
      ways.probability(total)
    })
    .sum();
  clamp_probability(p)
}

/// Returns the probability that the number of `count` cards drawn by `turn` lies within
/// `min_count..=max_count`
pub fn probability_lands_in_range(
  deck_size: usize,
  turn: usize,
  count: usize,
  min_count: usize,
  max_count: usize,
) -> f64 {
  let draws = hand_size(turn);
  let p: f64 = (min_count..=max_count)
    .map(|k| hypergeometric(deck_size, draws, count, k))
    .sum();
  clamp_probability(p)
}

/// Returns the probability to draw `at_least` or more of `count` cards by `turn`
pub fn probability_at_least(deck_size: usize, turn: usize, count: usize, at_least: usize) -> f64 {
  let draws = hand_size(turn);
  let max_count = min(draws, count);
  if at_least > max_count {
    return 0.0;
  }
  probability_lands_in_range(deck_size, turn, count, at_least, max_count)
}

/// Returns the probability to see at least one of `count` cards within `draws` cards
pub fn probability_of_drawing_within(deck_size: usize, draws: usize, count: usize) -> f64 {
  if count == 0 || draws > deck_size {
    return 0.0;
  }
  clamp_probability(1.0 - hypergeometric(deck_size, draws, count, 0))
}

#[inline]
pub(crate) fn clamp_probability(p: f64) -> f64 {
  debug_assert!(!p.is_nan(), "probability is NaN");
  if p.is_nan() {
    0.0
  } else {
    p.max(0.0).min(1.0)
  }
}
