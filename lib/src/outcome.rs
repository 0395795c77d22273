//! # Draw outcome enumeration
//!
//! A hand of `hand` cards drawn from a deck is split into three disjoint categories:
//! lands, copies of a tracked card, and everything else. The iterators in this module
//! yield each qualifying `(lands, cards, others)` split exactly once, so summing the
//! probability of every yielded outcome never double counts.

/// DrawOutcome represents how many cards of each category a hand contains
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawOutcome {
  pub lands: usize,
  pub cards: usize,
  pub others: usize,
}

impl DrawOutcome {
  /// Returns the number of cards in the hand
  pub fn len(&self) -> usize {
    self.lands + self.cards + self.others
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Yields every outcome with at least `min_lands` lands and between 1 and `max_cards`
/// copies of the tracked card, in order of ascending lands and then ascending cards
#[derive(Debug, Clone)]
pub struct LandCardOutcomes {
  hand: usize,
  max_cards: usize,
  lands: usize,
  cards: usize,
}

impl LandCardOutcomes {
  pub fn new(hand: usize, min_lands: usize, max_cards: usize) -> Self {
    Self {
      hand,
      max_cards,
      lands: min_lands,
      cards: 1,
    }
  }
}

impl Iterator for LandCardOutcomes {
  type Item = DrawOutcome;

  fn next(&mut self) -> Option<DrawOutcome> {
    loop {
      // at least one card must fit beside the lands
      if self.max_cards == 0 || self.lands >= self.hand {
        return None;
      }
      if self.cards > self.max_cards || self.lands + self.cards > self.hand {
        self.lands += 1;
        self.cards = 1;
        continue;
      }
      let outcome = DrawOutcome {
        lands: self.lands,
        cards: self.cards,
        others: self.hand - self.lands - self.cards,
      };
      self.cards += 1;
      return Some(outcome);
    }
  }
}

/// Yields every outcome with at least `min_lands` lands and no tracked card,
/// from `min_lands` lands up to a hand made only of lands
#[derive(Debug, Clone)]
pub struct LandOutcomes {
  hand: usize,
  lands: usize,
}

impl LandOutcomes {
  pub fn new(hand: usize, min_lands: usize) -> Self {
    Self {
      hand,
      lands: min_lands,
    }
  }
}

impl Iterator for LandOutcomes {
  type Item = DrawOutcome;

  fn next(&mut self) -> Option<DrawOutcome> {
    if self.lands > self.hand {
      return None;
    }
    let outcome = DrawOutcome {
      lands: self.lands,
      cards: 0,
      others: self.hand - self.lands,
    };
    self.lands += 1;
    Some(outcome)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = (self.hand + 1).saturating_sub(self.lands);
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for LandOutcomes {}
