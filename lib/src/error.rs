//! # Errors
use std::fmt;

/// Error represents every way a query against the library can fail.
///
/// Combinatorially impossible requests (a hand larger than the deck, more lands
/// required than the deck holds) are not errors; they resolve to a probability of 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Error {
  /// A query references a category that is not present in the supplied counts
  InvalidRequest(String),
  /// A deck list names a card that is not in the card collection
  UnknownCard(String),
  /// A deck list line cannot be parsed
  BadDecklist(String),
  /// A mana cost string cannot be parsed
  BadManaCost(String),
  /// A report was requested for a deck without cards
  EmptyDeck,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
      Error::UnknownCard(name) => write!(f, "cannot find card named \"{}\"", name),
      Error::BadDecklist(line) => write!(f, "cannot parse deck list line: {}", line),
      Error::BadManaCost(cost) => write!(f, "cannot parse mana cost: {}", cost),
      Error::EmptyDeck => write!(f, "deck is empty"),
    }
  }
}

impl std::error::Error for Error {}
