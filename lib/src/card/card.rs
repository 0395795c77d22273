//! # Internal card representation
//!
pub use crate::card::mana_cost::*;
use crate::error::Error;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// NOTE: PartialEq, Eq, Ord and Hash are implemented below and only consider the name
/// Card represents a Magic: The Gathering card
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Card {
  /// String representing the card name
  pub name: String,
  /// String representing the card mana cost, in "{X}{R}{R}" style format
  pub mana_cost_string: String,
  /// The card type line, e.g. "Legendary Creature — Elf Druid"
  pub type_line: String,
  /// The card type
  pub kind: CardKind,
  /// The converted mana cost
  pub cmc: u8,
  /// ManaCost representation of the card mana cost
  pub mana_cost: ManaCost,
  /// Colors of mana this card can produce, sorted and without duplicates
  pub produced_mana: Vec<ManaColor>,
}

/// CardKind separates lands from everything else
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
  Land,
  Nonland,
}

impl Default for CardKind {
  fn default() -> Self {
    Self::Nonland
  }
}

impl CardKind {
  /// Returns the kind for a type line; any type line containing "Land" is a land
  pub fn from_type_line(type_line: &str) -> Self {
    if type_line.contains("Land") {
      Self::Land
    } else {
      Self::Nonland
    }
  }

  #[inline]
  pub fn is_land(self) -> bool {
    self == Self::Land
  }
}

impl Card {
  /// Returns an empy new card
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a non-land card with the given mana cost, e.g. `Card::spell("Shock", "{R}")`
  pub fn spell(name: &str, mana_cost_string: &str) -> Result<Self, Error> {
    let mana_cost: ManaCost = mana_cost_string.parse()?;
    Ok(Self {
      name: name.to_string(),
      mana_cost_string: mana_cost_string.to_string(),
      type_line: String::new(),
      kind: CardKind::Nonland,
      cmc: mana_cost.cmc(),
      mana_cost,
      produced_mana: Vec::new(),
    })
  }

  /// Returns a land card that produces the given colors
  pub fn land(name: &str, produced_mana: &[ManaColor]) -> Self {
    let mut produced_mana = produced_mana.to_vec();
    produced_mana.sort();
    produced_mana.dedup();
    Self {
      name: name.to_string(),
      mana_cost_string: String::new(),
      type_line: "Land".to_string(),
      kind: CardKind::Land,
      cmc: 0,
      mana_cost: ManaCost::new(),
      produced_mana,
    }
  }

  /// Returns the converted mana cost of the card
  pub fn cmc(&self) -> u8 {
    self.cmc
  }

  /// Returns true if the card type is a land
  pub fn is_land(&self) -> bool {
    self.kind.is_land()
  }

  /// Returns true if the card can produce mana of `color`
  pub fn produces(&self, color: ManaColor) -> bool {
    self.produced_mana.binary_search(&color).is_ok()
  }
}

impl PartialEq for Card {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
  }
}

impl Eq for Card {}

impl PartialOrd for Card {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Card {
  fn cmp(&self, other: &Self) -> Ordering {
    self.name.cmp(&other.name)
  }
}

impl Hash for Card {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
  }
}

impl From<Card> for ManaCost {
  fn from(item: Card) -> Self {
    item.mana_cost
  }
}

/// Builds a card for tests and benches.
/// `card!("Shock", "{R}")` is a spell, `card!("Stomping Ground" => [Red, Green])` a land.
#[macro_export]
macro_rules! card {
  ($name:expr, $cost:expr) => {
    $crate::card::Card::spell($name, $cost)
      .unwrap_or_else(|e| panic!("Bad card {}: {}", $name, e))
  };
  ($name:expr => [$($color:ident),*]) => {
    $crate::card::Card::land($name, &[$($crate::card::ManaColor::$color),*])
  };
}
