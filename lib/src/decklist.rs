//! # Deck list text format
//!
//! A deck list is one card per line, `<count>[x] <name> [(SET) <number>] [# comment]`,
//! grouped under optional section headers (`Commander`, `Deck`/`Mainboard`, `Sideboard`,
//! `Maybeboard`). Cards before any header belong to the main deck.
use crate::error::Error;
use regex::Regex;
use std::str::FromStr;

/// DeckListEntry is one card name with its accumulated count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckListEntry {
  pub name: String,
  pub count: usize,
  /// The set code, if the line named one
  pub set: Option<String>,
}

/// Section of a deck list a card line belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
  Commander,
  Main,
  Sideboard,
  Maybeboard,
}

impl Section {
  /// Returns the section named by a header line, ignoring case and punctuation
  pub fn from_header(line: &str) -> Option<Self> {
    let line = line.to_lowercase();
    if line.contains("commander") {
      Some(Self::Commander)
    } else if line.contains("sideboard") {
      Some(Self::Sideboard)
    } else if line.contains("maybeboard") {
      Some(Self::Maybeboard)
    } else if line.contains("mainboard") || line.contains("deck") {
      Some(Self::Main)
    } else {
      None
    }
  }
}

/// DeckList is the parsed text of a deck list, before any card is looked up
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
  pub commanders: Vec<DeckListEntry>,
  pub main: Vec<DeckListEntry>,
  pub sideboard: Vec<DeckListEntry>,
  pub maybeboard: Vec<DeckListEntry>,
}

impl DeckList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn section(&self, section: Section) -> &[DeckListEntry] {
    match section {
      Section::Commander => &self.commanders,
      Section::Main => &self.main,
      Section::Sideboard => &self.sideboard,
      Section::Maybeboard => &self.maybeboard,
    }
  }

  fn section_mut(&mut self, section: Section) -> &mut Vec<DeckListEntry> {
    match section {
      Section::Commander => &mut self.commanders,
      Section::Main => &mut self.main,
      Section::Sideboard => &mut self.sideboard,
      Section::Maybeboard => &mut self.maybeboard,
    }
  }

  /// Adds `count` copies of `name` to `section`. Repeated names accumulate.
  pub fn insert(&mut self, section: Section, name: &str, count: usize, set: Option<String>) {
    let entries = self.section_mut(section);
    let name_lowercase = name.to_lowercase();
    match entries
      .iter_mut()
      .find(|entry| entry.name.to_lowercase() == name_lowercase)
    {
      Some(entry) => entry.count += count,
      None => entries.push(DeckListEntry {
        name: name.to_string(),
        count,
        set,
      }),
    }
  }

  /// Returns the number of cards in the main deck
  pub fn main_count(&self) -> usize {
    self.main.iter().map(|entry| entry.count).sum()
  }

  /// Returns every distinct name in the commander and main sections
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self
      .commanders
      .iter()
      .chain(self.main.iter())
      .map(|entry| entry.name.as_str())
      .collect();
    names.sort_unstable();
    names.dedup();
    names
  }
}

impl FromStr for DeckList {
  type Err = Error;

  fn from_str(list: &str) -> Result<Self, Error> {
    lazy_static! {
        static ref CARD_LINE_REGEX: Regex =
            Regex::new(r"^(?P<amount>\d+)[xX]?\s+(?P<name>[^\(#]+?)\s*(?:\((?P<set>\w+)\)(?:\s*(?P<setnum>[\w\-★]+))?)?\s*(?:#.*)?$")
                .expect("Failed to compile CARD_LINE_REGEX regex");
    }
    let mut deck_list = DeckList::new();
    let mut section = Section::Main;
    for line in list.lines() {
      let trimmed = line.trim();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }
      if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        match Section::from_header(trimmed) {
          Some(next) => section = next,
          None => warn!("Ignoring deck list line: {}", trimmed),
        }
        continue;
      }
      let caps = CARD_LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| Error::BadDecklist(line.to_string()))?;
      let amount = caps["amount"]
        .parse::<usize>()
        .map_err(|_| Error::BadDecklist(line.to_string()))?;
      let name = caps["name"].trim();
      if amount == 0 {
        debug!("Skipping zero count line: {}", trimmed);
        continue;
      }
      let set = caps.name("set").map(|m| m.as_str().to_uppercase());
      deck_list.insert(section, name, amount, set);
    }
    Ok(deck_list)
  }
}

/// Parses a deck list, panicking on error. With a collection, builds the main deck.
#[macro_export]
macro_rules! decklist {
  ($list:expr) => {
    $list
      .parse::<$crate::decklist::DeckList>()
      .unwrap_or_else(|e| panic!("Bad deck list: {}", e))
  };
  ($list:expr, $collection:expr) => {
    $crate::deck::Deck::from_list(&$crate::decklist!($list), $collection)
      .unwrap_or_else(|e| panic!("Bad deck list: {}", e))
  };
}
