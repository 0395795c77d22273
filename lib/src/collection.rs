//! # Collection
//!
//! The card database a deck list is resolved against. Loaded from Scryfall JSON or from a
//! gzip compressed bincode cache written by a previous run.
use crate::card::Card;
use crate::scryfall::{ScryfallCard, ScryfallList};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::ops::Deref;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug)]
pub enum CollectionError {
  Io(std::io::Error),
  Json(serde_json::Error),
  Bincode(bincode::Error),
}

impl fmt::Display for CollectionError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      CollectionError::Io(e) => write!(f, "card collection I/O error: {}", e),
      CollectionError::Json(e) => write!(f, "card collection JSON error: {}", e),
      CollectionError::Bincode(e) => write!(f, "card collection cache error: {}", e),
    }
  }
}

impl std::error::Error for CollectionError {}

impl From<std::io::Error> for CollectionError {
  fn from(e: std::io::Error) -> Self {
    CollectionError::Io(e)
  }
}

impl From<serde_json::Error> for CollectionError {
  fn from(e: serde_json::Error) -> Self {
    CollectionError::Json(e)
  }
}

impl From<bincode::Error> for CollectionError {
  fn from(e: bincode::Error) -> Self {
    CollectionError::Bincode(e)
  }
}

/// A Collection represents a library of cards, sorted by lowercase name
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Collection {
  pub cards: Vec<Card>,
}

impl Collection {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a new collection of cards. The first card of each name wins.
  pub fn from_cards(mut cards: Vec<Card>) -> Self {
    // sort for binary_search used in card_from_name
    cards.sort_by_cached_key(|card| card.name.to_lowercase());
    cards.dedup_by(|a, b| a.name.eq_ignore_ascii_case(&b.name));
    Self { cards }
  }

  pub fn from_scryfall(cards: Vec<ScryfallCard>) -> Self {
    Self::from_cards(cards.into_iter().map(Card::from).collect())
  }

  /// Parses Scryfall JSON, either a bare array of cards or an object with a `data` array
  pub fn from_json(json: &str) -> Result<Self, CollectionError> {
    let list: ScryfallList = serde_json::from_str(json)?;
    Ok(Self::from_scryfall(list.into_cards()))
  }

  pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CollectionError> {
    let list: ScryfallList = serde_json::from_reader(reader)?;
    Ok(Self::from_scryfall(list.into_cards()))
  }

  /// Decodes a cache produced by `to_cache_bytes`
  pub fn from_cache_bytes(bytes: &[u8]) -> Result<Self, CollectionError> {
    let mut gz = GzDecoder::new(bytes);
    let mut s: Vec<u8> = Vec::new();
    gz.read_to_end(&mut s)?;
    let collection: Collection = bincode::deserialize(&s)?;
    // caches written by hand may not be sorted
    Ok(Self::from_cards(collection.cards))
  }

  /// Encodes the collection as gzip compressed bincode
  pub fn to_cache_bytes(&self) -> Result<Vec<u8>, CollectionError> {
    let encoded = bincode::serialize(self)?;
    let mut gz = GzEncoder::new(Vec::new(), Compression::best());
    gz.write_all(&encoded)?;
    Ok(gz.finish()?)
  }

  /// Loads a collection from `path`, a gzip cache or a Scryfall JSON file
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CollectionError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;
    let collection = if bytes.starts_with(&GZIP_MAGIC) {
      Self::from_cache_bytes(&bytes)?
    } else {
      Self::from_json_reader(BufReader::new(&bytes[..]))?
    };
    info!(
      "Loaded {} cards from {}",
      collection.len(),
      path.display()
    );
    Ok(collection)
  }

  pub fn save_cache<P: AsRef<Path>>(&self, path: P) -> Result<(), CollectionError> {
    let path = path.as_ref();
    let bytes = self.to_cache_bytes()?;
    File::create(path)?.write_all(&bytes)?;
    info!("Saved {} cards to {}", self.len(), path.display());
    Ok(())
  }

  /// Adds cards not already in the collection
  pub fn extend<I>(&mut self, cards: I)
  where
    I: IntoIterator<Item = Card>,
  {
    let mut all = std::mem::take(&mut self.cards);
    all.extend(cards);
    *self = Self::from_cards(all);
  }

  /// Returns a card from the card name, ignoring case
  pub fn card_from_name(&self, name: &str) -> Option<&Card> {
    let name_lowercase = name.to_lowercase();
    let res = self
      .cards
      .binary_search_by(|probe| probe.name.to_lowercase().cmp(&name_lowercase));
    res.map(|idx| &self.cards[idx]).ok()
  }

  /// Returns a card from a deck list name. Split and double faced names that are not found
  /// as written resolve through their left face, and a bare face name finds its card.
  pub fn resolve(&self, name: &str) -> Option<&Card> {
    if let Some(card) = self.card_from_name(name) {
      return Some(card);
    }
    let left_face = name.split("//").next().unwrap_or(name).trim();
    if left_face != name {
      if let Some(card) = self.card_from_name(left_face) {
        return Some(card);
      }
    }
    let prefix = format!("{} // ", left_face.to_lowercase());
    let idx = self
      .cards
      .partition_point(|probe| probe.name.to_lowercase() < prefix);
    self
      .cards
      .get(idx)
      .filter(|card| card.name.to_lowercase().starts_with(&prefix))
  }

  /// Returns the names that `resolve` cannot find
  pub fn missing<'a>(&self, names: &[&'a str]) -> Vec<&'a str> {
    names
      .iter()
      .copied()
      .filter(|name| self.resolve(name).is_none())
      .collect()
  }
}

impl Deref for Collection {
  type Target = [Card];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}

#[cfg(test)]
mod tests {
  use crate::card::*;
  use crate::collection::*;

  fn collection() -> Collection {
    Collection::from_cards(vec![
      card!("Shock", "{R}"),
      card!("Find // Finality", "{B/G}{B/G} // {4}{B}{G}"),
      card!("Etali, Primal Storm", "{4}{R}{R}"),
      card!("Mountain" => [Red]),
      card!("shock", "{1}{R}"),
    ])
  }

  #[test]
  fn sorted_and_deduped() {
    let c = collection();
    assert_eq!(c.len(), 4);
    let names: Vec<_> = c.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(
      names,
      vec!["Etali, Primal Storm", "Find // Finality", "Mountain", "Shock"]
    );
    assert_eq!(c.card_from_name("SHOCK").unwrap().mana_cost_string, "{R}");
  }

  #[test]
  fn resolve_split_names() {
    let c = collection();
    assert_eq!(c.resolve("find // finality").unwrap().name, "Find // Finality");
    assert_eq!(c.resolve("Find").unwrap().name, "Find // Finality");
    assert_eq!(c.resolve("Shock // Whatever").unwrap().name, "Shock");
    assert!(c.resolve("Finality").is_none());
    assert!(c.resolve("Doo Whisperer").is_none());
  }

  #[test]
  fn missing_names() {
    let c = collection();
    assert_eq!(c.missing(&["Shock", "Negate", "Find"]), vec!["Negate"]);
  }

  #[test]
  fn from_json_shapes() {
    let json = r#"{"object": "list", "data": [
      {"name": "Rugged Highlands", "cmc": 0.0, "type_line": "Land", "produced_mana": ["R", "G"]},
      {"name": "Shock", "mana_cost": "{R}", "cmc": 1.0, "type_line": "Instant"}
    ]}"#;
    let c = Collection::from_json(json).unwrap();
    assert_eq!(c.len(), 2);
    assert!(c.card_from_name("rugged highlands").unwrap().is_land());
    assert!(Collection::from_json("{\"data\": 3}").is_err());
  }

  #[test]
  fn cache_round_trip() {
    let c = collection();
    let bytes = c.to_cache_bytes().unwrap();
    assert!(bytes.starts_with(&GZIP_MAGIC));
    let decoded = Collection::from_cache_bytes(&bytes).unwrap();
    assert_eq!(decoded.cards, c.cards);
    let etali = decoded.card_from_name("Etali, Primal Storm").unwrap();
    assert_eq!(etali.mana_cost.r, 2);
    assert!(decoded.card_from_name("Mountain").unwrap().produces(ManaColor::Red));
  }

  #[test]
  fn corrupt_cache_is_an_error() {
    match Collection::from_cache_bytes(&[0x1f, 0x8b, 0, 1, 2]) {
      Err(CollectionError::Io(_)) | Err(CollectionError::Bincode(_)) => {}
      other => panic!("expected a cache error, got {:?}", other.map(|c| c.len())),
    }
  }

  #[test]
  fn extend_keeps_existing() {
    let mut c = collection();
    c.extend(vec![card!("Negate", "{1}{U}"), card!("SHOCK", "{2}{R}")]);
    assert_eq!(c.len(), 5);
    assert_eq!(c.card_from_name("shock").unwrap().mana_cost_string, "{R}");
  }
}
