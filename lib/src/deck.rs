use crate::card::{Card, ManaColor};
use crate::collection::Collection;
use crate::color::{add_land_group, ColorLandPool, LandGroup};
use crate::decklist::{DeckList, DeckListEntry};
use crate::error::Error;
use std::collections::BTreeMap;

/// Deck represents the cards a probability is computed against. Commanders are kept apart
/// and are not counted in the deck totals.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
  pub cards: Vec<DeckCard>,
  pub commanders: Vec<Card>,
  pub card_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckCard {
  pub card: Card,
  pub count: usize,
}

#[derive(Debug, Default, Clone)]
pub struct DeckBuilder {
  pub cards: BTreeMap<Card, usize>,
  pub commanders: Vec<Card>,
}

impl DeckBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(self, card: Card) -> Self {
    self.insert_count(card, 1)
  }

  pub fn insert_count(mut self, card: Card, count: usize) -> Self {
    if count > 0 {
      *self.cards.entry(card).or_insert(0) += count;
    }
    self
  }

  pub fn commander(mut self, card: Card) -> Self {
    if !self.commanders.contains(&card) {
      self.commanders.push(card);
    }
    self
  }

  pub fn build(self) -> Deck {
    let mut deck = Deck::new();
    let mut count = 0;
    for (k, v) in self.cards {
      deck.cards.push(DeckCard { card: k, count: v });
      count += v;
    }
    deck.card_count = count;
    deck.commanders = self.commanders;
    deck
      .cards
      .sort_by_cached_key(|dc| dc.card.name.to_lowercase());
    deck
  }
}

/// DeckInfo is the aggregate of a deck the probability calculators consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckInfo {
  pub total_cards: usize,
  pub total_lands: usize,
  /// Lands producing each color; a land producing several colors counts toward each.
  /// The five colors and colorless are always present.
  pub lands_by_color: BTreeMap<ManaColor, usize>,
  /// Lands by the exact set of colors they produce; these counts sum to `total_lands`
  pub land_groups: Vec<LandGroup>,
  /// Non-land cards by converted mana cost
  pub cards_by_cmc: BTreeMap<u8, usize>,
}

impl DeckInfo {
  pub fn new() -> Self {
    let lands_by_color = ManaColor::COLORS
      .iter()
      .copied()
      .chain(std::iter::once(ManaColor::Colorless))
      .map(|color| (color, 0))
      .collect();
    Self {
      total_cards: 0,
      total_lands: 0,
      lands_by_color,
      land_groups: Vec::new(),
      cards_by_cmc: BTreeMap::new(),
    }
  }

  pub fn color_land_pool(&self) -> ColorLandPool {
    ColorLandPool {
      by_color: self.lands_by_color.clone(),
      groups: self.land_groups.clone(),
      total: self.total_lands,
    }
  }
}

impl Default for DeckInfo {
  fn default() -> Self {
    Self::new()
  }
}

impl Deck {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_cards<I>(cards: I) -> Self
  where
    I: IntoIterator<Item = Card>,
  {
    let mut b = DeckBuilder::new();
    for card in cards {
      b = b.insert(card);
    }
    b.build()
  }

  /// Resolves the commander and main sections of `list` against `collection`.
  /// Sideboard and maybeboard cards are not part of the deck.
  pub fn from_list(list: &DeckList, collection: &Collection) -> Result<Self, Error> {
    fn lookup<'a>(collection: &'a Collection, entry: &DeckListEntry) -> Result<&'a Card, Error> {
      collection
        .resolve(&entry.name)
        .ok_or_else(|| Error::UnknownCard(entry.name.clone()))
    }
    let mut builder = DeckBuilder::new();
    for entry in &list.commanders {
      builder = builder.commander(lookup(collection, entry)?.clone());
    }
    for entry in &list.main {
      builder = builder.insert_count(lookup(collection, entry)?.clone(), entry.count);
    }
    let ignored = list.sideboard.len() + list.maybeboard.len();
    if ignored > 0 {
      debug!("Ignoring {} sideboard and maybeboard entries", ignored);
    }
    Ok(builder.build())
  }

  pub fn card_from_name(&self, name: &str) -> Option<&Card> {
    self.card_count_from_name(name).map(|o| &o.card)
  }

  pub fn card_count_from_name(&self, name: &str) -> Option<&DeckCard> {
    let name_lowercase = name.to_lowercase();
    let res = self
      .cards
      .binary_search_by(|probe| probe.card.name.to_lowercase().cmp(&name_lowercase));
    res.map(|idx| &self.cards[idx]).ok()
  }

  pub fn iter(&self) -> std::slice::Iter<DeckCard> {
    self.cards.iter()
  }

  pub fn len(&self) -> usize {
    self.card_count
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn land_count(&self) -> usize {
    self
      .cards
      .iter()
      .filter(|dc| dc.card.is_land())
      .fold(0, |accum, dc| accum + dc.count)
  }

  /// Returns the aggregate counts of the deck
  pub fn info(&self) -> DeckInfo {
    let mut info = DeckInfo::new();
    for dc in &self.cards {
      info.total_cards += dc.count;
      if dc.card.is_land() {
        info.total_lands += dc.count;
        add_land_group(&mut info.land_groups, &dc.card.produced_mana, dc.count);
        for &color in &dc.card.produced_mana {
          *info.lands_by_color.entry(color).or_insert(0) += dc.count;
        }
      } else {
        *info.cards_by_cmc.entry(dc.card.cmc).or_insert(0) += dc.count;
      }
    }
    debug!(
      "Deck of {} cards, {} lands, {:?}",
      info.total_cards, info.total_lands, info.lands_by_color
    );
    info
  }
}
