//! # Scryfall card objects
//!
//! The subset of the [Scryfall card object](https://scryfall.com/docs/api/cards) needed to
//! classify a card, and the request/response shapes of the `/cards/collection` endpoint.
use crate::card::{Card, CardKind, ManaColor, ManaCost};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScryfallCard {
  pub name: String,
  #[serde(default)]
  pub mana_cost: String,
  #[serde(default)]
  pub type_line: String,
  #[serde(default)]
  pub cmc: f32,
  #[serde(default)]
  pub produced_mana: Vec<ManaColor>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub card_faces: Vec<ScryfallCard>,
}

/// A list of Scryfall cards, either a bare JSON array or an object with a `data` array
/// (the shape of list responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScryfallList {
  List { data: Vec<ScryfallCard> },
  Cards(Vec<ScryfallCard>),
}

impl ScryfallList {
  pub fn into_cards(self) -> Vec<ScryfallCard> {
    match self {
      Self::List { data } => data,
      Self::Cards(cards) => cards,
    }
  }
}

/// One card identifier of a `/cards/collection` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdentifier {
  pub name: String,
}

/// Body of a `/cards/collection` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRequest {
  pub identifiers: Vec<CardIdentifier>,
}

impl CollectionRequest {
  /// Scryfall accepts at most this many identifiers per request
  pub const MAX_IDENTIFIERS: usize = 75;

  /// Returns one request per chunk of at most `MAX_IDENTIFIERS` names
  pub fn chunks<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
    names
      .chunks(Self::MAX_IDENTIFIERS)
      .map(|chunk| Self {
        identifiers: chunk
          .iter()
          .map(|name| CardIdentifier {
            name: name.as_ref().to_string(),
          })
          .collect(),
      })
      .collect()
  }
}

/// Body of a `/cards/collection` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse {
  #[serde(default)]
  pub data: Vec<ScryfallCard>,
  #[serde(default)]
  pub not_found: Vec<CardIdentifier>,
}

impl ScryfallCard {
  /// Multi-faced cards are classified by their front face
  fn front_face(&self) -> Option<&ScryfallCard> {
    self.card_faces.first()
  }
}

impl From<ScryfallCard> for Card {
  fn from(scryfall: ScryfallCard) -> Self {
    let (mana_cost_string, type_line) = match scryfall.front_face() {
      Some(face) => (face.mana_cost.clone(), face.type_line.clone()),
      None => (scryfall.mana_cost.clone(), scryfall.type_line.clone()),
    };
    let kind = CardKind::from_type_line(&type_line);
    let mana_cost = match mana_cost_string.parse::<ManaCost>() {
      Ok(cost) => cost,
      Err(e) => {
        warn!("{}: {}, treating it as free", scryfall.name, e);
        ManaCost::new()
      }
    };
    // Scryfall's cmc of a multi-faced card sums every face
    let cmc = if scryfall.card_faces.is_empty() && scryfall.cmc.is_finite() {
      scryfall.cmc.round().max(0.0).min(f32::from(u8::MAX)) as u8
    } else {
      mana_cost.cmc()
    };
    let mut produced_mana = scryfall.produced_mana;
    produced_mana.sort();
    produced_mana.dedup();
    Card {
      name: scryfall.name.trim().to_string(),
      mana_cost_string,
      type_line,
      kind,
      cmc,
      mana_cost,
      produced_mana,
    }
  }
}
