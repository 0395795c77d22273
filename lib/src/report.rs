//! # Deck reports
//!
//! Per-card, per-turn, per-commander and per-mana-cost probabilities for a resolved deck.
use crate::color::{
  color_probability, probability_of_getting_lands_in_colors_with, ColorModel, ManaRequirement,
};
use crate::curve::{clamp_probability, probability_for_commander_curve, probability_on_curve};
use crate::deck::{Deck, DeckCard, DeckInfo};
use crate::error::Error;
use std::collections::BTreeMap;

/// ReportConfig holds the knobs of a report
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
  pub color_model: ColorModel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
  pub total_cards: usize,
  pub total_lands: usize,
  pub lands_by_color: BTreeMap<String, usize>,
  pub color_model: ColorModel,
  /// Card name to the probability of casting it on curve
  pub cards: BTreeMap<String, f64>,
  /// Turn to the probability of casting some card of that converted mana cost on it
  pub curve: BTreeMap<u8, f64>,
  /// Commander name to the probability of casting it on curve
  pub commanders: BTreeMap<String, f64>,
  /// Canonical mana cost to the probability of the right lands, in amount and color
  pub mana_costs: BTreeMap<String, f64>,
}

impl Report {
  pub fn from_deck(deck: &Deck, config: &ReportConfig) -> Result<Self, Error> {
    if deck.is_empty() {
      return Err(Error::EmptyDeck);
    }
    let info = deck.info();
    let model = config.color_model;
    let mut cards = BTreeMap::new();
    for dc in deck.iter().filter(|dc| !dc.card.is_land()) {
      cards.insert(dc.card.name.clone(), on_curve(&info, dc, model)?);
    }
    let report = Self {
      total_cards: info.total_cards,
      total_lands: info.total_lands,
      lands_by_color: info
        .lands_by_color
        .iter()
        .map(|(color, &count)| (color.to_string(), count))
        .collect(),
      color_model: model,
      cards,
      curve: curve_by_turn(&info),
      commanders: commanders_on_curve(deck, model)?,
      mana_costs: mana_cost_chart(deck, model)?,
    };
    info!(
      "Report for {} cards, {} lands, {} distinct spells",
      report.total_cards,
      report.total_lands,
      report.cards.len()
    );
    Ok(report)
  }
}

fn on_curve(info: &DeckInfo, dc: &DeckCard, model: ColorModel) -> Result<f64, Error> {
  let turn = dc.card.cmc as usize;
  let amount = probability_on_curve(info.total_cards, turn, info.total_lands, dc.count);
  let requirement = ManaRequirement::from(dc.card.mana_cost);
  let colors = color_probability(&requirement, &info.color_land_pool(), turn, model)?;
  debug!(
    "{} on turn {}: lands and copies {}, colors {}",
    dc.card.name, turn, amount, colors
  );
  Ok(clamp_probability(amount * colors))
}

/// Returns the probability of casting the card `name` on the turn matching its converted
/// mana cost: enough lands and a copy in hand, times the color term of `model`
pub fn card_on_curve(deck: &Deck, name: &str, model: ColorModel) -> Result<f64, Error> {
  let dc = deck
    .card_count_from_name(name)
    .ok_or_else(|| Error::InvalidRequest(format!("{} is not in the deck", name)))?;
  if dc.card.is_land() {
    return Err(Error::InvalidRequest(format!(
      "{} is a land and has no curve",
      dc.card.name
    )));
  }
  on_curve(&deck.info(), dc, model)
}

/// Returns, per converted mana cost present among the non-land cards, the probability to
/// hold enough lands and at least one card of that cost on that turn
pub fn curve_by_turn(info: &DeckInfo) -> BTreeMap<u8, f64> {
  info
    .cards_by_cmc
    .iter()
    .map(|(&cmc, &count)| {
      (
        cmc,
        probability_on_curve(info.total_cards, cmc as usize, info.total_lands, count),
      )
    })
    .collect()
}

pub fn commanders_on_curve(deck: &Deck, model: ColorModel) -> Result<BTreeMap<String, f64>, Error> {
  let info = deck.info();
  let pool = info.color_land_pool();
  let mut commanders = BTreeMap::new();
  for commander in &deck.commanders {
    let turn = commander.cmc as usize;
    let lands = probability_for_commander_curve(info.total_cards, turn, info.total_lands);
    let requirement = ManaRequirement::from(commander.mana_cost);
    let colors = color_probability(&requirement, &pool, turn, model)?;
    commanders.insert(commander.name.clone(), clamp_probability(lands * colors));
  }
  Ok(commanders)
}

/// Groups the non-land cards by canonical mana cost, e.g. "{2}{R}{R}", and returns the
/// probability of the right lands in amount and color for each cost
pub fn mana_cost_chart(deck: &Deck, model: ColorModel) -> Result<BTreeMap<String, f64>, Error> {
  let info = deck.info();
  let mut chart = BTreeMap::new();
  for dc in deck.iter().filter(|dc| !dc.card.is_land()) {
    let key = dc.card.mana_cost.to_string();
    if chart.contains_key(&key) {
      continue;
    }
    let requirement = ManaRequirement::from(dc.card.mana_cost);
    let p = probability_of_getting_lands_in_colors_with(&requirement, &info, model)?;
    chart.insert(key, p);
  }
  Ok(chart)
}
