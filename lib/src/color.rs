//! # Land color feasibility
//!
//! Two ways to answer "do the lands I drew produce the colors this card needs":
//!
//! * [`probability_right_land_colors`], the sequential depletion model. Each colored pip is
//!   matched against one specific land draw, in turn, without replacement.
//! * [`probability_of_mana_symbols`], the multivariate model. Lands are grouped by the exact
//!   set of required colors they produce. Every draw over those groups whose lands can be
//!   assigned one per colored pip is scored with the multivariate hypergeometric distribution
//!   and summed, so dual lands are counted once.
//!
//! Both treat generic mana as payable by any land. The report picks one through [`ColorModel`].
use crate::card::{ManaColor, ManaCost};
use crate::combinatorics::multivariate_hypergeometric;
use crate::curve::{clamp_probability, hand_size, probability_lands_in_range};
use crate::deck::DeckInfo;
use crate::error::Error;
use std::cmp::min;
use std::collections::BTreeMap;
use std::str::FromStr;

/// ManaRequirement represents how many pips of each color a cost needs,
/// plus a generic amount that any land can pay
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaRequirement {
  pub colors: BTreeMap<ManaColor, usize>,
  pub generic: usize,
}

impl ManaRequirement {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `count` pips of `color`. Colorless pips are generic.
  pub fn with_color(mut self, color: ManaColor, count: usize) -> Self {
    if color == ManaColor::Colorless {
      self.generic += count;
    } else if count > 0 {
      *self.colors.entry(color).or_insert(0) += count;
    }
    self
  }

  pub fn with_generic(mut self, generic: usize) -> Self {
    self.generic += generic;
    self
  }

  /// Returns the number of colored pips
  pub fn colored_count(&self) -> usize {
    self.colors.values().sum()
  }

  /// Returns the converted mana cost
  pub fn cmc(&self) -> usize {
    self.colored_count() + self.generic
  }
}

impl From<ManaCost> for ManaRequirement {
  fn from(cost: ManaCost) -> Self {
    cost
      .colored()
      .fold(Self::new(), |req, (color, count)| {
        req.with_color(color, count as usize)
      })
      .with_generic(cost.c as usize)
  }
}

impl From<&ManaCost> for ManaRequirement {
  fn from(cost: &ManaCost) -> Self {
    Self::from(*cost)
  }
}

/// LandGroup counts the lands producing exactly `colors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandGroup {
  pub colors: Vec<ManaColor>,
  pub count: usize,
}

/// Adds `count` lands producing `colors` to `groups`, merging with an equal color set.
/// `groups` stays sorted by color set.
pub(crate) fn add_land_group(groups: &mut Vec<LandGroup>, colors: &[ManaColor], count: usize) {
  if count == 0 {
    return;
  }
  let mut colors = colors.to_vec();
  colors.sort_unstable();
  colors.dedup();
  match groups.binary_search_by(|group| group.colors.cmp(&colors)) {
    Ok(idx) => groups[idx].count += count,
    Err(idx) => groups.insert(idx, LandGroup { colors, count }),
  }
}

/// ColorLandPool represents the lands of a deck by the colors they produce.
///
/// `by_color` counts every land producing a color, so a dual land counts toward both of its
/// colors and the counts may sum to more than `total`. `groups` holds the disjoint counts by
/// exact color set. A pool built with [`ColorLandPool::with_color`] only has no groups, and
/// its color counts are read as lands producing that one color.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorLandPool {
  pub by_color: BTreeMap<ManaColor, usize>,
  #[serde(default)]
  pub groups: Vec<LandGroup>,
  pub total: usize,
}

impl ColorLandPool {
  pub fn new(total: usize) -> Self {
    Self {
      by_color: BTreeMap::new(),
      groups: Vec::new(),
      total,
    }
  }

  pub fn with_color(mut self, color: ManaColor, count: usize) -> Self {
    self.by_color.insert(color, count);
    self
  }

  /// Adds `count` lands that each produce every color of `colors`
  pub fn with_lands(mut self, colors: &[ManaColor], count: usize) -> Self {
    add_land_group(&mut self.groups, colors, count);
    for &color in colors {
      *self.by_color.entry(color).or_insert(0) += count;
    }
    self
  }

  /// Returns the number of lands producing `color`, failing if the pool does not track it
  /// or if it claims more lands than the pool holds
  pub fn count(&self, color: ManaColor) -> Result<usize, Error> {
    let count = *self.by_color.get(&color).ok_or_else(|| {
      Error::InvalidRequest(format!("no land count for color {}", color))
    })?;
    if count > self.total {
      return Err(Error::InvalidRequest(format!(
        "{} lands produce {} but the pool only holds {} lands",
        count, color, self.total
      )));
    }
    Ok(count)
  }

  /// Returns the disjoint land groups, one single-color group per color when the pool was
  /// built from color counts only
  pub fn land_groups(&self) -> Vec<LandGroup> {
    if !self.groups.is_empty() {
      return self.groups.clone();
    }
    self
      .by_color
      .iter()
      .filter(|&(_, &count)| count > 0)
      .map(|(&color, &count)| LandGroup {
        colors: vec![color],
        count,
      })
      .collect()
  }
}

/// ColorModel selects how land colors are scored
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
  /// Sequential depletion, see [`probability_right_land_colors`]
  Sequential,
  /// Multivariate hypergeometric, see [`probability_of_mana_symbols`]
  Multivariate,
}

impl Default for ColorModel {
  fn default() -> Self {
    Self::Multivariate
  }
}

impl FromStr for ColorModel {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s.trim().to_lowercase().as_str() {
      "sequential" => Ok(Self::Sequential),
      "multivariate" => Ok(Self::Multivariate),
      other => Err(Error::InvalidRequest(format!("unknown color model {}", other))),
    }
  }
}

/// Returns the colored pips of `requirement` with the pool size of each color,
/// failing fast if the pool lacks any of them
fn required_colors(
  requirement: &ManaRequirement,
  pool: &ColorLandPool,
) -> Result<Vec<(ManaColor, usize, usize)>, Error> {
  requirement
    .colors
    .iter()
    .filter(|&(&color, &required)| color != ManaColor::Colorless && required > 0)
    .map(|(&color, &required)| Ok((color, required, pool.count(color)?)))
    .collect()
}

/// Returns the probability that the lands paying the colored pips of `requirement` are of
/// the right colors, drawing one land per pip without replacement.
///
/// For each pip the chance is `remaining lands of that color / remaining lands`, after which
/// both counters drop by one. Generic pips are skipped. This models specific land draws that
/// are already decided, not "eventually draw these colors among every draw"; it is a
/// lower-bound style approximation of the multivariate model.
/// Colors are visited in canonical order; the product does not depend on it.
pub fn probability_right_land_colors(
  requirement: &ManaRequirement,
  pool: &ColorLandPool,
) -> Result<f64, Error> {
  let colors = required_colors(requirement, pool)?;
  Ok(sequential_depletion(
    colors.iter().map(|&(_, required, count)| (required, count)),
    pool.total,
  ))
}

/// `pips` yields (required, lands of that color) pairs in the order they are drawn
pub(crate) fn sequential_depletion<I>(pips: I, total: usize) -> f64
where
  I: IntoIterator<Item = (usize, usize)>,
{
  let mut remaining_total = total;
  let mut p = 1.0;
  for (required, count) in pips {
    let mut remaining = count;
    for _ in 0..required {
      if remaining == 0 || remaining_total == 0 {
        return 0.0;
      }
      // a dual land drawn for another color leaves this color's count untouched
      p *= min(remaining, remaining_total) as f64 / remaining_total as f64;
      remaining -= 1;
      remaining_total -= 1;
    }
  }
  clamp_probability(p)
}

/// Returns the probability that `lands_drawn` lands drawn from `pool` can pay the colored
/// pips of `requirement`, each land paying one pip.
///
/// Lands are bucketed by which of the required colors they produce; lands producing none of
/// them are "other". Every count vector over the buckets is one disjoint outcome, scored by
/// the multivariate hypergeometric distribution and kept when the drawn lands can be
/// assigned to the pips. Fails if the groups of `pool` hold more lands than `total`.
pub fn probability_of_mana_symbols(
  requirement: &ManaRequirement,
  pool: &ColorLandPool,
  lands_drawn: usize,
) -> Result<f64, Error> {
  let colors = required_colors(requirement, pool)?;
  let groups = pool.land_groups();
  let grouped: usize = groups.iter().map(|group| group.count).sum();
  if grouped > pool.total {
    return Err(Error::InvalidRequest(format!(
      "land groups hold {} lands but the pool only holds {} lands",
      grouped, pool.total
    )));
  }
  let needs: Vec<usize> = colors.iter().map(|&(_, required, _)| required).collect();
  if needs.iter().sum::<usize>() > lands_drawn || lands_drawn > pool.total {
    return Ok(0.0);
  }
  // lands by bitmask of the required colors they produce, bit i for colors[i]
  let mut by_mask = vec![0; 1 << colors.len()];
  for group in &groups {
    let mask = colors
      .iter()
      .enumerate()
      .filter(|&(_, &(color, _, _))| group.colors.contains(&color))
      .fold(0, |mask, (i, _)| mask | 1 << i);
    by_mask[mask] += group.count;
  }
  let sources: Vec<(usize, usize)> = by_mask
    .iter()
    .enumerate()
    .skip(1)
    .filter(|&(_, &count)| count > 0)
    .map(|(mask, &count)| (mask, count))
    .collect();
  let mut drawn = Vec::with_capacity(sources.len());
  let p = sum_mana_symbols(&needs, &sources, lands_drawn, pool.total, lands_drawn, &mut drawn);
  trace!(
    "mana symbols {:?} from {:?}, {} lands: {}",
    requirement,
    pool,
    lands_drawn,
    p
  );
  Ok(clamp_probability(p))
}

/// `sources` holds (mask, lands) buckets, `drawn` the (mask, lands, drawn) picks so far
fn sum_mana_symbols(
  needs: &[usize],
  sources: &[(usize, usize)],
  remaining: usize,
  population: usize,
  lands_drawn: usize,
  drawn: &mut Vec<(usize, usize, usize)>,
) -> f64 {
  match sources.split_first() {
    None => {
      if !covers(needs, drawn) {
        return 0.0;
      }
      let categories: Vec<_> = drawn.iter().map(|&(_, count, k)| (count, k)).collect();
      multivariate_hypergeometric(population, lands_drawn, &categories)
    }
    Some((&(mask, count), rest)) => {
      let mut p = 0.0;
      for k in 0..=min(count, remaining) {
        drawn.push((mask, count, k));
        p += sum_mana_symbols(needs, rest, remaining - k, population, lands_drawn, drawn);
        drawn.pop();
      }
      p
    }
  }
}

/// Returns whether the drawn lands can pay every pip of `needs`, one land per pip.
/// By Hall's theorem this holds when every subset of the colors is produced by at least as
/// many drawn lands as it has pips.
fn covers(needs: &[usize], drawn: &[(usize, usize, usize)]) -> bool {
  (1..1usize << needs.len()).all(|subset| {
    let pips: usize = needs
      .iter()
      .enumerate()
      .filter(|&(i, _)| subset & 1 << i != 0)
      .map(|(_, &need)| need)
      .sum();
    let lands: usize = drawn
      .iter()
      .filter(|&&(mask, _, _)| mask & subset != 0)
      .map(|&(_, _, k)| k)
      .sum();
    pips <= lands
  })
}

/// Returns the color term for `requirement` under `model`.
/// The multivariate model draws `cmc` lands, one per point of converted mana cost.
pub fn color_probability(
  requirement: &ManaRequirement,
  pool: &ColorLandPool,
  cmc: usize,
  model: ColorModel,
) -> Result<f64, Error> {
  match model {
    ColorModel::Sequential => probability_right_land_colors(requirement, pool),
    ColorModel::Multivariate => probability_of_mana_symbols(requirement, pool, cmc),
  }
}

/// Returns the probability to hold between `cmc` and `cmc + 6` lands by turn `cmc` times the
/// sequential color probability. The amount and the colors are treated as independent.
pub fn probability_of_getting_lands_in_colors(
  requirement: &ManaRequirement,
  deck_info: &DeckInfo,
) -> Result<f64, Error> {
  probability_of_getting_lands_in_colors_with(requirement, deck_info, ColorModel::Sequential)
}

/// Same as [`probability_of_getting_lands_in_colors`] with the color term chosen by `model`
pub fn probability_of_getting_lands_in_colors_with(
  requirement: &ManaRequirement,
  deck_info: &DeckInfo,
  model: ColorModel,
) -> Result<f64, Error> {
  let cmc = requirement.cmc();
  // one card in hand is the card we want to cast
  let max_lands = hand_size(cmc) - 1;
  let amount = probability_lands_in_range(
    deck_info.total_cards,
    cmc,
    deck_info.total_lands,
    cmc,
    max_lands,
  );
  let colors = color_probability(requirement, &deck_info.color_land_pool(), cmc, model)?;
  Ok(clamp_probability(amount * colors))
}

#[cfg(test)]
mod tests {
  use crate::card::{ManaColor, ManaCost};
  use crate::color::*;
  use crate::curve::{hand_size, probability_lands_in_range};
  use crate::deck::DeckInfo;

  fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let difference = f64::abs(expected - actual);
    assert!(
      difference < tolerance,
      "expected {} got {} (difference {})",
      expected,
      actual,
      difference
    );
  }

  fn deck_info(total_cards: usize, total_lands: usize, lands: &[(ManaColor, usize)]) -> DeckInfo {
    let mut info = DeckInfo::new();
    info.total_cards = total_cards;
    info.total_lands = total_lands;
    for &(color, count) in lands {
      info.lands_by_color.insert(color, count);
    }
    info
  }

  #[test]
  fn requirement_from_mana_cost() {
    let cost: ManaCost = "{4}{R}{G}{G}".parse().unwrap();
    let req = ManaRequirement::from(cost);
    assert_eq!(req.generic, 4);
    assert_eq!(req.colors.get(&ManaColor::Red), Some(&1));
    assert_eq!(req.colors.get(&ManaColor::Green), Some(&2));
    assert_eq!(req.colors.len(), 2);
    assert_eq!(req.cmc(), 7);
  }

  #[test]
  fn colorless_pips_are_generic() {
    let req = ManaRequirement::new()
      .with_color(ManaColor::Colorless, 2)
      .with_color(ManaColor::Blue, 1);
    assert_eq!(req.generic, 2);
    assert_eq!(req.colored_count(), 1);
  }

  #[test]
  fn sequential_single_red_pip() {
    let req = ManaRequirement::new().with_color(ManaColor::Red, 1);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Red, 10);
    let p = probability_right_land_colors(&req, &pool).unwrap();
    assert_close(p, 10.0 / 17.0, 1e-15);
  }

  #[test]
  fn sequential_repeated_pips_deplete() {
    // 10 Mountains and 14 Forests, {R}{R}{G}
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 2)
      .with_color(ManaColor::Green, 1);
    let pool = ColorLandPool::new(24)
      .with_color(ManaColor::Red, 10)
      .with_color(ManaColor::Green, 14);
    let p = probability_right_land_colors(&req, &pool).unwrap();
    assert_close(p, 0.10375494071146245, 1e-15);
  }

  #[test]
  fn sequential_skips_generic() {
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_generic(5);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Red, 10);
    assert_close(
      probability_right_land_colors(&req, &pool).unwrap(),
      10.0 / 17.0,
      1e-15,
    );
    let generic_only = ManaRequirement::new().with_generic(3);
    assert_eq!(
      probability_right_land_colors(&generic_only, &pool).unwrap(),
      1.0
    );
  }

  #[test]
  fn sequential_runs_out_of_lands() {
    let req = ManaRequirement::new().with_color(ManaColor::Black, 3);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Black, 2);
    assert_eq!(probability_right_land_colors(&req, &pool).unwrap(), 0.0);
    let pool = ColorLandPool::new(0).with_color(ManaColor::Black, 0);
    assert_eq!(probability_right_land_colors(&req, &pool).unwrap(), 0.0);
  }

  #[test]
  fn sequential_is_order_independent() {
    let pips = [(2, 10), (1, 14), (3, 8), (1, 5)];
    let forward = sequential_depletion(pips.iter().copied(), 30);
    let backward = sequential_depletion(pips.iter().rev().copied(), 30);
    let rotated = sequential_depletion(
      pips.iter().cycle().skip(2).take(pips.len()).copied(),
      30,
    );
    assert!(forward > 0.0);
    assert_close(forward, backward, 1e-15);
    assert_close(forward, rotated, 1e-15);
  }

  #[test]
  fn missing_color_is_invalid_request() {
    let req = ManaRequirement::new().with_color(ManaColor::Blue, 1);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Red, 10);
    match probability_right_land_colors(&req, &pool) {
      Err(Error::InvalidRequest(_)) => {}
      other => panic!("expected InvalidRequest, got {:?}", other),
    }
    match probability_of_mana_symbols(&req, &pool, 1) {
      Err(Error::InvalidRequest(_)) => {}
      other => panic!("expected InvalidRequest, got {:?}", other),
    }
  }

  #[test]
  fn color_count_above_total_is_invalid_request() {
    let req = ManaRequirement::new().with_color(ManaColor::Red, 1);
    let pool = ColorLandPool::new(10).with_color(ManaColor::Red, 11);
    assert!(probability_right_land_colors(&req, &pool).is_err());
  }

  #[test]
  fn mana_symbols_single_pip_matches_sequential() {
    let req = ManaRequirement::new().with_color(ManaColor::Red, 1);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Red, 10);
    assert_close(
      probability_of_mana_symbols(&req, &pool, 1).unwrap(),
      10.0 / 17.0,
      1e-12,
    );
  }

  #[test]
  fn mana_symbols_pinned() {
    // {1}{R}{R}{W} with 10 red, 10 white and 20 other lands, 4 lands drawn
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 2)
      .with_color(ManaColor::White, 1)
      .with_generic(1);
    let pool = ColorLandPool::new(40)
      .with_color(ManaColor::Red, 10)
      .with_color(ManaColor::White, 10);
    assert_close(
      probability_of_mana_symbols(&req, &pool, 4).unwrap(),
      0.13376737060947588,
      1e-12,
    );
  }

  #[test]
  fn mana_symbols_generic_only_is_certain() {
    let req = ManaRequirement::new().with_generic(3);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Red, 10);
    assert_close(
      probability_of_mana_symbols(&req, &pool, 3).unwrap(),
      1.0,
      1e-12,
    );
  }

  #[test]
  fn mana_symbols_too_few_lands_drawn() {
    let req = ManaRequirement::new().with_color(ManaColor::Red, 3);
    let pool = ColorLandPool::new(17).with_color(ManaColor::Red, 10);
    assert_eq!(probability_of_mana_symbols(&req, &pool, 2).unwrap(), 0.0);
    assert_eq!(probability_of_mana_symbols(&req, &pool, 18).unwrap(), 0.0);
  }

  #[test]
  fn mana_symbols_at_least_sequential() {
    // Drawing among every land is never worse than matching specific draws
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 2)
      .with_color(ManaColor::Green, 1)
      .with_generic(2);
    let pool = ColorLandPool::new(24)
      .with_color(ManaColor::Red, 10)
      .with_color(ManaColor::Green, 14);
    let sequential = probability_right_land_colors(&req, &pool).unwrap();
    let multivariate = probability_of_mana_symbols(&req, &pool, req.cmc()).unwrap();
    assert!(multivariate >= sequential);
  }

  fn gruul_duals() -> ColorLandPool {
    // 4 Rugged Highlands, 6 Mountains, 6 Forests, 4 Evolving Wilds
    ColorLandPool::new(20)
      .with_lands(&[ManaColor::Red, ManaColor::Green], 4)
      .with_lands(&[ManaColor::Red], 6)
      .with_lands(&[ManaColor::Green], 6)
      .with_lands(&[], 4)
  }

  #[test]
  fn with_lands_merges_groups() {
    let pool = ColorLandPool::new(12)
      .with_lands(&[ManaColor::Green, ManaColor::Red], 2)
      .with_lands(&[ManaColor::Red, ManaColor::Green], 3)
      .with_lands(&[ManaColor::Red], 7)
      .with_lands(&[ManaColor::Blue], 0);
    assert_eq!(pool.groups.len(), 2);
    assert_eq!(pool.count(ManaColor::Red).unwrap(), 12);
    assert_eq!(pool.count(ManaColor::Green).unwrap(), 5);
    assert!(pool.count(ManaColor::Blue).is_err());
    let duals = pool.groups.iter().find(|g| g.colors.len() == 2).unwrap();
    assert_eq!(duals.colors, vec![ManaColor::Red, ManaColor::Green]);
    assert_eq!(duals.count, 5);
  }

  #[test]
  fn mana_symbols_all_duals_is_certain() {
    let pool = ColorLandPool::new(10).with_lands(&[ManaColor::Red, ManaColor::Green], 10);
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_color(ManaColor::Green, 1);
    assert_close(
      probability_of_mana_symbols(&req, &pool, 2).unwrap(),
      1.0,
      1e-12,
    );
    assert_close(
      probability_right_land_colors(&req, &pool).unwrap(),
      1.0,
      1e-12,
    );
  }

  #[test]
  fn mana_symbols_duals_count_once() {
    // of the C(20, 2) = 190 pairs, 6 dual+dual, 24 dual+Mountain, 24 dual+Forest and
    // 36 Mountain+Forest pay {R}{G}
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_color(ManaColor::Green, 1);
    let pool = gruul_duals();
    let multivariate = probability_of_mana_symbols(&req, &pool, 2).unwrap();
    assert_close(multivariate, 90.0 / 190.0, 1e-12);
    let sequential = probability_right_land_colors(&req, &pool).unwrap();
    assert_close(sequential, 10.0 / 20.0 * 10.0 / 19.0, 1e-15);
    assert!(multivariate >= sequential);
  }

  #[test]
  fn mana_symbols_assigns_each_land_once() {
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_color(ManaColor::Green, 2);
    let enough = ColorLandPool::new(3)
      .with_lands(&[ManaColor::Red, ManaColor::Green], 2)
      .with_lands(&[ManaColor::Red], 1);
    assert_close(
      probability_of_mana_symbols(&req, &enough, 3).unwrap(),
      1.0,
      1e-12,
    );
    // three red sources but a single green one
    let short = ColorLandPool::new(3)
      .with_lands(&[ManaColor::Red, ManaColor::Green], 1)
      .with_lands(&[ManaColor::Red], 2);
    assert_eq!(probability_of_mana_symbols(&req, &short, 3).unwrap(), 0.0);
  }

  #[test]
  fn mana_symbols_ignores_unrequired_colors() {
    let req = ManaRequirement::new().with_color(ManaColor::Red, 1);
    let pool = ColorLandPool::new(10)
      .with_lands(&[ManaColor::White, ManaColor::Blue], 5)
      .with_lands(&[ManaColor::Red], 5);
    assert_close(
      probability_of_mana_symbols(&req, &pool, 1).unwrap(),
      0.5,
      1e-12,
    );
  }

  #[test]
  fn overlapping_color_counts_need_groups() {
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_color(ManaColor::Green, 1);
    let pool = ColorLandPool::new(10)
      .with_color(ManaColor::Red, 10)
      .with_color(ManaColor::Green, 10);
    match probability_of_mana_symbols(&req, &pool, 2) {
      Err(Error::InvalidRequest(_)) => {}
      other => panic!("expected InvalidRequest, got {:?}", other),
    }
  }

  #[test]
  fn lands_in_colors_with_duals() {
    let mut info = deck_info(40, 20, &[]);
    let pool = gruul_duals();
    info.lands_by_color = pool.by_color.clone();
    info.land_groups = pool.groups.clone();
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_color(ManaColor::Green, 1);
    let amount = probability_lands_in_range(40, 2, 20, 2, hand_size(2) - 1);
    assert_close(
      probability_of_getting_lands_in_colors_with(&req, &info, ColorModel::Multivariate).unwrap(),
      amount * 90.0 / 190.0,
      1e-12,
    );
    assert_close(
      probability_of_getting_lands_in_colors(&req, &info).unwrap(),
      amount * 10.0 / 20.0 * 10.0 / 19.0,
      1e-12,
    );
  }

  #[test]
  fn lands_in_colors_zero_without_color_sources() {
    let info = deck_info(
      60,
      40,
      &[
        (ManaColor::Red, 0),
        (ManaColor::Green, 40),
        (ManaColor::White, 0),
        (ManaColor::Blue, 0),
        (ManaColor::Black, 0),
      ],
    );
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 1)
      .with_generic(2);
    assert_eq!(
      probability_of_getting_lands_in_colors(&req, &info).unwrap(),
      0.0
    );
    assert_eq!(
      probability_of_getting_lands_in_colors_with(&req, &info, ColorModel::Multivariate).unwrap(),
      0.0
    );
  }

  #[test]
  fn lands_in_colors_is_amount_times_color() {
    let info = deck_info(
      40,
      17,
      &[
        (ManaColor::Red, 10),
        (ManaColor::Green, 7),
        (ManaColor::White, 0),
        (ManaColor::Blue, 0),
        (ManaColor::Black, 0),
      ],
    );
    let req = ManaRequirement::new().with_color(ManaColor::Red, 1);
    let p = probability_of_getting_lands_in_colors(&req, &info).unwrap();
    assert_close(p, 0.9933082880451302 * 10.0 / 17.0, 1e-12);
  }

  #[test]
  fn color_model_parses() {
    assert_eq!(
      "Sequential".parse::<ColorModel>().unwrap(),
      ColorModel::Sequential
    );
    assert_eq!(
      "multivariate".parse::<ColorModel>().unwrap(),
      ColorModel::Multivariate
    );
    assert!("bogus".parse::<ColorModel>().is_err());
    assert_eq!(ColorModel::default(), ColorModel::Multivariate);
  }

  #[test]
  fn repeated_queries_are_bit_identical() {
    let req = ManaRequirement::new()
      .with_color(ManaColor::Red, 2)
      .with_color(ManaColor::White, 1)
      .with_generic(1);
    let pool = ColorLandPool::new(40)
      .with_color(ManaColor::Red, 10)
      .with_color(ManaColor::White, 10);
    let a = probability_of_mana_symbols(&req, &pool, 4).unwrap();
    let b = probability_of_mana_symbols(&req, &pool, 4).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    let a = probability_right_land_colors(&req, &pool).unwrap();
    let b = probability_right_land_colors(&req, &pool).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
  }
}
