use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// ManaCost represents the card [mana cost](https://mtg.gamepedia.com/Mana_cost)
/// as colored pip counts plus a generic amount `c` that any land can pay
#[derive(
  Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ManaCost {
  pub r: u8,
  pub w: u8,
  pub b: u8,
  pub u: u8,
  pub g: u8,
  pub c: u8,
}

/// ManaColor represents a [color](https://mtg.gamepedia.com/Color)
/// Variants are ordered W, U, B, R, G so that iteration over colors is deterministic
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManaColor {
  #[serde(rename = "W")]
  White = 0,
  #[serde(rename = "U")]
  Blue = 1,
  #[serde(rename = "B")]
  Black = 2,
  #[serde(rename = "R")]
  Red = 3,
  #[serde(rename = "G")]
  Green = 4,
  #[serde(rename = "C")]
  #[serde(other)]
  Colorless = 5,
}

impl ManaColor {
  /// The five colors, in canonical order
  pub const COLORS: [ManaColor; 5] = [
    ManaColor::White,
    ManaColor::Blue,
    ManaColor::Black,
    ManaColor::Red,
    ManaColor::Green,
  ];

  /// Returns the color for a single mana symbol, e.g. 'R'
  pub fn from_symbol(symbol: char) -> Option<Self> {
    match symbol.to_ascii_uppercase() {
      'W' => Some(Self::White),
      'U' => Some(Self::Blue),
      'B' => Some(Self::Black),
      'R' => Some(Self::Red),
      'G' => Some(Self::Green),
      'C' => Some(Self::Colorless),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      Self::White => 'W',
      Self::Blue => 'U',
      Self::Black => 'B',
      Self::Red => 'R',
      Self::Green => 'G',
      Self::Colorless => 'C',
    }
  }
}

impl fmt::Display for ManaColor {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl ManaCost {
  /// Returns a new ManaCost worth 0 CMC
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a new ManaCost with the given color counts
  pub fn from_rgbuwc(r: u8, g: u8, b: u8, u: u8, w: u8, c: u8) -> Self {
    Self { r, w, b, u, g, c }
  }

  /// Returns the converted mana cost
  #[inline]
  pub fn cmc(self) -> u8 {
    self
      .r
      .saturating_add(self.w)
      .saturating_add(self.b)
      .saturating_add(self.u)
      .saturating_add(self.g)
      .saturating_add(self.c)
  }

  /// Returns the number of pips of `color`; `Colorless` returns the generic amount
  #[inline]
  pub fn count(self, color: ManaColor) -> u8 {
    match color {
      ManaColor::White => self.w,
      ManaColor::Blue => self.u,
      ManaColor::Black => self.b,
      ManaColor::Red => self.r,
      ManaColor::Green => self.g,
      ManaColor::Colorless => self.c,
    }
  }

  fn add(&mut self, color: ManaColor, count: u8) {
    let pips = match color {
      ManaColor::White => &mut self.w,
      ManaColor::Blue => &mut self.u,
      ManaColor::Black => &mut self.b,
      ManaColor::Red => &mut self.r,
      ManaColor::Green => &mut self.g,
      ManaColor::Colorless => &mut self.c,
    };
    *pips = pips.saturating_add(count);
  }

  /// Returns the colored pips as (color, count) pairs in canonical color order,
  /// skipping colors with no pips
  pub fn colored(self) -> impl Iterator<Item = (ManaColor, u8)> {
    let colors: &'static [ManaColor; 5] = &ManaColor::COLORS;
    colors
      .iter()
      .map(move |&color| (color, self.count(color)))
      .filter(|&(_, count)| count > 0)
  }

  /// Returns the number of colored pips
  pub fn colored_cmc(self) -> u8 {
    self.cmc() - self.c
  }
}

/// Parses a mana cost in "{2}{R}{R}" style format.
///
/// Only the front face of a split cost ("{1}{R} // {2}{B}") is read. `{X}` counts as zero.
/// Hybrid (`{R/G}`, `{2/W}`), Phyrexian (`{R/P}`), `{C}` and any other non-color symbol count
/// as a single generic pip.
impl FromStr for ManaCost {
  type Err = Error;

  fn from_str(mana_cost_str: &str) -> Result<Self, Error> {
    let front = mana_cost_str.split("//").next().unwrap_or("").trim();
    let mut cost = ManaCost::new();
    let mut sigil = String::new();
    let mut in_symbol = false;
    for c in front.chars() {
      match c {
        '{' if !in_symbol => {
          sigil.clear();
          in_symbol = true;
        }
        '}' if in_symbol => {
          cost.add_symbol(&sigil, mana_cost_str)?;
          in_symbol = false;
        }
        c if in_symbol => sigil.push(c),
        c if c.is_whitespace() => {}
        _ => {
          return Err(Error::BadManaCost(mana_cost_str.to_string()));
        }
      }
    }
    if in_symbol {
      return Err(Error::BadManaCost(mana_cost_str.to_string()));
    }
    Ok(cost)
  }
}

impl ManaCost {
  fn add_symbol(&mut self, sigil: &str, mana_cost_str: &str) -> Result<(), Error> {
    let sigil = sigil.trim();
    if sigil.is_empty() {
      return Err(Error::BadManaCost(mana_cost_str.to_string()));
    }
    if sigil.chars().all(|c| c.is_ascii_digit()) {
      let count = sigil
        .parse::<u8>()
        .map_err(|_| Error::BadManaCost(mana_cost_str.to_string()))?;
      self.add(ManaColor::Colorless, count);
      return Ok(());
    }
    let mut chars = sigil.chars();
    match (chars.next(), chars.next()) {
      (Some(x), None) if x.eq_ignore_ascii_case(&'X') => {}
      (Some(symbol), None) => match ManaColor::from_symbol(symbol) {
        Some(ManaColor::Colorless) | None => self.add(ManaColor::Colorless, 1),
        Some(color) => self.add(color, 1),
      },
      _ => self.add(ManaColor::Colorless, 1),
    }
    Ok(())
  }
}

/// Formats the cost in canonical "{2}{W}{U}{B}{R}{G}" order. A zero cost is "{0}".
impl fmt::Display for ManaCost {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.c > 0 || self.cmc() == 0 {
      write!(f, "{{{}}}", self.c)?;
    }
    for (color, count) in self.colored() {
      for _ in 0..count {
        write!(f, "{{{}}}", color)?;
      }
    }
    Ok(())
  }
}
