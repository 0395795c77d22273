//! # Binomial coefficients and hypergeometric probabilities
//!
//! Every count in this crate is carried as a [`Ways`] value. Binomial coefficients that fit
//! in a `u128` are computed exactly and then lifted into log space; larger coefficients are
//! accumulated term by term in log space. Products and quotients of coefficients stay in log
//! space until the final probability is formed, so a deck of several hundred cards never
//! overflows and never loses precision through a factorial.
use std::cmp::min;
use std::ops::{Div, Mul};

/// Ways represents a number of combinations, stored as its natural logarithm
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ways {
  ln: f64,
}

impl Ways {
  pub const ZERO: Ways = Ways {
    ln: std::f64::NEG_INFINITY,
  };
  pub const ONE: Ways = Ways { ln: 0.0 };

  /// Returns the Ways value for an exact integer count
  pub fn from_count(count: u128) -> Self {
    if count == 0 {
      Self::ZERO
    } else {
      Self {
        ln: (count as f64).ln(),
      }
    }
  }

  #[inline]
  pub fn is_zero(self) -> bool {
    self.ln == std::f64::NEG_INFINITY
  }

  /// Returns the natural logarithm of the count, or negative infinity for zero
  #[inline]
  pub fn ln(self) -> f64 {
    self.ln
  }

  /// Returns the count as a float. Counts above ~1e308 saturate to infinity,
  /// which is fine for display but should never be used for further arithmetic.
  pub fn count(self) -> f64 {
    self.ln.exp()
  }

  /// Returns `self / total` as a probability in [0, 1].
  /// A zero denominator means the event space is empty and resolves to 0.0.
  pub fn probability(self, total: Ways) -> f64 {
    if self.is_zero() || total.is_zero() {
      return 0.0;
    }
    let p = (self.ln - total.ln).exp();
    if p.is_nan() {
      0.0
    } else {
      p.max(0.0).min(1.0)
    }
  }
}

impl Mul for Ways {
  type Output = Ways;

  fn mul(self, rhs: Ways) -> Ways {
    if self.is_zero() || rhs.is_zero() {
      return Ways::ZERO;
    }
    Ways {
      ln: self.ln + rhs.ln,
    }
  }
}

impl Div for Ways {
  type Output = Ways;

  /// Division by zero ways yields zero ways (0/0 and x/0 are impossible events)
  fn div(self, rhs: Ways) -> Ways {
    if self.is_zero() || rhs.is_zero() {
      return Ways::ZERO;
    }
    Ways {
      ln: self.ln - rhs.ln,
    }
  }
}

/// Returns C(n, k) exactly, or None if an intermediate product overflows a u128
pub fn binomial_exact(n: u64, k: u64) -> Option<u128> {
  if k > n {
    return Some(0);
  }
  let k = min(k, n - k);
  let mut result: u128 = 1;
  for i in 1..=k {
    // result holds C(n - k + i - 1, i - 1) here, so the division is exact
    result = result.checked_mul((n - k + i) as u128)? / i as u128;
  }
  Some(result)
}

/// Returns the number of ways to choose `k` items from `n` distinguishable items.
/// Zero when `k < 0`, `k > n` or `n < 0`.
pub fn binomial(n: i64, k: i64) -> Ways {
  if n < 0 || k < 0 || k > n {
    return Ways::ZERO;
  }
  let n = n as u64;
  let k = min(k as u64, n - k as u64);
  match binomial_exact(n, k) {
    Some(count) => Ways::from_count(count),
    None => {
      let ln = (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum();
      Ways { ln }
    }
  }
}

/// Returns the probability of drawing exactly `k` successes when drawing `draws` cards
/// without replacement from `population` cards of which `successes` are successes
pub fn hypergeometric(population: usize, draws: usize, successes: usize, k: usize) -> f64 {
  if k > successes || k > draws || draws > population || successes > population {
    return 0.0;
  }
  let ways = binomial(successes as i64, k as i64)
    * binomial((population - successes) as i64, (draws - k) as i64);
  ways.probability(binomial(population as i64, draws as i64))
}

/// Returns the probability of drawing exactly `drawn_i` cards from each category of
/// `count_i` cards, as given by `categories = [(count_i, drawn_i), ..]`, with the remaining
/// draws coming from the cards that belong to no category
pub fn multivariate_hypergeometric(
  population: usize,
  draws: usize,
  categories: &[(usize, usize)],
) -> f64 {
  let category_total: usize = categories.iter().map(|&(count, _)| count).sum();
  let drawn_total: usize = categories.iter().map(|&(_, drawn)| drawn).sum();
  if category_total > population || drawn_total > draws || draws > population {
    return 0.0;
  }
  let ways = categories
    .iter()
    .fold(Ways::ONE, |acc, &(count, drawn)| {
      acc * binomial(count as i64, drawn as i64)
    })
    * binomial(
      (population - category_total) as i64,
      (draws - drawn_total) as i64,
    );
  ways.probability(binomial(population as i64, draws as i64))
}
