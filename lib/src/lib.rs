//! # Magic: The Gathering On-Curve Probability Library
//!
//! oncurve computes exact probabilities for the card draw process in Magic: The Gathering:
//! the probability to have enough lands, of the right colors, together with a given card
//! by the turn that matches its converted mana cost. All results are closed-form
//! hypergeometric sums; nothing is simulated.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate bincode;
extern crate flate2;
extern crate regex;
extern crate wasm_bindgen;

#[macro_use]
pub mod card;
#[macro_use]
pub mod decklist;
pub mod collection;
pub mod color;
pub mod combinatorics;
pub mod curve;
pub mod deck;
pub mod error;
pub mod oncurve;
pub mod outcome;
pub mod report;
pub mod scryfall;

pub use crate::color::ColorModel;
pub use crate::error::Error;
pub use crate::report::{Report, ReportConfig};
