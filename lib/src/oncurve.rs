//! # Web interface
//!
//! Defines the interface between the library and a JavaScript caller through wasm-bindgen
use crate::collection::Collection;
use crate::color::ColorModel;
use crate::deck::Deck;
use crate::decklist::DeckList;
use crate::error::Error;
use crate::report::{Report, ReportConfig};
use crate::scryfall::ScryfallList;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

/// Input format expected from the caller
#[derive(Debug, Serialize, Deserialize)]
struct Input {
    /// The deck list text
    pub code: String,
    /// Scryfall card objects for every card named in `code`
    pub cards: ScryfallList,
    #[serde(default)]
    pub color_model: ColorModel,
}

/// Computes the deck report for an input object
/// Assumes that input deserializes into a valid `Input`, and returns a serialized `Report`,
/// or a string describing the error
/// # Example
///
///  ```js
///  const input = {code: "4 Shock\n20 Mountain", cards: [...], color_model: "multivariate"};
///  const report = require('oncurve').oncurve_run(input);
///  console.log(report.cards);
///  ```
#[wasm_bindgen]
pub fn oncurve_run(input: &JsValue) -> JsValue {
    let input: Input = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing report inputs: {}", e));
        }
        Ok(v) => v,
    };
    let report = match run_impl(input) {
        Err(e) => {
            return JsValue::from_str(&format!("Error computing report: {}", e));
        }
        Ok(v) => v,
    };
    match JsValue::from_serde(&report) {
        Err(e) => JsValue::from_str(&format!("Error serializing report: {}", e)),
        Ok(v) => v,
    }
}

fn run_impl(input: Input) -> Result<Report, Error> {
    let list: DeckList = input.code.parse()?;
    let collection = Collection::from_scryfall(input.cards.into_cards());
    let deck = Deck::from_list(&list, &collection)?;
    Report::from_deck(
        &deck,
        &ReportConfig {
            color_model: input.color_model,
        },
    )
}
