extern crate serde_json;
#[macro_use]
extern crate log;
extern crate oncurve;

mod scryfall;

use clap::Parser;
use oncurve::card::Card;
use oncurve::collection::{Collection, CollectionError};
use oncurve::deck::Deck;
use oncurve::decklist::DeckList;
use oncurve::report::card_on_curve;
use oncurve::{ColorModel, Report, ReportConfig};
use scryfall::{RateLimiter, ScryfallClient};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "oncurve")]
#[command(
  about = "Exact on-curve probabilities for a Magic: The Gathering deck list",
  long_about = None
)]
struct Args {
  /// Deck list text file
  #[arg(short, long)]
  deck: PathBuf,

  /// Card collection, Scryfall JSON or a cache written by --save-cache
  #[arg(short, long)]
  cards: Option<PathBuf>,

  /// Fetch cards missing from the collection from the Scryfall API
  #[arg(short, long)]
  fetch: bool,

  /// Write the collection, fetched cards included, to this cache file
  #[arg(long)]
  save_cache: Option<PathBuf>,

  /// Minimum delay between Scryfall API requests, in milliseconds
  #[arg(long, default_value = "100")]
  api_delay_ms: u64,

  /// Land color model, sequential or multivariate
  #[arg(short, long, default_value = "multivariate")]
  model: ColorModel,

  /// Print only the on-curve probability of this card
  #[arg(long)]
  card: Option<String>,

  /// Pretty print the JSON output
  #[arg(short, long)]
  pretty: bool,
}

#[derive(Debug)]
enum Error {
  Io(std::io::Error),
  Json(serde_json::Error),
  Collection(CollectionError),
  Request(reqwest::Error),
  OnCurve(oncurve::Error),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::Io(e) => write!(f, "{}", e),
      Error::Json(e) => write!(f, "{}", e),
      Error::Collection(e) => write!(f, "{}", e),
      Error::Request(e) => write!(f, "Scryfall request failed: {}", e),
      Error::OnCurve(e) => write!(f, "{}", e),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(error: std::io::Error) -> Self {
    Self::Io(error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(error: serde_json::Error) -> Self {
    Self::Json(error)
  }
}

impl From<CollectionError> for Error {
  fn from(error: CollectionError) -> Self {
    Self::Collection(error)
  }
}

impl From<reqwest::Error> for Error {
  fn from(error: reqwest::Error) -> Self {
    Self::Request(error)
  }
}

impl From<oncurve::Error> for Error {
  fn from(error: oncurve::Error) -> Self {
    Self::OnCurve(error)
  }
}

fn main() -> Result<(), Error> {
  let _ = env_logger::try_init();
  let args = Args::parse();

  info!("Reading deck list @ {}", args.deck.display());
  let list: DeckList = fs::read_to_string(&args.deck)?.parse()?;
  let mut collection = match &args.cards {
    Some(path) => Collection::load(path)?,
    None => Collection::new(),
  };

  let names = list.names();
  let missing = collection.missing(&names);
  if !missing.is_empty() {
    if args.fetch {
      let limiter = RateLimiter::new(Duration::from_millis(args.api_delay_ms));
      let mut client = ScryfallClient::new(limiter)?;
      let response = client.fetch_collection(&missing)?;
      for identifier in &response.not_found {
        warn!("Scryfall does not know a card named \"{}\"", identifier.name);
      }
      collection.extend(response.data.into_iter().map(Card::from));
    } else {
      warn!(
        "{} cards are missing from the collection, run with --fetch to look them up",
        missing.len()
      );
    }
  }
  if let Some(path) = &args.save_cache {
    collection.save_cache(path)?;
  }

  let deck = Deck::from_list(&list, &collection)?;
  let output = match &args.card {
    Some(name) => serde_json::json!({
      "name": name,
      "color_model": args.model,
      "probability": card_on_curve(&deck, name, args.model)?,
    }),
    None => {
      let config = ReportConfig {
        color_model: args.model,
      };
      serde_json::to_value(Report::from_deck(&deck, &config)?)?
    }
  };
  let text = if args.pretty {
    serde_json::to_string_pretty(&output)?
  } else {
    serde_json::to_string(&output)?
  };
  println!("{}", text);
  Ok(())
}
