#[macro_use]
extern crate log;
extern crate oncurve;

use oncurve::collection::{Collection, CollectionError};
use std::env;
use std::fs::File;
use std::io::BufReader;

#[derive(Debug)]
enum Error {
    Usage,
    Collection(CollectionError),
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<CollectionError> for Error {
    fn from(error: CollectionError) -> Self {
        Self::Collection(error)
    }
}

fn program_name(args: &[String]) -> &str {
    args.get(0).map(String::as_str).unwrap_or("scryfall2oncurve")
}

/// Converts a Scryfall bulk data JSON file into a card cache for `oncurve --cards`
fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "usage: {} <scryfall json> <output cache>",
            program_name(&args)
        );
        return Err(Error::Usage);
    }
    let json_path = &args[1];
    let out_path = &args[2];

    info!("Loading JSON file @ {}", json_path);
    let reader = BufReader::new(File::open(json_path)?);
    info!("Deserializing Scryfall JSON");
    let collection = Collection::from_json_reader(reader)?;
    let lands = collection.iter().filter(|card| card.is_land()).count();
    info!(
        "Converted {} cards, {} of them lands",
        collection.len(),
        lands
    );
    collection.save_cache(out_path)?;
    Ok(())
}
