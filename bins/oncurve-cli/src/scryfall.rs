//! Scryfall API client for cards missing from the local collection
use oncurve::scryfall::{CollectionRequest, CollectionResponse};
use std::thread;
use std::time::{Duration, Instant};

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

/// Keeps consecutive requests at least `delay` apart
#[derive(Debug)]
pub struct RateLimiter {
  delay: Duration,
  last_request: Option<Instant>,
}

impl RateLimiter {
  pub fn new(delay: Duration) -> Self {
    Self {
      delay,
      last_request: None,
    }
  }

  /// Blocks the calling thread until `delay` has passed since the previous call
  pub fn wait(&mut self) {
    if let Some(last) = self.last_request {
      let elapsed = last.elapsed();
      if elapsed < self.delay {
        let pause = self.delay - elapsed;
        debug!("Rate limited, sleeping {:?}", pause);
        thread::sleep(pause);
      }
    }
    self.last_request = Some(Instant::now());
  }
}

pub struct ScryfallClient {
  http: reqwest::blocking::Client,
  limiter: RateLimiter,
  base_url: String,
}

impl ScryfallClient {
  pub fn new(limiter: RateLimiter) -> Result<Self, reqwest::Error> {
    let http = reqwest::blocking::Client::builder()
      .user_agent(concat!("oncurve-cli/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self {
      http,
      limiter,
      base_url: SCRYFALL_API_URL.to_string(),
    })
  }

  /// Looks up `names` with `/cards/collection`, 75 names per request
  pub fn fetch_collection<S: AsRef<str>>(
    &mut self,
    names: &[S],
  ) -> Result<CollectionResponse, reqwest::Error> {
    let url = format!("{}/cards/collection", self.base_url);
    let mut result = CollectionResponse {
      data: Vec::with_capacity(names.len()),
      not_found: Vec::new(),
    };
    for request in CollectionRequest::chunks(names) {
      self.limiter.wait();
      info!("Fetching {} cards from {}", request.identifiers.len(), url);
      let response: CollectionResponse = self
        .http
        .post(&url)
        .json(&request)
        .send()?
        .error_for_status()?
        .json()?;
      result.data.extend(response.data);
      result.not_found.extend(response.not_found);
    }
    Ok(result)
  }
}
