//! OMDb API client.
//!
//! Sends `GET <endpoint>?t=<title>&apikey=<key>` and normalizes the JSON
//! answer into a [`LookupOutcome`].

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::{round_rating, Rating, Year};

use super::{LookupError, LookupMatch, LookupOutcome, MetadataLookup};

pub const DEFAULT_OMDB_ENDPOINT: &str = "http://www.omdbapi.com/";

const NOT_AVAILABLE: &str = "N/A";

pub struct OmdbClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl MetadataLookup for OmdbClient {
    fn lookup(&self, title: &str) -> Result<LookupOutcome, LookupError> {
        debug!("Looking up '{}' at {}", title, self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .inspect_err(|err| warn!("OMDb request for '{}' failed: {}", title, err))?;

        if !response.status().is_success() {
            warn!("OMDb answered {} for '{}'", response.status(), title);
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response.text()?;
        parse_response(&body)
    }
}

/// Normalizes an OMDb JSON body.
pub fn parse_response(body: &str) -> Result<LookupOutcome, LookupError> {
    let data: OmdbResponse = serde_json::from_str(body)?;

    if data.response.as_deref() != Some("True") {
        let reason = data.error.unwrap_or_else(|| "unknown error".to_string());
        return Ok(LookupOutcome::NotFound { reason });
    }

    Ok(LookupOutcome::Found(LookupMatch {
        title: data.title.unwrap_or_default().trim().to_string(),
        year: data.year.as_deref().map(parse_year).unwrap_or(0),
        rating: data.imdb_rating.as_deref().map(parse_rating).unwrap_or(0.0),
        poster_url: data
            .poster
            .filter(|p| p != NOT_AVAILABLE)
            .unwrap_or_default(),
    }))
}

// Series report ranges like "2011–2019"; the first year is kept.
fn parse_year(raw: &str) -> Year {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .take(4)
        .collect();
    if digits.len() == 4 {
        digits.parse().unwrap_or(0)
    } else {
        0
    }
}

fn parse_rating(raw: &str) -> Rating {
    if raw == NOT_AVAILABLE {
        return 0.0;
    }
    raw.trim()
        .parse::<Rating>()
        .ok()
        .filter(|r| r.is_finite())
        .map(round_rating)
        .unwrap_or(0.0)
}
