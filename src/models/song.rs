//! Song content model.
//!
//! Songs are served by the ponzu `/api/contents` endpoint inside a
//! `{ "data": [...] }` envelope. Item metadata (`id`, `uuid`, `slug`,
//! timestamps) and extra fields such as `spotify_url` are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback shown for a missing title or artist.
pub const UNKNOWN: &str = "Unknown";

/// Fallback shown for a missing opinion.
pub const NO_OPINION: &str = "none";

/// Response envelope shared by every `/api/contents` listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentsEnvelope<T> {
    /// Listed items.
    pub data: Vec<T>,
}

/// Song rating as sent by the server.
///
/// The stock content type stores an integer, but hand-edited payloads
/// may carry a string or something else entirely. Whatever arrives is
/// displayed the way a browser would print it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Rating {
    /// Numeric rating.
    Number(serde_json::Number),
    /// Free-form rating.
    Text(String),
    /// Any other JSON value (booleans, arrays, objects).
    Other(Value),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `5.0` prints as `5`
            Rating::Number(n) if n.is_f64() => match n.as_f64() {
                Some(x) => write!(f, "{}", x),
                None => write!(f, "{}", n),
            },
            Rating::Number(n) => write!(f, "{}", n),
            Rating::Text(s) => f.write_str(s),
            Rating::Other(Value::Bool(b)) => write!(f, "{}", b),
            Rating::Other(v) => write!(f, "{}", v),
        }
    }
}

/// A song entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Song {
    /// Song title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Performing artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Rating, displayed as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Reviewer's opinion. The admin editor stores rich text here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opinion: Option<String>,
}

impl Song {
    /// Create a song with a title and artist.
    pub fn new<S1: Into<String>, S2: Into<String>>(title: S1, artist: S2) -> Self {
        Self {
            title: Some(title.into()),
            artist: Some(artist.into()),
            ..Default::default()
        }
    }

    /// Set rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set opinion.
    pub fn with_opinion<S: Into<String>>(mut self, opinion: S) -> Self {
        self.opinion = Some(opinion.into());
        self
    }

    /// Title, or [`UNKNOWN`] when missing or empty.
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNKNOWN)
    }

    /// Artist, or [`UNKNOWN`] when missing or empty.
    pub fn display_artist(&self) -> &str {
        non_empty(&self.artist).unwrap_or(UNKNOWN)
    }

    /// Opinion, or [`NO_OPINION`] when missing or empty.
    pub fn display_opinion(&self) -> &str {
        non_empty(&self.opinion).unwrap_or(NO_OPINION)
    }

    /// Rating text; empty when the server omitted it.
    pub fn display_rating(&self) -> String {
        self.rating
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
