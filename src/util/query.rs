//! Query-string parameter lookup for admin pages.

use std::str::FromStr;

use url::Url;

use crate::error::{Result, SongbookError};

/// Look up `name` in a location search string such as `"?type=Song&order=asc"`.
///
/// Everything after the first `?` is split on `&`, then each pair on `=`.
/// When a key repeats the last value wins; an absent key yields an empty
/// string. Values are returned exactly as written, without percent
/// decoding, and a value containing `=` is cut at that `=`.
pub fn get_param(search: &str, name: &str) -> String {
    let Some((_, query)) = search.split_once('?') else {
        return String::new();
    };

    let mut value = "";
    for pair in query.split('&') {
        let mut parts = pair.split('=');
        if parts.next() == Some(name) {
            value = parts.next().unwrap_or("");
        }
    }
    value.to_string()
}

/// The address of the current admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Parse an absolute page URL.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// The query string including its leading `?`, or empty when there
    /// is no query.
    pub fn search(&self) -> String {
        match self.url.query() {
            Some(q) if !q.is_empty() => format!("?{}", q),
            _ => String::new(),
        }
    }

    /// Verbatim parameter lookup, see [`get_param`].
    pub fn param(&self, name: &str) -> String {
        get_param(&self.search(), name)
    }

    /// Parameter lookup with `application/x-www-form-urlencoded` decoding.
    ///
    /// Last match wins, as with [`PageLocation::param`].
    pub fn param_decoded(&self, name: &str) -> String {
        self.url
            .query_pairs()
            .filter(|(key, _)| key == name)
            .last()
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    }
}

impl FromStr for PageLocation {
    type Err = SongbookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
