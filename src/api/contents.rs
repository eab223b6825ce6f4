//! Content listing API client.
//!
//! This module provides a client for the ponzu `/api/contents` endpoint,
//! which lists items of one content type as `{ "data": [...] }`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::models::ContentsEnvelope;

/// Path of the listing endpoint, relative to the site root.
const CONTENTS_PATH: &str = "/api/contents";

/// Content type listed when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "Song";

/// Sort order by item timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Oldest first.
    Asc,
    /// Newest first (server default).
    #[default]
    Desc,
}

impl Order {
    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Parameters of a listing request.
///
/// Only `content_type` is always sent; the rest are omitted unless set
/// and fall back to the server's defaults (10 items, offset 0, newest
/// first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsQuery {
    /// Content type name, e.g. `Song`.
    pub content_type: String,
    /// Number of items; `-1` asks for all of them.
    pub count: Option<i32>,
    /// Page index, in multiples of `count`.
    pub offset: Option<u32>,
    /// Sort order.
    pub order: Option<Order>,
}

impl Default for ContentsQuery {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_TYPE)
    }
}

impl ContentsQuery {
    /// Query for all defaults of the given content type.
    pub fn new<S: Into<String>>(content_type: S) -> Self {
        Self {
            content_type: content_type.into(),
            count: None,
            offset: None,
            order: None,
        }
    }

    /// Set count.
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set order.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

/// A request that ran to completion, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

impl Completion {
    /// Create a completion from a status and body.
    pub fn new<S: Into<String>>(status: StatusCode, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the server answered `200 OK`. Every other status,
    /// including other 2xx codes, counts as a failure.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Parse the body's `data` array.
    pub fn data<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let envelope: ContentsEnvelope<T> = serde_json::from_str(&self.body)?;
        Ok(envelope.data)
    }
}

/// Client for the content listing endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use songbook::api::{ContentsApi, ContentsQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = ContentsApi::new("http://localhost:8080")?;
///     let done = api.get_contents(&ContentsQuery::default()).await?;
///     println!("{} ({} bytes)", done.status, done.body.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ContentsApi {
    client: Client,
    base_url: Url,
}

impl ContentsApi {
    /// Create a client for the site at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("songbook/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, Url::parse(base_url)?))
    }

    /// Create a client reusing an existing HTTP client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Site root requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the listing URL for `query`.
    pub fn contents_url(&self, query: &ContentsQuery) -> Result<Url> {
        let mut url = self.base_url.join(CONTENTS_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("type", &query.content_type);
            if let Some(count) = query.count {
                pairs.append_pair("count", &count.to_string());
            }
            if let Some(offset) = query.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
            if let Some(order) = query.order {
                pairs.append_pair("order", order.as_str());
            }
        }
        Ok(url)
    }

    /// Issue the listing request and wait for it to complete.
    ///
    /// Non-200 responses are returned as a [`Completion`], not an error;
    /// only transport failures fail here.
    pub async fn get_contents(&self, query: &ContentsQuery) -> Result<Completion> {
        let url = self.contents_url(query)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Completed with {} ({} bytes)", status, body.len());

        Ok(Completion { status, body })
    }
}
