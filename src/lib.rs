//! # songbook
//!
//! A small companion library for ponzu CMS sites: renders the public
//! homepage's song list and provides the text and date helpers used by
//! the admin editor.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use songbook::{HomepageConfig, HomepageRenderer, HtmlDocument};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let renderer = HomepageRenderer::new(HomepageConfig::new("http://localhost:8080"))?;
//!
//!     let mut page = HtmlDocument::new(r#"<body><div id="main"></div></body>"#);
//!     renderer.load(&mut page).await?;
//!     println!("{}", page);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Helpers
//!
//! - [`util::replace_bad_chars`] - normalize smart quotes, dashes and friends
//! - [`util::partial_time`], [`util::partial_date`] - joined local time/date strings
//! - [`util::partial_time_record`], [`util::partial_date_record`] - editor input records
//! - [`util::get_param`] - query-string lookup

pub mod api;
pub mod error;
mod homepage;
pub mod models;
pub mod page;
pub mod util;

// Main interface
pub use homepage::{
    render_completion, render_song, render_songs, HomepageConfig, HomepageRenderer, HtmlMode,
    DEFAULT_BASE_URL, EMPTY_MESSAGE, FAILURE_MESSAGE,
};
pub use page::{Container, HtmlDocument};

pub use api::ContentsApi;
pub use error::SongbookError;
pub use models::{Rating, Song};
