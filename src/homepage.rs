//! Homepage song list renderer.
//!
//! Fetches the song listing once and fills the page's `#main` element
//! with one `<article>` per song, an empty-state hint, or a failure
//! notice.

use std::borrow::Cow;
use std::time::Duration;

use quick_xml::escape::escape;
use tracing::{debug, info, warn};

use crate::api::{Completion, ContentsApi, ContentsQuery};
use crate::error::{Result, SongbookError};
use crate::models::Song;
use crate::page::Container;

/// Default site the CLI talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Shown when the listing is empty.
pub const EMPTY_MESSAGE: &str = r#"<p><strong>There have not been any Songs added, <a href="/admin">go add some at /admin</a></strong></p>"#;

/// Shown when the listing request answers with anything but 200.
pub const FAILURE_MESSAGE: &str =
    "<p><strong>The /api endpoint did not respond correctly :-(</strong></p>";

/// How server-supplied text is inserted into the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlMode {
    /// Escape `& < > ' "`.
    #[default]
    Escaped,
    /// Insert verbatim. Only for trusted servers: opinions are rich text
    /// written in the admin editor and lose their formatting when escaped.
    Raw,
}

impl HtmlMode {
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            HtmlMode::Escaped => escape(text),
            HtmlMode::Raw => Cow::Borrowed(text),
        }
    }
}

/// Homepage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepageConfig {
    /// Site root, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Listing request parameters.
    pub query: ContentsQuery,
    /// Give up waiting after this long. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Escaping of song fields.
    pub html_mode: HtmlMode,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: ContentsQuery::default(),
            timeout: None,
            html_mode: HtmlMode::default(),
        }
    }
}

impl HomepageConfig {
    /// Config for the site at `base_url` with default settings.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the listing query.
    pub fn with_query(mut self, query: ContentsQuery) -> Self {
        self.query = query;
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the HTML mode.
    pub fn with_html_mode(mut self, html_mode: HtmlMode) -> Self {
        self.html_mode = html_mode;
        self
    }
}

/// Render one song entry.
pub fn render_song(song: &Song, mode: HtmlMode) -> String {
    format!(
        r#"
<article>
    <h3>{} by {}</h3>
    <p>rating: {}</p>
    <h6>opinion:</h6>
    <div>{}</div>
</article>
"#,
        mode.apply(song.display_title()),
        mode.apply(song.display_artist()),
        mode.apply(&song.display_rating()),
        mode.apply(song.display_opinion()),
    )
}

/// Render a song list; entries are concatenated without a separator.
pub fn render_songs(songs: &[Song], mode: HtmlMode) -> String {
    if songs.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    songs.iter().map(|song| render_song(song, mode)).collect()
}

/// Render the markup for a completed listing request.
///
/// Fails only when a 200 body is not a valid listing.
pub fn render_completion(done: &Completion, mode: HtmlMode) -> Result<String> {
    if !done.is_ok() {
        warn!("Contents endpoint answered {}", done.status);
        return Ok(FAILURE_MESSAGE.to_string());
    }

    let songs: Vec<Song> = done.data()?;
    debug!("{:?}", songs);
    Ok(render_songs(&songs, mode))
}

/// Loads the song listing and renders it into a [`Container`].
///
/// # Example
///
/// ```rust,no_run
/// use songbook::{HomepageConfig, HomepageRenderer, HtmlDocument};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let renderer = HomepageRenderer::new(HomepageConfig::new("http://localhost:8080"))?;
///     let mut page = HtmlDocument::new(r#"<main id="main"></main>"#);
///     renderer.load(&mut page).await?;
///     println!("{}", page);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HomepageRenderer {
    api: ContentsApi,
    config: HomepageConfig,
}

impl HomepageRenderer {
    /// Create a renderer from config.
    pub fn new(config: HomepageConfig) -> Result<Self> {
        let api = ContentsApi::new(&config.base_url)?;
        Ok(Self { api, config })
    }

    /// Create a renderer around an existing API client.
    ///
    /// `config.base_url` is ignored in favour of the client's.
    pub fn with_api(api: ContentsApi, config: HomepageConfig) -> Self {
        Self { api, config }
    }

    /// Current config.
    pub fn config(&self) -> &HomepageConfig {
        &self.config
    }

    /// Set the request timeout.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.config.timeout = timeout;
    }

    /// Set the HTML mode.
    pub fn set_html_mode(&mut self, html_mode: HtmlMode) {
        self.config.html_mode = html_mode;
    }

    /// Issue the listing request and, once it completes, replace the
    /// container's contents.
    ///
    /// The container is left untouched when the request never completes
    /// (transport error or timeout) or when a 200 body cannot be parsed.
    pub async fn load<C: Container + ?Sized>(&self, container: &mut C) -> Result<()> {
        let done = match self.fetch().await {
            Ok(done) => done,
            Err(e) => {
                warn!("Homepage load abandoned: {}", e);
                return Err(e);
            }
        };

        let html = render_completion(&done, self.config.html_mode)?;
        container.set_inner_html(&html)?;
        info!("Rendered homepage ({})", done.status);
        Ok(())
    }

    async fn fetch(&self) -> Result<Completion> {
        let request = self.api.get_contents(&self.config.query);
        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| SongbookError::Timeout(limit))?,
            None => request.await,
        }
    }
}
