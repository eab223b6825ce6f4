//! Render targets.
//!
//! A [`Container`] is wherever the homepage markup ends up: a bare
//! fragment, or the `#main` element of a full HTML page.

use std::fmt;
use std::ops::Range;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, SongbookError};

/// Id of the element the homepage renders into.
pub const MAIN_ELEMENT_ID: &str = "main";

/// Something whose inner HTML can be replaced.
pub trait Container {
    /// Replace the current contents with `html`.
    fn set_inner_html(&mut self, html: &str) -> Result<()>;
}

/// A bare fragment; the whole string is the container.
impl Container for String {
    fn set_inner_html(&mut self, html: &str) -> Result<()> {
        self.clear();
        self.push_str(html);
        Ok(())
    }
}

/// A full HTML page with a target element addressed by id.
///
/// The page is kept as text. Only the target element's contents are
/// rewritten; everything around it is preserved byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
    target_id: String,
}

impl HtmlDocument {
    /// Wrap a page whose target element is `#main`.
    pub fn new<S: Into<String>>(html: S) -> Self {
        Self::with_target(html, MAIN_ELEMENT_ID)
    }

    /// Wrap a page with a custom target element id.
    pub fn with_target<S1: Into<String>, S2: Into<String>>(html: S1, target_id: S2) -> Self {
        Self {
            html: html.into(),
            target_id: target_id.into(),
        }
    }

    /// Id of the target element.
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Current contents of the target element, if present.
    pub fn inner_html(&self) -> Option<&str> {
        element_content_range(&self.html, &self.target_id).map(|range| &self.html[range])
    }

    /// The whole page.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Consume and return the whole page.
    pub fn into_string(self) -> String {
        self.html
    }
}

impl Container for HtmlDocument {
    fn set_inner_html(&mut self, html: &str) -> Result<()> {
        let range = element_content_range(&self.html, &self.target_id)
            .ok_or_else(|| SongbookError::ElementNotFound(self.target_id.clone()))?;
        self.html.replace_range(range, html);
        Ok(())
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Byte range of the contents of the element with the given id.
///
/// The page is tokenized leniently, so quoted attribute values,
/// comments and unquoted ids are handled. Tag names are matched
/// case-insensitively, ids exactly. Nested elements with the same tag
/// name are balanced.
fn element_content_range(html: &str, id: &str) -> Option<Range<usize>> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    // lowercased tag name and content start of the target element
    let mut found: Option<(Vec<u8>, usize)> = None;
    let mut depth = 0usize;
    loop {
        match reader.read_event().ok()? {
            Event::Start(e) => {
                if let Some((name, _)) = &found {
                    if e.name().as_ref().eq_ignore_ascii_case(name) {
                        depth += 1;
                    }
                } else if has_id(&e, id) {
                    let name = e.name().as_ref().to_ascii_lowercase();
                    found = Some((name, reader.buffer_position() as usize));
                    depth = 1;
                }
            }
            Event::End(e) => {
                if let Some((name, start)) = &found {
                    if e.name().as_ref().eq_ignore_ascii_case(name) {
                        depth -= 1;
                        if depth == 0 {
                            let after = reader.buffer_position() as usize;
                            let end = html[..after].rfind("</")?;
                            return Some(*start..end);
                        }
                    }
                }
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}

fn has_id(element: &BytesStart<'_>, id: &str) -> bool {
    element
        .html_attributes()
        .flatten()
        .any(|attr| {
            attr.key.as_ref().eq_ignore_ascii_case(b"id") && attr.value.as_ref() == id.as_bytes()
        })
}
