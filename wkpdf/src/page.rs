//! Pages: one HTML source plus its own options.
//!
//! A page is sourced either from a reference (a local path or a URL handed
//! to wkhtmltopdf as-is) or from an in-memory buffer drained from a reader
//! when the page is built. A buffered page never touches its reader again.
//!
//! # Examples
//!
//! ```
//! use wkpdf::Page;
//! use wkpdf::option::page;
//!
//! let cover = Page::new("cover.html").option(page::no_background());
//! let body = Page::from_reader(&b"<h1>Report</h1>"[..]).unwrap();
//!
//! assert!(!cover.is_buffered());
//! assert!(body.is_buffered());
//! ```

use bytes::Bytes;
use std::io::Read;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Error, Result};
use crate::option::PageOption;

/// Where a page's HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// A file path or URL passed to wkhtmltopdf verbatim.
    Reference(String),
    /// HTML captured in memory.
    Buffer(Bytes),
}

/// A single HTML source together with the options that apply to it.
///
/// One page may span many pages of the finished PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    source: PageSource,
    options: Vec<String>,
}

impl Page {
    /// Create a page from a file path or URL.
    pub fn new(reference: impl Into<String>) -> Self {
        Self::with_source(PageSource::Reference(reference.into()))
    }

    /// Create a page from HTML already in memory.
    pub fn from_bytes(content: impl Into<Bytes>) -> Self {
        Self::with_source(PageSource::Buffer(content.into()))
    }

    /// Create a page by reading `reader` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputRead`] if the reader fails; no page is created.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(Error::input_read)?;
        Ok(Self::from_bytes(content))
    }

    /// Create a page by reading an async reader to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputRead`] if the reader fails; no page is created.
    pub async fn from_async_reader<R: AsyncRead + Unpin>(mut reader: R) -> Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .await
            .map_err(Error::input_read)?;
        Ok(Self::from_bytes(content))
    }

    fn with_source(source: PageSource) -> Self {
        Self {
            source,
            options: Vec::new(),
        }
    }

    /// Attach an option, returning the page.
    pub fn option(mut self, option: PageOption) -> Self {
        self.add_option(option);
        self
    }

    /// Attach several options in order, returning the page.
    pub fn options_from<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = PageOption>,
    {
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Attach an option. Options apply in the order they were attached.
    pub fn add_option(&mut self, option: PageOption) {
        self.options.extend(option.into_args());
    }

    /// The page's source.
    pub fn source(&self) -> &PageSource {
        &self.source
    }

    /// Flattened option tokens, in attachment order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether the page content lives in memory.
    pub fn is_buffered(&self) -> bool {
        matches!(self.source, PageSource::Buffer(_))
    }

    /// The reference, for file/URL pages.
    pub fn reference(&self) -> Option<&str> {
        match &self.source {
            PageSource::Reference(reference) => Some(reference),
            PageSource::Buffer(_) => None,
        }
    }

    /// The buffered content, for in-memory pages.
    pub fn content(&self) -> Option<&Bytes> {
        match &self.source {
            PageSource::Reference(_) => None,
            PageSource::Buffer(content) => Some(content),
        }
    }
}
