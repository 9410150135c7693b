//! Documents: ordered pages plus document-wide options.
//!
//! wkhtmltopdf applies a flag to whichever page locator precedes it, so the
//! argument vector is assembled strictly as
//!
//! ```text
//! <document options...> (<page locator> <page options...>)*
//! ```
//!
//! with pages in insertion order and options in attachment order.
//!
//! # Examples
//!
//! ```
//! use wkpdf::{Document, Page};
//! use wkpdf::option::{global, page};
//!
//! let doc = Document::new()
//!     .option(global::grayscale())
//!     .option(global::page_size("A5"))
//!     .page(Page::new("page1.html").option(page::allow("images/")))
//!     .page(Page::new("page2.html").option(page::no_background()));
//!
//! assert_eq!(
//!     doc.args(),
//!     [
//!         "--grayscale", "--page-size", "A5",
//!         "page1.html", "--allow", "images/",
//!         "page2.html", "--no-background",
//!     ]
//! );
//! ```

use std::ffi::OsString;

use crate::option::DocumentOption;
use crate::page::{Page, PageSource};

/// Locator wkhtmltopdf reads as "this page comes from standard input".
pub const STDIN_LOCATOR: &str = "-";

/// A single PDF document built from one or more pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pages: Vec<Page>,
    options: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document seeded with options.
    pub fn with_options<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<DocumentOption>,
    {
        let mut doc = Self::new();
        for option in options {
            doc.add_option(option);
        }
        doc
    }

    /// Attach an option, returning the document.
    ///
    /// Accepts both [`GlobalOption`](crate::option::GlobalOption)s and
    /// [`PageOption`](crate::option::PageOption)s; the latter apply to
    /// every page.
    pub fn option(mut self, option: impl Into<DocumentOption>) -> Self {
        self.add_option(option);
        self
    }

    /// Attach an option. Later options win over earlier ones of the same flag.
    pub fn add_option(&mut self, option: impl Into<DocumentOption>) {
        self.options.extend(option.into().into_args());
    }

    /// Append a page, returning the document.
    pub fn page(mut self, page: Page) -> Self {
        self.add_page(page);
        self
    }

    /// Append a page. Pages render in the order they are added.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Append several pages in order.
    pub fn add_pages<I>(&mut self, pages: I)
    where
        I: IntoIterator<Item = Page>,
    {
        self.pages.extend(pages);
    }

    /// Pages in render order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Flattened document option tokens, in attachment order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages whose content lives in memory.
    pub fn buffered_page_count(&self) -> usize {
        self.pages.iter().filter(|pg| pg.is_buffered()).count()
    }

    /// Buffered page contents, in page order.
    pub(crate) fn buffers(&self) -> impl Iterator<Item = &bytes::Bytes> {
        self.pages.iter().filter_map(Page::content)
    }

    /// Assemble the argument vector, showing every buffered page as the
    /// stdin locator.
    ///
    /// Only a document with a single buffered page can be run with these
    /// arguments as-is; with more, the converter stages the buffers to files
    /// and puts the staged paths in their place.
    pub fn args(&self) -> Vec<String> {
        self.assemble(std::iter::empty())
    }

    /// Assemble the argument vector, substituting `locators` for buffered
    /// pages in order. Buffered pages left without a locator read stdin.
    pub(crate) fn args_with_locators<I>(&self, locators: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        self.assemble(locators)
    }

    fn assemble<T, I>(&self, locators: I) -> Vec<T>
    where
        T: From<String>,
        I: IntoIterator<Item = T>,
    {
        let mut locators = locators.into_iter();
        let mut args: Vec<T> = self.options.iter().cloned().map(T::from).collect();

        for pg in &self.pages {
            let locator = match pg.source() {
                PageSource::Reference(reference) => T::from(reference.clone()),
                PageSource::Buffer(_) => locators
                    .next()
                    .unwrap_or_else(|| T::from(STDIN_LOCATOR.to_string())),
            };
            args.push(locator);
            args.extend(pg.options().iter().cloned().map(T::from));
        }

        args
    }
}
