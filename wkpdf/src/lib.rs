//! wkpdf - drive wkhtmltopdf from Rust.
//!
//! Build a [`Document`] out of [`Page`]s, attach options to either, and hand
//! it to a [`Converter`] which assembles the command line, stages in-memory
//! pages, runs wkhtmltopdf and collects the PDF. It supports:
//!
//! - Pages from file paths, URLs, readers or byte buffers
//! - Document-wide and per-page options
//! - Output to a file, an async writer or memory
//! - Automatic cleanup of temporary files
//! - An optional timeout per run
//!
//! # Examples
//!
//! ## Basic Conversion
//!
//! ```no_run
//! use wkpdf::{Config, Converter, Document, Page};
//! use wkpdf::option::{global, page};
//!
//! # async fn example() -> wkpdf::Result<()> {
//! let doc = Document::new()
//!     .option(global::grayscale())
//!     .option(global::page_size("A4"))
//!     .page(Page::new("https://example.com").option(page::default_header()));
//!
//! let converter = Converter::new(Config::default());
//! converter.write_to_file(&doc, "example.pdf").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pages From Memory
//!
//! ```no_run
//! use wkpdf::{Config, Converter, Document, Page};
//!
//! # async fn example() -> wkpdf::Result<()> {
//! let html = "<html><body><h1>Test Page</h1></body></html>";
//! let doc = Document::new()
//!     .page(Page::from_reader(html.as_bytes())?)
//!     .page(Page::from_bytes("<h1>Appendix</h1>"));
//!
//! let pdf = Converter::new(Config::default()).to_vec(&doc).await?;
//! println!("{} bytes", pdf.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blocking;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod option;
pub mod page;
pub mod staging;

// Re-export commonly used types
pub use config::Config;
pub use convert::{Converter, Destination, Invocation};
pub use document::Document;
pub use error::{Error, ErrorKind, Result};
pub use option::{DocumentOption, GlobalOption, PageOption, Scope};
pub use page::{Page, PageSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
