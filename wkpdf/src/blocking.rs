//! Synchronous front end over [`Converter`](crate::Converter).
//!
//! Each call drives the async converter to completion on a private
//! current-thread runtime. Do not call these from inside a tokio runtime;
//! use the async methods there instead.
//!
//! # Examples
//!
//! ```no_run
//! use wkpdf::{blocking, Config, Document, Page};
//!
//! let doc = Document::new().page(Page::new("index.html"));
//! let converter = blocking::Converter::new(Config::default());
//!
//! let mut out = Vec::new();
//! converter.write(&doc, &mut out)?;
//! # Ok::<(), wkpdf::Error>(())
//! ```

use std::future::Future;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::document::Document;
use crate::error::{Error, Result};

/// Blocking wrapper around [`crate::Converter`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    inner: crate::Converter,
}

impl Converter {
    /// Create a converter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            inner: crate::Converter::new(config),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    /// Render `doc` into the file at `path`, blocking until done.
    pub fn write_to_file(&self, doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        self.block_on(self.inner.write_to_file(doc, path))
    }

    /// Render `doc` and copy the PDF into `writer`, blocking until done.
    pub fn write<W: Write + ?Sized>(&self, doc: &Document, writer: &mut W) -> Result<()> {
        let pdf = self.to_vec(doc)?;
        writer.write_all(&pdf).map_err(Error::output_writer)?;
        writer.flush().map_err(Error::output_writer)?;
        Ok(())
    }

    /// Render `doc` into memory, blocking until done.
    pub fn to_vec(&self, doc: &Document) -> Result<Vec<u8>> {
        self.block_on(self.inner.to_vec(doc))
    }

    fn block_on<F, T>(&self, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| self.runtime_failure(e))?;
        runtime.block_on(future)
    }

    /// Without a runtime the executable cannot be launched at all.
    fn runtime_failure(&self, source: io::Error) -> Error {
        Error::tool_launch(&self.config().executable, source)
    }
}
