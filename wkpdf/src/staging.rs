//! Temporary staging of in-memory pages.
//!
//! wkhtmltopdf reads at most one page from standard input, so when a
//! document holds several buffered pages each one is written to its own file
//! inside a private directory:
//!
//! ```text
//! <temp_dir>/wkpdf-XXXXXX/page00000001.html
//! <temp_dir>/wkpdf-XXXXXX/page00000002.html
//! ```
//!
//! Numbering counts buffered pages only. The directory name carries a random
//! suffix, so concurrent production calls never share files. The directory
//! is removed when the [`StagingDir`] is dropped.

use bytes::Bytes;
use futures::future::try_join_all;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::{Error, Result};

/// Prefix of every staging directory name.
pub const STAGING_PREFIX: &str = "wkpdf-";

/// Extension of staged page files.
pub const STAGED_EXTENSION: &str = "html";

/// File name for the `index`-th buffered page (1-based).
pub fn staged_file_name(index: usize) -> String {
    format!("page{index:08}.{STAGED_EXTENSION}")
}

/// A private directory holding staged pages, removed on drop.
#[derive(Debug)]
pub struct StagingDir {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl StagingDir {
    /// Write `buffers` into a fresh directory under `base`.
    ///
    /// All files are written before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Staging`] if the directory or any file cannot be
    /// written. Anything already written is removed.
    pub async fn stage<'a, I>(base: &Path, buffers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Bytes>,
    {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(base)
            .map_err(|e| Error::staging(base, e))?;

        Self::populate(dir, buffers).await
    }

    /// Fill `dir` with one file per buffer.
    async fn populate<'a, I>(dir: TempDir, buffers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Bytes>,
    {
        let writes = buffers.into_iter().enumerate().map(|(idx, content)| {
            let path = dir.path().join(staged_file_name(idx + 1));
            let content = content.clone();
            async move {
                tokio::fs::write(&path, &content)
                    .await
                    .map_err(|e| Error::staging(&path, e))?;
                Ok::<_, Error>(path)
            }
        });

        // On error `dir` drops here and takes partial files with it.
        let files = try_join_all(writes).await?;

        log::debug!(
            "Staged {} page(s) in {}",
            files.len(),
            dir.path().display()
        );

        Ok(Self { dir, files })
    }

    /// The staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Staged files, in buffered-page order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Staged file paths as command-line locators.
    pub fn locators(&self) -> Vec<OsString> {
        self.files
            .iter()
            .map(|path| path.as_os_str().to_os_string())
            .collect()
    }

    /// Remove the directory now.
    ///
    /// A removal failure is logged, never returned.
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            log::warn!(
                "Failed to remove staging directory {}: {e}",
                path.display()
            );
        }
    }
}
