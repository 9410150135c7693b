//! Running wkhtmltopdf.
//!
//! A production call goes through these steps in order:
//!
//! 1. Stage buffered pages to a private directory (or pipe a lone buffered
//!    page through stdin when [`Config::pipe_single_page`] allows it).
//! 2. Prepare the destination: in file mode the target file is created up
//!    front, so an unwritable destination is reported as an output error.
//! 3. Spawn wkhtmltopdf with the assembled arguments and the destination
//!    token, capturing stdout and stderr.
//! 4. Wait for it to exit, bounded by [`Config::timeout`].
//! 5. Deliver the captured PDF (stream mode only).
//!
//! The staging directory is removed on every exit path.
//!
//! # Examples
//!
//! ```no_run
//! use wkpdf::{Config, Converter, Document, Page};
//! use wkpdf::option::global;
//!
//! # async fn example() -> wkpdf::Result<()> {
//! let doc = Document::new()
//!     .option(global::page_size("A4"))
//!     .page(Page::new("https://example.com"));
//!
//! let converter = Converter::new(Config::from_env());
//! converter.write_to_file(&doc, "example.pdf").await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Instant;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

use crate::config::Config;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::page::PageSource;
use crate::staging::StagingDir;

/// Destination token wkhtmltopdf reads as "write the PDF to standard output".
pub const STDOUT_TOKEN: &str = "-";

/// Where wkhtmltopdf should put the PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write straight to a file.
    File(PathBuf),
    /// Write to standard output, captured by the converter.
    Stdout,
}

impl Destination {
    /// The final command-line argument for this destination.
    ///
    /// A relative file path starting with `-` is written as `./-...` so the
    /// tool never reads it as stdout or as a flag.
    fn token(&self) -> OsString {
        match self {
            Self::File(path) if path.is_relative() && starts_with_dash(path) => {
                Path::new(".").join(path).into_os_string()
            }
            Self::File(path) => path.as_os_str().to_os_string(),
            Self::Stdout => OsString::from(STDOUT_TOKEN),
        }
    }
}

fn starts_with_dash(path: &Path) -> bool {
    path.as_os_str().as_encoded_bytes().starts_with(b"-")
}

/// A fully assembled command line, for display and logging.
///
/// Arguments that are not valid UTF-8 are shown lossily; the process itself
/// is always spawned with the exact bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments, destination last.
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: &Path, args: &[OsString]) -> Self {
        Self {
            program: program.to_path_buf(),
            args: args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// How buffered pages reach wkhtmltopdf for one run.
enum Feed {
    /// No buffered pages.
    None,
    /// One buffered page piped through stdin.
    Stdin(bytes::Bytes),
    /// Buffered pages written to disk; the guard removes them on drop.
    Staged(StagingDir),
}

/// Turns [`Document`]s into PDFs by running wkhtmltopdf.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The command line a run would use, without running it.
    ///
    /// Buffered pages are shown as the stdin locator since no staging
    /// happens here.
    pub fn invocation(&self, doc: &Document, destination: &Destination) -> Invocation {
        let mut args = doc.args_with_locators(std::iter::empty());
        args.push(destination.token());
        Invocation::new(&self.config.executable, &args)
    }

    /// Render `doc` into the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::Staging`] if buffered pages cannot be staged
    /// - [`Error::OutputWrite`] if `path` cannot be created
    /// - [`Error::ToolLaunch`] / [`Error::ToolFailed`] if wkhtmltopdf fails
    /// - [`Error::Timeout`] if the run exceeds the configured timeout
    ///
    /// A failed run removes whatever wkhtmltopdf left at `path`.
    pub async fn write_to_file(&self, doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        self.produce(doc, &Destination::File(path.as_ref().to_path_buf()))
            .await
            .map(|_| ())
    }

    /// Render `doc` and copy the PDF into `writer`.
    ///
    /// Nothing is written to `writer` unless wkhtmltopdf succeeds.
    ///
    /// # Errors
    ///
    /// As [`write_to_file`](Self::write_to_file), with
    /// [`Error::OutputWrite`] reporting a failing writer.
    pub async fn write<W>(&self, doc: &Document, writer: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let pdf = self.to_vec(doc).await?;
        writer.write_all(&pdf).await.map_err(Error::output_writer)?;
        writer.flush().await.map_err(Error::output_writer)?;
        Ok(())
    }

    /// Render `doc` into memory.
    pub async fn to_vec(&self, doc: &Document) -> Result<Vec<u8>> {
        self.produce(doc, &Destination::Stdout).await
    }

    /// Run one production call, returning captured stdout.
    async fn produce(&self, doc: &Document, destination: &Destination) -> Result<Vec<u8>> {
        self.config.validate()?;

        let feed = self.feed(doc).await?;
        let mut args = match &feed {
            Feed::Staged(staging) => doc.args_with_locators(staging.locators()),
            Feed::None | Feed::Stdin(_) => doc.args_with_locators(std::iter::empty()),
        };
        args.push(destination.token());

        if let Destination::File(path) = destination {
            tokio::fs::File::create(path)
                .await
                .map_err(|e| Error::output_file(path, e))?;
        }

        let stdin = match &feed {
            Feed::Stdin(content) => Some(content.clone()),
            Feed::None | Feed::Staged(_) => None,
        };
        let result = self.run(args, stdin).await;

        if let Feed::Staged(staging) = feed {
            staging.close();
        }

        if let (Err(_), Destination::File(path)) = (&result, destination) {
            // Created above, so whatever is there now is partial output.
            if let Err(e) = tokio::fs::remove_file(path).await {
                log::debug!("No partial output removed at {}: {e}", path.display());
            }
        }

        result
    }

    /// Decide how buffered pages are fed, staging them if needed.
    async fn feed(&self, doc: &Document) -> Result<Feed> {
        match doc.buffered_page_count() {
            0 => Ok(Feed::None),
            1 if self.config.pipe_single_page && doc.len() == 1 => {
                match doc.pages()[0].source() {
                    PageSource::Buffer(content) => Ok(Feed::Stdin(content.clone())),
                    PageSource::Reference(_) => Ok(Feed::None),
                }
            }
            _ => {
                let staging = StagingDir::stage(&self.config.temp_dir, doc.buffers()).await?;
                Ok(Feed::Staged(staging))
            }
        }
    }

    /// Spawn wkhtmltopdf and wait for it, returning captured stdout.
    async fn run(&self, args: Vec<OsString>, stdin: Option<bytes::Bytes>) -> Result<Vec<u8>> {
        let program = &self.config.executable;
        log::debug!("Running {}", Invocation::new(program, &args));

        let started = Instant::now();
        let mut child = Command::new(program)
            .args(&args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::tool_launch(program, e))?;

        if let (Some(content), Some(mut pipe)) = (stdin, child.stdin.take()) {
            tokio::spawn(async move {
                // A closed pipe means the tool stopped reading; its exit status tells why.
                if let Err(e) = pipe.write_all(&content).await {
                    log::debug!("Stopped feeding stdin: {e}");
                }
            });
        }

        let output: Output = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| Error::Timeout { timeout })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| Error::tool_launch(program, e))?;

        if !output.status.success() {
            return Err(Error::tool_failed(output.status, &output.stderr));
        }

        log::info!(
            "wkhtmltopdf finished in {:.2}s ({} bytes on stdout)",
            started.elapsed().as_secs_f64(),
            output.stdout.len()
        );

        Ok(output.stdout)
    }
}
