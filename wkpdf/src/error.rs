//! Error types for wkpdf.
//!
//! Every failure a production call can hit falls into one of a few
//! categories, and callers usually need to tell them apart: a broken
//! rendering tool, a full disk and a page that failed to load all call
//! for different fixes.
//!
//! # Error Categories
//!
//! - **Input read**: draining a caller-supplied reader into a page failed
//! - **Staging**: writing in-memory pages to the temporary directory failed
//! - **External tool**: wkhtmltopdf could not be started or exited non-zero
//! - **Output write**: the destination file or writer rejected the PDF
//! - **Timeout**: wkhtmltopdf ran longer than the configured bound

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Result type alias for wkpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading page content from a caller-supplied source failed.
    InputRead,
    /// Creating or populating the temporary directory failed.
    Staging,
    /// wkhtmltopdf failed to start or reported a failure.
    ExternalTool,
    /// Writing the finished PDF to its destination failed.
    OutputWrite,
    /// wkhtmltopdf was terminated after exceeding the timeout.
    Timeout,
    /// The converter configuration is unusable.
    Config,
}

/// Where a finished PDF was being written when an output error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file on disk.
    File(PathBuf),
    /// A caller-supplied writer.
    Writer,
}

/// Main error type for wkpdf operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Draining a reader into a page buffer failed.
    #[error("Error reading from reader: {source}")]
    InputRead {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The staging directory or one of its files could not be written.
    #[error("Error writing temp files: {}\n  Reason: {source}", .path.display())]
    Staging {
        /// Directory or file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The executable could not be started.
    #[error("Error running wkhtmltopdf: failed to launch {}: {source}", .program.display())]
    ToolLaunch {
        /// Executable that was invoked.
        program: PathBuf,
        /// Underlying spawn error.
        source: io::Error,
    },

    /// The executable ran but exited unsuccessfully.
    #[error("Error running wkhtmltopdf: {}", failure_text(.status, .stderr))]
    ToolFailed {
        /// Exit code, if the process exited normally.
        status: Option<i32>,
        /// Everything the process wrote to standard error.
        stderr: String,
    },

    /// The rendered PDF could not be delivered.
    #[error("{}: {source}", output_prefix(.target))]
    OutputWrite {
        /// Destination being written.
        target: OutputTarget,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The executable was killed after running too long.
    #[error("Timed out running wkhtmltopdf after {:.1}s", .timeout.as_secs_f64())]
    Timeout {
        /// The bound that was exceeded.
        timeout: Duration,
    },

    /// The converter configuration cannot be used.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong.
        message: String,
    },
}

fn failure_text(status: &Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    match (*status, stderr.is_empty()) {
        (_, false) => stderr.to_string(),
        (Some(code), true) => format!("exited with status {code}"),
        (None, true) => "terminated by signal".to_string(),
    }
}

fn output_prefix(target: &OutputTarget) -> String {
    match target {
        OutputTarget::File(path) => format!("Error creating file {}", path.display()),
        OutputTarget::Writer => "Error writing to writer".to_string(),
    }
}

impl Error {
    /// Create an InputRead error.
    pub fn input_read(source: io::Error) -> Self {
        Self::InputRead { source }
    }

    /// Create a Staging error.
    pub fn staging(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Staging {
            path: path.into(),
            source,
        }
    }

    /// Create a ToolLaunch error.
    pub fn tool_launch(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ToolLaunch {
            program: program.into(),
            source,
        }
    }

    /// Create a ToolFailed error from a finished process.
    pub fn tool_failed(status: ExitStatus, stderr: &[u8]) -> Self {
        Self::ToolFailed {
            status: status.code(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }

    /// Create an OutputWrite error for a destination file.
    pub fn output_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            target: OutputTarget::File(path.into()),
            source,
        }
    }

    /// Create an OutputWrite error for a caller-supplied writer.
    pub fn output_writer(source: io::Error) -> Self {
        Self::OutputWrite {
            target: OutputTarget::Writer,
            source,
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputRead { .. } => ErrorKind::InputRead,
            Self::Staging { .. } => ErrorKind::Staging,
            Self::ToolLaunch { .. } | Self::ToolFailed { .. } => ErrorKind::ExternalTool,
            Self::OutputWrite { .. } => ErrorKind::OutputWrite,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::InvalidConfig { .. } => ErrorKind::Config,
        }
    }

    /// Text the external tool wrote to standard error, if this error carries it.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::ToolFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config => 1,
            ErrorKind::InputRead => 2,
            ErrorKind::ExternalTool => 3,
            ErrorKind::Staging => 4,
            ErrorKind::OutputWrite => 5,
            ErrorKind::Timeout => 124,
        }
    }
}
