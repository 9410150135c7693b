//! Converter configuration.
//!
//! Settings that govern how documents are turned into PDFs rather than what
//! they contain: which executable to run, where temporary files go and how
//! long a run may take. A [`Config`] is handed to every
//! [`Converter`](crate::Converter); nothing is read from global state during
//! a production call.
//!
//! # Examples
//!
//! ```
//! use wkpdf::Config;
//! use std::time::Duration;
//!
//! let config = Config::new()
//!     .executable("/usr/local/bin/wkhtmltopdf")
//!     .timeout(Duration::from_secs(30));
//!
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default executable name, resolved through `PATH`.
pub const DEFAULT_EXECUTABLE: &str = "wkhtmltopdf";

/// Environment variable overriding the executable.
pub const EXECUTABLE_ENV: &str = "WKHTMLTOPDF_BIN";

/// Environment variable overriding the staging base directory.
pub const TEMP_DIR_ENV: &str = "WKPDF_TEMP_DIR";

/// Complete configuration for PDF production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path or name of the wkhtmltopdf executable.
    pub executable: PathBuf,

    /// Directory under which per-call staging directories are created.
    pub temp_dir: PathBuf,

    /// Upper bound on a single wkhtmltopdf run (None = unbounded).
    pub timeout: Option<Duration>,

    /// Pipe a lone in-memory page through stdin instead of staging it.
    ///
    /// Only applies when the document has exactly one buffered page and no
    /// file or URL pages.
    pub pipe_single_page: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            temp_dir: std::env::temp_dir(),
            timeout: None,
            pipe_single_page: false,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from defaults overridden by the environment.
    ///
    /// Reads [`EXECUTABLE_ENV`] and [`TEMP_DIR_ENV`]; empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(executable) = std::env::var_os(EXECUTABLE_ENV).filter(|v| !v.is_empty()) {
            config.executable = PathBuf::from(executable);
        }

        if let Some(temp_dir) = std::env::var_os(TEMP_DIR_ENV).filter(|v| !v.is_empty()) {
            config.temp_dir = PathBuf::from(temp_dir);
        }

        config
    }

    /// Set the executable.
    pub fn executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Set the staging base directory.
    pub fn temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    /// Bound each run to `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable piping a lone in-memory page through stdin.
    pub fn pipe_single_page(mut self, enabled: bool) -> Self {
        self.pipe_single_page = enabled;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if:
    /// - The executable path is empty
    /// - The staging base directory is empty
    /// - The timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.executable.as_os_str().is_empty() {
            return Err(Error::invalid_config("Executable must not be empty"));
        }

        if self.temp_dir.as_os_str().is_empty() {
            return Err(Error::invalid_config(
                "Temporary directory must not be empty",
            ));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::invalid_config("Timeout must be greater than zero"));
        }

        Ok(())
    }
}
