//! CLI argument parsing for wkpdf.
//!
//! Only `clap` and `std` are used here; the build script includes this file
//! to render the man page.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Render HTML pages to a single PDF with wkhtmltopdf.
///
/// Pages are rendered in the order given. Document flags apply once to the
/// whole PDF; page flags are applied to every page.
#[derive(Parser, Debug)]
#[command(name = "wkpdf")]
#[command(version)]
#[command(about = "Render HTML pages to a single PDF with wkhtmltopdf", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Pages to render (in order)
    ///
    /// Each input is a URL, a file path, a glob pattern or `-` to read one
    /// HTML page from stdin. Glob matches are rendered in sorted order.
    ///
    /// Examples:
    ///   wkpdf https://example.com -o example.pdf
    ///   wkpdf cover.html chapter*.html -o book.pdf
    ///   render-report | wkpdf - -o report.pdf
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Output PDF file path, or `-` for stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Print the wkhtmltopdf command line without running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the dry-run command line as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Verbose output - log staging and the full command line
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Render in grayscale
    #[arg(long)]
    pub grayscale: bool,

    /// Paper size (A4, Letter, ...)
    #[arg(long, value_name = "SIZE")]
    pub page_size: Option<String>,

    /// Landscape orientation
    #[arg(long)]
    pub landscape: bool,

    /// Title of the PDF document
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Margin for all four sides (e.g. 10mm)
    #[arg(long, value_name = "UNITS")]
    pub margin: Option<String>,

    /// Output resolution in dots per inch
    #[arg(long, value_name = "DPI")]
    pub dpi: Option<u32>,

    /// Generate a PDF outline
    #[arg(long)]
    pub outline: bool,

    /// Zoom factor applied to every page
    #[arg(long, value_name = "FACTOR")]
    pub zoom: Option<f64>,

    /// Disable JavaScript on every page
    #[arg(long)]
    pub disable_javascript: bool,

    /// Milliseconds to wait for JavaScript to finish
    #[arg(long, value_name = "MSEC", conflicts_with = "disable_javascript")]
    pub javascript_delay: Option<u32>,

    /// Allow loading files from this directory (repeatable)
    #[arg(long, value_name = "PATH")]
    pub allow: Vec<String>,

    /// Use the print media type instead of screen
    #[arg(long)]
    pub print_media_type: bool,

    /// Centered header text on every page
    #[arg(long, value_name = "TEXT")]
    pub header_center: Option<String>,

    /// Centered footer text on every page
    #[arg(long, value_name = "TEXT")]
    pub footer_center: Option<String>,

    /// wkhtmltopdf executable
    #[arg(long, value_name = "PATH", env = "WKHTMLTOPDF_BIN", default_value = "wkhtmltopdf")]
    pub executable: PathBuf,

    /// Directory for temporary page files
    #[arg(long, value_name = "DIR", env = "WKPDF_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Abort wkhtmltopdf after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Pipe a single stdin page straight to wkhtmltopdf instead of a temp file
    #[arg(long)]
    pub pipe_single_page: bool,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Run timeout, if one was given.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Whether the PDF goes to stdout.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
