//! Rendering options.
//!
//! An option is an immutable sequence of command-line tokens: one flag and
//! zero, one or two values. Options carry a [`Scope`] saying where they may
//! be attached. [`GlobalOption`]s only make sense for a whole document;
//! [`PageOption`]s belong to a page but may also be attached to a document,
//! in which case wkhtmltopdf applies them to every page.
//!
//! The constructors in [`global`] and [`page`] cover the flags wkhtmltopdf
//! understands. Values are passed through verbatim; wkhtmltopdf itself is
//! the only validator.
//!
//! # Examples
//!
//! ```
//! use wkpdf::option::{global, page};
//!
//! assert_eq!(global::page_size("A4").args(), ["--page-size", "A4"]);
//! assert_eq!(page::zoom(0.9).args(), ["--zoom", "0.90"]);
//! ```

pub mod global;
pub mod page;

use std::fmt;

/// Where an option may be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Only valid on a document.
    Document,
    /// Valid on a page, and on a document as a default for all pages.
    Page,
}

/// An option that applies to the document as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalOption {
    args: Vec<String>,
}

/// An option that applies to a single page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageOption {
    args: Vec<String>,
}

/// Anything that can be attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentOption {
    /// A document-only option.
    Global(GlobalOption),
    /// A page option applied to every page.
    Page(PageOption),
}

fn tokens<I, S>(flag: &str, values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(flag.to_string())
        .chain(values.into_iter().map(Into::into))
        .collect()
}

impl GlobalOption {
    pub(crate) fn flag(flag: &str) -> Self {
        Self {
            args: vec![flag.to_string()],
        }
    }

    pub(crate) fn with(flag: &str, value: impl Into<String>) -> Self {
        Self {
            args: vec![flag.to_string(), value.into()],
        }
    }

    /// Build an option the catalog does not name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wkpdf::option::GlobalOption;
    ///
    /// let opt = GlobalOption::raw("--log-level", ["warn"]);
    /// assert_eq!(opt.args(), ["--log-level", "warn"]);
    /// ```
    pub fn raw<I, S>(flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: tokens(flag, values),
        }
    }

    /// The command-line tokens of this option.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume the option, returning its tokens.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Always [`Scope::Document`].
    pub fn scope(&self) -> Scope {
        Scope::Document
    }
}

impl PageOption {
    pub(crate) fn flag(flag: &str) -> Self {
        Self {
            args: vec![flag.to_string()],
        }
    }

    pub(crate) fn with(flag: &str, value: impl Into<String>) -> Self {
        Self {
            args: vec![flag.to_string(), value.into()],
        }
    }

    pub(crate) fn pair(flag: &str, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            args: vec![flag.to_string(), name.into(), value.into()],
        }
    }

    /// Build a page option the catalog does not name.
    pub fn raw<I, S>(flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: tokens(flag, values),
        }
    }

    /// The command-line tokens of this option.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume the option, returning its tokens.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Always [`Scope::Page`].
    pub fn scope(&self) -> Scope {
        Scope::Page
    }
}

impl DocumentOption {
    /// The command-line tokens of this option.
    pub fn args(&self) -> &[String] {
        match self {
            Self::Global(opt) => opt.args(),
            Self::Page(opt) => opt.args(),
        }
    }

    /// Consume the option, returning its tokens.
    pub fn into_args(self) -> Vec<String> {
        match self {
            Self::Global(opt) => opt.into_args(),
            Self::Page(opt) => opt.into_args(),
        }
    }

    /// The scope of the wrapped option.
    pub fn scope(&self) -> Scope {
        match self {
            Self::Global(_) => Scope::Document,
            Self::Page(_) => Scope::Page,
        }
    }
}

impl From<GlobalOption> for DocumentOption {
    fn from(opt: GlobalOption) -> Self {
        Self::Global(opt)
    }
}

impl From<PageOption> for DocumentOption {
    fn from(opt: PageOption) -> Self {
        Self::Page(opt)
    }
}

impl fmt::Display for GlobalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

impl fmt::Display for PageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Two decimal places: zoom and header/footer spacing.
pub(crate) fn fmt_2dp(value: f64) -> String {
    format!("{value:.2}")
}

/// Three decimal places: TOC text shrink factor.
pub(crate) fn fmt_3dp(value: f64) -> String {
    format!("{value:.3}")
}
