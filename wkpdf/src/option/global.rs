//! Document-wide options.
//!
//! These cover output quality, paper geometry, the outline and the table of
//! contents. They are only accepted by [`Document`](crate::Document).

use super::{GlobalOption, fmt_3dp};

/// Do not collate when printing multiple copies.
pub fn no_collate() -> GlobalOption {
    GlobalOption::flag("--no-collate")
}

/// Read and write cookies from and to the supplied cookie jar file.
pub fn cookie_jar(path: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--cookie-jar", path)
}

/// Number of copies to print into the pdf file.
pub fn copies(count: u32) -> GlobalOption {
    GlobalOption::with("--copies", count.to_string())
}

/// Change the dpi explicitly.
pub fn dpi(dpi: u32) -> GlobalOption {
    GlobalOption::with("--dpi", dpi.to_string())
}

/// Generate the PDF in grayscale.
pub fn grayscale() -> GlobalOption {
    GlobalOption::flag("--grayscale")
}

/// When embedding images, scale them down to this dpi.
pub fn image_dpi(dpi: u32) -> GlobalOption {
    GlobalOption::with("--image-dpi", dpi.to_string())
}

/// When jpeg compressing images, use this quality (default 94).
pub fn image_quality(quality: u32) -> GlobalOption {
    GlobalOption::with("--image-quality", quality.to_string())
}

/// Generate lower quality output to shrink the document.
pub fn low_quality() -> GlobalOption {
    GlobalOption::flag("--low-quality")
}

/// Set the page bottom margin.
pub fn margin_bottom(units: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--margin-bottom", units)
}

/// Set the page left margin.
pub fn margin_left(units: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--margin-left", units)
}

/// Set the page right margin.
pub fn margin_right(units: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--margin-right", units)
}

/// Set the page top margin.
pub fn margin_top(units: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--margin-top", units)
}

/// Set the page orientation to landscape.
pub fn landscape() -> GlobalOption {
    GlobalOption::with("--orientation", "landscape")
}

/// Set the page orientation to portrait.
pub fn portrait() -> GlobalOption {
    GlobalOption::with("--orientation", "portrait")
}

/// Set the page height.
pub fn page_height(units: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--page-height", units)
}

/// Set paper size to A4, Letter, etc.
pub fn page_size(size: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--page-size", size)
}

/// Set the page width.
pub fn page_width(units: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--page-width", units)
}

/// Do not use lossless compression on pdf objects.
pub fn no_pdf_compression() -> GlobalOption {
    GlobalOption::flag("--no-pdf-compression")
}

/// Be less verbose.
pub fn quiet() -> GlobalOption {
    GlobalOption::flag("--quiet")
}

/// The title of the generated pdf file. Defaults to the title of the first page.
pub fn title(title: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--title", title)
}

// Outline

/// Put an outline into the pdf.
pub fn outline() -> GlobalOption {
    GlobalOption::flag("--outline")
}

/// Do not put an outline into the pdf.
pub fn no_outline() -> GlobalOption {
    GlobalOption::flag("--no-outline")
}

/// Set the depth of the outline.
pub fn outline_depth(depth: u32) -> GlobalOption {
    GlobalOption::with("--outline-depth", depth.to_string())
}

/// Dump the outline to a file.
pub fn dump_outline(path: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--dump-outline", path)
}

// Table of contents

/// Do not use dotted lines in the toc.
pub fn disable_dotted_lines() -> GlobalOption {
    GlobalOption::flag("--disable-dotted-lines")
}

/// The header text of the toc.
pub fn toc_header_text(text: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--toc-header-text", text)
}

/// Indentation for each level of the toc, e.g. `1em`.
pub fn toc_level_indentation(width: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--toc-level-indentation", width)
}

/// Do not link from toc to sections.
pub fn disable_toc_links() -> GlobalOption {
    GlobalOption::flag("--disable-toc-links")
}

/// For each level of headings in the toc the font is scaled by this factor.
pub fn toc_text_size_shrink(factor: f64) -> GlobalOption {
    GlobalOption::with("--toc-text-size-shrink", fmt_3dp(factor))
}

/// Use the supplied xsl style sheet for printing the table of contents.
pub fn xsl_style_sheet(path: impl Into<String>) -> GlobalOption {
    GlobalOption::with("--xsl-style-sheet", path)
}
