//! Per-page options.
//!
//! Loading behaviour, JavaScript, links, forms, headers and footers. A page
//! option attached to a [`Document`](crate::Document) applies to every page.

use super::{PageOption, fmt_2dp};

/// Allow the file or files from the specified folder to be loaded (repeatable).
pub fn allow(path: impl Into<String>) -> PageOption {
    PageOption::with("--allow", path)
}

/// Print background (default).
pub fn background() -> PageOption {
    PageOption::flag("--background")
}

/// Do not print background.
pub fn no_background() -> PageOption {
    PageOption::flag("--no-background")
}

/// Bypass proxy for host (repeatable).
pub fn bypass_proxy(host: impl Into<String>) -> PageOption {
    PageOption::with("--bypass-proxy-for", host)
}

/// Web cache directory.
pub fn cache_dir(path: impl Into<String>) -> PageOption {
    PageOption::with("--cache-dir", path)
}

/// Use this svg file when rendering checked checkboxes.
pub fn checkbox_checked_svg(path: impl Into<String>) -> PageOption {
    PageOption::with("--checkbox-checked-svg", path)
}

/// Use this svg file when rendering unchecked checkboxes.
pub fn checkbox_svg(path: impl Into<String>) -> PageOption {
    PageOption::with("--checkbox-svg", path)
}

/// Set an additional cookie (repeatable). The value should be url encoded.
pub fn cookie(name: impl Into<String>, value: impl Into<String>) -> PageOption {
    PageOption::pair("--cookie", name, value)
}

/// Set an additional HTTP header (repeatable).
pub fn custom_header(name: impl Into<String>, value: impl Into<String>) -> PageOption {
    PageOption::pair("--custom-header", name, value)
}

/// Send the custom headers with every resource request.
pub fn custom_header_propagation() -> PageOption {
    PageOption::flag("--custom-header-propagation")
}

/// Only send the custom headers with the page request.
pub fn no_custom_header_propagation() -> PageOption {
    PageOption::flag("--no-custom-header-propagation")
}

/// Add a default header, with the name of the page to the left and the page
/// number to the right.
pub fn default_header() -> PageOption {
    PageOption::flag("--default-header")
}

/// Set the default text encoding for input.
pub fn encoding(encoding: impl Into<String>) -> PageOption {
    PageOption::with("--encoding", encoding)
}

/// Do not make links to remote web pages.
pub fn disable_external_links() -> PageOption {
    PageOption::flag("--disable-external-links")
}

/// Make links to remote web pages (default).
pub fn enable_external_links() -> PageOption {
    PageOption::flag("--enable-external-links")
}

/// Do not turn HTML form fields into pdf form fields (default).
pub fn disable_forms() -> PageOption {
    PageOption::flag("--disable-forms")
}

/// Turn HTML form fields into pdf form fields.
pub fn enable_forms() -> PageOption {
    PageOption::flag("--enable-forms")
}

/// Load or print images (default).
pub fn images() -> PageOption {
    PageOption::flag("--images")
}

/// Do not load or print images.
pub fn no_images() -> PageOption {
    PageOption::flag("--no-images")
}

/// Do not make local links.
pub fn disable_internal_links() -> PageOption {
    PageOption::flag("--disable-internal-links")
}

/// Make local links (default).
pub fn enable_internal_links() -> PageOption {
    PageOption::flag("--enable-internal-links")
}

/// Allow web pages to run JavaScript (default).
pub fn enable_javascript() -> PageOption {
    PageOption::flag("--enable-javascript")
}

/// Do not allow web pages to run JavaScript.
pub fn disable_javascript() -> PageOption {
    PageOption::flag("--disable-javascript")
}

/// Wait some milliseconds for JavaScript to finish (default 200).
pub fn javascript_delay(msec: u32) -> PageOption {
    PageOption::with("--javascript-delay", msec.to_string())
}

/// Keep relative external links as relative external links.
pub fn keep_relative_links() -> PageOption {
    PageOption::flag("--keep-relative-links")
}

/// What to do when a page fails to load: `abort`, `ignore` or `skip`.
pub fn load_error_handling(handler: impl Into<String>) -> PageOption {
    PageOption::with("--load-error-handling", handler)
}

/// What to do when a media file fails to load: `abort`, `ignore` or `skip`.
pub fn load_media_error_handling(handler: impl Into<String>) -> PageOption {
    PageOption::with("--load-media-error-handling", handler)
}

/// Do not allow conversion of a local file to read in other local files.
pub fn disable_local_file_access() -> PageOption {
    PageOption::flag("--disable-local-file-access")
}

/// Allow conversion of a local file to read in other local files.
pub fn enable_local_file_access() -> PageOption {
    PageOption::flag("--enable-local-file-access")
}

/// Minimum font size.
pub fn min_font_size(size: u32) -> PageOption {
    PageOption::with("--minimum-font-size", size.to_string())
}

/// Do not include the page in the table of contents and outlines.
pub fn exclude_from_outline() -> PageOption {
    PageOption::flag("--exclude-from-outline")
}

/// Include the page in the table of contents and outlines (default).
pub fn include_in_outline() -> PageOption {
    PageOption::flag("--include-in-outline")
}

/// Set the starting page number.
pub fn page_offset(offset: i32) -> PageOption {
    PageOption::with("--page-offset", offset.to_string())
}

/// HTTP Authentication password.
pub fn password(password: impl Into<String>) -> PageOption {
    PageOption::with("--password", password)
}

/// Disable installed plugins (default).
pub fn disable_plugins() -> PageOption {
    PageOption::flag("--disable-plugins")
}

/// Enable installed plugins (plugins will likely not work).
pub fn enable_plugins() -> PageOption {
    PageOption::flag("--enable-plugins")
}

/// Add an additional post field (repeatable).
pub fn post(name: impl Into<String>, value: impl Into<String>) -> PageOption {
    PageOption::pair("--post", name, value)
}

/// Post an additional file (repeatable).
pub fn post_file(name: impl Into<String>, path: impl Into<String>) -> PageOption {
    PageOption::pair("--post-file", name, path)
}

/// Use the print media-type instead of screen.
pub fn print_media_type() -> PageOption {
    PageOption::flag("--print-media-type")
}

/// Do not use the print media-type instead of screen (default).
pub fn no_print_media_type() -> PageOption {
    PageOption::flag("--no-print-media-type")
}

/// Use a proxy.
pub fn proxy(proxy: impl Into<String>) -> PageOption {
    PageOption::with("--proxy", proxy)
}

/// Use this svg file when rendering unchecked radio buttons.
pub fn radio_button(path: impl Into<String>) -> PageOption {
    PageOption::with("--radiobutton-svg", path)
}

/// Use this svg file when rendering checked radio buttons.
pub fn radio_button_checked(path: impl Into<String>) -> PageOption {
    PageOption::with("--radiobutton-checked-svg", path)
}

/// Resolve relative external links into absolute links (default).
pub fn resolve_relative_links() -> PageOption {
    PageOption::flag("--resolve-relative-links")
}

/// Run this additional JavaScript after the page is done loading (repeatable).
pub fn run_script(js: impl Into<String>) -> PageOption {
    PageOption::with("--run-script", js)
}

/// Disable the intelligent shrinking strategy used by WebKit.
pub fn disable_smart_shrinking() -> PageOption {
    PageOption::flag("--disable-smart-shrinking")
}

/// Enable the intelligent shrinking strategy used by WebKit (default).
pub fn enable_smart_shrinking() -> PageOption {
    PageOption::flag("--enable-smart-shrinking")
}

/// Stop slow running JavaScripts (default).
pub fn stop_slow_scripts() -> PageOption {
    PageOption::flag("--stop-slow-scripts")
}

/// Do not stop slow running JavaScripts.
pub fn no_stop_slow_scripts() -> PageOption {
    PageOption::flag("--no-stop-slow-scripts")
}

/// Do not link from section header to toc (default).
pub fn disable_toc_back_links() -> PageOption {
    PageOption::flag("--disable-toc-back-links")
}

/// Link from section header to toc.
pub fn enable_toc_back_links() -> PageOption {
    PageOption::flag("--enable-toc-back-links")
}

/// Specify a user style sheet, to load with every page.
pub fn user_style_sheet(url: impl Into<String>) -> PageOption {
    PageOption::with("--user-style-sheet", url)
}

/// HTTP Authentication username.
pub fn username(username: impl Into<String>) -> PageOption {
    PageOption::with("--username", username)
}

/// Set viewport size if you have custom scrollbars or css attribute overflow
/// to emulate window size.
pub fn viewport_size(size: impl Into<String>) -> PageOption {
    PageOption::with("--viewport-size", size)
}

/// Wait until `window.status` is equal to this string before rendering the page.
pub fn window_status(status: impl Into<String>) -> PageOption {
    PageOption::with("--window-status", status)
}

/// Use this zoom factor.
pub fn zoom(factor: f64) -> PageOption {
    PageOption::with("--zoom", fmt_2dp(factor))
}

// Footers

/// Centered footer text.
pub fn footer_center(text: impl Into<String>) -> PageOption {
    PageOption::with("--footer-center", text)
}

/// Set footer font name.
pub fn footer_font_name(name: impl Into<String>) -> PageOption {
    PageOption::with("--footer-font-name", name)
}

/// Set footer font size.
pub fn footer_font_size(size: u32) -> PageOption {
    PageOption::with("--footer-font-size", size.to_string())
}

/// Adds an html footer.
pub fn footer_html(url: impl Into<String>) -> PageOption {
    PageOption::with("--footer-html", url)
}

/// Left aligned footer text.
pub fn footer_left(text: impl Into<String>) -> PageOption {
    PageOption::with("--footer-left", text)
}

/// Display line above the footer.
pub fn footer_line() -> PageOption {
    PageOption::flag("--footer-line")
}

/// Do not display line above the footer (default).
pub fn no_footer_line() -> PageOption {
    PageOption::flag("--no-footer-line")
}

/// Right aligned footer text.
pub fn footer_right(text: impl Into<String>) -> PageOption {
    PageOption::with("--footer-right", text)
}

/// Spacing between footer and content in mm.
pub fn footer_spacing(spacing: f64) -> PageOption {
    PageOption::with("--footer-spacing", fmt_2dp(spacing))
}

// Headers

/// Centered header text.
pub fn header_center(text: impl Into<String>) -> PageOption {
    PageOption::with("--header-center", text)
}

/// Set header font name.
pub fn header_font_name(name: impl Into<String>) -> PageOption {
    PageOption::with("--header-font-name", name)
}

/// Set header font size.
pub fn header_font_size(size: u32) -> PageOption {
    PageOption::with("--header-font-size", size.to_string())
}

/// Adds an html header.
pub fn header_html(url: impl Into<String>) -> PageOption {
    PageOption::with("--header-html", url)
}

/// Left aligned header text.
pub fn header_left(text: impl Into<String>) -> PageOption {
    PageOption::with("--header-left", text)
}

/// Display line below the header.
pub fn header_line() -> PageOption {
    PageOption::flag("--header-line")
}

/// Do not display line below the header (default).
pub fn no_header_line() -> PageOption {
    PageOption::flag("--no-header-line")
}

/// Right aligned header text.
pub fn header_right(text: impl Into<String>) -> PageOption {
    PageOption::with("--header-right", text)
}

/// Spacing between header and content in mm.
pub fn header_spacing(spacing: f64) -> PageOption {
    PageOption::with("--header-spacing", fmt_2dp(spacing))
}

/// Replace `[name]` with value in header and footer (repeatable).
pub fn replace(name: impl Into<String>, value: impl Into<String>) -> PageOption {
    PageOption::pair("--replace", name, value)
}
