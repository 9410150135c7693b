//! Integration tests for end-to-end rendering through a stand-in wkhtmltopdf.

use std::fs;

use serial_test::serial;
use tempfile::tempdir;
use wkpdf::option::{global, page};
use wkpdf::{Converter, Document, Page};

use crate::common::{
    PDF_HEADER, config_for, entry_count, fake_wkhtmltopdf, read_args, recording_wkhtmltopdf,
};

#[tokio::test]
#[serial]
async fn test_render_buffered_pages_to_memory() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let converter = Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));

    let doc = Document::new()
        .page(Page::from_bytes("test1"))
        .page(Page::from_bytes("test2"))
        .page(Page::from_bytes("test3"));

    let pdf = converter.to_vec(&doc).await.unwrap();
    assert_eq!(pdf, format!("{PDF_HEADER}test1test2test3").into_bytes());
    assert_eq!(entry_count(tmp.path()), 0);
}

#[tokio::test]
#[serial]
async fn test_render_mixed_pages_keeps_order() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let site = tempdir().unwrap();
    let cover = site.path().join("cover.html");
    fs::write(&cover, "[cover]").unwrap();

    let converter = Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));
    let doc = Document::new()
        .option(global::grayscale())
        .page(Page::from_bytes("[intro]"))
        .page(Page::new(cover.to_string_lossy()).option(page::no_background()))
        .page(Page::from_bytes("[body]"));

    let pdf = converter.to_vec(&doc).await.unwrap();
    assert_eq!(
        String::from_utf8(pdf).unwrap(),
        format!("{PDF_HEADER}[intro][cover][body]")
    );
}

#[tokio::test]
#[serial]
async fn test_render_to_file() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let out = tempdir().unwrap();
    let dest = out.path().join("report.pdf");

    let converter = Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));
    let doc = Document::new().page(Page::from_bytes("<h1>Report</h1>"));

    converter.write_to_file(&doc, &dest).await.unwrap();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        format!("{PDF_HEADER}<h1>Report</h1>")
    );
    assert_eq!(entry_count(tmp.path()), 0);
}

#[tokio::test]
#[serial]
async fn test_render_to_async_writer() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let converter = Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));
    let doc = Document::new().page(Page::from_bytes("abc"));

    let mut out: Vec<u8> = Vec::new();
    converter.write(&doc, &mut out).await.unwrap();
    assert_eq!(out, format!("{PDF_HEADER}abc").into_bytes());
}

#[tokio::test]
#[serial]
async fn test_arguments_reach_the_tool_in_order() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let log = tmp.path().join("args.log");
    let staging_base = tmp.path().join("staging");
    fs::create_dir(&staging_base).unwrap();

    let converter = Converter::new(config_for(
        &recording_wkhtmltopdf(bin.path(), &log),
        &staging_base,
    ));
    let doc = Document::new()
        .option(global::grayscale())
        .option(global::page_size("A5"))
        .page(Page::new("page1.html").option(page::allow("images/")))
        .page(Page::new("page2.html").option(page::no_background()));

    converter.to_vec(&doc).await.unwrap();

    assert_eq!(
        read_args(&log),
        [
            "--grayscale",
            "--page-size",
            "A5",
            "page1.html",
            "--allow",
            "images/",
            "page2.html",
            "--no-background",
            "-"
        ]
    );
    // Reference pages only: nothing staged.
    assert_eq!(entry_count(&staging_base), 0);
}

#[tokio::test]
#[serial]
async fn test_pipe_single_page_uses_stdin() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let log = tmp.path().join("args.log");

    let converter = Converter::new(
        config_for(&recording_wkhtmltopdf(bin.path(), &log), tmp.path()).pipe_single_page(true),
    );
    let doc = Document::new().page(Page::from_bytes("<p>only</p>").option(page::zoom(1.5)));

    converter.to_vec(&doc).await.unwrap();
    assert_eq!(read_args(&log), ["-", "--zoom", "1.50", "-"]);

    let fake = Converter::new(
        config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()).pipe_single_page(true),
    );
    let pdf = fake.to_vec(&doc).await.unwrap();
    assert_eq!(pdf, format!("{PDF_HEADER}<p>only</p>").into_bytes());
}

#[tokio::test]
#[serial]
async fn test_concurrent_renders_are_isolated() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let converter = Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));

    let first = Document::new()
        .page(Page::from_bytes("a1"))
        .page(Page::from_bytes("a2"));
    let second = Document::new()
        .page(Page::from_bytes("b1"))
        .page(Page::from_bytes("b2"));

    let (a, b) = tokio::join!(converter.to_vec(&first), converter.to_vec(&second));

    assert_eq!(a.unwrap(), format!("{PDF_HEADER}a1a2").into_bytes());
    assert_eq!(b.unwrap(), format!("{PDF_HEADER}b1b2").into_bytes());
    assert_eq!(entry_count(tmp.path()), 0);
}
