//! Integration tests for the blocking front end.

use serial_test::serial;
use tempfile::tempdir;
use wkpdf::{Document, ErrorKind, Page, blocking};

use crate::common::{PDF_HEADER, config_for, entry_count, failing_wkhtmltopdf, fake_wkhtmltopdf};

#[test]
#[serial]
fn test_blocking_to_vec() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let converter = blocking::Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));

    let doc = Document::new()
        .page(Page::from_reader(&b"one"[..]).unwrap())
        .page(Page::from_reader(&b"two"[..]).unwrap());

    let pdf = converter.to_vec(&doc).unwrap();
    assert_eq!(pdf, format!("{PDF_HEADER}onetwo").into_bytes());
    assert_eq!(entry_count(tmp.path()), 0);
}

#[test]
#[serial]
fn test_blocking_write_and_file() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let converter = blocking::Converter::new(config_for(&fake_wkhtmltopdf(bin.path()), tmp.path()));
    let doc = Document::new().page(Page::from_bytes("body"));

    let mut out = Vec::new();
    converter.write(&doc, &mut out).unwrap();
    assert_eq!(out, format!("{PDF_HEADER}body").into_bytes());

    let dest = tmp.path().join("out.pdf");
    converter.write_to_file(&doc, &dest).unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), out);
}

#[test]
#[serial]
fn test_blocking_failure() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let converter = blocking::Converter::new(config_for(
        &failing_wkhtmltopdf(bin.path(), "boom"),
        tmp.path(),
    ));

    let mut out = Vec::new();
    let err = converter
        .write(&Document::new().page(Page::new("a.html")), &mut out)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExternalTool);
    assert_eq!(err.stderr().map(str::trim), Some("boom"));
    assert!(out.is_empty());
}
