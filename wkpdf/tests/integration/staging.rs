//! Integration tests for staging buffered pages around a run.

use std::fs;
use std::path::Path;

use serial_test::serial;
use tempfile::tempdir;
use wkpdf::{Converter, Document, Page};

use crate::common::{config_for, entry_count, read_args, recording_wkhtmltopdf};

#[tokio::test]
#[serial]
async fn test_three_buffers_are_staged_in_order() {
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
        .page(Page::from_bytes("test1"))
        .page(Page::from_bytes("test2"))
        .page(Page::from_bytes("test3"));

    converter.to_vec(&doc).await.unwrap();

    let args = read_args(&log);
    assert_eq!(args.len(), 4);
    assert_eq!(args[3], "-");

    let expected = ["page00000001.html", "page00000002.html", "page00000003.html"];
    let staged_dir = Path::new(&args[0]).parent().unwrap().to_path_buf();
    assert!(staged_dir.starts_with(&staging_base));
    assert!(
        staged_dir
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("wkpdf-")
    );

    for (idx, (arg, name)) in args.iter().zip(expected).enumerate() {
        let arg = Path::new(arg);
        assert_eq!(arg.parent().unwrap(), staged_dir);
        assert_eq!(arg.file_name().unwrap().to_string_lossy(), name);

        let seen = tmp.path().join(format!("args.log.{name}"));
        assert_eq!(fs::read_to_string(seen).unwrap(), format!("test{}", idx + 1));
    }

    assert!(!staged_dir.exists());
    assert_eq!(entry_count(&staging_base), 0);
}

#[tokio::test]
#[serial]
async fn test_reference_pages_do_not_advance_numbering() {
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
        .page(Page::new("test.html"))
        .page(Page::from_bytes("one"))
        .page(Page::new("test2.html"))
        .page(Page::from_bytes("two"));

    converter.to_vec(&doc).await.unwrap();

    let args = read_args(&log);
    assert_eq!(args[0], "test.html");
    assert!(args[1].ends_with("page00000001.html"));
    assert_eq!(args[2], "test2.html");
    assert!(args[3].ends_with("page00000002.html"));
    assert_eq!(args[4], "-");
    assert_eq!(entry_count(&staging_base), 0);
}

#[tokio::test]
#[serial]
async fn test_single_buffer_is_staged_by_default() {
    let bin = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let log = tmp.path().join("args.log");

    let converter = Converter::new(config_for(
        &recording_wkhtmltopdf(bin.path(), &log),
        tmp.path(),
    ));
    let doc = Document::new().page(Page::from_bytes("solo"));

    converter.to_vec(&doc).await.unwrap();

    let args = read_args(&log);
    assert!(args[0].ends_with("page00000001.html"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("args.log.page00000001.html")).unwrap(),
        "solo"
    );
}
