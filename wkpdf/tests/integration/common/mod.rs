//! Shared helpers for the wkpdf integration tests.
//!
//! The tests never need a real wkhtmltopdf. Instead they write small POSIX
//! shell scripts that stand in for it and behave just enough like it: they
//! read page locators, honour the `-` destination and fail the way the real
//! tool does.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use wkpdf::Config;

/// Header every fake PDF starts with.
pub const PDF_HEADER: &str = "%PDF-1.4\n";

/// Write an executable shell script named `name` into `dir`.
///
/// # Panics
///
/// Panics if the script cannot be written or made executable.
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make stub executable");
    path
}

/// A stand-in for wkhtmltopdf.
///
/// Emits [`PDF_HEADER`] followed by the contents of every existing file
/// locator (and stdin for a `-` locator) in argument order. The PDF goes to
/// stdout when the last argument is `-`, otherwise to that file. Like the
/// real tool it refuses to run without at least one input.
pub fn fake_wkhtmltopdf(dir: &Path) -> PathBuf {
    write_stub(
        dir,
        "wkhtmltopdf",
        r#"if [ "$#" -lt 2 ]; then
  echo "You need to specify at least one input file, and exactly one output file" >&2
  exit 1
fi
for last in "$@"; do :; done
render() {
  printf '%%PDF-1.4\n'
  n=0
  for a in "$@"; do
    n=$((n + 1))
    [ "$n" -eq "$#" ] && break
    if [ "$a" = "-" ]; then
      cat
    elif [ -f "$a" ]; then
      cat "$a"
    fi
  done
}
if [ "$last" = "-" ]; then
  render "$@"
else
  render "$@" > "$last"
fi"#,
    )
}

/// A stand-in that records its arguments, one per line, into `log`.
///
/// Every existing file locator is also copied next to the log as
/// `<log>.<file name>`, so tests can inspect staged pages after the
/// staging directory is gone.
pub fn recording_wkhtmltopdf(dir: &Path, log: &Path) -> PathBuf {
    write_stub(
        dir,
        "wkhtmltopdf-recording",
        &format!(
            r#"printf '%s\n' "$@" > '{log}'
for a in "$@"; do
  if [ -f "$a" ]; then
    cp "$a" '{log}.'"$(basename "$a")"
  fi
done
printf '%%PDF-1.4\n'"#,
            log = log.display()
        ),
    )
}

/// A stand-in that fails with a message on stderr.
pub fn failing_wkhtmltopdf(dir: &Path, message: &str) -> PathBuf {
    write_stub(
        dir,
        "wkhtmltopdf-failing",
        &format!("echo '{message}' >&2\nexit 1"),
    )
}

/// A stand-in that never finishes in time.
pub fn hanging_wkhtmltopdf(dir: &Path) -> PathBuf {
    write_stub(dir, "wkhtmltopdf-hanging", "exec sleep 30")
}

/// Configuration running `executable` with staging under `temp_dir`.
pub fn config_for(executable: &Path, temp_dir: &Path) -> Config {
    Config::new().executable(executable).temp_dir(temp_dir)
}

/// Number of entries left in `dir`.
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Lines of a recorded argument log.
pub fn read_args(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .expect("Failed to read argument log")
        .lines()
        .map(str::to_string)
        .collect()
}
