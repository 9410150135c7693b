//! wkpdf - render HTML pages to a single PDF with wkhtmltopdf.

mod cli;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::process;
use tokio::io::AsyncRead;

use crate::cli::Cli;
use wkpdf::option::{global, page};
use wkpdf::{Config, Converter, Destination, Document, DocumentOption, Page};

/// Input token that reads a page from stdin.
const STDIN_INPUT: &str = "-";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(exit_code(&err));
    }
}

/// Exit code for a failed run: the library's code, or 1 for CLI errors.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<wkpdf::Error>()
        .map_or(1, wkpdf::Error::exit_code)
}

/// Main application logic.
async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli);
    config.validate()?;

    let doc = build_document(&cli, tokio::io::stdin()).await?;
    let destination = if cli.writes_to_stdout() {
        Destination::Stdout
    } else {
        Destination::File(cli.output.clone())
    };

    let converter = Converter::new(config);

    if cli.dry_run {
        let invocation = converter.invocation(&doc, &destination);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&invocation)?);
        } else {
            println!("{invocation}");
        }
        return Ok(());
    }

    log::debug!(
        "Rendering {} page(s), {} from memory",
        doc.len(),
        doc.buffered_page_count()
    );

    match &destination {
        Destination::File(path) => {
            converter.write_to_file(&doc, path).await?;
            log::info!("Wrote {}", path.display());
        }
        Destination::Stdout => {
            let mut stdout = tokio::io::stdout();
            converter.write(&doc, &mut stdout).await?;
        }
    }

    Ok(())
}

/// Converter settings from the command line (and its env fallbacks).
fn build_config(cli: &Cli) -> Config {
    let mut config = Config::new()
        .executable(&cli.executable)
        .pipe_single_page(cli.pipe_single_page);

    if let Some(temp_dir) = &cli.temp_dir {
        config = config.temp_dir(temp_dir);
    }
    if let Some(timeout) = cli.timeout() {
        config = config.timeout(timeout);
    }

    config
}

/// Assemble the document, reading a `-` input from `stdin`.
async fn build_document<R>(cli: &Cli, stdin: R) -> Result<Document>
where
    R: AsyncRead + Unpin,
{
    let mut doc = Document::with_options(document_options(cli));
    let mut stdin = Some(stdin);

    for input in &cli.inputs {
        if input == STDIN_INPUT {
            let reader = stdin
                .take()
                .context("Standard input can only be used for one page")?;
            doc.add_page(Page::from_async_reader(reader).await?);
            continue;
        }

        for reference in expand_input(input)? {
            doc.add_page(Page::new(reference));
        }
    }

    Ok(doc)
}

/// Turn one non-stdin input into page references.
///
/// URLs and plain paths pass through untouched; glob patterns expand to
/// their sorted matches and must match something.
fn expand_input(input: &str) -> Result<Vec<String>> {
    if input.contains("://") || !input.contains(['*', '?', '[']) {
        return Ok(vec![input.to_string()]);
    }

    let mut matches = glob::glob(input)
        .map_err(|e| anyhow!("Invalid glob pattern {input}: {e}"))?
        .map(|entry| {
            entry
                .map(|path| path.to_string_lossy().into_owned())
                .map_err(|e| anyhow!("Cannot read match for {input}: {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    if matches.is_empty() {
        bail!("No files match pattern: {input}");
    }

    matches.sort();
    Ok(matches)
}

/// Flags that apply to the whole document, page flags included.
fn document_options(cli: &Cli) -> Vec<DocumentOption> {
    let mut options: Vec<DocumentOption> = Vec::new();

    if cli.grayscale {
        options.push(global::grayscale().into());
    }
    if let Some(size) = &cli.page_size {
        options.push(global::page_size(size).into());
    }
    if cli.landscape {
        options.push(global::landscape().into());
    }
    if let Some(title) = &cli.title {
        options.push(global::title(title).into());
    }
    if let Some(margin) = &cli.margin {
        options.extend(
            [
                global::margin_top(margin),
                global::margin_right(margin),
                global::margin_bottom(margin),
                global::margin_left(margin),
            ]
            .map(DocumentOption::from),
        );
    }
    if let Some(dpi) = cli.dpi {
        options.push(global::dpi(dpi).into());
    }
    if cli.outline {
        options.push(global::outline().into());
    }

    if let Some(factor) = cli.zoom {
        options.push(page::zoom(factor).into());
    }
    if cli.disable_javascript {
        options.push(page::disable_javascript().into());
    }
    if let Some(msec) = cli.javascript_delay {
        options.push(page::javascript_delay(msec).into());
    }
    for path in &cli.allow {
        options.push(page::allow(path).into());
    }
    if cli.print_media_type {
        options.push(page::print_media_type().into());
    }
    if let Some(text) = &cli.header_center {
        options.push(page::header_center(text).into());
    }
    if let Some(text) = &cli.footer_center {
        options.push(page::footer_center(text).into());
    }

    options
}
