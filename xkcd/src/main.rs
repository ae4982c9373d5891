#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xkcd_core::{BuildIndex, Client, ComicId, Fetch, Index, Request};

use crate::args::Args;
use crate::types::{ComicReport, IndexListing};

mod args;
mod types;

async fn show_comic<F: Fetch>(
    fetcher: &F,
    id: ComicId,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    debug!("Fetching {id} comic");

    match fetcher.fetch(id).await {
        Ok(comic) => {
            write!(out, "{}", ComicReport(&comic))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            writeln!(err, "{error}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report_failures(index: &Index, err: &mut impl Write) -> io::Result<()> {
    for entry in index.failures() {
        let Some(error) = entry.error() else {
            continue;
        };
        match entry.number {
            Some(num) => writeln!(err, "comic #{num} unavailable: {error}")?,
            None => writeln!(err, "{error}")?,
        }
    }
    Ok(())
}

/// Renders the listing, or refuses to when `strict` and some entry is missing.
fn render_index(index: &Index, strict: bool) -> xkcd_core::Result<String> {
    if strict {
        index.ensure_complete()?;
    }
    Ok(IndexListing(index).to_string())
}

async fn list_comics<F: Fetch + 'static>(
    fetcher: F,
    page_size: u32,
    strict: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    let index = match BuildIndex::with_fetcher(page_size, fetcher).request().await {
        Ok(index) => index,
        Err(error) => {
            writeln!(err, "{error}")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    report_failures(&index, err)?;

    match render_index(&index, strict) {
        Ok(listing) => {
            write!(out, "{listing}")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            writeln!(err, "{error}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = Client::new(args.base_url);
    let (mut out, mut err) = (io::stdout(), io::stderr());

    if args.list {
        list_comics(client, args.page_size, args.strict, &mut out, &mut err).await
    } else {
        show_comic(&client, ComicId::from(args.num), &mut out, &mut err).await
    }
}
