#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions)]

use std::{process, time::Duration};

use bookstore::{ApiConfig, BookDetailClient, Request};

use clap::Parser;
use eyre::eyre;
use log::trace;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("{}", err);
        process::exit(2);
    }
}

async fn try_main() -> eyre::Result<()> {
    let Cli {
        isbn13,
        base_url,
        endpoint,
        timeout,
        verbosity,
        quiet,
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let mut config = ApiConfig::default();
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    // The library adds no timeout of its own so the deadline is set here, on
    // the transport the client is built with.
    let transport = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()?;

    let client = BookDetailClient::new(config, transport);
    let request = Request::new(isbn13);

    trace!("Fetching book details for ISBN-13 '{}'", request.isbn13);

    match client.fetch(&request).await {
        Ok(Ok(book)) => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&book)?);
            }
            Ok(())
        }
        Ok(Err(failure)) => Err(eyre!(
            "Lookup for ISBN-13 '{}' failed: {failure}",
            request.isbn13
        )),
        Err(fault) => Err(eyre!("The book API could not be reached: {fault}")),
    }
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), log::SetLoggerError> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new().verbosity(verbosity).init()
}

#[derive(Parser)]
#[clap(name = "bookstore")]
#[clap(about = "Fetch the details of a book by its ISBN-13 in the terminal")]
#[clap(version, author)]
struct Cli {
    /// The ISBN-13 of the book to look up
    ///
    /// The identifier is passed to the API as given, without validating the
    /// 13-digit format.
    isbn13: String,

    /// Base URL of the book API
    #[clap(long)]
    base_url: Option<String>,

    /// Path of the book-detail endpoint
    #[clap(long)]
    endpoint: Option<String>,

    /// Seconds to wait for the network round trip before giving up
    #[clap(long, default_value_t = 30)]
    timeout: u64,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Prevents the program from writing to stdout, errors will still be printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}
