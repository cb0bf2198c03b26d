#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod book;
mod error;

pub use api::{
    book_detail::{ApiConfig, BookDetailClient, Request},
    Client,
};
pub use book::BookDetail;
pub use error::{ApiError, Error, ErrorKind};

use log::trace;

/// Fetch the details of the book identified by `isbn13` using the default
/// API configuration and transport.
///
/// This is a convenience wrapper over [`BookDetailClient`] for callers that
/// do not need to inject their own configuration or transport. The ISBN-13
/// format is not validated here.
///
/// # Errors
///
/// An `Err` is returned when the round trip fails at the transport level;
/// application-level failures are returned as the inner [`ApiError`] value.
#[inline]
pub async fn book_details(isbn13: &str) -> Result<Result<BookDetail, ApiError>, Error> {
    trace!("Fetch book details by ISBN-13 of '{isbn13}'");
    let client = BookDetailClient::new(ApiConfig::default(), reqwest::Client::default());
    client.fetch(&Request::new(isbn13)).await
}
