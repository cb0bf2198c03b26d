use async_trait::async_trait;

pub(crate) mod book_detail;

use crate::{Error, ErrorKind};

/// The asynchronous transport used to reach the book API.
///
/// Exactly one GET request is issued per call and no retries are attempted at
/// this layer. The raw body bytes are returned rather than a decoded value so
/// that callers can tell an absent body apart from one that fails to decode.
/// Transport-level failures (DNS, connection, timeout, TLS) surface as
/// [`Error`] faults.
#[async_trait]
pub trait Client {
    /// Issue a single GET request to `url` and return the raw response body.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the round trip fails at the transport level.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error>;
}

#[async_trait]
impl Client for reqwest::Client {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let resp = self.get(url).send().await.map_err(fault)?;
        let bytes = resp.bytes().await.map_err(fault)?;
        Ok(bytes.to_vec())
    }
}

/// Classify a reqwest transport error into the fault kinds callers can match on.
fn fault(err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        ErrorKind::Timeout
    } else if err.is_connect() {
        ErrorKind::Connect
    } else {
        ErrorKind::IO
    };
    Error::wrap(kind, err)
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_body_producer, EmptyBodyProducer, MockClient, Producer,
    TransportFaultProducer, URL_SINK,
};
