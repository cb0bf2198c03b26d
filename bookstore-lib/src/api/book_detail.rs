use log::{info, trace};
use url::Url;

use crate::{book::BookDetail, ApiError, Error};

use super::Client;

const ITBOOK_BASE_URL: &str = "https://api.itbook.store/1.0";
const BOOK_DETAIL_ENDPOINT: &str = "/books/";

/// Configuration of the book-detail endpoint.
///
/// The target address of a fetch is the concatenation of `base_url`,
/// `endpoint` and the ISBN-13 of the request. Both parts are injected through
/// [`BookDetailClient::new`]; [`Default`] yields the production API values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the book API, without a trailing slash.
    pub base_url: String,
    /// Path of the book-detail endpoint, with leading and trailing slashes.
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ITBOOK_BASE_URL.to_owned(),
            endpoint: BOOK_DETAIL_ENDPOINT.to_owned(),
        }
    }
}

/// A single book-detail lookup request.
///
/// Constructed by the caller per invocation and consumed once. The ISBN-13 is
/// expected to be a 13-character numeric identifier but the format is not
/// validated here, validation (if any) is a caller concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// The ISBN-13 of the book to look up.
    pub isbn13: String,
}

impl Request {
    /// Creates a request for the book identified by `isbn13`.
    #[must_use]
    pub fn new<S: Into<String>>(isbn13: S) -> Self {
        Self {
            isbn13: isbn13.into(),
        }
    }
}

/// Asynchronous client for the book-detail endpoint.
///
/// Holds the endpoint configuration and the transport it was constructed
/// with; no other state is kept between calls, so a single instance can be
/// shared across concurrent fetches.
pub struct BookDetailClient<C: Client> {
    config: ApiConfig,
    client: C,
}

impl<C: Client> BookDetailClient<C> {
    /// Creates a client from an endpoint configuration and a transport.
    #[must_use]
    pub const fn new(config: ApiConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Fetch the details of the book identified by `request`.
    ///
    /// Issues exactly one GET request to
    /// `<base_url><endpoint><isbn13>` and maps the outcome:
    ///
    /// - malformed target address: `Ok(Err(ApiError::Network))`, no request
    ///   is sent;
    /// - round trip succeeded with an empty body: `Ok(Err(ApiError::Data))`;
    /// - body present but not a valid [`BookDetail`] payload:
    ///   `Ok(Err(ApiError::Decoding))`;
    /// - otherwise: `Ok(Ok(BookDetail))`.
    ///
    /// Dropping the returned future cancels the in-flight request.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the round trip fails at the transport level
    /// (DNS, connection, timeout, TLS). Transport faults are never folded
    /// into [`ApiError`].
    pub async fn fetch(&self, request: &Request) -> Result<Result<BookDetail, ApiError>, Error> {
        info!("Fetching book details for ISBN-13 '{}'", request.isbn13);

        let address = format!(
            "{}{}{}",
            self.config.base_url, self.config.endpoint, request.isbn13
        );
        if Url::parse(&address).is_err() {
            return Ok(Err(ApiError::Network));
        }

        let body = self.client.get_bytes(&address).await?;
        trace!("Round trip finished with a body of {} bytes", body.len());

        if body.is_empty() {
            return Ok(Err(ApiError::Data));
        }

        match serde_json::from_slice(&body) {
            Ok(detail) => Ok(Ok(detail)),
            Err(err) => {
                trace!("Body failed to decode: {err}");
                Ok(Err(ApiError::Decoding))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{
            assert_url, impl_body_producer, EmptyBodyProducer, MockClient, TransportFaultProducer,
            URL_SINK,
        },
        ErrorKind,
    };

    const BOOK_JSON: &str = r#"{
        "title": "Designing Data-Intensive Applications",
        "author": "Martin Kleppmann",
        "publisher": "O'Reilly Media",
        "isbn13": "9781449373320",
        "pages": "616",
        "year": "2017",
        "price": "$33.27"
    }"#;

    impl_body_producer! {
        ValidBookProducer => Ok(BOOK_JSON.as_bytes().to_vec()),
        MinimalBookProducer => Ok(br#"{"title":"Example","author":"A"}"#.to_vec()),
        NotJsonProducer => Ok(b"not json".to_vec()),
        WrongSchemaProducer => Ok(br#"{"title":"Example"}"#.to_vec()),
    }

    fn client<P>() -> BookDetailClient<MockClient<P>>
    where
        P: crate::api::Producer + Send + Sync,
    {
        BookDetailClient::new(ApiConfig::default(), MockClient::<P>::default())
    }

    #[tokio::test]
    async fn url_format_is_correct() {
        let res = client::<ValidBookProducer>()
            .fetch(&Request::new("9781449373320"))
            .await;

        assert!(res.is_ok());
        assert_url!("https://api.itbook.store/1.0/books/9781449373320");
    }

    #[tokio::test]
    async fn malformed_address_fails_without_sending_a_request() {
        let config = ApiConfig {
            base_url: "ht tp://bad host".to_owned(),
            ..ApiConfig::default()
        };
        let client = BookDetailClient::new(config, MockClient::<EmptyBodyProducer>::default());

        let res = client
            .fetch(&Request::new("badid"))
            .await
            .expect("a malformed address is a failure value, not a fault");

        assert_eq!(Err(ApiError::Network), res);
        let url = URL_SINK.with(|url| url.borrow().clone());
        assert!(url.is_none(), "no request should be sent: {url:?}");
    }

    #[tokio::test]
    async fn empty_body_is_a_data_failure() {
        let client = client::<EmptyBodyProducer>();

        let res = client
            .fetch(&Request::new("9780000000000"))
            .await
            .expect("an empty body is a failure value, not a fault");

        assert_eq!(Err(ApiError::Data), res);
    }

    #[tokio::test]
    async fn non_json_body_is_a_decoding_failure() {
        let res = client::<NotJsonProducer>()
            .fetch(&Request::new("9780000000000"))
            .await
            .expect("an undecodable body is a failure value, not a fault");

        assert_eq!(Err(ApiError::Decoding), res);
    }

    #[tokio::test]
    async fn body_missing_required_fields_is_a_decoding_failure() {
        let res = client::<WrongSchemaProducer>()
            .fetch(&Request::new("9780000000000"))
            .await
            .expect("a schema mismatch is a failure value, not a fault");

        assert_eq!(Err(ApiError::Decoding), res);
    }

    #[tokio::test]
    async fn transport_fault_propagates_as_an_error() {
        let err = client::<TransportFaultProducer>()
            .fetch(&Request::new("9780000000000"))
            .await
            .expect_err("a transport fault propagates instead of becoming a failure value");

        assert_eq!(ErrorKind::IO, err.kind());
    }

    #[tokio::test]
    async fn well_formed_body_round_trips() {
        let detail = client::<MinimalBookProducer>()
            .fetch(&Request::new("9780000000000"))
            .await
            .expect("no fault")
            .expect("a well-formed body decodes successfully");

        assert_eq!("Example", detail.title);
        assert_eq!("A", detail.author);
        assert_eq!(None, detail.publisher);
        assert_eq!(None, detail.isbn13);
    }

    #[tokio::test]
    async fn full_payload_decodes_with_all_fields() {
        let detail = client::<ValidBookProducer>()
            .fetch(&Request::new("9781449373320"))
            .await
            .expect("no fault")
            .expect("a well-formed body decodes successfully");

        assert_eq!("Designing Data-Intensive Applications", detail.title);
        assert_eq!("Martin Kleppmann", detail.author);
        assert_eq!(Some("O'Reilly Media".to_owned()), detail.publisher);
        assert_eq!(Some("9781449373320".to_owned()), detail.isbn13);
        assert_eq!(Some("616".to_owned()), detail.pages);
        assert_eq!(Some("2017".to_owned()), detail.year);
        assert_eq!(Some("$33.27".to_owned()), detail.price);
    }
}
