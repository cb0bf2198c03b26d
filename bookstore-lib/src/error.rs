pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// A transport-level fault raised while talking to the book API.
///
/// Faults are propagated to the caller through the outer `Result` of a fetch
/// and are never folded into [`ApiError`]. Application-level failures are
/// returned as [`ApiError`] values instead.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of faults that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The connection to the remote host could not be established.
    Connect,
    /// The request did not complete within the transport's deadline.
    Timeout,
    /// Any other underlying IO error (DNS, TLS, interrupted body reads).
    IO,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the fault.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of fault.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Connect => f.write_str("Connection error")?,
            ErrorKind::Timeout => f.write_str("Timeout error")?,
            ErrorKind::IO => f.write_str("IO error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

/// Application-level failures of a book-detail fetch, returned as values.
///
/// Exactly one of these is produced whenever the fetch fails without a
/// transport fault; see [`Error`] for the fault side of the split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The target address was not a well-formed URL; no request was sent.
    Network,
    /// The transport round trip succeeded but the response had no body.
    Data,
    /// A body was returned but could not be decoded into the response model.
    Decoding,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => f.write_str("the target address is not a well-formed URL"),
            Self::Data => f.write_str("the response contained no body"),
            Self::Decoding => f.write_str("the response body could not be decoded"),
        }
    }
}

impl std::error::Error for ApiError {}
