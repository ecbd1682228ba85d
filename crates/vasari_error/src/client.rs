//! Generation client error types.

/// Kinds of generation client errors.
///
/// These cover the upstream chat-completion boundary: transport failures,
/// non-success API statuses, and responses that arrive without content.
/// Malformed JSON inside otherwise-successful responses is *not* an error
/// kind here; the client absorbs it with a deterministic fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ClientErrorKind {
    /// Transport-level failure (connection, TLS, timeout)
    #[display("Generation unavailable: {}", _0)]
    Http(String),
    /// Upstream returned a non-success status
    #[display("Generation unavailable: upstream returned {}: {}", status, message)]
    Api {
        /// HTTP status code from the upstream API
        status: u16,
        /// Upstream error body, when present
        message: String,
    },
    /// Response body could not be deserialized into the completion shape
    #[display("Failed to parse completion response: {}", _0)]
    Deserialization(String),
    /// Response parsed but carried no message content
    #[display("Generation unavailable: response carried no content")]
    MissingContent,
    /// No API credential has been configured
    #[display("Generation unavailable: no API key configured")]
    Unconfigured,
}

/// Generation client error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::MissingContent);
/// assert!(format!("{}", err).contains("no content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new client error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
