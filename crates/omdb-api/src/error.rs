//! Error types for OMDb API operations.

use thiserror::Error;

/// Errors that can occur during an OMDb API call.
///
/// Every call yields exactly one result or exactly one of these; nothing
/// is retried or swallowed by the client.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum OmdbError {
    /// The request parameters violate a precondition. Detected before any
    /// request is sent.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The underlying HTTP transport failed (connection, timeout,
    /// non-2xx status). Propagated unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered at the transport level but signaled a logical
    /// failure; carries the service's own message verbatim.
    #[error("OMDb API error: {0}")]
    Api(String),

    /// The response body could not be decoded into the selected result
    /// shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response could not be placed into any known result shape.
    #[error("unrecognized response shape: type tag {0:?}")]
    UnrecognizedResponse(String),
}
