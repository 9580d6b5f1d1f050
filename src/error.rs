//! Error types for classification and lookups

use thiserror::Error;

/// The input token is neither an IP address, a CIDR prefix, nor an ASN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse '{0}' as IP, Prefix, or ASN")]
pub struct ParseError(pub String);

/// Errors that can occur while fetching and decoding provider data
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider could not be reached (DNS, connect, TLS, timeout)
    #[error("Request to {url} failed: {message}")]
    Request {
        /// Target URL
        url: String,
        /// Underlying transport message
        message: String,
    },

    /// The provider answered with a non-200 status
    #[error("Error requesting data from {url} - {status} {reason}")]
    Response {
        /// Target URL
        url: String,
        /// HTTP status code
        status: i32,
        /// HTTP reason phrase
        reason: String,
    },

    /// The body is not JSON or lacks an expected field
    #[error("Unable to decode response from {url} at '{path}': {message}")]
    Decode {
        /// Target URL
        url: String,
        /// JSON pointer of the offending value
        path: String,
        /// What was wrong with it
        message: String,
    },

    /// The provider reported a failure in its own payload
    #[error("{url} reported an error: {message}")]
    Provider {
        /// Target URL
        url: String,
        /// Provider supplied message
        message: String,
    },
}
