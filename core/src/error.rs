//! Error types for the cutt.ly client.
//!
//! # Design
//! Transport, body-read and decode failures each get their own variant so
//! callers can tell "the network broke" apart from "the service answered
//! something unexpected." Recognized non-success status codes become
//! [`ApiError`] values carrying the service's own message texts.

use thiserror::Error;

use crate::status::Operation;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint string could not be parsed as a URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The HTTP GET itself failed.
    #[error("request failed: {0}")]
    Transport(#[source] ureq::Error),

    /// The response body could not be fully read.
    #[error("reading response body failed: {0}")]
    Read(#[source] ureq::Error),

    /// The response body was not valid JSON for the expected shape.
    #[error("could not decode {op} response: {source}")]
    Decode {
        op: Operation,
        source: serde_json::Error,
    },

    /// The service answered with a recognized non-success status code.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A recognized non-success status code, with the message text the cutt.ly
/// API documents for it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("This shortened link does not exist")]
    UnknownShortLink,

    #[error("The shortened link comes from the domain that shortens the link, i.e. the link has already been shortened")]
    AlreadyShortened,

    #[error("The entered link is not a link")]
    NotALink,

    #[error("The preferred link name is already taken")]
    NameTaken,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("The link has not passed the validation. Includes invalid characters")]
    ValidationFailed,

    #[error("The link provided is from a blocked domain")]
    BlockedDomain,
}
