//! The service's numeric status codes and what they mean per operation.
//!
//! The same code carries different meanings depending on whether the call
//! was a shorten or a stats request: 0 is success for shorten but "link does
//! not exist" for stats, 1 is the other way around, and 2 flips between
//! "not a link" and "invalid API key." Codes outside the table are treated
//! as success, which is how the service signals it — shorten answers 7 on a
//! freshly created link.

use std::fmt;

use crate::error::ApiError;

/// Which operation a status code was returned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Shorten,
    Stats,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Shorten => write!(f, "shorten"),
            Operation::Stats => write!(f, "stats"),
        }
    }
}

/// Map a status code to the semantic error it stands for in the given
/// operation, or `Ok(())` when the code is a success in that mode.
pub fn check(code: i64, op: Operation) -> Result<(), ApiError> {
    match (code, op) {
        (0, Operation::Stats) => Err(ApiError::UnknownShortLink),
        (1, Operation::Shorten) => Err(ApiError::AlreadyShortened),
        (2, Operation::Shorten) => Err(ApiError::NotALink),
        (2, Operation::Stats) => Err(ApiError::InvalidApiKey),
        (3, _) => Err(ApiError::NameTaken),
        (4, _) => Err(ApiError::InvalidApiKey),
        (5, _) => Err(ApiError::ValidationFailed),
        (6, _) => Err(ApiError::BlockedDomain),
        _ => Ok(()),
    }
}
