//! Synchronous client for the cutt.ly URL-shortening API.
//!
//! # Overview
//! Two operations against one HTTP GET endpoint: `shorten` turns a long URL
//! into a short link, `get_stats` fetches click analytics for an existing
//! short link. The service answers HTTP 200 for everything and signals
//! outcomes through a numeric `status` field inside the JSON body, so the
//! status-code table in [`status`] carries the actual error semantics.
//!
//! # Design
//! - `Client` holds only the API key and the endpoint, both read-only after
//!   construction. Every call builds a fresh request URL, so one instance is
//!   safe to share across threads.
//! - Each operation is split into a `*_request` method (produces the request
//!   URL) and a `parse_*` method (consumes the response body), with thin
//!   blocking wrappers that run the GET in between. The pure halves are
//!   fully deterministic and tested without a network.
//! - The `devices` and `refs` stats fields arrive as an empty JSON array
//!   until a link has been clicked, and as a structured object afterwards.
//!   [`normalize`] folds both wire shapes into one typed representation.

pub mod client;
pub mod error;
pub mod normalize;
pub mod status;
pub mod types;

pub use client::Client;
pub use error::{ApiError, Error};
pub use status::Operation;
pub use types::{Devices, LinkInfo, Referrer, Refs, Stats, TaggedClicks};
