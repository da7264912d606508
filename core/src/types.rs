//! Wire types for the cutt.ly JSON responses.
//!
//! # Design
//! Field names follow the service's camelCase wire format via serde renames.
//! Every record field defaults when absent because error responses carry
//! only a `status`. The `devices` and `refs` fields of the stats payload are
//! kept as raw `serde_json::Value` on the wire struct and converted to
//! [`Devices`]/[`Refs`] by the `normalize` module after decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A shortened-link record, returned by `shorten` and embedded in stats
/// responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkInfo {
    pub status: i64,
    #[serde(rename = "fullLink")]
    pub full_link: String,
    pub date: String,
    #[serde(rename = "shortLink")]
    pub short_link: String,
    pub title: String,
}

/// One (tag, click-count) pair inside a devices breakdown. Click counts are
/// strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedClicks {
    pub tag: String,
    pub clicks: String,
}

/// Click counts grouped by device type (`dev`), operating system (`sys`) and
/// browser (`bro`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Devices {
    pub dev: Vec<TaggedClicks>,
    pub sys: Vec<TaggedClicks>,
    pub bro: Vec<TaggedClicks>,
}

/// One referring page and its click count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    pub link: String,
    pub clicks: String,
}

/// Click counts grouped by referring page.
pub type Refs = Vec<Referrer>;

/// Click statistics for a short link, with `devices` and `refs` already
/// normalized from their polymorphic wire shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub status: i64,
    pub clicks: String,
    pub date: String,
    pub title: String,
    pub full_link: String,
    pub short_link: String,
    pub facebook: i64,
    pub twitter: i64,
    pub pinterest: i64,
    pub instagram: i64,
    pub google_plus: i64,
    pub linkedin: i64,
    pub rest: i64,
    pub devices: Devices,
    pub refs: Refs,
}

/// Stats payload exactly as decoded off the wire. `devices` and `refs` stay
/// untyped here: the service sends an empty array when a link has no click
/// data yet and an object once it does.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StatsWire {
    pub status: i64,
    pub clicks: String,
    pub date: String,
    pub title: String,
    #[serde(rename = "fullLink")]
    pub full_link: String,
    #[serde(rename = "shortLink")]
    pub short_link: String,
    pub facebook: i64,
    pub twitter: i64,
    pub pinterest: i64,
    pub instagram: i64,
    #[serde(rename = "googlePlus")]
    pub google_plus: i64,
    pub linkedin: i64,
    pub rest: i64,
    pub devices: Value,
    pub refs: Value,
}

/// Response envelope for a shorten request.
#[derive(Debug, Deserialize)]
pub(crate) struct ShortenResponse {
    pub url: LinkInfo,
}

/// Response envelope for a stats request. The envelope also carries a `url`
/// sub-object mirroring `LinkInfo`; the operation surfaces only the stats
/// record, so the extra key is ignored during decoding.
#[derive(Debug, Deserialize)]
pub(crate) struct StatsResponse {
    pub stats: StatsWire,
}
