//! Converters for the polymorphic `devices` and `refs` stats fields.
//!
//! The service encodes "no click data yet" as an empty JSON array and
//! switches to a structured shape once data exists, so neither field can be
//! decoded into its typed form in one pass. The converters inspect the raw
//! value first: an empty array becomes the empty record, anything else is
//! re-decoded through a second serde pass into the typed target. A shape
//! that matches neither is a decode error for the caller to surface.

use serde_json::Value;

use crate::types::{Devices, Refs};

/// Normalize the raw `devices` field into a [`Devices`] record.
pub fn devices_from_value(value: &Value) -> Result<Devices, serde_json::Error> {
    match value {
        Value::Array(items) if items.is_empty() => Ok(Devices::default()),
        other => serde_json::from_value(other.clone()),
    }
}

/// Normalize the raw `refs` field into a [`Refs`] record.
pub fn refs_from_value(value: &Value) -> Result<Refs, serde_json::Error> {
    match value {
        Value::Array(items) if items.is_empty() => Ok(Refs::default()),
        other => serde_json::from_value(other.clone()),
    }
}
