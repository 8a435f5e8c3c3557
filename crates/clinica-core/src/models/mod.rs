//! Domain models for the clinic agenda.
//!
//! Field names follow the backend's JSON wire format (Spanish), so every
//! model round-trips through `serde_json` without rename ceremony. The one
//! exception is `problemas_cardíacos`, whose wire name carries an accent.

mod appointment;
mod doctor;
mod history;
mod patient;

pub use appointment::*;
pub use doctor::*;
pub use history::*;
pub use patient::*;

use serde::de::DeserializeOwned;

/// Result of leniently decoding a fetched collection.
///
/// A single malformed record (bad date, missing field) must not prevent
/// correct processing of the rest, so decoding is per-record: failures are
/// counted and skipped, never batch-fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBatch<T> {
    /// Records that decoded cleanly, in wire order.
    pub records: Vec<T>,
    /// Number of records dropped because they failed to decode.
    pub skipped: usize,
}

/// Decode a collection one record at a time, isolating per-record failures.
pub fn decode_records<T: DeserializeOwned>(values: Vec<serde_json::Value>) -> DecodedBatch<T> {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for value in values {
        match serde_json::from_value(value) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }
    DecodedBatch { records, skipped }
}
