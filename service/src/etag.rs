//! eTag fingerprints for optimistic concurrency.
//!
//! An eTag is the base64 encoding of the record's `updated_at` in RFC 3339
//! with nanosecond precision.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};

pub fn generate(updated_at: DateTime<Utc>) -> String {
    STANDARD.encode(updated_at.to_rfc3339_opts(SecondsFormat::Nanos, true))
}

/// True if `etag` was generated from `updated_at`.
pub fn matches(updated_at: DateTime<Utc>, etag: &str) -> bool {
    generate(updated_at) == etag
}
