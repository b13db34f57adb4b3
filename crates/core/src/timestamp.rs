//! Portable wire timestamp and its conversions to the storage time type.
//!
//! The wire form counts seconds since the Unix epoch plus a non-negative
//! nanosecond offset into that second. Only instants from
//! 0001-01-01T00:00:00Z up to (but excluding) 10000-01-01T00:00:00Z are
//! representable. Values outside that range are rejected, never clamped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Seconds of 0001-01-01T00:00:00Z.
const MIN_VALID_SECONDS: i64 = -62_135_596_800;

/// Seconds of 10000-01-01T00:00:00Z (exclusive upper bound).
const MAX_VALID_SECONDS: i64 = 253_402_300_800;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// A point in time as it travels over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireTimestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

/// Why a timestamp could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("timestamp: nil Timestamp")]
    Missing,

    #[error("timestamp: {0} before 0001-01-01")]
    BeforeMinimum(WireTimestamp),

    #[error("timestamp: {0} after 10000-01-01")]
    AfterMaximum(WireTimestamp),

    #[error("timestamp: {0}: nanos not in range [0, 1e9)")]
    NanosOutOfRange(WireTimestamp),
}

impl fmt::Display for WireTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seconds:{} nanos:{}", self.seconds, self.nanos)
    }
}

impl WireTimestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Check that the value lies inside the representable range.
    pub fn validate(&self) -> Result<(), TimestampError> {
        if self.seconds < MIN_VALID_SECONDS {
            return Err(TimestampError::BeforeMinimum(*self));
        }
        if self.seconds >= MAX_VALID_SECONDS {
            return Err(TimestampError::AfterMaximum(*self));
        }
        if !(0..NANOS_PER_SECOND).contains(&self.nanos) {
            return Err(TimestampError::NanosOutOfRange(*self));
        }
        Ok(())
    }

    /// Convert to the storage-native UTC time.
    pub fn to_datetime(&self) -> Result<Timestamp, TimestampError> {
        self.validate()?;
        // The validated range is well inside chrono's, so this only fails on
        // a broken range constant.
        Timestamp::from_timestamp(self.seconds, self.nanos as u32)
            .ok_or(TimestampError::AfterMaximum(*self))
    }

    /// Convert a storage-native UTC time to its wire form.
    ///
    /// Storage can hold instants the wire cannot (years past 9999, leap
    /// seconds), so the result is validated before it is returned.
    pub fn from_datetime(value: &Timestamp) -> Result<Self, TimestampError> {
        let nanos = i32::try_from(value.timestamp_subsec_nanos()).unwrap_or(i32::MAX);
        let wire = Self::new(value.timestamp(), nanos);
        wire.validate()?;
        Ok(wire)
    }
}

/// Convert an optional wire timestamp, treating absence as an error.
pub fn to_datetime(value: Option<&WireTimestamp>) -> Result<Timestamp, TimestampError> {
    value.ok_or(TimestampError::Missing)?.to_datetime()
}
