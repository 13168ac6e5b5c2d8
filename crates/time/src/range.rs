//! Inclusive date/time interval, normalized to UTC.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use keel_core::{DomainError, DomainResult, StructuralHasher, ValueObject};
use keel_core::impl_value_semantics;

/// An inclusive time interval with `start <= end`.
///
/// Both endpoints are converted to UTC at construction, whatever offset the
/// inputs carried. Equal endpoints are allowed and represent a zero-length
/// range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateTimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateTimeRange {
    /// Build a range from two instants, normalizing both to UTC.
    ///
    /// Fails with `InvalidArgument` when the normalized start is after the
    /// normalized end.
    pub fn new<Tz1, Tz2>(start: DateTime<Tz1>, end: DateTime<Tz2>) -> DomainResult<Self>
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);

        if start > end {
            return Err(DomainError::invalid_argument(
                Some("start"),
                "range start is after range end",
            ));
        }

        Ok(Self { start, end })
    }

    /// Build a range covering `duration` from `start`.
    pub fn from_duration<Tz: TimeZone>(start: DateTime<Tz>, duration: Duration) -> DomainResult<Self> {
        let end = start
            .clone()
            .checked_add_signed(duration)
            .ok_or_else(|| {
                DomainError::invalid_argument(
                    Some("duration"),
                    "start plus duration is out of the representable time range",
                )
            })?;
        Self::new(start, end)
    }

    /// Range start, in UTC.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Range end, in UTC.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the range. Zero for a point range.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `instant` falls inside the range, endpoints included.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.with_timezone(&Utc);
        self.start <= instant && instant <= self.end
    }
}

impl ValueObject for DateTimeRange {
    fn equals_core(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    fn hash_core(&self) -> u64 {
        StructuralHasher::new()
            .field(&self.start)
            .field(&self.end)
            .finish()
    }
}

impl_value_semantics!(DateTimeRange);
