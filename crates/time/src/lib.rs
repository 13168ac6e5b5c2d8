//! `keel-time` — ambient clock and time-range primitives.
//!
//! Consumers read [`TimeContext::now`]/[`TimeContext::utc_now`] instead of
//! the platform clock so tests can pin time per thread via
//! [`TimeContext::init`]/[`TimeContext::reset`].

pub mod clock;
pub mod context;
pub mod range;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::TimeContext;
pub use range::DateTimeRange;
