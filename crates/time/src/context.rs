//! Ambient clock with a per-thread override slot.
//!
//! The slot is `thread_local!`, so concurrent threads can install different
//! overrides without observing each other and without synchronization. Each
//! thread's slot has two logical states: "default" (real clock) and
//! "overridden"; the first read lazily installs the default.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local, Utc};

use crate::clock::{Clock, SystemClock};

thread_local! {
    static CLOCK: RefCell<Option<Rc<dyn Clock>>> = const { RefCell::new(None) };
}

/// Process-wide clock indirection, thread-isolated in effect.
///
/// Read [`TimeContext::now`] instead of `Local::now()` in domain code, and
/// pin time in test setup:
///
/// ```
/// use chrono::{Local, TimeZone};
/// use keel_time::TimeContext;
///
/// let t0 = Local.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// TimeContext::init(move || t0);
/// assert_eq!(TimeContext::now(), t0);
/// TimeContext::reset();
/// ```
pub struct TimeContext;

impl TimeContext {
    /// The current time according to the calling thread's clock.
    ///
    /// Installs the real system clock first if this thread has no clock yet.
    pub fn now() -> DateTime<Local> {
        let clock = CLOCK.with(|slot| {
            let mut slot = slot.borrow_mut();
            Rc::clone(slot.get_or_insert_with(|| Rc::new(SystemClock)))
        });
        // The borrow is released before the clock runs, so an override may
        // itself consult TimeContext.
        clock.now()
    }

    /// [`TimeContext::now`] converted to UTC.
    pub fn utc_now() -> DateTime<Utc> {
        Self::now().with_timezone(&Utc)
    }

    /// Install `clock` as the calling thread's time source.
    ///
    /// Other threads are unaffected.
    pub fn init(clock: impl Clock + 'static) {
        tracing::debug!("installing ambient clock override for current thread");
        CLOCK.with(|slot| *slot.borrow_mut() = Some(Rc::new(clock)));
    }

    /// Discard any override on the calling thread and return to the real
    /// system clock.
    pub fn reset() {
        tracing::debug!("resetting ambient clock to system clock");
        CLOCK.with(|slot| *slot.borrow_mut() = Some(Rc::new(SystemClock)));
    }
}
