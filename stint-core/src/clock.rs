//! Time sources for the recency component of familiarity scoring.
//!
//! Scoring is otherwise a pure function of its inputs. Reading the time
//! through [`Clock`] keeps that single side channel explicit: production
//! callers use [`SystemClock`], tests and reproducible batch runs pin the
//! instant with [`FixedClock`].

use chrono::{DateTime, Utc};

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use stint_core::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Pin the clock to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
