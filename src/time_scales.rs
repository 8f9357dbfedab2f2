//! Continuous day numbers for instants in time.
//!
//! Phase arithmetic needs instants as real-valued day counts so that
//! differences stay exact to well under a second. [`Ut`] represents an
//! instant of [universal time](https://en.wikipedia.org/wiki/Universal_Time)
//! as a Julian date (JD).
//!
//! Leap seconds are ignored, as they are by Unix timestamps.

use chrono::{DateTime, TimeZone};

/// Julian date of the Unix epoch, 1970-01-01T00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Universal time, represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts seconds since the Unix epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use lunfazo::time_scales::Ut;
    ///
    /// assert_eq!(Ut(2451544.5), Ut::from_unix_seconds(946684800)); // 2000-01-01
    /// ```
    pub const fn from_unix_seconds(secs: i64) -> Self {
        Ut(UNIX_EPOCH_JD + secs as f64 / SECONDS_PER_DAY)
    }

    /// Returns the (possibly negative) number of days from `earlier` to
    /// `self`.
    pub fn days_since(&self, earlier: Ut) -> f64 {
        self.0 - earlier.0
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Ut {
    fn from(time: &DateTime<Tz>) -> Ut {
        let secs = time.timestamp() as f64 + time.timestamp_subsec_nanos() as f64 / 1e9;
        Ut(UNIX_EPOCH_JD + secs / SECONDS_PER_DAY)
    }
}
