//! Approximate phase of the Moon for any moment.
//!
//! The Moon is assumed to move linearly through a synodic cycle of 29.53
//! days, counted from the new moon of 21 January 1920. This is good enough
//! to tell a crescent from a gibbous Moon, but not to predict the exact
//! instant of a full moon.
//!
//! # Examples
//!
//! Phase at a given moment:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lunfazo::moon::{self, Hemisphere, Phase};
//!
//! let moment = Utc.with_ymd_and_hms(2020, 7, 28, 0, 0, 0).unwrap();
//! let result = moon::calculate(moment, Hemisphere::Northern);
//!
//! assert_eq!(Phase::FirstQuarter, result.phase());
//! assert_eq!("🌓", result.glyph());
//! assert_eq!(7.98, result.days_into_cycle());
//! ```
//!
//! Phase right now, seen from the southern hemisphere:
//!
//! ```
//! use lunfazo::moon::{self, Hemisphere};
//!
//! let result = moon::now(Hemisphere::Southern);
//! println!("{result}");
//! ```

pub mod error;
pub mod moon;
pub mod time_scales;

pub use error::{ParseHemisphereError, TableError};
pub use moon::{Hemisphere, Phase, PhaseResult};
