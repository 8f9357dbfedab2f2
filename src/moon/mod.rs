//! Phase of the Moon.
//!
//! The Moon is modelled as moving linearly through a synodic cycle of fixed
//! length ([`CYCLE_LENGTH`]), counted from a known new moon
//! ([`REFERENCE_NEW_MOON`]). The position within the current cycle selects
//! one of eight equally wide [`Phase`]s, a glyph depending on the observer's
//! [`Hemisphere`], and an approximate visibility.
//!
//! Orbital eccentricity is ignored, so the computed phase can drift by a day
//! or so from the actual one.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lunfazo::moon::{self, Hemisphere, Phase};
//!
//! let moment = Utc.with_ymd_and_hms(2020, 8, 3, 0, 0, 0).unwrap();
//! let result = moon::calculate(moment, Hemisphere::Northern);
//!
//! assert_eq!(Phase::WaxingGibbous, result.phase());
//! assert_eq!(13.98, result.days_into_cycle());
//! assert_eq!("🌔", result.glyph());
//! ```

use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::ParseHemisphereError;
use crate::time_scales::Ut;

pub mod fmt;
pub mod table;

pub use table::phase_table;

/// Length of the synodic cycle in days.
pub const CYCLE_LENGTH: f64 = 29.53;

/// Days into the cycle after which visibility starts to decline.
pub const FULL_MOON_DAY: f64 = 15.0;

/// New moon of 1920-01-21T05:25Z, as observed from London.
pub const REFERENCE_NEW_MOON: Ut = Ut::from_unix_seconds(-1_576_175_700);

/// Faces of the Moon from new moon to new moon, as seen from the northern
/// hemisphere.
#[rustfmt::skip]
pub const NORTHERN_GLYPHS: [&str; 9] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘", "🌑"];

/// Faces of the Moon as seen from the southern hemisphere: [`NORTHERN_GLYPHS`]
/// reversed.
#[rustfmt::skip]
pub const SOUTHERN_GLYPHS: [&str; 9] = ["🌑", "🌘", "🌗", "🌖", "🌕", "🌔", "🌓", "🌒", "🌑"];

/// Named phases, in order of appearance during the cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl Phase {
    /// All phases, starting from the new moon.
    pub const ALL: [Phase; 8] = [
        Phase::NewMoon,
        Phase::WaxingCrescent,
        Phase::FirstQuarter,
        Phase::WaxingGibbous,
        Phase::FullMoon,
        Phase::WaningGibbous,
        Phase::ThirdQuarter,
        Phase::WaningCrescent,
    ];

    /// Returns the English name, e.g. `"Waxing Crescent"`.
    pub fn name(&self) -> &'static str {
        use Phase::*;
        match self {
            NewMoon => "New Moon",
            WaxingCrescent => "Waxing Crescent",
            FirstQuarter => "First Quarter",
            WaxingGibbous => "Waxing Gibbous",
            FullMoon => "Full Moon",
            WaningGibbous => "Waning Gibbous",
            ThirdQuarter => "Third Quarter",
            WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hemisphere of the observer, which mirrors the lit side of the Moon.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    /// Returns the glyph sequence for this hemisphere, indexed by phase
    /// ordinal.
    pub fn glyphs(&self) -> &'static [&'static str; 9] {
        match self {
            Hemisphere::Northern => &NORTHERN_GLYPHS,
            Hemisphere::Southern => &SOUTHERN_GLYPHS,
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Hemisphere::Northern => "northern",
            Hemisphere::Southern => "southern",
        })
    }
}

impl FromStr for Hemisphere {
    type Err = ParseHemisphereError;

    /// Parses `"northern"` or `"southern"`, ignoring case. `"north"`, `"n"`,
    /// `"south"` and `"s"` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Hemisphere::Northern),
            "southern" | "south" | "s" => Ok(Hemisphere::Southern),
            _ => Err(ParseHemisphereError(s.to_owned())),
        }
    }
}

/// Phase of the Moon at a moment, as seen from a hemisphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseResult {
    phase: Phase,
    glyph: &'static str,
    days_into_cycle: f64,
    hemisphere: Hemisphere,
    moment: DateTime<Utc>,
}

impl PhaseResult {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn name(&self) -> &'static str {
        self.phase.name()
    }
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }
    /// Days since the start of the current cycle, rounded to 2 decimals.
    ///
    /// Negative for moments before [`REFERENCE_NEW_MOON`].
    pub fn days_into_cycle(&self) -> f64 {
        self.days_into_cycle
    }
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
    pub fn moment(&self) -> DateTime<Utc> {
        self.moment
    }
    /// Approximate percentage of the Moon's face that is lit, in `0..=100`.
    ///
    /// Derived from the rounded [`days_into_cycle`](Self::days_into_cycle);
    /// see [`visibility`].
    pub fn visibility(&self) -> f64 {
        visibility(self.days_into_cycle)
    }
}

/// Calculates the phase of the Moon at `moment`.
///
/// Moments before [`REFERENCE_NEW_MOON`] are supported but less meaningful:
/// the reported [`days_into_cycle`](PhaseResult::days_into_cycle) is then
/// negative, counted back from the next cycle boundary.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lunfazo::moon::{self, Hemisphere};
///
/// let moment = Utc.with_ymd_and_hms(2020, 7, 27, 0, 0, 0).unwrap();
/// let result = moon::calculate(moment, Hemisphere::Southern);
///
/// assert_eq!("Waxing Crescent", result.name());
/// assert_eq!("🌘", result.glyph());
/// assert_eq!(47.27, (result.visibility() * 100.0).round() / 100.0);
/// ```
pub fn calculate(moment: DateTime<Utc>, hemisphere: Hemisphere) -> PhaseResult {
    let days = days_into_cycle(&moment);
    let (index, definition) = phase_table()
        .lookup(wrap(days))
        .unwrap_or_else(|| panic!("no phase covers {days} days into the cycle"));
    let result = PhaseResult {
        phase: definition.phase,
        glyph: hemisphere.glyphs()[index],
        days_into_cycle: round_hundredths(days),
        hemisphere,
        moment,
    };
    tracing::trace!(
        %moment,
        days_into_cycle = days,
        phase = %result.phase,
        %hemisphere,
        "calculated moon phase"
    );
    result
}

/// Calculates the phase of the Moon at `moment` in any time zone, after
/// normalizing it to UTC.
pub fn calculate_in<Tz: TimeZone>(
    moment: &DateTime<Tz>,
    hemisphere: Hemisphere,
) -> PhaseResult {
    calculate(moment.with_timezone(&Utc), hemisphere)
}

/// Calculates the current phase of the Moon from the system clock in UTC.
pub fn utc_now(hemisphere: Hemisphere) -> PhaseResult {
    calculate(Utc::now(), hemisphere)
}

/// Calculates the current phase of the Moon from the local system clock.
pub fn now(hemisphere: Hemisphere) -> PhaseResult {
    calculate_in(&Local::now(), hemisphere)
}

/// Returns the unrounded number of days into the cycle at `moment`.
///
/// Cycles are counted by truncation, so the result lies in
/// `0.0..CYCLE_LENGTH` from the reference new moon on, and in
/// `-CYCLE_LENGTH..=0.0` before it.
pub fn days_into_cycle<Tz: TimeZone>(moment: &DateTime<Tz>) -> f64 {
    let days_since = Ut::from(moment).days_since(REFERENCE_NEW_MOON);
    if days_since < 0.0 {
        tracing::warn!(
            %days_since,
            "moment precedes the reference new moon, phase is approximate"
        );
    }
    let cycles = days_since / CYCLE_LENGTH;
    cycles.fract() * CYCLE_LENGTH
}

/// Approximate visibility, in percent, after `days_into_cycle` days.
///
/// Rises linearly from the new moon, then falls after [`FULL_MOON_DAY`]
/// towards the end of the cycle.
///
/// # Example
///
/// ```
/// use lunfazo::moon::{CYCLE_LENGTH, visibility};
///
/// assert_eq!(0.0, visibility(0.0));
/// assert_eq!(100.0, visibility(CYCLE_LENGTH / 2.0));
/// assert!(visibility(CYCLE_LENGTH - 0.01) < 0.1);
/// ```
pub fn visibility(days_into_cycle: f64) -> f64 {
    let half_cycle = CYCLE_LENGTH / 2.0;
    let days = wrap(days_into_cycle);
    let numerator = if days > FULL_MOON_DAY {
        half_cycle - days % half_cycle
    } else {
        days
    };
    (numerator / half_cycle * 100.0).clamp(0.0, 100.0)
}

/// Maps any day count into `0.0..CYCLE_LENGTH`.
fn wrap(days: f64) -> f64 {
    let wrapped = days.rem_euclid(CYCLE_LENGTH);
    // rem_euclid rounds tiny negative inputs up to the modulus itself
    if wrapped < CYCLE_LENGTH { wrapped } else { 0.0 }
}

/// Rounds half to even at 2 decimals.
fn round_hundredths(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
