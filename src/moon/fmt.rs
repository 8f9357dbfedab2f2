//! Text renderings of phase results.

use std::fmt;

use super::{PhaseResult, round_hundredths};

/// Visibility rounded to 2 decimals, as displayed.
pub fn percent(result: &PhaseResult) -> f64 {
    round_hundredths(result.visibility())
}

/// One-line summary: glyph, name, position and visibility.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lunfazo::moon::{self, Hemisphere};
///
/// let moment = Utc.with_ymd_and_hms(2020, 8, 11, 0, 0, 0).unwrap();
/// let result = moon::calculate(moment, Hemisphere::Northern);
///
/// assert_eq!(
///     "🌖 Waning Gibbous (21.98 days, Visibility 51.13%)",
///     moon::fmt::summary(&result)
/// );
/// ```
pub fn summary(result: &PhaseResult) -> String {
    format!(
        "{} {} ({} days, Visibility {}%)",
        result.glyph(),
        result.name(),
        result.days_into_cycle(),
        percent(result)
    )
}

impl fmt::Display for PhaseResult {
    /// Multi-line description of the result, naming the hemisphere in lower
    /// case.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The Moon for {} is {} days",
            self.moment(),
            self.days_into_cycle()
        )?;
        writeln!(f, "into the cycle, and is showing as \"{}\"", self.name())?;
        write!(
            f,
            "with {}% visibility, and a face of {} from the {} hemisphere.",
            percent(self),
            self.glyph(),
            self.hemisphere()
        )
    }
}
