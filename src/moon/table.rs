//! Partition of the synodic cycle into named phases.

use std::sync::OnceLock;

use super::{CYCLE_LENGTH, NORTHERN_GLYPHS, Phase, SOUTHERN_GLYPHS};
use crate::error::{Result, TableError};

/// One named bucket of the cycle, covering `start..end` days into the cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseDefinition {
    pub phase: Phase,
    /// Days into the cycle at which this phase starts
    pub start: f64,
    /// Days into the cycle at which the next phase starts
    pub end: f64,
}

impl PhaseDefinition {
    pub fn name(&self) -> &'static str {
        self.phase.name()
    }
    /// Returns `true` if `days` falls in the half-open interval `start..end`.
    pub fn contains(&self, days: f64) -> bool {
        (self.start..self.end).contains(&days)
    }
}

/// Ordered, gap-free partition of `0..cycle_length` into phases.
///
/// Tables can only be obtained through the validating constructors, so a
/// `PhaseTable` always satisfies:
///
/// - the first phase starts at 0 and the last ends at the cycle length;
/// - each phase ends exactly where the next one starts;
/// - boundaries ascend strictly.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTable {
    cycle_length: f64,
    phases: Vec<PhaseDefinition>,
}

impl PhaseTable {
    /// Builds a table from `names.len() + 1` ascending boundaries, the first
    /// being 0 and the last `cycle_length`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunfazo::moon::Phase::*;
    /// use lunfazo::moon::table::PhaseTable;
    ///
    /// let table =
    ///     PhaseTable::from_boundaries(&[NewMoon, FullMoon], &[0.0, 10.0, 20.0], 20.0).unwrap();
    /// assert_eq!(FullMoon, table.lookup(10.0).unwrap().1.phase);
    /// ```
    pub fn from_boundaries(
        names: &[Phase],
        boundaries: &[f64],
        cycle_length: f64,
    ) -> Result<Self> {
        if names.is_empty() {
            return Err(TableError::Empty);
        }
        if boundaries.len() != names.len() + 1 {
            return Err(TableError::LengthMismatch {
                names: names.len(),
                boundaries: boundaries.len(),
            });
        }
        if let Some(index) = boundaries.iter().position(|b| !b.is_finite()) {
            return Err(TableError::NotFinite {
                index,
                value: boundaries[index],
            });
        }
        if boundaries[0] != 0.0 {
            return Err(TableError::FirstBoundary(boundaries[0]));
        }
        let last = boundaries[names.len()];
        if last != cycle_length {
            return Err(TableError::LastBoundary { last, cycle_length });
        }
        for (i, pair) in boundaries.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(TableError::NotAscending {
                    index: i + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }

        let phases = names
            .iter()
            .zip(boundaries.windows(2))
            .map(|(&phase, pair)| PhaseDefinition {
                phase,
                start: pair[0],
                end: pair[1],
            })
            .collect();
        Ok(Self {
            cycle_length,
            phases,
        })
    }

    /// Divides `0..cycle_length` into equally wide buckets, one per name.
    ///
    /// The closing boundary is exactly `cycle_length`, so accumulated
    /// rounding in `period * n` can never leave a gap at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use lunfazo::moon::{CYCLE_LENGTH, Phase};
    /// use lunfazo::moon::table::PhaseTable;
    ///
    /// let table = PhaseTable::equal_division(&Phase::ALL, CYCLE_LENGTH).unwrap();
    /// assert_eq!(8, table.len());
    /// assert_eq!(CYCLE_LENGTH / 8.0, table.phases()[0].end);
    /// ```
    pub fn equal_division(names: &[Phase], cycle_length: f64) -> Result<Self> {
        if names.is_empty() {
            return Err(TableError::Empty);
        }
        let n = names.len();
        let period = cycle_length / n as f64;
        let boundaries: Vec<f64> = (0..=n)
            .map(|i| if i == n { cycle_length } else { period * i as f64 })
            .collect();
        Self::from_boundaries(names, &boundaries, cycle_length)
    }

    /// Finds the phase covering `days` into the cycle, with its ordinal.
    ///
    /// Returns `None` if `days` is outside `0..cycle_length` (or NaN). A value
    /// equal to a phase's `end` belongs to the next phase.
    pub fn lookup(&self, days: f64) -> Option<(usize, &PhaseDefinition)> {
        if !(0.0..self.cycle_length).contains(&days) {
            return None;
        }
        let idx = self
            .phases
            .partition_point(|p| p.start <= days)
            .checked_sub(1)?;
        let phase = &self.phases[idx];
        phase.contains(days).then_some((idx, phase))
    }

    pub fn phases(&self) -> &[PhaseDefinition] {
        &self.phases
    }
    pub fn len(&self) -> usize {
        self.phases.len()
    }
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
    pub fn cycle_length(&self) -> f64 {
        self.cycle_length
    }
}

/// Returns the process-wide phase table, building it on first use.
///
/// The table divides [`CYCLE_LENGTH`] evenly among the eight [`Phase`]s.
///
/// # Panics
///
/// Panics if the built-in table is inconsistent, e.g. the glyph sequences do
/// not cover every phase. No calculation can run against such a table.
pub fn phase_table() -> &'static PhaseTable {
    static TABLE: OnceLock<PhaseTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = build().unwrap_or_else(|e| panic!("invalid phase table: {e}"));
        tracing::debug!(
            phases = table.len(),
            cycle_length = table.cycle_length(),
            "built phase table"
        );
        table
    })
}

fn build() -> Result<PhaseTable> {
    let table = PhaseTable::equal_division(&Phase::ALL, CYCLE_LENGTH)?;
    let glyphs = NORTHERN_GLYPHS.len().min(SOUTHERN_GLYPHS.len());
    if glyphs < table.len() {
        return Err(TableError::GlyphShortfall {
            glyphs,
            phases: table.len(),
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Phase::*;

    #[test]
    fn equal_buckets() {
        let table = phase_table();
        let period = CYCLE_LENGTH / 8.0;
        assert_eq!(Phase::ALL.len(), table.len());
        for (i, (def, phase)) in table.phases().iter().zip(Phase::ALL).enumerate() {
            assert_eq!(phase, def.phase);
            assert!((def.start - period * i as f64).abs() < 1e-12, "{i}");
            assert!((def.end - def.start - period).abs() < 1e-12, "{i}");
        }
        assert_eq!(0.0, table.phases()[0].start);
        assert_eq!(CYCLE_LENGTH, table.phases()[7].end);
    }

    #[test]
    fn contiguous() {
        for pair in phase_table().phases().windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn exactly_one_match() {
        let table = phase_table();
        for i in 0..29530 {
            let days = i as f64 / 1000.0;
            let matches = table.phases().iter().filter(|p| p.contains(days)).count();
            assert_eq!(1, matches, "{days}");
            let (idx, def) = table.lookup(days).unwrap();
            assert!(def.contains(days));
            assert_eq!(def, &table.phases()[idx]);
        }
    }

    #[test]
    fn lookup_boundaries() {
        let table = phase_table();
        let period = CYCLE_LENGTH / 8.0;
        let dataset = [
            (0.0, Some((0, NewMoon))),
            (period - 1e-9, Some((0, NewMoon))),
            (period, Some((1, WaxingCrescent))),
            (period * 4.0, Some((4, FullMoon))),
            (CYCLE_LENGTH - 1e-9, Some((7, WaningCrescent))),
            (CYCLE_LENGTH, None),
            (-0.01, None),
            (f64::NAN, None),
        ];
        for (days, std) in dataset {
            assert_eq!(
                std,
                table.lookup(days).map(|(i, p)| (i, p.phase)),
                "{days}"
            );
        }
    }

    #[test]
    fn invalid_tables() {
        let dataset = [
            (
                vec![NewMoon, FullMoon],
                vec![0.0, 20.0],
                TableError::LengthMismatch {
                    names: 2,
                    boundaries: 2,
                },
            ),
            (
                vec![NewMoon, FullMoon],
                vec![1.0, 10.0, 20.0],
                TableError::FirstBoundary(1.0),
            ),
            (
                vec![NewMoon, FullMoon],
                vec![0.0, 10.0, 19.0],
                TableError::LastBoundary {
                    last: 19.0,
                    cycle_length: 20.0,
                },
            ),
            (
                vec![NewMoon, FullMoon, NewMoon],
                vec![0.0, 12.0, 12.0, 20.0],
                TableError::NotAscending {
                    index: 2,
                    previous: 12.0,
                    value: 12.0,
                },
            ),
            (vec![], vec![0.0], TableError::Empty),
        ];
        for (names, boundaries, std) in dataset {
            assert_eq!(
                Err(std),
                PhaseTable::from_boundaries(&names, &boundaries, 20.0)
            );
        }
        assert!(matches!(
            PhaseTable::from_boundaries(&[NewMoon], &[0.0, f64::INFINITY], 20.0),
            Err(TableError::NotFinite { index: 1, .. })
        ));
        assert_eq!(Err(TableError::Empty), PhaseTable::equal_division(&[], 20.0));
    }

    #[test]
    fn glyphs_cover_table() {
        assert_eq!(Ok(phase_table().clone()), build());
    }
}
