use std::{cmp::Ordering, fmt};

use miette::Diagnostic;
use thiserror::Error;

use crate::WeatherRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("No valid weather data found in the file.")]
#[diagnostic(
    code(weather_stats::empty_dataset),
    help("every line was either too short, not numeric, or had its max below its min")
)]
pub struct EmptyDatasetError;

/// The day holding an extreme value, and that value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub day: i64,
    pub value: f64,
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}, Value: {:.2}°", self.day, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub smallest_spread: Extreme,
    pub highest_average: Extreme,
    pub highest_max: Extreme,
    pub lowest_min: Extreme,
}

impl Summary {
    /// Returns `None` when there are no rows to summarize.
    pub fn compute(rows: &[WeatherRow]) -> Option<Self> {
        Some(Self {
            smallest_spread: extreme(rows, WeatherRow::spread, Ordering::Less)?,
            highest_average: extreme(rows, WeatherRow::average, Ordering::Greater)?,
            highest_max: extreme(rows, |row| row.max_temp, Ordering::Greater)?,
            lowest_min: extreme(rows, |row| row.min_temp, Ordering::Less)?,
        })
    }

    pub fn entries(&self) -> [(&'static str, Extreme); 4] {
        [
            ("Day with Smallest Temperature Spread", self.smallest_spread),
            ("Day with Highest Average Temperature", self.highest_average),
            ("Day with Highest Maximum Temperature", self.highest_max),
            ("Day with Lowest Minimum Temperature", self.lowest_min),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Weather Analysis Results:")?;
        for (label, extreme) in self.entries() {
            writeln!(f, "{label}: {extreme}")?;
        }
        Ok(())
    }
}

/// Finds the first row whose key compares as `wanted` against every other.
///
/// NaN keys are skipped. If all of them are NaN the first row is returned.
fn extreme(rows: &[WeatherRow], key: fn(&WeatherRow) -> f64, wanted: Ordering) -> Option<Extreme> {
    let (first, rest) = rows.split_first()?;
    let mut best = Extreme {
        day: first.day,
        value: key(first),
    };

    for row in rest {
        let value = key(row);
        if value.is_nan() {
            continue;
        }
        // Only a strictly better value replaces the current one, so ties keep
        // the earliest row
        if best.value.is_nan() || value.partial_cmp(&best.value) == Some(wanted) {
            best = Extreme {
                day: row.day,
                value,
            };
        }
    }

    Some(best)
}
