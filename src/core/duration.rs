use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::prelude::*;

/// User-chosen length of the cheapest window, in hours.
///
/// Allowed values are `0.5..=24` in half-hour steps.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowDuration(f64);

impl WindowDuration {
    pub const MIN_HOURS: f64 = 0.5;
    pub const MAX_HOURS: f64 = 24.0;

    pub fn try_from_hours(hours: f64) -> Result<Self> {
        ensure!(
            (Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours),
            "duration must be between {} and {} hours, got {hours}",
            Self::MIN_HOURS,
            Self::MAX_HOURS,
        );
        ensure!((hours * 2.0).fract() == 0.0, "duration must be a multiple of half an hour");
        Ok(Self(hours))
    }

    #[must_use]
    pub const fn hours(self) -> f64 {
        self.0
    }

    /// Number of consecutive periods covering the duration, [`None`] if it rounds to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn period_count(self, periods_per_hour: u32) -> Option<usize> {
        let period_count = (self.hours() * f64::from(periods_per_hour)).round() as usize;
        (period_count != 0).then_some(period_count)
    }
}

impl Default for WindowDuration {
    fn default() -> Self {
        Self(3.0)
    }
}

impl FromStr for WindowDuration {
    type Err = Error;

    fn from_str(hours: &str) -> Result<Self> {
        Self::try_from_hours(hours.trim().parse().context("duration must be a number of hours")?)
    }
}

impl Display for WindowDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 { write!(f, "{:.0}h", self.0) } else { write!(f, "{:.1}h", self.0) }
    }
}
