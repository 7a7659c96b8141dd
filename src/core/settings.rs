use crate::core::{duration::WindowDuration, point::PricePoint, selector::DEFAULT_TOP_ZONE_COUNT};

/// Analysis parameters chosen by the user.
#[must_use]
#[derive(Copy, Clone, Debug, bon::Builder)]
pub struct Settings {
    #[builder(default)]
    pub duration: WindowDuration,

    /// Overrides the cadence derived from the price points.
    pub periods_per_hour: Option<u32>,

    #[builder(default = DEFAULT_TOP_ZONE_COUNT)]
    pub top_zone_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    /// Number of consecutive points in a window of the chosen duration.
    ///
    /// Without an explicit cadence, it is derived from the first point.
    #[must_use]
    pub fn period_count(&self, points: &[PricePoint]) -> Option<usize> {
        let periods_per_hour =
            self.periods_per_hour.or_else(|| points.first()?.periods_per_hour())?;
        self.duration.period_count(periods_per_hour)
    }
}
