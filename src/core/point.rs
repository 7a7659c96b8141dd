use chrono::TimeDelta;

use crate::{ops::Interval, quantity::price::KilowattHourPrice};

/// Unit price over a fixed period.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, bon::Builder)]
pub struct PricePoint {
    /// Start is inclusive, end is exclusive.
    pub interval: Interval,

    pub price_including_tax: KilowattHourPrice,
    pub price_excluding_tax: KilowattHourPrice,
}

impl PricePoint {
    /// Number of such periods in one hour, if the span divides an hour evenly.
    #[must_use]
    pub fn periods_per_hour(&self) -> Option<u32> {
        let span = self.interval.duration();
        if span <= TimeDelta::zero() {
            return None;
        }
        let hour = TimeDelta::hours(1).num_seconds();
        let span = span.num_seconds();
        if span == 0 || hour % span != 0 {
            return None;
        }
        u32::try_from(hour / span).ok()
    }
}
