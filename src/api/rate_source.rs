use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta};

use crate::{core::point::PricePoint, ops::Interval, prelude::*};

#[async_trait]
pub trait RateSource: Sync {
    /// Fetch the points from yesterday till the day after tomorrow, sorted and de-duplicated.
    #[instrument(skip_all)]
    async fn get_recent_and_upcoming_rates(
        &self,
        now: DateTime<Local>,
    ) -> Result<Vec<PricePoint>> {
        let interval = Interval::new(now - TimeDelta::days(1), now + TimeDelta::days(2));
        let mut points = self.get_rates(interval).await?;
        points.sort_by_key(|point| point.interval.start);
        points.dedup_by_key(|point| point.interval.start);
        Ok(points)
    }

    async fn get_rates(&self, interval: Interval) -> Result<Vec<PricePoint>>;
}
