use chrono::{DateTime, Local, TimeDelta, TimeZone};

use crate::ops::RangeExclusive;

pub type Interval<Tz = Local> = RangeExclusive<DateTime<Tz>>;

impl<Tz> Interval<Tz>
where
    Tz: TimeZone,
    DateTime<Tz>: Copy,
{
    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Duration in seconds, used as a weight.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds(self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_seconds() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let interval = Interval::new(start, start + TimeDelta::minutes(90));
        assert_eq!(interval.duration(), TimeDelta::minutes(90));
        assert_abs_diff_eq!(interval.seconds(), 5400.0);
    }
}
