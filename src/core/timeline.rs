use chrono::{DateTime, Local, NaiveTime, TimeDelta};

use crate::{core::point::PricePoint, ops::Interval};

/// Points starting strictly after `now`.
#[must_use]
pub fn future_points(points: &[PricePoint], now: DateTime<Local>) -> Vec<PricePoint> {
    points.iter().filter(|point| point.interval.start > now).copied().collect()
}

/// Visible time span of the rate overview: from two hours ago till the end of the day.
///
/// Close to midnight, the span extends over the next day as well.
pub fn overview_span(points: &[PricePoint], now: DateTime<Local>) -> Interval {
    let end_of_today = next_midnight(now);
    let end = if end_of_today - now < TimeDelta::hours(3) {
        next_midnight(end_of_today)
    } else {
        points.last().map_or(end_of_today, |last| last.interval.end.max(end_of_today))
    };
    Interval::new(now - TimeDelta::hours(2), end)
}

/// Points lying entirely within the span.
#[must_use]
pub fn recent_and_upcoming(points: &[PricePoint], span: Interval) -> Vec<PricePoint> {
    points.iter().filter(|point| span.encloses(point.interval)).copied().collect()
}

fn next_midnight(time: DateTime<Local>) -> DateTime<Local> {
    time.date_naive()
        .succ_opt()
        .and_then(|date| date.and_time(NaiveTime::MIN).and_local_timezone(Local).earliest())
        .unwrap_or_else(|| time + TimeDelta::days(1))
}
