//! Single-point queries over the rate series.

use std::cmp::Reverse;

use chrono::{DateTime, Local};

use crate::core::point::PricePoint;

/// The point in effect at `now`.
pub fn current_rate(points: &[PricePoint], now: DateTime<Local>) -> Option<PricePoint> {
    points.iter().find(|point| point.interval.contains(now)).copied()
}

/// The first point starting after `now`.
pub fn upcoming_rate(points: &[PricePoint], now: DateTime<Local>) -> Option<PricePoint> {
    future(points, now).next()
}

/// The cheapest future point, the earliest one on ties.
pub fn future_lowest_rate(points: &[PricePoint], now: DateTime<Local>) -> Option<PricePoint> {
    future(points, now).min_by_key(|point| point.price_including_tax)
}

/// The most expensive future point, the earliest one on ties.
pub fn future_highest_rate(points: &[PricePoint], now: DateTime<Local>) -> Option<PricePoint> {
    future(points, now).min_by_key(|point| Reverse(point.price_including_tax))
}

fn future(points: &[PricePoint], now: DateTime<Local>) -> impl Iterator<Item = PricePoint> {
    points.iter().filter(move |point| point.interval.start > now).copied()
}
