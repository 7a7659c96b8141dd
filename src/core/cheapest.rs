use crate::{
    core::{
        point::PricePoint,
        rolling::rolling_averages,
        window::{CheapestWindow, Zone},
    },
    prelude::*,
};

/// Find the cheapest `period_count` run of points inside each zone.
///
/// Zones that hold fewer than `period_count` points are dropped.
#[must_use]
pub fn cheapest_per_zone(
    zones: &[Zone],
    points: &[PricePoint],
    period_count: usize,
) -> Vec<CheapestWindow> {
    zones
        .iter()
        .filter_map(|zone| {
            let zone_points: Vec<PricePoint> = points
                .iter()
                .filter(|point| zone.interval.encloses(point.interval))
                .copied()
                .collect();
            let Some(windows) = rolling_averages(&zone_points, period_count) else {
                debug!(?zone.interval, n_points = zone_points.len(), "zone is too short");
                return None;
            };
            // `min_by_key` keeps the first of equal minimums:
            let window = windows.into_iter().min_by_key(|window| window.average_price)?;
            Some(CheapestWindow { zone: zone.interval, window })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::point::fixtures::{at, half_hourly},
        ops::Interval,
        quantity::price::KilowattHourPrice,
    };

    fn zone(start: i64, end: i64) -> Zone {
        Zone { interval: Interval::new(at(start), at(end)), average_price: KilowattHourPrice::ZERO }
    }

    #[test]
    fn test_cheapest_inside_zone() {
        let points = half_hourly(&[1.0, 9.0, 8.0, 2.0, 3.0, 7.0, 0.0]);
        let cheapest = cheapest_per_zone(&[zone(1, 6)], &points, 2);
        assert_eq!(cheapest.len(), 1);
        assert_eq!(cheapest[0].zone, Interval::new(at(1), at(6)));
        assert_eq!(cheapest[0].window.interval, Interval::new(at(3), at(5)));
        assert_abs_diff_eq!(cheapest[0].window.average_price.0, 2.5);
    }

    #[test]
    fn test_first_minimum_wins() {
        let points = half_hourly(&[10.0, 30.0, 10.0, 30.0]);
        let cheapest = cheapest_per_zone(&[zone(0, 4)], &points, 2);
        assert_eq!(cheapest[0].window.interval, Interval::new(at(0), at(2)));
    }

    #[test]
    fn test_short_zone_dropped() {
        let points = half_hourly(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let cheapest = cheapest_per_zone(&[zone(0, 1), zone(2, 6)], &points, 3);
        assert_eq!(cheapest.len(), 1);
        assert_eq!(cheapest[0].zone, Interval::new(at(2), at(6)));
        assert_eq!(cheapest[0].window.interval, Interval::new(at(2), at(5)));
    }

    #[test]
    fn test_preserves_zone_order() {
        let points = half_hourly(&[5.0, 1.0, 9.0, 9.0, 4.0, 2.0]);
        let cheapest = cheapest_per_zone(&[zone(0, 2), zone(4, 6)], &points, 1);
        assert_eq!(cheapest.len(), 2);
        assert_eq!(cheapest[0].window.interval.start, at(1));
        assert_eq!(cheapest[1].window.interval.start, at(5));
    }

    #[test]
    fn test_no_zones() {
        assert!(cheapest_per_zone(&[], &half_hourly(&[1.0]), 1).is_empty());
    }
}
