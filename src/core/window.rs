use crate::{core::point::PricePoint, ops::Interval, quantity::price::KilowattHourPrice};

/// Run of consecutive price points with their arithmetic mean price.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Window {
    pub interval: Interval,
    pub average_price: KilowattHourPrice,
}

impl Window {
    /// Aggregate the consecutive points, [`None`] if there are none.
    pub fn try_from_points(points: &[PricePoint]) -> Option<Self> {
        let (first, last) = (points.first()?, points.last()?);
        Some(Self {
            interval: Interval::new(first.interval.start, last.interval.end),
            average_price: KilowattHourPrice::mean(
                points.iter().map(|point| point.price_including_tax),
            )?,
        })
    }
}

/// Merged interval with a duration-weighted average price.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Zone {
    pub interval: Interval,
    pub average_price: KilowattHourPrice,
}

impl From<Window> for Zone {
    fn from(window: Window) -> Self {
        Self { interval: window.interval, average_price: window.average_price }
    }
}

impl Zone {
    /// Price multiplied by duration in seconds.
    #[must_use]
    pub fn price_mass(self) -> f64 {
        self.average_price.0 * self.interval.seconds()
    }

    /// Combine with another zone, spreading the price mass over the union.
    ///
    /// Overlapping time is counted twice.
    pub fn merge(self, other: Self) -> Self {
        let interval = self.interval.union(other.interval);
        let average_price =
            KilowattHourPrice((self.price_mass() + other.price_mass()) / interval.seconds());
        Self { interval, average_price }
    }
}

/// Cheapest sub-window found inside a zone.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CheapestWindow {
    pub zone: Interval,
    pub window: Window,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::point::fixtures::{at, half_hourly};

    #[test]
    fn test_try_from_points() {
        let window = Window::try_from_points(&half_hourly(&[10.0, 30.0])).unwrap();
        assert_eq!(window.interval, Interval::new(at(0), at(2)));
        assert_abs_diff_eq!(window.average_price.0, 20.0);
    }

    #[test]
    fn test_try_from_no_points() {
        assert_eq!(Window::try_from_points(&[]), None);
    }

    #[test]
    fn test_merge_adjacent() {
        let lhs = Zone { interval: Interval::new(at(0), at(2)), average_price: KilowattHourPrice(10.0) };
        let rhs = Zone { interval: Interval::new(at(2), at(6)), average_price: KilowattHourPrice(40.0) };
        let merged = lhs.merge(rhs);
        assert_eq!(merged.interval, Interval::new(at(0), at(6)));
        assert_abs_diff_eq!(merged.average_price.0, 30.0);
    }

    #[test]
    fn test_merge_overlapping_conserves_mass() {
        let lhs = Zone { interval: Interval::new(at(0), at(3)), average_price: KilowattHourPrice(5.0) };
        let rhs = Zone { interval: Interval::new(at(1), at(4)), average_price: KilowattHourPrice(5.0) };
        let merged = lhs.merge(rhs);
        assert_abs_diff_eq!(merged.price_mass(), lhs.price_mass() + rhs.price_mass(), epsilon = 1e-6);
        assert_abs_diff_eq!(merged.average_price.0, 7.5);
    }
}
