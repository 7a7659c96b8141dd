//! Sliding averages over consecutive price points.

use crate::{
    core::{point::PricePoint, window::Window},
    prelude::*,
};

/// Average every run of `period_count` consecutive points, stride one.
///
/// # Returns
///
/// - [`Some`] windows in the order of their start, exactly `points.len() - period_count + 1`.
/// - [`None`], if there are fewer points than `period_count` or `period_count` is zero.
#[must_use]
pub fn rolling_averages(points: &[PricePoint], period_count: usize) -> Option<Vec<Window>> {
    if period_count == 0 || points.len() < period_count {
        debug!(n_points = points.len(), period_count, "not enough points");
        return None;
    }
    points.windows(period_count).map(Window::try_from_points).collect()
}

/// Order the windows by ascending average price, earliest start first on ties.
#[must_use]
pub fn rank(mut windows: Vec<Window>) -> Vec<Window> {
    windows.sort_by_key(|window| (window.average_price, window.interval.start));
    windows
}

/// Rolling averages ranked from the cheapest.
#[must_use]
pub fn lowest_average_windows(points: &[PricePoint], period_count: usize) -> Option<Vec<Window>> {
    rolling_averages(points, period_count).map(rank)
}
