use bon::Builder;
use chrono::{DateTime, Local};

use crate::{
    core::{
        card::{Card, CardContent},
        cheapest::cheapest_per_zone,
        extremes::{current_rate, future_highest_rate, future_lowest_rate, upcoming_rate},
        merger::merge_zones,
        point::PricePoint,
        rolling::lowest_average_windows,
        selector::select_top,
        settings::Settings,
        timeline::{future_points, overview_span, recent_and_upcoming},
        window::{CheapestWindow, Window, Zone},
    },
    prelude::*,
};

/// Full pass over a rate series as of a given moment.
#[derive(Builder)]
pub struct Analysis<'a> {
    /// Chronologically sorted points.
    points: &'a [PricePoint],

    now: DateTime<Local>,

    #[builder(default)]
    settings: Settings,
}

impl Analysis<'_> {
    #[instrument(skip_all, fields(n_points = self.points.len()))]
    pub fn run(&self) -> Summary {
        let future = future_points(self.points, self.now);
        let period_count = self.settings.period_count(&future);

        let ranked = period_count
            .and_then(|period_count| lowest_average_windows(&future, period_count));
        let top = select_top(ranked.as_deref(), self.settings.top_zone_count);
        let zones = merge_zones(&top);
        let cheapest = period_count.map_or_else(Vec::new, |period_count| {
            cheapest_per_zone(&zones, &future, period_count)
        });
        info!(
            n_future_points = future.len(),
            ?period_count,
            n_candidates = top.len(),
            n_zones = zones.len(),
            n_cheapest = cheapest.len(),
            "analysed",
        );

        Summary {
            period_count,
            overview: recent_and_upcoming(self.points, overview_span(self.points, self.now)),
            current: current_rate(self.points, self.now),
            upcoming: upcoming_rate(self.points, self.now),
            lowest: future_lowest_rate(self.points, self.now),
            highest: future_highest_rate(self.points, self.now),
            top,
            zones,
            cheapest,
        }
    }
}

/// Everything the dashboard shows.
#[must_use]
#[derive(Clone, Debug)]
pub struct Summary {
    /// [`None`] when the future is empty or its cadence is unknown.
    pub period_count: Option<usize>,

    pub overview: Vec<PricePoint>,
    pub current: Option<PricePoint>,
    pub upcoming: Option<PricePoint>,
    pub lowest: Option<PricePoint>,
    pub highest: Option<PricePoint>,

    /// Cheapest windows, ranked.
    pub top: Vec<Window>,

    pub zones: Vec<Zone>,
    pub cheapest: Vec<CheapestWindow>,
}

impl Summary {
    pub fn card(&self, card: Card) -> CardContent<'_> {
        match card {
            Card::Rates => CardContent::Rates(&self.overview),
            Card::Zones => CardContent::Zones(&self.zones),
            Card::CheapestPerZone => CardContent::CheapestPerZone(&self.cheapest),
            Card::Current => CardContent::Rate(self.current),
            Card::Upcoming => CardContent::Rate(self.upcoming),
            Card::Lowest => CardContent::Rate(self.lowest),
            Card::Highest => CardContent::Rate(self.highest),
            Card::LowestAverage => CardContent::Windows(&self.top),
        }
    }
}
