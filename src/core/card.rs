use crate::core::{
    point::PricePoint,
    window::{CheapestWindow, Window, Zone},
};

/// Dashboard card, in the default display order.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, clap::ValueEnum)]
pub enum Card {
    /// Recent and upcoming rates.
    Rates,

    /// Merged zones of the cheapest windows.
    Zones,

    /// Cheapest window inside each low-price zone.
    CheapestPerZone,

    /// Rate in effect now.
    Current,

    /// Next rate.
    Upcoming,

    /// Lowest future rate.
    Lowest,

    /// Highest future rate.
    Highest,

    /// Windows with the lowest average rate.
    LowestAverage,
}

/// Result shown by a card.
#[derive(Copy, Clone, Debug)]
pub enum CardContent<'a> {
    Rates(&'a [PricePoint]),
    Rate(Option<PricePoint>),
    Windows(&'a [Window]),
    Zones(&'a [Zone]),
    CheapestPerZone(&'a [CheapestWindow]),
}

impl CardContent<'_> {
    /// Whether there is nothing to show.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Rates(points) => points.is_empty(),
            Self::Rate(point) => point.is_none(),
            Self::Windows(windows) => windows.is_empty(),
            Self::Zones(zones) => zones.is_empty(),
            Self::CheapestPerZone(cheapest) => cheapest.is_empty(),
        }
    }
}
