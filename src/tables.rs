use chrono::{DateTime, Local};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        card::{Card, CardContent},
        duration::WindowDuration,
        point::PricePoint,
        window::{CheapestWindow, Window, Zone},
    },
    fmt::{FormattedPrice, PriceUnit},
    quantity::price::KilowattHourPrice,
};

pub fn card_title(card: Card, duration: WindowDuration) -> String {
    match card {
        Card::Rates => "Rates".to_string(),
        Card::Zones => format!("Cheap {duration} zones"),
        Card::CheapestPerZone => format!("Cheapest {duration} per zone"),
        Card::Current => "Current rate".to_string(),
        Card::Upcoming => "Upcoming rate".to_string(),
        Card::Lowest => "Lowest rate".to_string(),
        Card::Highest => "Highest rate".to_string(),
        Card::LowestAverage => format!("Lowest {duration} average"),
    }
}

/// Build the card table, [`None`] if there is nothing to show.
#[must_use]
pub fn build_card_table(
    content: CardContent<'_>,
    now: DateTime<Local>,
    unit: PriceUnit,
) -> Option<Table> {
    if content.is_empty() {
        return None;
    }
    Some(match content {
        CardContent::Rates(points) => build_rates_table(points, now, unit),
        CardContent::Rate(point) => build_rates_table(point.as_slice(), now, unit),
        CardContent::Windows(windows) => build_windows_table(windows, unit),
        CardContent::Zones(zones) => build_zones_table(zones, unit),
        CardContent::CheapestPerZone(cheapest) => build_cheapest_table(cheapest, unit),
    })
}

pub fn build_rates_table(points: &[PricePoint], now: DateTime<Local>, unit: PriceUnit) -> Table {
    let mean_price = KilowattHourPrice::mean(points.iter().map(|point| point.price_including_tax))
        .unwrap_or(KilowattHourPrice::ZERO);

    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Inc. VAT", "Exc. VAT"]);
    for point in points {
        let mut start = Cell::new(point.interval.start.format("%H:%M"));
        if point.interval.contains(now) {
            start = start.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(point.interval.start.format("%b %d")).add_attribute(Attribute::Dim),
            start,
            Cell::new(point.interval.end.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(FormattedPrice(point.price_including_tax, unit))
                .set_alignment(CellAlignment::Right)
                .fg(price_color(point.price_including_tax, mean_price)),
            Cell::new(FormattedPrice(point.price_excluding_tax, unit))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_windows_table(windows: &[Window], unit: PriceUnit) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Date", "Start", "End", "Average"]);
    for (rank, window) in (1..).zip(windows) {
        table.add_row(vec![
            Cell::new(rank).add_attribute(Attribute::Dim),
            Cell::new(window.interval.start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(window.interval.start.format("%H:%M")),
            Cell::new(window.interval.end.format("%H:%M")),
            Cell::new(FormattedPrice(window.average_price, unit))
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
        ]);
    }
    table
}

pub fn build_zones_table(zones: &[Zone], unit: PriceUnit) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Weighted average"]);
    for zone in zones {
        table.add_row(vec![
            Cell::new(zone.interval.start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(zone.interval.start.format("%H:%M")),
            Cell::new(zone.interval.end.format("%H:%M")),
            Cell::new(FormattedPrice(zone.average_price, unit)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_cheapest_table(cheapest: &[CheapestWindow], unit: PriceUnit) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Zone", "Start", "End", "Average"]);
    for CheapestWindow { zone, window } in cheapest {
        table.add_row(vec![
            Cell::new(zone.start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(format!("{}–{}", zone.start.format("%H:%M"), zone.end.format("%H:%M")))
                .add_attribute(Attribute::Dim),
            Cell::new(window.interval.start.format("%H:%M")).add_attribute(Attribute::Bold),
            Cell::new(window.interval.end.format("%H:%M")).add_attribute(Attribute::Bold),
            Cell::new(FormattedPrice(window.average_price, unit))
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn price_color(price: KilowattHourPrice, mean_price: KilowattHourPrice) -> Color {
    if price <= KilowattHourPrice::ZERO {
        Color::Cyan
    } else if price < mean_price {
        Color::Green
    } else {
        Color::Red
    }
}
