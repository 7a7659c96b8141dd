mod burrow;
mod hunt;

use std::path::PathBuf;

use chrono::{DateTime, Local, TimeDelta};
use clap::{Parser, Subcommand};
use itertools::Itertools;

pub use self::{burrow::burrow, hunt::hunt};
use crate::{
    api::octopus,
    core::{card::Card, duration::WindowDuration, settings::Settings},
    fmt::PriceUnit,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the rates and look for the cheapest windows.
    #[clap(name = "hunt")]
    Hunt(Box<HuntArgs>),

    /// Development tools.
    #[clap(name = "burrow")]
    Burrow(Box<BurrowArgs>),
}

#[derive(Parser)]
pub struct HuntArgs {
    #[clap(flatten)]
    pub octopus: OctopusArgs,

    #[clap(flatten)]
    pub store: StoreArgs,

    #[clap(flatten)]
    pub analysis: AnalysisArgs,

    #[clap(flatten)]
    pub display: DisplayArgs,
}

#[derive(Parser)]
pub struct OctopusArgs {
    #[clap(
        long = "octopus-product",
        env = "OCTOPUS_PRODUCT",
        default_value = octopus::DEFAULT_PRODUCT_CODE,
    )]
    pub product_code: String,

    #[clap(
        long = "octopus-tariff",
        env = "OCTOPUS_TARIFF",
        default_value = octopus::DEFAULT_TARIFF_CODE,
    )]
    pub tariff_code: String,

    /// Octopus Energy API key, the unit rates are also available without one.
    #[clap(long = "octopus-api-key", env = "OCTOPUS_API_KEY")]
    pub api_key: Option<String>,
}

impl OctopusArgs {
    pub fn new_client(&self) -> Result<octopus::Api> {
        octopus::Api::new(&self.product_code, &self.tariff_code, self.api_key.clone())
    }
}

#[derive(Parser)]
pub struct StoreArgs {
    #[clap(long = "store-path", env = "STORE_PATH", default_value = "rates.toml")]
    pub path: PathBuf,

    /// Rates that ended longer ago get pruned.
    #[clap(long = "retention-days", env = "RETENTION_DAYS", default_value = "3")]
    pub retention_days: u32,
}

impl StoreArgs {
    #[must_use]
    pub fn prune_before(&self, now: DateTime<Local>) -> DateTime<Local> {
        now - TimeDelta::days(i64::from(self.retention_days))
    }
}

#[derive(Parser)]
pub struct AnalysisArgs {
    /// Length of the cheapest window in hours: from 0.5 to 24 in half-hour steps.
    #[clap(long = "duration-hours", env = "DURATION_HOURS", default_value = "3")]
    pub duration: WindowDuration,

    /// Rate cadence, derived from the rates when omitted.
    #[clap(long, env = "PERIODS_PER_HOUR")]
    pub periods_per_hour: Option<u32>,

    /// Number of the cheapest windows merged into zones.
    #[clap(long, env = "TOP_ZONE_COUNT", default_value = "10")]
    pub top_zone_count: usize,
}

impl AnalysisArgs {
    pub fn settings(&self) -> Result<Settings> {
        ensure!(self.top_zone_count != 0, "top zone count must be positive");
        ensure!(self.periods_per_hour != Some(0), "periods per hour must be positive");
        Ok(Settings::builder()
            .duration(self.duration)
            .maybe_periods_per_hour(self.periods_per_hour)
            .top_zone_count(self.top_zone_count)
            .build())
    }
}

#[derive(Parser)]
pub struct DisplayArgs {
    /// Cards to show, in order.
    #[clap(
        long,
        env = "CARDS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "rates,zones,cheapest-per-zone,current,upcoming,lowest,highest,lowest-average",
    )]
    pub cards: Vec<Card>,

    #[clap(long, env = "PRICE_UNIT", default_value = "pence")]
    pub price_unit: PriceUnit,
}

impl DisplayArgs {
    /// Requested cards without repetitions.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().unique().collect()
    }
}

#[derive(Parser)]
pub struct BurrowArgs {
    #[command(subcommand)]
    pub command: BurrowCommand,
}

#[derive(Subcommand)]
pub enum BurrowCommand {
    /// Print the stored rates.
    Rates(BurrowRatesArgs),

    /// Drop the outdated rates from the store.
    Prune(StoreArgs),
}

#[derive(Parser)]
pub struct BurrowRatesArgs {
    #[clap(flatten)]
    pub store: StoreArgs,

    #[clap(long, env = "PRICE_UNIT", default_value = "pence")]
    pub price_unit: PriceUnit,
}
