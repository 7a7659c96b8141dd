//! Local cache of the fetched rates.

use std::{collections::BTreeMap, fs, path::Path};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{
    core::point::PricePoint,
    ops::Interval,
    prelude::*,
    quantity::price::KilowattHourPrice,
};

/// Price points keyed by their start time.
#[must_use]
#[derive(Default, Serialize, Deserialize)]
pub struct RateStore {
    #[serde(default)]
    rates: BTreeMap<DateTime<Local>, StoredRate>,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
struct StoredRate {
    valid_to: DateTime<Local>,
    value_inc_vat: KilowattHourPrice,
    value_exc_vat: KilowattHourPrice,
}

impl RateStore {
    /// Read the store, an absent file reads as empty.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            info!("no store yet");
            return Ok(Self::default());
        }
        let this: Self = toml::from_slice(&fs::read(path)?).context("failed to parse the store")?;
        info!(n_rates = this.len(), "read");
        Ok(this)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        fs::write(path, toml::to_string(self)?).context("failed to write the store")?;
        info!(n_rates = self.len(), "written");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Insert or replace the points by their start time.
    pub fn upsert(&mut self, points: &[PricePoint]) {
        for point in points {
            self.rates.insert(
                point.interval.start,
                StoredRate {
                    valid_to: point.interval.end,
                    value_inc_vat: point.price_including_tax,
                    value_exc_vat: point.price_excluding_tax,
                },
            );
        }
    }

    /// Drop the rates that ended before the cutoff, returning the number of dropped rates.
    pub fn prune(&mut self, before: DateTime<Local>) -> usize {
        let n_rates = self.len();
        self.rates.retain(|_, rate| rate.valid_to >= before);
        let n_pruned = n_rates - self.len();
        info!(n_pruned, ?before, "pruned");
        n_pruned
    }

    /// All stored points, sorted by start time.
    #[must_use]
    pub fn points(&self) -> Vec<PricePoint> {
        self.rates
            .iter()
            .map(|(valid_from, rate)| {
                PricePoint::builder()
                    .interval(Interval::new(*valid_from, rate.valid_to))
                    .price_including_tax(rate.value_inc_vat)
                    .price_excluding_tax(rate.value_exc_vat)
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use super::*;
    use crate::core::point::fixtures::{at, half_hourly, half_hourly_from};

    #[test]
    fn test_upsert_is_idempotent() {
        let mut store = RateStore::default();
        let points = half_hourly(&[1.0, 2.0, 3.0]);
        store.upsert(&points);
        store.upsert(&points);
        assert_eq!(store.len(), 3);
        assert_eq!(store.points(), points);
    }

    #[test]
    fn test_upsert_replaces() {
        let mut store = RateStore::default();
        store.upsert(&half_hourly(&[1.0, 2.0]));
        let updated = half_hourly_from(1, &[5.0, 6.0]);
        store.upsert(&updated);
        let points = store.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1..], updated);
    }

    #[test]
    fn test_prune() {
        let mut store = RateStore::default();
        store.upsert(&half_hourly(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(store.prune(at(2)), 1);
        assert_eq!(store.points(), half_hourly_from(1, &[2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_round_trip_file() -> Result {
        let path = temp_dir().join(format!("agilis-store-{}.toml", std::process::id()));
        let mut store = RateStore::default();
        store.upsert(&half_hourly(&[12.5, -1.25]));
        store.write_to(&path)?;
        let points = RateStore::read_from(&path)?.points();
        fs::remove_file(&path)?;
        assert_eq!(points, half_hourly(&[12.5, -1.25]));
        Ok(())
    }

    #[test]
    fn test_read_corrupt_file() -> Result {
        let path = temp_dir().join(format!("agilis-store-corrupt-{}.toml", std::process::id()));
        fs::write(&path, "rates = 42")?;
        let result = RateStore::read_from(&path);
        fs::remove_file(&path)?;
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_read_missing_file() -> Result {
        let store = RateStore::read_from(&temp_dir().join("agilis-store-missing.toml"))?;
        assert!(store.is_empty());
        Ok(())
    }
}
