use chrono::{DateTime, Local, Timelike};

use crate::{
    api::rate_source::RateSource,
    cli::HuntArgs,
    core::{analysis::Analysis, point::PricePoint},
    prelude::*,
    store::RateStore,
    tables::{build_card_table, card_title},
};

#[instrument(skip_all)]
pub async fn hunt(args: &HuntArgs) -> Result {
    let settings = args.analysis.settings()?;
    let now = Local::now();
    let now = now.with_nanosecond(0).unwrap_or(now);

    let (points, store) = fetch_or_fall_back(
        &args.octopus.new_client()?,
        RateStore::read_from(&args.store.path),
        now,
        args.store.prune_before(now),
    )
    .await?;
    if let Err(error) = store.write_to(&args.store.path) {
        warn!("failed to write the store: {error:#}");
    }

    let summary = Analysis::builder().points(&points).now(now).settings(settings).build().run();
    if summary.top.is_empty() {
        warn!(
            ?summary.period_count,
            duration = %settings.duration,
            "not enough upcoming rates for the duration",
        );
    }
    for card in args.display.cards() {
        println!("{}", card_title(card, settings.duration));
        match build_card_table(summary.card(card), now, args.display.price_unit) {
            Some(table) => println!("{table}"),
            None => println!("No available data"),
        }
    }
    Ok(())
}

/// Fetch the rates and upsert them into the store, or fall back to the stored rates.
///
/// An unreadable store is replaced by an empty one, unless the fetch fails as well.
/// The returned store is pruned.
#[instrument(skip_all)]
pub async fn fetch_or_fall_back(
    source: &impl RateSource,
    store: Result<RateStore>,
    now: DateTime<Local>,
    prune_before: DateTime<Local>,
) -> Result<(Vec<PricePoint>, RateStore)> {
    let (points, mut store) = match source.get_recent_and_upcoming_rates(now).await {
        Ok(points) => {
            info!(n_points = points.len(), "fetched the rates");
            let mut store = store.unwrap_or_else(|error| {
                warn!("starting with an empty store: {error:#}");
                RateStore::default()
            });
            store.upsert(&points);
            (points, store)
        }
        Err(error) => {
            warn!("failed to fetch the rates, falling back to the store: {error:#}");
            let store = store.context("no rates to fall back to")?;
            if store.is_empty() {
                warn!("the store is empty");
            }
            (store.points(), store)
        }
    };
    store.prune(prune_before);
    Ok((points, store))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        core::point::fixtures::{at, half_hourly, half_hourly_from, origin},
        ops::Interval,
    };

    struct Replay(Vec<PricePoint>);

    #[async_trait]
    impl RateSource for Replay {
        async fn get_rates(&self, _interval: Interval) -> Result<Vec<PricePoint>> {
            Ok(self.0.clone())
        }
    }

    struct Unavailable;

    #[async_trait]
    impl RateSource for Unavailable {
        async fn get_rates(&self, _interval: Interval) -> Result<Vec<PricePoint>> {
            bail!("service unavailable")
        }
    }

    fn stored(offset: i64, prices: &[f64]) -> RateStore {
        let mut store = RateStore::default();
        store.upsert(&half_hourly_from(offset, prices));
        store
    }

    #[tokio::test]
    async fn test_fetched_rates_are_upserted() -> Result {
        let fetched = half_hourly(&[1.0, 2.0]);
        let (points, store) = fetch_or_fall_back(
            &Replay(fetched.clone()),
            Ok(stored(-2, &[7.0, 8.0])),
            origin(),
            at(-10),
        )
        .await?;
        assert_eq!(points, fetched);
        assert_eq!(store.len(), 4);
        assert_eq!(store.points()[2..], fetched);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetched_rates_replace_stored_ones() -> Result {
        let fetched = half_hourly(&[1.0, 2.0]);
        let (_, store) = fetch_or_fall_back(
            &Replay(fetched.clone()),
            Ok(stored(0, &[7.0, 8.0])),
            origin(),
            at(-10),
        )
        .await?;
        assert_eq!(store.points(), fetched);
        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_store() -> Result {
        let store = stored(0, &[3.0, 4.0, 5.0]);
        let expected = store.points();
        let (points, store) = fetch_or_fall_back(&Unavailable, Ok(store), origin(), at(-10)).await?;
        assert_eq!(points, expected);
        assert_eq!(store.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_empty_store() -> Result {
        let (points, store) =
            fetch_or_fall_back(&Unavailable, Ok(RateStore::default()), origin(), at(-10)).await?;
        assert!(points.is_empty());
        assert!(store.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_prunes_outdated_rates() -> Result {
        let (_, store) = fetch_or_fall_back(
            &Replay(half_hourly(&[1.0])),
            Ok(stored(-4, &[7.0, 8.0])),
            origin(),
            at(-2),
        )
        .await?;
        assert_eq!(store.points()[..1], half_hourly_from(-3, &[8.0]));
        assert_eq!(store.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_store_is_replaced_on_fetch() -> Result {
        let fetched = half_hourly(&[1.0, 2.0]);
        let (points, store) = fetch_or_fall_back(
            &Replay(fetched.clone()),
            Err(Error::msg("invalid type")),
            origin(),
            at(-10),
        )
        .await?;
        assert_eq!(points, fetched);
        assert_eq!(store.points(), fetched);
        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_store_without_fetch() {
        let store = Err(Error::msg("invalid type"));
        let result = fetch_or_fall_back(&Unavailable, store, origin(), at(-10)).await;
        assert!(result.is_err());
    }
}
