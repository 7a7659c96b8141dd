//! [Octopus Energy](https://developer.octopus.energy/rest/) unit rates client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    api::rate_source::RateSource,
    core::point::PricePoint,
    ops::Interval,
    prelude::*,
    quantity::price::KilowattHourPrice,
};

pub const DEFAULT_PRODUCT_CODE: &str = "AGILE-FLEX-22-11-25";
pub const DEFAULT_TARIFF_CODE: &str = "E-1R-AGILE-FLEX-22-11-25-H";

pub struct Api {
    client: Client,
    rates_url: Url,

    /// Sent as the basic authentication user name.
    api_key: Option<String>,
}

impl Api {
    pub fn new(product_code: &str, tariff_code: &str, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        let rates_url = Url::parse(&format!(
            "https://api.octopus.energy/v1/products/{product_code}/electricity-tariffs/{tariff_code}/standard-unit-rates/"
        ))
        .context("invalid product or tariff code")?;
        Ok(Self { client, rates_url, api_key })
    }
}

#[async_trait]
impl RateSource for Api {
    /// Fetch all pages of the unit rates valid within the interval.
    #[instrument(skip_all, fields(interval = ?interval))]
    async fn get_rates(&self, interval: Interval) -> Result<Vec<PricePoint>> {
        info!("fetching…");
        let mut next_url = Some(Url::parse_with_params(
            self.rates_url.as_str(),
            &[("period_from", interval.start.to_rfc3339()), ("period_to", interval.end.to_rfc3339())],
        )?);
        let mut points = Vec::new();
        while let Some(url) = next_url {
            let mut request = self.client.get(url);
            if let Some(api_key) = &self.api_key {
                request = request.basic_auth(api_key, None::<&str>);
            }
            let page = request
                .send()
                .await
                .context("failed to call")?
                .error_for_status()
                .context("request failed")?
                .json::<Page>()
                .await
                .context("failed to deserialize the response")?;
            debug!(n_results = page.results.len(), has_next = page.next.is_some(), "fetched a page");
            points.extend(page.results.into_iter().filter_map(UnitRate::try_into_price_point));
            next_url = page.next.as_deref().map(Url::parse).transpose()?;
        }
        points.sort_by_key(|point| point.interval.start);
        info!(n_points = points.len(), "fetched");
        Ok(points)
    }
}

#[derive(Deserialize)]
struct Page {
    next: Option<String>,
    results: Vec<UnitRate>,
}

#[derive(Deserialize)]
struct UnitRate {
    valid_from: DateTime<Local>,

    /// Open-ended rates have none.
    valid_to: Option<DateTime<Local>>,

    value_exc_vat: f64,
    value_inc_vat: f64,
}

impl UnitRate {
    fn try_into_price_point(self) -> Option<PricePoint> {
        let Some(valid_to) = self.valid_to.filter(|valid_to| *valid_to > self.valid_from) else {
            warn!(valid_from = ?self.valid_from, valid_to = ?self.valid_to, "skipped");
            return None;
        };
        Some(
            PricePoint::builder()
                .interval(Interval::new(self.valid_from, valid_to))
                .price_including_tax(KilowattHourPrice(self.value_inc_vat))
                .price_excluding_tax(KilowattHourPrice(self.value_exc_vat))
                .build(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeDelta, Utc};

    use super::*;

    #[test]
    fn test_deserialize_page() -> Result {
        let page: Page = serde_json::from_str(
            r#"{
                "count": 3,
                "next": "https://api.octopus.energy/v1/products/AGILE-FLEX-22-11-25/electricity-tariffs/E-1R-AGILE-FLEX-22-11-25-H/standard-unit-rates/?page=2",
                "previous": null,
                "results": [
                    {
                        "value_exc_vat": 19.25,
                        "value_inc_vat": 20.2125,
                        "valid_from": "2025-01-15T12:30:00Z",
                        "valid_to": "2025-01-15T13:00:00Z",
                        "payment_method": null
                    },
                    {
                        "value_exc_vat": 18.0,
                        "value_inc_vat": 18.9,
                        "valid_from": "2025-01-15T12:00:00Z",
                        "valid_to": "2025-01-15T12:30:00Z",
                        "payment_method": null
                    },
                    {
                        "value_exc_vat": 24.0,
                        "value_inc_vat": 25.2,
                        "valid_from": "2025-01-15T00:00:00Z",
                        "valid_to": null,
                        "payment_method": null
                    }
                ]
            }"#,
        )?;
        assert!(page.next.is_some());

        let points: Vec<PricePoint> =
            page.results.into_iter().filter_map(UnitRate::try_into_price_point).collect();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].interval.start, "2025-01-15T12:30:00Z".parse::<DateTime<Utc>>()?);
        assert_eq!(points[0].interval.duration(), TimeDelta::minutes(30));
        assert_abs_diff_eq!(points[0].price_including_tax.0, 20.2125);
        assert_abs_diff_eq!(points[0].price_excluding_tax.0, 19.25);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_get_recent_and_upcoming_rates_ok() -> Result {
        let now = Local::now();
        let points = Api::new(DEFAULT_PRODUCT_CODE, DEFAULT_TARIFF_CODE, None)?
            .get_recent_and_upcoming_rates(now)
            .await?;
        assert!(!points.is_empty());
        assert!(points.iter().is_sorted_by_key(|point| point.interval.start));
        assert!(points.iter().all(|point| point.periods_per_hour() == Some(2)));
        Ok(())
    }
}
