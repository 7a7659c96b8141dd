use average::Mean;

quantity!(
    /// Unit price in pence per kilowatt-hour.
    KilowattHourPrice, via: f64, suffix: "p/kWh", precision: 2
);

impl KilowattHourPrice {
    /// Arithmetic mean, or [`None`] for an empty input.
    pub fn mean(prices: impl IntoIterator<Item = Self>) -> Option<Self> {
        let estimate: Mean = prices.into_iter().map(|price| price.0).collect();
        if estimate.is_empty() { None } else { Some(Self(estimate.mean())) }
    }

    /// Convert to pounds for display.
    #[must_use]
    pub fn to_pounds(self) -> f64 {
        self.0 / 100.0
    }
}
