use std::fmt::{Debug, Display, Formatter};

use crate::quantity::price::KilowattHourPrice;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum PriceUnit {
    #[default]
    Pence,
    Pounds,
}

pub struct FormattedPrice(pub KilowattHourPrice, pub PriceUnit);

impl Debug for FormattedPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.1 {
            PriceUnit::Pence => write!(f, "{:.2}p", self.0.0),
            PriceUnit::Pounds => write!(f, "£{:.4}", self.0.to_pounds()),
        }
    }
}
