//! Live metal rates shown in the header ticker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ratannam_core::Price;

/// Per-gram metal prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldRates {
    /// 24 karat gold.
    pub gold_24k: Price,
    /// 22 karat gold.
    pub gold_22k: Price,
    pub silver: Price,
    pub last_updated: DateTime<Utc>,
}

impl GoldRates {
    /// The rates shown before staff publish any.
    #[must_use]
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            gold_24k: Price::from_units(72_000),
            gold_22k: Price::from_units(66_000),
            silver: Price::from_units(800),
            last_updated: now,
        }
    }
}

/// New rates as entered by staff. The publish time is stamped on receipt.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewRates {
    pub gold_24k: Price,
    pub gold_22k: Price,
    pub silver: Price,
}

impl NewRates {
    #[must_use]
    pub const fn published_at(self, now: DateTime<Utc>) -> GoldRates {
        GoldRates {
            gold_24k: self.gold_24k,
            gold_22k: self.gold_22k,
            silver: self.silver,
            last_updated: now,
        }
    }
}
