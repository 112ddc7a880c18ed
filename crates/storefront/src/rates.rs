//! Metal rates published by staff.

use chrono::Utc;

use crate::models::GoldRates;

/// Holds the latest published rates.
#[derive(Debug, Clone)]
pub struct RatesStore {
    published: Option<GoldRates>,
    initial: GoldRates,
}

impl Default for RatesStore {
    fn default() -> Self {
        Self {
            published: None,
            initial: GoldRates::initial(Utc::now()),
        }
    }
}

impl RatesStore {
    /// The published rates, or the initial rates if none were published.
    #[must_use]
    pub fn get(&self) -> GoldRates {
        self.published.clone().unwrap_or_else(|| self.initial.clone())
    }

    /// Publish new rates, replacing the previous ones wholesale.
    pub fn update(&mut self, rates: GoldRates) -> GoldRates {
        tracing::info!(
            gold_24k = %rates.gold_24k,
            gold_22k = %rates.gold_22k,
            silver = %rates.silver,
            "Rates published"
        );
        self.published = Some(rates.clone());
        rates
    }
}

#[cfg(test)]
mod tests {
    use ratannam_core::Price;

    use super::*;

    #[test]
    fn test_initial_rates_until_published() {
        let mut store = RatesStore::default();
        let initial = store.get();
        assert_eq!(initial.gold_24k, Price::from_units(72_000));
        assert_eq!(store.get(), initial);

        let published = GoldRates {
            gold_24k: Price::from_units(73_500),
            ..initial
        };
        store.update(published.clone());
        assert_eq!(store.get(), published);
    }
}
