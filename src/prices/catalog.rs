//! Price catalog payloads and the barcode product catalogue.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chain::Chain;
use super::data;

// == Price Catalog ==
/// All known prices for one store of one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCatalog {
    /// Canonical chain id
    pub chain: String,
    /// Display name of the chain
    pub chain_name: String,
    pub store_id: String,
    /// When the fetcher produced this catalog
    pub updated: DateTime<Utc>,
    /// Item name to price
    pub prices: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PriceCatalog {
    pub fn new(chain: Chain, store_id: impl Into<String>, prices: BTreeMap<String, f64>) -> Self {
        Self {
            chain: chain.id().to_string(),
            chain_name: chain.local_name().to_string(),
            store_id: store_id.into(),
            updated: Utc::now(),
            prices,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// A catalog with no prices is treated the same as a failed fetch.
    pub fn is_usable(&self) -> bool {
        !self.prices.is_empty()
    }
}

// == Mock Tables ==
/// Static price table and note for a chain.
pub fn mock_prices(chain: Chain) -> (&'static [(&'static str, f64)], &'static str) {
    match chain {
        Chain::Shufersal => (data::SHUFERSAL_PRICES, data::SHUFERSAL_NOTE),
        Chain::RamiLevy => (data::RAMI_LEVY_PRICES, data::RAMI_LEVY_NOTE),
        Chain::Yohananof => (data::YOHANANOF_PRICES, data::YOHANANOF_NOTE),
    }
}

// == Products ==
/// One row of the barcode catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductRecord {
    pub barcode: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub icon: &'static str,
    pub unit: &'static str,
    pub base_price: f64,
}

impl ProductRecord {
    /// Price at `chain`, rounded to one decimal. Chains that do not resolve
    /// are priced at the base price.
    pub fn price_for(&self, chain: Option<Chain>) -> f64 {
        let multiplier = chain.map(|c| c.price_multiplier()).unwrap_or(1.0);
        (self.base_price * multiplier * 10.0).round() / 10.0
    }
}

pub fn find_product(barcode: &str) -> Option<&'static ProductRecord> {
    data::PRODUCTS.iter().find(|product| product.barcode == barcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_has_prices() {
        for chain in Chain::ALL {
            let (prices, note) = mock_prices(chain);
            assert!(!prices.is_empty(), "{chain} has no prices");
            assert!(note.contains("MOCK"));
        }
    }

    #[test]
    fn test_catalog_usable() {
        let empty = PriceCatalog::new(Chain::Shufersal, "1", BTreeMap::new());
        assert!(!empty.is_usable());

        let mut prices = BTreeMap::new();
        prices.insert("חלב".to_string(), 5.9);
        assert!(PriceCatalog::new(Chain::Shufersal, "1", prices).is_usable());
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let catalog = PriceCatalog::new(Chain::RamiLevy, "42", BTreeMap::new()).with_note("n");
        let json = serde_json::to_value(&catalog).unwrap();

        assert_eq!(json["chain"], "rami-levy");
        assert_eq!(json["chainName"], "רמי לוי");
        assert_eq!(json["storeId"], "42");
        assert!(json["updated"].is_string());
        assert_eq!(json["note"], "n");
    }

    #[test]
    fn test_product_price_multipliers() {
        let cola = find_product("7290003456789").unwrap();

        assert_eq!(cola.price_for(Some(Chain::Shufersal)), 7.9);
        assert_eq!(cola.price_for(Some(Chain::RamiLevy)), 7.1);
        assert_eq!(cola.price_for(Some(Chain::Yohananof)), 8.7);
        assert_eq!(cola.price_for(None), 7.9);
    }

    #[test]
    fn test_unknown_barcode() {
        assert!(find_product("0000000000000").is_none());
    }
}
