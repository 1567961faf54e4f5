//! Chain identifiers and cache key composition.

use std::fmt;

use serde::Serialize;

use crate::error::{PriceError, Result};

/// Longest store identifier accepted into a cache key.
pub const MAX_STORE_ID_LENGTH: usize = 128;

// == Chain ==
/// A supported supermarket chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
    Shufersal,
    RamiLevy,
    Yohananof,
}

impl Chain {
    pub const ALL: [Chain; 3] = [Chain::Shufersal, Chain::RamiLevy, Chain::Yohananof];

    /// Resolves a user-supplied chain name, including Hebrew names and
    /// short forms, to a canonical chain.
    ///
    /// Matching ignores surrounding whitespace and letter case.
    pub fn resolve(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "shufersal" | "שופרסל" => Some(Chain::Shufersal),
            "rami" | "rami-levy" | "רמי" | "רמי-לוי" | "רמי לוי" => Some(Chain::RamiLevy),
            "yohananof" | "יוחננוף" => Some(Chain::Yohananof),
            _ => None,
        }
    }

    /// Like [`Chain::resolve`] but reports unknown names as `UnsupportedChain`.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::resolve(raw).ok_or_else(|| PriceError::UnsupportedChain {
            chain: raw.trim().to_lowercase(),
            supported: Self::supported(),
        })
    }

    /// Canonical identifiers of every supported chain.
    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(|chain| chain.id()).collect()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Chain::Shufersal => "shufersal",
            Chain::RamiLevy => "rami-levy",
            Chain::Yohananof => "yohananof",
        }
    }

    /// Display name in Hebrew.
    pub fn local_name(&self) -> &'static str {
        match self {
            Chain::Shufersal => "שופרסל",
            Chain::RamiLevy => "רמי לוי",
            Chain::Yohananof => "יוחננוף",
        }
    }

    /// Price factor applied to barcode base prices.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Chain::Shufersal => 1.0,
            Chain::RamiLevy => 0.9,
            Chain::Yohananof => 1.1,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// == Price Key ==
/// Cache key for one store's price catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriceKey {
    pub chain: Chain,
    pub store_id: String,
}

impl PriceKey {
    /// Builds a key from raw request input.
    ///
    /// The chain is checked first so an unknown chain is reported even when
    /// the store id is also bad.
    pub fn new(chain: &str, store_id: &str) -> Result<Self> {
        let chain = Chain::parse(chain)?;

        if store_id.is_empty() {
            return Err(PriceError::InvalidStoreId("Store id cannot be empty".to_string()));
        }
        if store_id.len() > MAX_STORE_ID_LENGTH {
            return Err(PriceError::InvalidStoreId(format!(
                "Store id exceeds maximum length of {} bytes",
                MAX_STORE_ID_LENGTH
            )));
        }

        Ok(Self {
            chain,
            store_id: store_id.to_string(),
        })
    }

    /// Storage key, e.g. `prices:shufersal:123`.
    pub fn as_cache_key(&self) -> String {
        format!("prices:{}:{}", self.chain.id(), self.store_id)
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chain, self.store_id)
    }
}
