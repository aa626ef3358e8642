use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{iso_timestamp, FallbackPayload};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub market_cap: u64,
    pub market_cap_rank: u32,
    pub total_volume: u64,
    pub price_change_1h: f64,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub last_updated: String,
}

pub type MarketFallback = FallbackPayload<AssetSnapshot>;

/// Bitcoin and Ethereum snapshots stamped with `now`.
pub fn fallback_market_prices(now: DateTime<Utc>) -> MarketFallback {
    let last_updated = iso_timestamp(now);

    let data = vec![
        AssetSnapshot {
            id: "bitcoin".into(),
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            current_price: 43250.0,
            market_cap: 850_000_000_000,
            market_cap_rank: 1,
            total_volume: 25_000_000_000,
            price_change_1h: 0.5,
            price_change_24h: 2.3,
            price_change_7d: 8.7,
            last_updated: last_updated.clone(),
        },
        AssetSnapshot {
            id: "ethereum".into(),
            symbol: "ETH".into(),
            name: "Ethereum".into(),
            current_price: 2650.0,
            market_cap: 320_000_000_000,
            market_cap_rank: 2,
            total_volume: 15_000_000_000,
            price_change_1h: 0.8,
            price_change_24h: 1.9,
            price_change_7d: 12.4,
            last_updated,
        },
    ];

    FallbackPayload::new(data, now)
}
