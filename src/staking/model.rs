use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{iso_timestamp, FallbackPayload};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingSnapshot {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub market_cap: u64,
    pub staking_apy: f64,
    pub last_updated: String,
}

pub type StakingFallback = FallbackPayload<StakingSnapshot>;

pub fn fallback_staking_data(now: DateTime<Utc>) -> StakingFallback {
    let last_updated = iso_timestamp(now);
    let snapshot = |symbol: &str, name: &str, current_price: f64, market_cap: u64, staking_apy: f64| {
        StakingSnapshot {
            symbol: symbol.into(),
            name: name.into(),
            current_price,
            market_cap,
            staking_apy,
            last_updated: last_updated.clone(),
        }
    };

    let data = vec![
        snapshot("ETH", "Ethereum", 2650.0, 320_000_000_000, 5.2),
        snapshot("ADA", "Cardano", 0.485, 17_000_000_000, 4.8),
        snapshot("SOL", "Solana", 98.5, 45_000_000_000, 7.1),
        snapshot("DOT", "Polkadot", 7.25, 9_000_000_000, 12.5),
    ];

    FallbackPayload::new(data, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_four_stakeable_assets() {
        let payload = fallback_staking_data(Utc::now());

        assert_eq!(payload.count, 4);
        let symbols: Vec<&str> = payload.data.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, ["ETH", "ADA", "SOL", "DOT"]);
        assert_eq!(payload.data[3].staking_apy, 12.5);
    }
}
