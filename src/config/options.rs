// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Which BTC/ETH quote survives when a page shows more than one of a kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairPolicy {
    /// Later matches overwrite earlier ones (historical output).
    #[default]
    LastWins,
    FirstWins,
}

/// Where the Binance.US market cap (column 8) is read from.
///
/// The live table renders a placeholder in that cell's text. `Text` keeps the
/// placeholder as-is; `TitleAttr` falls back to the cell's `title` attribute
/// when the text is a placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarketCapFallback {
    #[default]
    Text,
    TitleAttr,
}

/// Everything a run needs to know. `Default` is the production setup;
/// tests swap in fixture URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotConfig {
    pub currencies: Vec<String>,
    pub cmc_base_url: String,
    pub markets_url: String,
    pub routes: Vec<String>,
    pub out_path: PathBuf,
    pub pair_policy: PairPolicy,
    pub market_cap: MarketCapFallback,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            currencies: CMC_CURRENCIES.iter().map(|c| s!(*c)).collect(),
            cmc_base_url: s!(CMC_BASE_URL),
            markets_url: s!(BINANCE_US_MARKETS_URL),
            routes: BINANCE_US_ROUTES.iter().map(|r| s!(*r)).collect(),
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            pair_policy: PairPolicy::default(),
            market_cap: MarketCapFallback::default(),
        }
    }
}

impl SnapshotConfig {
    pub fn currency_url(&self, currency: &str) -> String {
        join!(self.cmc_base_url.as_str(), currency, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_url_appends_slash() {
        let cfg = SnapshotConfig::default();
        assert_eq!(
            cfg.currency_url("cardano"),
            "https://coinmarketcap.com/currencies/cardano/"
        );
    }

    #[test]
    fn defaults_track_ten_currencies_and_four_routes() {
        let cfg = SnapshotConfig::default();
        assert_eq!(cfg.currencies.len(), 10);
        assert_eq!(cfg.currencies[0], "cardano");
        assert_eq!(cfg.routes.len(), 4);
        assert_eq!(cfg.out_path, PathBuf::from("currencyDetails.json"));
    }
}
