// src/config/consts.rs

// CoinMarketCap: one page per currency, URL = base + id + "/"
pub const CMC_BASE_URL: &str = "https://coinmarketcap.com/currencies/";

// Ids must match the CoinMarketCap URL slug
pub const CMC_CURRENCIES: &[&str] = &[
    "cardano",
    "bitcoin",
    "ethereum",
    "polkadot",
    "binance-coin",
    "litecoin",
    "bitcoin-cash",
    "dogecoin",
    "monero",
    "dash",
];

// Binance.US: one markets page, rows keyed by trade route
pub const BINANCE_US_MARKETS_URL: &str = "https://www.binance.us/en/markets/";

pub const BINANCE_US_ROUTES: &[&str] = &[
    "/en/trade/BTC_USD",
    "/en/trade/ETH_USD",
    "/en/trade/ADA_USD",
    "/en/trade/BNB_USD",
];

// Export
pub const DEFAULT_OUT_FILE: &str = "currencyDetails.json";
