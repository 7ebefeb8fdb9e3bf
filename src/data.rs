// src/data.rs
//
// Records produced by one run. Every value is the page's display text,
// untouched; a field nobody matched stays "" and still serializes.
// Key names and order are the output schema.

use serde::{Deserialize, Serialize};

/// One CoinMarketCap currency page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrencyRecord {
    pub usd_pair: String,
    pub symbol: String,
    #[serde(rename = "Low24hr")]
    pub low_24hr: String,
    #[serde(rename = "High24hr")]
    pub high_24hr: String,
    pub market_cap: String,
    pub fully_diluted_market_cap: String,
    pub volume: String,
    pub circulating_supply: String,
    pub max_supply: String,
    pub btc_pair: String,
    pub eth_pair: String,
    pub percent_change: String,
}

/// One tracked row of the Binance.US markets table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableRowRecord {
    pub pair: String,
    pub coin: String,
    pub usd_pair: String,
    #[serde(rename = "Change24h")]
    pub change_24h: String,
    #[serde(rename = "High24h")]
    pub high_24h: String,
    #[serde(rename = "Low24h")]
    pub low_24h: String,
    pub market_cap: String,
    #[serde(rename = "Volume24h")]
    pub volume_24h: String,
}

/// Everything one run produced.
///
/// `binance_us` always holds exactly one inner list per run. The extra level
/// carries no grouping; it is kept so existing consumers of the file keep
/// parsing it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "CoinMarketCap")]
    pub coin_market_cap: Vec<CurrencyRecord>,
    #[serde(rename = "BinanceUS")]
    pub binance_us: Vec<Vec<TableRowRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_serialize_as_empty_strings() {
        let v = serde_json::to_value(CurrencyRecord::default()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 12);
        for key in [
            "UsdPair", "Symbol", "Low24hr", "High24hr", "MarketCap",
            "FullyDilutedMarketCap", "Volume", "CirculatingSupply",
            "MaxSupply", "BtcPair", "EthPair", "PercentChange",
        ] {
            assert_eq!(obj.get(key), Some(&serde_json::Value::String(s!())), "{key}");
        }
    }

    #[test]
    fn table_row_keys_follow_schema_order() {
        let json = serde_json::to_string(&TableRowRecord::default()).unwrap();
        assert_eq!(
            json,
            r#"{"Pair":"","Coin":"","UsdPair":"","Change24h":"","High24h":"","Low24h":"","MarketCap":"","Volume24h":""}"#
        );
    }

    #[test]
    fn snapshot_round_trips_without_loss() {
        let snap = Snapshot {
            coin_market_cap: vec![CurrencyRecord {
                usd_pair: s!("$1.23456789012345678901"),
                symbol: s!("ADA"),
                low_24hr: s!("$1.20"),
                high_24hr: s!("$1.31"),
                btc_pair: s!("0.00001914 BTC"),
                percent_change: s!("2.91%"),
                ..Default::default()
            }],
            binance_us: vec![vec![TableRowRecord {
                pair: s!("ADA/USD"),
                coin: s!("Cardano"),
                market_cap: s!("-"),
                ..Default::default()
            }]],
        };
        let text = serde_json::to_string_pretty(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snap);
    }
}
