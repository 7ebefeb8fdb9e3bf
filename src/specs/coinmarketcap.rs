// src/specs/coinmarketcap.rs
//! Scraping *spec* for a CoinMarketCap currency page (`/currencies/<id>/`).
//!
//! The page is a React build with generated class names. Most values sit in a
//! uniquely classed element; two groups do not:
//! - `highLowValue` holds both 24h extremes, low first.
//! - `statsValue` is shared by market cap, fully diluted market cap, volume and
//!   circulating supply, in that order.
//!
//! Both groups are read by position. Quote prices (`0.00001914 BTC`) share one
//! class too and are told apart by their text.

use scraper::{Html, Selector};

use super::Extracted;
use crate::config::PairPolicy;
use crate::core::html::{Ordered, last_text, selector, texts};
use crate::data::CurrencyRecord;
use crate::error::ScrapeError;

// <div class="priceValue___11gHJ">$1.23</div>
pub const PRICE: &str = "div.priceValue___11gHJ";
// <small class="nameSymbol___1arQV">ADA</small>
pub const SYMBOL: &str = "small.nameSymbol___1arQV";
// <span class="highLowValue___GfyK7">$0.8330</span>
pub const HIGH_LOW: &str = "span.highLowValue___GfyK7";
// <div class="statsValue___2iaoZ">$27,795,775,311</div>
pub const STATS: &str = "div.statsValue___2iaoZ";
// <span class="qe1dn9-0 RYkpI"><span class="icon-Caret-down"></span>2.91<!-- -->%</span>
pub const PERCENT_CHANGE: &str = "span.qe1dn9-0";
// <div class="maxSupplyValue___1nBaS">45,000,000,000</div>
pub const MAX_SUPPLY: &str = "div.maxSupplyValue___1nBaS";
// <p class="sc-10nusm4-0 bspaAT">0.00001914 BTC</p>
pub const PAIR_QUOTE: &str = "p.bspaAT";

/// Compiled once per run, reused for every currency page.
pub struct CmcSelectors {
    price: Selector,
    symbol: Selector,
    high_low: Selector,
    stats: Selector,
    percent_change: Selector,
    max_supply: Selector,
    pair_quote: Selector,
}

impl CmcSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            price: selector(PRICE)?,
            symbol: selector(SYMBOL)?,
            high_low: selector(HIGH_LOW)?,
            stats: selector(STATS)?,
            percent_change: selector(PERCENT_CHANGE)?,
            max_supply: selector(MAX_SUPPLY)?,
            pair_quote: selector(PAIR_QUOTE)?,
        })
    }
}

/// Which quote currency a pair-price text is denominated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairQuote {
    Btc,
    Eth,
    Unknown,
}

/// `"BTC"` is checked before `"ETH"`; a text carrying both counts as BTC.
pub fn classify_pair(text: &str) -> PairQuote {
    if text.contains("BTC") {
        PairQuote::Btc
    } else if text.contains("ETH") {
        PairQuote::Eth
    } else {
        PairQuote::Unknown
    }
}

/// Extract one currency record from a parsed page.
///
/// Fields whose selector misses stay "". `anomalies` counts surplus positional
/// matches and duplicate quote prices; none of them fail the extraction.
pub fn extract(doc: &Html, sel: &CmcSelectors, policy: PairPolicy) -> Extracted<CurrencyRecord> {
    let mut rec = CurrencyRecord {
        usd_pair: last_text(doc, &sel.price),
        symbol: last_text(doc, &sel.symbol),
        percent_change: last_text(doc, &sel.percent_change),
        max_supply: last_text(doc, &sel.max_supply),
        ..Default::default()
    };
    let mut anomalies = 0;

    // [0] = low, [1] = high
    let ([low, high], extra) = Ordered::collect(doc, &sel.high_low, "highLowValue").split::<2>();
    rec.low_24hr = low;
    rec.high_24hr = high;
    anomalies += extra;

    // [0] = market cap, [1] = fully diluted, [2] = volume, [3] = circulating supply
    let ([cap, diluted, volume, circulating], extra) =
        Ordered::collect(doc, &sel.stats, "statsValue").split::<4>();
    rec.market_cap = cap;
    rec.fully_diluted_market_cap = diluted;
    rec.volume = volume;
    rec.circulating_supply = circulating;
    anomalies += extra;

    for text in texts(doc, &sel.pair_quote) {
        let (slot, label) = match classify_pair(&text) {
            PairQuote::Btc => (&mut rec.btc_pair, "BTC"),
            PairQuote::Eth => (&mut rec.eth_pair, "ETH"),
            PairQuote::Unknown => continue,
        };
        if assign_pair(slot, text, policy, label) {
            anomalies += 1;
        }
    }

    Extracted { value: rec, anomalies, known_gaps: 0 }
}

/// Returns true when the slot was already taken.
fn assign_pair(slot: &mut String, text: String, policy: PairPolicy, label: &str) -> bool {
    if slot.is_empty() {
        *slot = text;
        return false;
    }
    logw!("{label} pair: second quote '{text}' after '{slot}' ({policy:?})");
    if policy == PairPolicy::LastWins {
        *slot = text;
    }
    true
}
