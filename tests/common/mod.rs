// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use coin_snapshot::ScrapeError;
use coin_snapshot::core::Fetch;
use scraper::Html;

pub const CMC_CARDANO: &str = include_str!("../fixtures/cmc_cardano.html");
pub const BINANCE_US_MARKETS: &str = include_str!("../fixtures/binance_us_markets.html");

/// In-memory network: known URLs return their body, `broken` URLs fail to
/// read, everything else is unreachable.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    broken: Vec<String>,
}

impl StubFetcher {
    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn broken(mut self, url: &str) -> Self {
        self.broken.push(url.to_string());
        self
    }
}

impl Fetch for StubFetcher {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        if self.broken.iter().any(|b| b == url) {
            return Err(ScrapeError::Markup { url: url.into(), reason: "connection reset mid-body".into() });
        }
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::Transport {
            url: url.into(),
            reason: "connection refused".into(),
        })
    }
}

pub fn doc(body: &str) -> Html {
    Html::parse_document(&format!("<!DOCTYPE html><html><body>{body}</body></html>"))
}
