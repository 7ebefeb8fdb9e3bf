// src/specs/binance_us.rs
//! Scraping *spec* for the Binance.US markets page (`/en/markets/`).
//!
//! The table is a react-virtualized grid: every row is an anchor
//! `a.ReactVirtualized__Table__row` whose `href` is the pair's trade route, and
//! every cell is a `div.ReactVirtualized__Table__rowColumn` carrying a 1-based
//! `aria-colindex`.
//!
//! Rows are picked by route (the page lists far more pairs than we track).
//! Cells are picked by `aria-colindex`, so reordered cells still land in the
//! right field.
//!
//! Known gap: on the live page the market cap cell (column 8) renders a
//! placeholder instead of the value. It is kept verbatim and counted unless
//! [`MarketCapFallback::TitleAttr`] is set.

use scraper::{ElementRef, Html, Selector};

use super::Extracted;
use crate::config::MarketCapFallback;
use crate::core::html::{selector, text_of};
use crate::core::sanitize::{clean_pair, is_placeholder};
use crate::data::TableRowRecord;
use crate::error::ScrapeError;

// <a aria-label="row" tabindex="0" class="ReactVirtualized__Table__row" href="/en/trade/ADA_USD">
pub const ROW: &str = "a.ReactVirtualized__Table__row";
// <div aria-colindex="1" class="ReactVirtualized__Table__rowColumn">
pub const CELL: &str = "div.ReactVirtualized__Table__rowColumn";
pub const COLINDEX_ATTR: &str = "aria-colindex";

pub struct MarketSelectors {
    row: Selector,
    cell: Selector,
}

impl MarketSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self { row: selector(ROW)?, cell: selector(CELL)? })
    }
}

/// Table columns we read, keyed by `aria-colindex`. Column 1 (the favourite
/// star) and anything past 9 are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarketColumn {
    Pair,
    Coin,
    UsdPair,
    Change24h,
    High24h,
    Low24h,
    MarketCap,
    Volume24h,
}

impl MarketColumn {
    /// Exact string match: `"02"` or `" 2"` is not column 2.
    pub fn from_colindex(v: &str) -> Option<Self> {
        use MarketColumn::*;
        Some(match v {
            "2" => Pair,
            "3" => Coin,
            "4" => UsdPair,
            "5" => Change24h,
            "6" => High24h,
            "7" => Low24h,
            "8" => MarketCap,
            "9" => Volume24h,
            _ => return None,
        })
    }

    fn slot(self, rec: &mut TableRowRecord) -> &mut String {
        match self {
            MarketColumn::Pair => &mut rec.pair,
            MarketColumn::Coin => &mut rec.coin,
            MarketColumn::UsdPair => &mut rec.usd_pair,
            MarketColumn::Change24h => &mut rec.change_24h,
            MarketColumn::High24h => &mut rec.high_24h,
            MarketColumn::Low24h => &mut rec.low_24h,
            MarketColumn::MarketCap => &mut rec.market_cap,
            MarketColumn::Volume24h => &mut rec.volume_24h,
        }
    }
}

/// Every row whose `href` equals one of `routes`, in document order.
///
/// `known_gaps` counts rows whose market cap cell is still a placeholder.
pub fn extract(
    doc: &Html,
    sel: &MarketSelectors,
    routes: &[String],
    fallback: MarketCapFallback,
) -> Extracted<Vec<TableRowRecord>> {
    let mut rows = Vec::new();
    let mut known_gaps = 0;
    let mut dropped = 0usize;

    for row in doc.select(&sel.row) {
        let href = row.value().attr("href").unwrap_or_default();
        if !routes.iter().any(|r| r == href) {
            dropped += 1;
            continue;
        }
        let one = extract_row(row, sel, fallback);
        known_gaps += one.known_gaps;
        rows.push(one.value);
    }

    logd!("markets: kept {} rows, dropped {dropped}", rows.len());
    Extracted { value: rows, anomalies: 0, known_gaps }
}

/// Read the cells of one row into a record. A column that repeats
/// overwrites the earlier cell.
pub fn extract_row(
    row: ElementRef<'_>,
    sel: &MarketSelectors,
    fallback: MarketCapFallback,
) -> Extracted<TableRowRecord> {
    let mut rec = TableRowRecord::default();
    let mut has_market_cap = false;

    for cell in row.select(&sel.cell) {
        let Some(col) = cell.value().attr(COLINDEX_ATTR).and_then(MarketColumn::from_colindex)
        else {
            continue;
        };
        let text = text_of(cell);
        let value = match col {
            MarketColumn::Pair => clean_pair(&text),
            MarketColumn::MarketCap => {
                has_market_cap = true;
                market_cap_value(cell, text, fallback)
            }
            _ => text,
        };
        *col.slot(&mut rec) = value;
    }

    // A row without a column-8 cell is just short, not the placeholder defect.
    let known_gaps = if has_market_cap && is_placeholder(&rec.market_cap) {
        logw!("markets: {} market cap is a placeholder ('{}')", rec.pair, rec.market_cap);
        1
    } else {
        0
    };

    Extracted { value: rec, anomalies: 0, known_gaps }
}

fn market_cap_value(cell: ElementRef<'_>, text: String, fallback: MarketCapFallback) -> String {
    if fallback == MarketCapFallback::Text || !is_placeholder(&text) {
        return text;
    }
    match cell.value().attr("title") {
        Some(title) if !is_placeholder(title) => s!(title),
        _ => text,
    }
}
