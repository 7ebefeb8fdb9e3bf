// src/scrape/scrape.rs
use crate::{
    config::SnapshotConfig,
    core::{Fetch, fetch_document},
    data::{CurrencyRecord, Snapshot, TableRowRecord},
    error::ScrapeError,
    progress::{NullProgress, Progress},
    specs::{
        binance_us::{self, MarketSelectors},
        coinmarketcap::{self, CmcSelectors},
    },
};

use super::report::{RunReport, Source};

/// Top-level: fetch every configured page and build the snapshot (no IO
/// besides the fetcher).
///
/// Unreachable pages are reported and leave their data empty; the run only
/// fails on a fatal error.
pub fn run(
    cfg: &SnapshotConfig,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<(Snapshot, RunReport), ScrapeError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let mut report = RunReport::default();

    progress.begin(cfg.currencies.len() + 1);

    let coin_market_cap = collect_currencies(cfg, fetcher, progress, &mut report)?;
    let rows = collect_markets(cfg, fetcher, progress, &mut report)?;

    progress.finish();

    let snapshot = Snapshot { coin_market_cap, binance_us: vec![rows] };
    Ok((snapshot, report))
}

/// One record per configured currency, in configuration order.
/// An unreachable page still yields a (blank) record in its slot.
pub fn collect_currencies(
    cfg: &SnapshotConfig,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
    report: &mut RunReport,
) -> Result<Vec<CurrencyRecord>, ScrapeError> {
    let sel = CmcSelectors::new()?;
    progress.log(&format!("Fetching {} currency pages…", cfg.currencies.len()));
    let mut out = Vec::with_capacity(cfg.currencies.len());

    for currency in &cfg.currencies {
        let url = cfg.currency_url(currency);
        let doc = fetch_document(fetcher, &url)?;
        let extracted = coinmarketcap::extract(&doc.html, &sel, cfg.pair_policy);

        match &doc.failure {
            None => progress.item_done(currency),
            Some(reason) => progress.item_failed(currency, reason),
        }
        report.anomalies += extracted.anomalies;
        report.push(Source::CoinMarketCap, currency, &url, doc.failure);
        out.push(extracted.value);
    }

    Ok(out)
}

/// Tracked rows of the markets table, in page order.
pub fn collect_markets(
    cfg: &SnapshotConfig,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
    report: &mut RunReport,
) -> Result<Vec<TableRowRecord>, ScrapeError> {
    let sel = MarketSelectors::new()?;
    progress.log("Fetching markets table…");
    let doc = fetch_document(fetcher, &cfg.markets_url)?;
    let extracted = binance_us::extract(&doc.html, &sel, &cfg.routes, cfg.market_cap);

    let label = "markets";
    match &doc.failure {
        None => progress.item_done(label),
        Some(reason) => progress.item_failed(label, reason),
    }
    report.anomalies += extracted.anomalies;
    report.known_gaps += extracted.known_gaps;
    report.market_rows = extracted.value.len();
    report.push(Source::BinanceUs, label, &cfg.markets_url, doc.failure);

    Ok(extracted.value)
}
