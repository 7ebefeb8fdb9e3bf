// src/core/net.rs
//
// One blocking GET per page. No timeout, no retry, no custom headers: the
// client runs on reqwest defaults.

use scraper::Html;

use crate::error::ScrapeError;

/// Source of raw page bodies. The HTTP client implements it; tests stub it.
pub trait Fetch {
    /// `Err(Transport)` when no response arrived,
    /// `Err(Markup)` when the response body could not be read.
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.client.get(url).send().map_err(|e| ScrapeError::Transport {
            url: s!(url),
            reason: e.to_string(),
        })?;
        // Status is not checked; error pages are parsed like any other.
        logd!("GET {url} -> {}", resp.status());
        resp.text().map_err(|e| ScrapeError::Markup {
            url: s!(url),
            reason: e.to_string(),
        })
    }
}

/// A parsed page. `failure` is set when the page could not be fetched, in
/// which case `html` is an empty document and every selector misses.
pub struct FetchedDoc {
    pub html: Html,
    pub failure: Option<String>,
}

/// Fetch and parse one page.
/// Transport failures are logged and yield an empty document; anything else
/// is returned as an error and ends the run.
pub fn fetch_document(fetcher: &dyn Fetch, url: &str) -> Result<FetchedDoc, ScrapeError> {
    logd!("HTTP GET {url}");
    match fetcher.get(url) {
        Ok(body) => {
            logd!("fetched {} bytes from {url}", body.len());
            Ok(FetchedDoc { html: Html::parse_document(&body), failure: None })
        }
        Err(e) if !e.is_fatal() => {
            loge!("{e}");
            Ok(FetchedDoc { html: Html::new_document(), failure: Some(e.to_string()) })
        }
        Err(e) => Err(e),
    }
}
