// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction: each spec knows where the values live in one
//! page's HTML and how to map them into a record.
//!
//! ## What lives here
//! - **Selectors** for one page, as constants next to a sample of the markup
//!   they target.
//! - **Disambiguation** where a selector is not unique: by position
//!   (`core::html::Ordered`), by text content (`classify_pair`), or by an
//!   attribute (`aria-colindex`, `href`).
//! - **Light cleanup** of a value where the page pads it (pair names).
//!
//! ## What does **not** live here
//! - **Networking** – specs take an already parsed `scraper::Html`.
//! - **Iteration over targets, reporting, output** – see `scrape` and `file`.
//!
//! ## Conventions
//! - Values are display text, never parsed into numbers.
//! - A selector that matches nothing leaves its field "" and is not an error.
//! - Surprises (surplus matches, duplicate quotes, placeholders) are logged and
//!   counted in [`Extracted`], never fatal.
//!
//! ## Current specs
//! - `coinmarketcap` – one currency page → `CurrencyRecord`.
//! - `binance_us` – the markets table → tracked `TableRowRecord`s.
pub mod binance_us;
pub mod coinmarketcap;

/// Output of one extraction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extracted<T> {
    pub value: T,
    /// Matches that did not fit the expected page shape and were ignored.
    pub anomalies: usize,
    /// Fields known to come back as placeholders from the live page.
    pub known_gaps: usize,
}
