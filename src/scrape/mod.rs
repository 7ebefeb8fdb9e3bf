// src/scrape/mod.rs
mod report;
mod scrape;

pub use report::{Outcome, RunReport, Source, Status};
pub use scrape::{collect_currencies, collect_markets, run};
