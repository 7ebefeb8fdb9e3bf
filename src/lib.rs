// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use config::SnapshotConfig;
pub use data::{CurrencyRecord, Snapshot, TableRowRecord};
pub use error::ScrapeError;
