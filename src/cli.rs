// src/cli.rs
use std::io;

use crate::{
    config::SnapshotConfig,
    core::HttpFetcher,
    error::ScrapeError,
    file,
    progress::LogProgress,
    scrape,
};

/// One snapshot with the built-in configuration. Takes no arguments.
pub fn run() -> Result<(), ScrapeError> {
    crate::logging::init();

    let cfg = SnapshotConfig::default();
    let fetcher = HttpFetcher::new()?;
    let mut progress = LogProgress::default();

    logf!(
        "Collecting {} currencies and {} market routes",
        cfg.currencies.len(),
        cfg.routes.len()
    );
    let (snapshot, report) = scrape::run(&cfg, &fetcher, Some(&mut progress))?;
    report.log_summary();
    if !report.is_complete() {
        logw!("Snapshot is partial; unreachable pages left their fields empty");
    }

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let summary = file::emit(&snapshot, &cfg.out_path, &mut lock)?;
    logd!(
        "Emitted {} bytes (stdout: {}, {}: {})",
        summary.bytes,
        summary.stdout_written,
        summary.path.display(),
        summary.file_written
    );
    Ok(())
}
