// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status; every method defaults to a no-op.
pub trait Progress {
    /// Called at the start with the total number of fetches.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One target (a currency or the markets page) was fetched and extracted.
    fn item_done(&mut self, _label: &str) {}

    /// One target could not be fetched; its record is left empty.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress sink that writes to the log.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        logf!("[{}/{}] {label}", self.done, self.total);
    }

    fn item_failed(&mut self, label: &str, reason: &str) {
        self.done += 1;
        loge!("[{}/{}] {label}: {reason}", self.done, self.total);
    }

    fn finish(&mut self) {
        logd!("progress finished ({}/{})", self.done, self.total);
    }
}
