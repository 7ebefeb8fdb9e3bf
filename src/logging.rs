// src/logging.rs
//
// Leveled logging on top of the `log` facade, printed by env_logger to stderr
// (stdout is reserved for the JSON snapshot).
// Line shape: [hh:mm:ss.mmm][LEVEL] message, elapsed since `init`.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

pub use ::log as backend;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = u64::try_from(ms).unwrap_or(u64::MAX);
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the logger. Default level is `info`; `RUST_LOG` overrides.
/// Safe to call more than once (later calls are no-ops).
pub fn init() {
    start();
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::logging::backend::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::logging::backend::debug!($($arg)*)
    };
}

/// Warn-level logging (extraction anomalies)
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::logging::backend::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::logging::backend::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
        // beyond u64 milliseconds saturates instead of wrapping
        assert_eq!(fmt_elapsed(u128::MAX), fmt_elapsed(u64::MAX as u128));
    }
}
