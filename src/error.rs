// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong during a run.
///
/// Only some of these stop the run; see [`ScrapeError::is_fatal`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection, DNS, TLS or any other failure before a response arrived.
    #[error("GET {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// A response arrived but its body could not be read as markup.
    #[error("could not read markup from {url}: {reason}")]
    Markup { url: String, reason: String },

    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },

    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("json encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("write to {} failed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Fatal errors abort the run before anything is written.
    /// A transport failure only empties one document. File write failures
    /// never get here: the emitter logs them and keeps the stdout copy.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScrapeError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_is_recoverable() {
        let t = ScrapeError::Transport { url: s!("u"), reason: s!("dns") };
        let m = ScrapeError::Markup { url: s!("u"), reason: s!("eof") };
        assert!(!t.is_fatal());
        assert!(m.is_fatal());
    }
}
