// src/file.rs
//
// Snapshot output: one JSON document, printed to stdout and written to a file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data::Snapshot;
use crate::error::ScrapeError;

/// Where the snapshot ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitSummary {
    pub path: PathBuf,
    pub bytes: usize,
    pub stdout_written: bool,
    pub file_written: bool,
}

/// Pretty JSON, two-space indent, keys in record order.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Create or truncate `path` and write `json` to it, no trailing newline.
pub fn write_snapshot(path: &Path, json: &str) -> Result<(), ScrapeError> {
    fs::write(path, json).map_err(|source| ScrapeError::Io { path: path.to_path_buf(), source })
}

/// Encode once, print to `out`, then write the same bytes to `path`.
///
/// Only an encoding failure is returned. A failed print or file write is
/// logged and reported through `stdout_written` / `file_written`; the other
/// copy is still produced.
pub fn emit(
    snapshot: &Snapshot,
    path: &Path,
    out: &mut dyn Write,
) -> Result<EmitSummary, ScrapeError> {
    let json = encode_snapshot(snapshot)?;

    let stdout_written = match writeln!(out, "{json}").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            loge!("Issue printing json to stdout: {e}");
            false
        }
    };

    let file_written = match write_snapshot(path, &json) {
        Ok(()) => {
            logf!("Wrote {}", path.display());
            true
        }
        Err(e) => {
            loge!("Issue writing json out file: {e}");
            false
        }
    };

    Ok(EmitSummary { path: path.to_path_buf(), bytes: json.len(), stdout_written, file_written })
}
