// src/scrape/report.rs
use std::fmt;

/// Which site a fetch target belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    CoinMarketCap,
    BinanceUs,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::CoinMarketCap => f.write_str("coinmarketcap"),
            Source::BinanceUs => f.write_str("binance.us"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Fetched,
    /// No response; the target's data is empty in the snapshot.
    Unreachable(String),
}

/// What happened to one fetch target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub source: Source,
    pub target: String,
    pub url: String,
    pub status: Status,
}

/// Per-run account of everything that did not go to plan.
/// Not part of the snapshot file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
    /// Surplus positional matches and duplicate quotes, summed over pages.
    pub anomalies: usize,
    /// Market cap placeholders on the markets page.
    pub known_gaps: usize,
    /// Tracked rows found on the markets page.
    pub market_rows: usize,
}

impl RunReport {
    pub fn push(&mut self, source: Source, target: &str, url: &str, failure: Option<String>) {
        let status = match failure {
            None => Status::Fetched,
            Some(reason) => Status::Unreachable(reason),
        };
        self.outcomes.push(Outcome { source, target: s!(target), url: s!(url), status });
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.status != Status::Fetched)
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn log_summary(&self) {
        let failed = self.failures().count();
        logf!(
            "Fetched {}/{} pages, {} market rows, {} anomalies, {} known gaps",
            self.outcomes.len() - failed,
            self.outcomes.len(),
            self.market_rows,
            self.anomalies,
            self.known_gaps,
        );
        for o in self.failures() {
            if let Status::Unreachable(reason) = &o.status {
                loge!("{} {}: {reason}", o.source, o.target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_visible() {
        let mut r = RunReport::default();
        r.push(Source::CoinMarketCap, "cardano", "u1", None);
        r.push(Source::CoinMarketCap, "bitcoin", "u2", Some(s!("timed out")));
        assert!(!r.is_complete());
        let f: Vec<_> = r.failures().map(|o| o.target.as_str()).collect();
        assert_eq!(f, ["bitcoin"]);
    }
}
