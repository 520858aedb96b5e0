//! Filtering statistics.
use std::collections::BTreeMap;

use log::info;

/// Per-label counts and kept/total document counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    counts: BTreeMap<String, usize>,
    total: usize,
    output: usize,
}

impl Stats {
    /// Increment the count of `label`.
    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Count a document, kept or not.
    pub fn record(&mut self, kept: bool) {
        self.total += 1;
        if kept {
            self.output += 1;
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn output(&self) -> usize {
        self.output
    }

    /// Add counts of `other` into `self`.
    pub fn merge(&mut self, other: &Stats) {
        for (label, count) in &other.counts {
            *self.counts.entry(label.clone()).or_insert(0) += count;
        }
        self.total += other.total;
        self.output += other.output;
    }

    /// `output N/M (P%)`
    pub fn summary(&self) -> String {
        let pct = if self.total == 0 {
            0.0
        } else {
            100.0 * self.output as f64 / self.total as f64
        };
        format!("output {}/{} ({:.1}%)", self.output, self.total, pct)
    }

    /// Log counts and summary, prefixed by `name`.
    pub fn report(&self, name: &str) {
        for (label, count) in &self.counts {
            info!("{}: {}: {}", name, label, count);
        }
        info!("{}: {}", name, self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut s = Stats::default();
        s.add("pass-all");
        s.add("fail-upper-ratio");
        s.add("pass-all");
        s.record(true);
        s.record(false);
        s.record(true);

        assert_eq!(s.get("pass-all"), 2);
        assert_eq!(s.get("fail-upper-ratio"), 1);
        assert_eq!(s.get("fail-min-toks"), 0);
        assert_eq!(s.summary(), "output 2/3 (66.7%)");
    }

    #[test]
    fn test_merge() {
        let mut a = Stats::default();
        a.add("pass-all");
        a.record(true);
        let mut b = Stats::default();
        b.add("pass-all");
        b.add("fail-langdetect");
        b.record(true);
        b.record(false);

        a.merge(&b);
        assert_eq!(a.get("pass-all"), 2);
        assert_eq!(a.get("fail-langdetect"), 1);
        assert_eq!(a.total(), 3);
        assert_eq!(a.output(), 2);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(Stats::default().summary(), "output 0/0 (0.0%)");
    }
}
