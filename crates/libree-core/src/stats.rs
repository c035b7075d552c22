use std::collections::HashMap;

/// Filename occurrence counts for one run. Keyed on the bare file name, so
/// the same name under different directories lands in the same bucket.
#[derive(Debug, Default)]
pub struct NameStats {
    counts: HashMap<String, usize>,
    total: usize,
}

impl NameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, filename: &str) {
        *self.counts.entry(filename.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of files recorded. Always equals the per-name counts' sum.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct names seen more than once.
    pub fn duplicates(&self) -> usize {
        self.counts.values().filter(|&&count| count > 1).count()
    }

    pub fn into_counts(self) -> HashMap<String, usize> {
        self.counts
    }
}
