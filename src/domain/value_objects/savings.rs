//! Size savings of one compressed artifact

/// Original vs. compressed size of a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Savings {
    pub original: u64,
    pub compressed: u64,
}

impl Savings {
    pub fn new(original: u64, compressed: u64) -> Self {
        Self {
            original,
            compressed,
        }
    }

    /// Bytes saved. Negative when gzip framing outgrows a tiny input.
    pub fn saved(&self) -> i64 {
        self.original as i64 - self.compressed as i64
    }

    /// Saved bytes as a percentage of the original size.
    ///
    /// Always `0.0` for an empty original.
    pub fn percent(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        self.saved() as f64 / self.original as f64 * 100.0
    }
}
