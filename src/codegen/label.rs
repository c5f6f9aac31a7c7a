//! Fresh jump-target labels

/// Monotonic label allocator shared by every construct in a translation run.
///
/// The counter lives in the generator rather than a process-wide global, so
/// independent translations never interleave their numbering. It is never
/// reset mid-run.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    count: u64,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Return `"{prefix}_{n}"` where `n` is strictly increasing across all
    /// prefixes; no two calls ever return the same string.
    pub fn fresh(&mut self, prefix: &str) -> String {
        self.count += 1;
        format!("{}_{}", prefix, self.count)
    }
}
