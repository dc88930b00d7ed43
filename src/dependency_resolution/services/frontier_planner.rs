use crate::dependency_resolution::domain::ComponentName;

/// Most component names PDC accepts in one relationship query.
///
/// Every name becomes a `from_component_name=` query parameter; past this
/// point requests start failing on URI length.
pub const MAX_BATCH_SIZE: usize = 100;

/// FrontierPlanner service splitting a round's frontier into query batches
///
/// Pure logic: it decides how many requests a round costs, the provider
/// adapter only ever sees one batch at a time.
pub struct FrontierPlanner {
    batch_size: usize,
}

impl FrontierPlanner {
    /// Creates a planner with the given batch size, clamped to
    /// `1..=MAX_BATCH_SIZE`
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Splits `frontier` into consecutive batches of at most `batch_size`
    /// names, preserving order
    pub fn plan(&self, frontier: &[ComponentName]) -> Vec<Vec<ComponentName>> {
        frontier
            .chunks(self.batch_size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Number of queries a frontier of `frontier_len` names costs
    pub fn batch_count(&self, frontier_len: usize) -> usize {
        frontier_len.div_ceil(self.batch_size)
    }
}

impl Default for FrontierPlanner {
    fn default() -> Self {
        Self::new(MAX_BATCH_SIZE)
    }
}
