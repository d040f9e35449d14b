use serde::{Deserialize, Serialize};

/// Tuning for [`CloneManifestPromoter`](crate::CloneManifestPromoter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoterOptions {
    /// Blocking tasks the merge phase may fan out to. `1` merges inline.
    pub merge_workers: usize,
    /// Smallest number of chains handed to one merge task; batches at or
    /// below this size are merged inline.
    pub min_chains_per_worker: usize,
}

impl Default for PromoterOptions {
    fn default() -> Self {
        Self {
            merge_workers: 1,
            min_chains_per_worker: 64,
        }
    }
}

impl PromoterOptions {
    /// True when a batch of `chains` should be merged on worker tasks.
    pub fn merges_in_parallel(&self, chains: usize) -> bool {
        self.merge_workers > 1 && chains > self.min_chains_per_worker.max(1)
    }

    /// Chains per merge task for a batch of `chains`.
    pub fn chunk_size(&self, chains: usize) -> usize {
        chains
            .div_ceil(self.merge_workers.max(1))
            .max(self.min_chains_per_worker.max(1))
    }
}
