// gradnet-data/src/samplers/sequential_sampler.rs

use super::traits::Sampler;

/// Samples elements sequentially, always in the same order.
///
/// With a limit, only the first `limit` indices are yielded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSampler {
    limit: Option<usize>,
}

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler { limit: None }
    }

    /// A sampler that stops after at most `limit` indices.
    pub fn with_limit(limit: usize) -> Self {
        SequentialSampler { limit: Some(limit) }
    }

    /// Like [`SequentialSampler::with_limit`], but unlimited for `None`.
    pub fn with_optional_limit(limit: Option<usize>) -> Self {
        SequentialSampler { limit }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        Box::new(0..self.len(dataset_len))
    }

    fn len(&self, dataset_len: usize) -> usize {
        match self.limit {
            Some(limit) => limit.min(dataset_len),
            None => dataset_len,
        }
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
