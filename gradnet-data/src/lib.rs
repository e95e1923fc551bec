//! Labeled feature-vector datasets and index samplers.

pub mod datasets;
pub mod sample;
pub mod samplers;

pub use datasets::{Dataset, VecDataset};
pub use sample::Sample;
pub use samplers::{Sampler, SequentialSampler};
