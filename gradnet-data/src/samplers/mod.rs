pub mod sequential_sampler;
pub mod traits;

pub use sequential_sampler::SequentialSampler;
pub use traits::Sampler;
