// src/nn/mod.rs
// Neurons, layers and the feed-forward network built from them.

pub mod init;
pub mod layer;
pub mod module; // Trait Module
pub mod network;
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use module::Module;
pub use network::Network;
pub use neuron::Neuron;
