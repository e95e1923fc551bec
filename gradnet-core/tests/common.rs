use gradnet_core::nn::Network;
use gradnet_core::{Graph, GradnetError};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Builds a network with a fixed seed so runs are reproducible.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn seeded_network(
    graph: &mut Graph,
    input_size: usize,
    layer_sizes: &[usize],
    seed: u64,
) -> Result<Network, GradnetError> {
    Network::with_rng(graph, input_size, layer_sizes, &mut StdRng::seed_from_u64(seed))
}
