use crate::autograd::{Graph, NodeId};
use crate::error::GradnetError;

/// The base trait for parametrized function objects (layers, networks).
///
/// Modules do not own their nodes: parameters live in a [`Graph`] and the
/// module keeps their ids. Every forward pass records its operations on the
/// graph it is given.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass on a vector of input nodes.
    ///
    /// # Returns
    /// The output nodes, or a `GradnetError` if the input width does not match
    /// the module or an id is unknown to `graph`.
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, GradnetError>;

    /// Returns every learnable parameter, in a stable order.
    ///
    /// Calling this twice on an untouched module returns the same ids in the
    /// same order, so updates and persistence can rely on positions.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns every parameter along with a hierarchical name
    /// (e.g. "layers.0.neurons.1.w.0"), in the order of [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), GradnetError> {
        graph.zero_grad(&self.parameters())
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
