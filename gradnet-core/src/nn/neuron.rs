use crate::autograd::{Graph, NodeId};
use crate::error::GradnetError;
use crate::nn::init::{uniform_weights, BIAS_INIT};
use rand::Rng;

/// A single unit computing `tanh(sum(w_i * x_i) + b)`, or the raw weighted sum
/// when `nonlinear` is false.
///
/// Weight and bias nodes are parameters of the graph passed to the
/// constructor; the neuron only holds their ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` uniform random weights and a zero bias.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Result<Self, GradnetError> {
        let weights = uniform_weights(rng, n_inputs);
        Neuron::from_values(graph, &weights, BIAS_INIT, nonlinear)
    }

    /// Creates a neuron with explicit initial parameter values.
    pub fn from_values(
        graph: &mut Graph,
        weights: &[f64],
        bias: f64,
        nonlinear: bool,
    ) -> Result<Self, GradnetError> {
        let weights = weights
            .iter()
            .map(|&w| graph.parameter(w))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = graph.parameter(bias)?;
        Ok(Neuron {
            weights,
            bias,
            nonlinear,
        })
    }

    /// Applies the neuron to `input`.
    ///
    /// The width check happens before any node is recorded.
    pub fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<NodeId, GradnetError> {
        if input.len() != self.weights.len() {
            return Err(GradnetError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(input) {
            let wx = graph.mul(w, x)?;
            act = graph.add(act, wx)?;
        }
        if self.nonlinear {
            graph.tanh(act)
        } else {
            Ok(act)
        }
    }

    /// Weights in input order, then the bias.
    pub fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
