use crate::autograd::{Graph, NodeId};
use crate::error::GradnetError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use rand::Rng;

/// A set of neurons sharing the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates `n_outputs` randomly initialised neurons of width `n_inputs`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_inputs: usize,
        n_outputs: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Result<Self, GradnetError> {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(graph, n_inputs, nonlinear, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_inputs })
    }

    /// Builds a layer from existing neurons; they must all have the same width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, GradnetError> {
        let n_inputs = neurons.first().map_or(0, Neuron::n_inputs);
        if let Some(bad) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(GradnetError::DimensionMismatch {
                expected: n_inputs,
                actual: bad.n_inputs(),
            });
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// Outputs follow neuron declaration order.
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, GradnetError> {
        if input.len() != self.n_inputs {
            return Err(GradnetError::DimensionMismatch {
                expected: self.n_inputs,
                actual: input.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, input))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (n, neuron) in self.neurons.iter().enumerate() {
            for (i, &w) in neuron.weights().iter().enumerate() {
                params.push((format!("neurons.{}.w.{}", n, i), w));
            }
            params.push((format!("neurons.{}.b", n), neuron.bias()));
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
