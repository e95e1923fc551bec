use crate::autograd::{Graph, NodeId};
use crate::error::GradnetError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use rand::Rng;

/// A stack of fully connected layers.
///
/// Hidden layers apply `tanh`; the last layer is linear so its outputs can be
/// fed straight into a softmax as raw class scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
    input_size: usize,
}

impl Network {
    /// Builds a network for `input_size` features with one layer per entry of
    /// `layer_sizes`. The last entry is the number of classes.
    pub fn new(
        graph: &mut Graph,
        input_size: usize,
        layer_sizes: &[usize],
    ) -> Result<Self, GradnetError> {
        Network::with_rng(graph, input_size, layer_sizes, &mut rand::thread_rng())
    }

    /// Same as [`Network::new`] but draws initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &mut Graph,
        input_size: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, GradnetError> {
        if input_size == 0 {
            return Err(GradnetError::InvalidConfig(
                "network input size must be positive".to_string(),
            ));
        }
        if layer_sizes.is_empty() {
            return Err(GradnetError::EmptyNetwork);
        }
        if let Some(layer) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(GradnetError::InvalidLayerSize { layer });
        }

        let last = layer_sizes.len() - 1;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut n_inputs = input_size;
        for (i, &n_outputs) in layer_sizes.iter().enumerate() {
            layers.push(Layer::new(graph, n_inputs, n_outputs, i != last, rng)?);
            n_inputs = n_outputs;
        }
        Ok(Network { layers, input_size })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Width of the output layer.
    pub fn num_classes(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    /// Current parameter values in [`Module::parameters`] order.
    pub fn parameter_values(&self, graph: &Graph) -> Result<Vec<f64>, GradnetError> {
        self.parameters().into_iter().map(|id| graph.data(id)).collect()
    }

    /// Overwrites every parameter from `values`, given in [`Module::parameters`] order.
    ///
    /// Nothing is written if the length does not match.
    pub fn load_parameter_values(
        &self,
        graph: &mut Graph,
        values: &[f64],
    ) -> Result<(), GradnetError> {
        let params = self.parameters();
        if params.len() != values.len() {
            return Err(GradnetError::ParameterCountMismatch {
                expected: params.len(),
                actual: values.len(),
            });
        }
        for (id, &value) in params.into_iter().zip(values) {
            graph.set_data(id, value)?;
        }
        Ok(())
    }
}

impl Module for Network {
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, GradnetError> {
        if input.len() != self.input_size {
            return Err(GradnetError::DimensionMismatch {
                expected: self.input_size,
                actual: input.len(),
            });
        }
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("layers.{}.{}", i, name), id))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
