use crate::config::TrainConfig;
use crate::trainer::{train, TrainReport};
use gradnet_core::nn::{Module, Network};
use gradnet_core::{Graph, GradnetError};
use gradnet_data::{Dataset, Sample};
use log::{info, warn};
use rand::Rng;

/// Hidden and output layer widths of the default digit recognizer
/// (784 pixel inputs, 10 classes).
pub const DIGIT_LAYER_SIZES: [usize; 3] = [128, 64, 10];

/// Index of the largest score. Ties go to the lowest index.
///
/// NaN scores are ignored; if every score is NaN the result is class 0.
pub fn argmax(scores: &[f64]) -> Result<usize, GradnetError> {
    if scores.is_empty() {
        return Err(GradnetError::EmptyScores);
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    Ok(best.map_or(0, |(i, _)| i))
}

/// Raw class scores of `network` for one feature vector.
///
/// Resets `graph` first, so any transient node id from an earlier pass
/// becomes invalid.
pub fn scores(
    graph: &mut Graph,
    network: &Network,
    features: &[f64],
) -> Result<Vec<f64>, GradnetError> {
    graph.reset();
    let input = graph.leaves(features);
    let outputs = network.forward(graph, &input)?;
    outputs.into_iter().map(|id| graph.data(id)).collect()
}

/// Predicted class of one feature vector.
pub fn predict(
    graph: &mut Graph,
    network: &Network,
    features: &[f64],
) -> Result<usize, GradnetError> {
    argmax(&scores(graph, network, features)?)
}

/// Fraction of samples whose predicted class equals their label, in `[0, 1]`.
///
/// Parameters are only read. An empty dataset logs a warning and scores 0.0.
/// A sample with the wrong width or a label outside the network's classes
/// is an error, not a miss.
pub fn evaluate<D>(graph: &mut Graph, network: &Network, dataset: &D) -> Result<f64, GradnetError>
where
    D: Dataset<Item = Sample> + ?Sized,
{
    if dataset.is_empty() {
        warn!(
            "{}; reporting accuracy 0",
            GradnetError::EmptyDataset {
                operation: "evaluate".to_string()
            }
        );
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for index in 0..dataset.len() {
        let sample = dataset.get(index)?;
        sample.validate(network.input_size(), network.num_classes())?;
        if predict(graph, network, &sample.features)? == sample.label {
            correct += 1;
        }
    }
    let accuracy = correct as f64 / dataset.len() as f64;
    info!(
        "accuracy: {:.4} ({}/{} correct)",
        accuracy,
        correct,
        dataset.len()
    );
    Ok(accuracy)
}

/// Common interface of the pipeline's interchangeable classifier backends.
pub trait Classifier {
    fn train(&mut self, dataset: &dyn Dataset<Item = Sample>) -> Result<TrainReport, GradnetError>;

    fn predict(&mut self, features: &[f64]) -> Result<usize, GradnetError>;

    fn evaluate(&mut self, dataset: &dyn Dataset<Item = Sample>) -> Result<f64, GradnetError>;
}

/// A [`Network`] together with the graph holding its parameters and the
/// configuration used to train it.
#[derive(Debug, Clone)]
pub struct NetworkClassifier {
    graph: Graph,
    network: Network,
    config: TrainConfig,
}

impl NetworkClassifier {
    pub fn new(
        input_size: usize,
        layer_sizes: &[usize],
        config: TrainConfig,
    ) -> Result<Self, GradnetError> {
        NetworkClassifier::with_rng(input_size, layer_sizes, config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        layer_sizes: &[usize],
        config: TrainConfig,
        rng: &mut R,
    ) -> Result<Self, GradnetError> {
        config.validate()?;
        let mut graph = Graph::new();
        let network = Network::with_rng(&mut graph, input_size, layer_sizes, rng)?;
        Ok(NetworkClassifier {
            graph,
            network,
            config,
        })
    }

    /// Classifier with the default digit topology, `input_size -> 128 -> 64 -> 10`.
    pub fn digits(input_size: usize, config: TrainConfig) -> Result<Self, GradnetError> {
        NetworkClassifier::new(input_size, &DIGIT_LAYER_SIZES, config)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn parameter_values(&self) -> Result<Vec<f64>, GradnetError> {
        self.network.parameter_values(&self.graph)
    }

    pub fn load_parameter_values(&mut self, values: &[f64]) -> Result<(), GradnetError> {
        self.network.load_parameter_values(&mut self.graph, values)
    }

    pub fn num_parameters(&self) -> usize {
        self.network.num_parameters()
    }
}

impl Classifier for NetworkClassifier {
    fn train(&mut self, dataset: &dyn Dataset<Item = Sample>) -> Result<TrainReport, GradnetError> {
        train(&mut self.graph, &self.network, dataset, &self.config)
    }

    fn predict(&mut self, features: &[f64]) -> Result<usize, GradnetError> {
        predict(&mut self.graph, &self.network, features)
    }

    fn evaluate(&mut self, dataset: &dyn Dataset<Item = Sample>) -> Result<f64, GradnetError> {
        evaluate(&mut self.graph, &self.network, dataset)
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
