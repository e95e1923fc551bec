use crate::config::{LossKind, TrainConfig};
use gradnet_core::nn::{Module, Network};
use gradnet_core::optim::{Optimizer, Sgd};
use gradnet_core::{Graph, GradnetError};
use gradnet_data::{Dataset, Sample, Sampler, SequentialSampler};
use log::{debug, info, warn};

/// Outcome of a training run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    /// Mean loss over the training samples, one entry per epoch.
    pub epoch_losses: Vec<f64>,
    /// Number of samples visited in each epoch.
    pub samples_per_epoch: usize,
}

impl TrainReport {
    /// Mean loss of the last epoch, if any epoch ran.
    pub fn final_loss(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }

    pub fn epochs(&self) -> usize {
        self.epoch_losses.len()
    }
}

/// Fits `network` to `dataset` with per-sample gradient descent.
///
/// Samples are visited in dataset order (capped by `config.max_samples`).
/// For each one the graph is reset, gradients are cleared, and after the
/// backward pass every parameter is moved by `-learning_rate * grad`.
///
/// An empty dataset is not an error: a warning is logged and an empty report
/// is returned without touching the parameters. A sample with the wrong width
/// or an out-of-range label aborts the run before that sample's update.
pub fn train<D>(
    graph: &mut Graph,
    network: &Network,
    dataset: &D,
    config: &TrainConfig,
) -> Result<TrainReport, GradnetError>
where
    D: Dataset<Item = Sample> + ?Sized,
{
    config.validate()?;
    let sampler = SequentialSampler::with_optional_limit(config.max_samples);
    let num_samples = sampler.len(dataset.len());
    if num_samples == 0 {
        warn!(
            "{}; skipping",
            GradnetError::EmptyDataset {
                operation: "train".to_string()
            }
        );
        return Ok(TrainReport::default());
    }

    let mut optimizer = Sgd::new(network.parameters(), config.learning_rate);
    let mut report = TrainReport {
        epoch_losses: Vec::with_capacity(config.epochs),
        samples_per_epoch: num_samples,
    };
    debug!(
        "training {} parameters on {} samples for {} epochs (lr = {}, loss = {:?})",
        network.num_parameters(),
        num_samples,
        config.epochs,
        config.learning_rate,
        config.loss
    );

    for epoch in 0..config.epochs {
        let mut total = 0.0;
        for index in sampler.iter(dataset.len()) {
            let sample = dataset.get(index)?;
            total += train_step(graph, network, &mut optimizer, &sample, config.loss)?;
        }
        let mean = total / num_samples as f64;
        info!("epoch {}/{}: mean loss {:.6}", epoch + 1, config.epochs, mean);
        report.epoch_losses.push(mean);
    }
    Ok(report)
}

/// Runs one forward/backward/update cycle on a single sample and returns its loss.
pub fn train_step<O: Optimizer>(
    graph: &mut Graph,
    network: &Network,
    optimizer: &mut O,
    sample: &Sample,
    loss: LossKind,
) -> Result<f64, GradnetError> {
    sample.validate(network.input_size(), network.num_classes())?;
    graph.reset();
    optimizer.zero_grad(graph)?;

    let input = graph.leaves(&sample.features);
    let scores = network.forward(graph, &input)?;
    let loss_node = loss.apply(graph, &scores, sample.label)?;
    graph.backward(loss_node)?;
    optimizer.step(graph)?;
    graph.data(loss_node)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
