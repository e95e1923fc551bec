use gradnet_core::{Graph, GradnetError, NodeId};

/// Loss applied to the network's raw scores during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossKind {
    /// Softmax followed by cross-entropy, differentiated as one fused step.
    #[default]
    CrossEntropy,
    /// Mean squared error against the one-hot encoded label.
    MeanSquaredError,
}

impl LossKind {
    /// Records the loss of `scores` against `label` on `graph`.
    pub fn apply(
        self,
        graph: &mut Graph,
        scores: &[NodeId],
        label: usize,
    ) -> Result<NodeId, GradnetError> {
        match self {
            LossKind::CrossEntropy => graph.softmax_cross_entropy(scores, label),
            LossKind::MeanSquaredError => graph.mse_one_hot(scores, label),
        }
    }
}

/// Hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Trains on the first `n` samples only. `None` uses the whole dataset.
    pub max_samples: Option<usize>,
    pub loss: LossKind,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 50,
            learning_rate: 0.05,
            max_samples: None,
            loss: LossKind::default(),
        }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = Some(max_samples);
        self
    }

    pub fn with_loss(mut self, loss: LossKind) -> Self {
        self.loss = loss;
        self
    }

    /// Rejects learning rates that are not finite and strictly positive.
    pub fn validate(&self) -> Result<(), GradnetError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(GradnetError::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
