use crate::autograd::{Graph, NodeId, Op};
use crate::error::GradnetError;

/// Numerically stable softmax.
///
/// The maximum is subtracted before exponentiating, so very large logits do
/// not overflow. Returns an empty vector for empty input.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// One-hot encoding of `label` over `num_classes` classes.
pub fn one_hot(label: usize, num_classes: usize) -> Result<Vec<f64>, GradnetError> {
    if label >= num_classes {
        return Err(GradnetError::LabelOutOfRange { label, num_classes });
    }
    Ok((0..num_classes)
        .map(|i| if i == label { 1.0 } else { 0.0 })
        .collect())
}

impl Graph {
    fn logit_values(&self, logits: &[NodeId], label: usize) -> Result<Vec<f64>, GradnetError> {
        if logits.is_empty() {
            return Err(GradnetError::EmptyScores);
        }
        if label >= logits.len() {
            return Err(GradnetError::LabelOutOfRange {
                label,
                num_classes: logits.len(),
            });
        }
        logits.iter().map(|&id| self.data(id)).collect()
    }

    /// Cross-entropy of `softmax(logits)` against the true `label`.
    ///
    /// Recorded as a single operation whose backward rule adds
    /// `p[i] - onehot(label)[i]` (scaled by the loss gradient) to each logit,
    /// instead of differentiating softmax and log separately.
    pub fn softmax_cross_entropy(
        &mut self,
        logits: &[NodeId],
        label: usize,
    ) -> Result<NodeId, GradnetError> {
        let values = self.logit_values(logits, label)?;
        let probs = softmax(&values);

        // -ln(p[label]) in log-sum-exp form so a vanishing probability stays finite.
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let log_sum: f64 = values.iter().map(|&z| (z - max).exp()).sum::<f64>().ln();
        let loss = -(values[label] - max - log_sum);

        Ok(self.record(
            loss,
            Op::SoftmaxCrossEntropy {
                logits: logits.to_vec(),
                probs,
                label,
            },
        ))
    }

    /// Mean squared error between `outputs` and the one-hot encoding of `label`.
    ///
    /// Built from generic `sub`, `mul` and `add` records, so its gradient flows
    /// through the ordinary tape.
    pub fn mse_one_hot(&mut self, outputs: &[NodeId], label: usize) -> Result<NodeId, GradnetError> {
        self.logit_values(outputs, label)?;
        let targets = one_hot(label, outputs.len())?;

        let mut total = self.leaf(0.0);
        for (&y, &t) in outputs.iter().zip(&targets) {
            let target = self.leaf(t);
            let diff = self.sub(y, target)?;
            let sq = self.mul(diff, diff)?;
            total = self.add(total, sq)?;
        }
        let scale = self.leaf(1.0 / outputs.len() as f64);
        self.mul(total, scale)
    }
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
