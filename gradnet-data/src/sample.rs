use gradnet_core::GradnetError;

/// One training or evaluation example: a feature vector and its class label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: usize,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: usize) -> Self {
        Sample { features, label }
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Checks the sample against a model expecting `num_features` inputs and
    /// `num_classes` outputs.
    pub fn validate(&self, num_features: usize, num_classes: usize) -> Result<(), GradnetError> {
        if self.features.len() != num_features {
            return Err(GradnetError::DimensionMismatch {
                expected: num_features,
                actual: self.features.len(),
            });
        }
        if self.label >= num_classes {
            return Err(GradnetError::LabelOutOfRange {
                label: self.label,
                num_classes,
            });
        }
        Ok(())
    }
}

impl From<(Vec<f64>, usize)> for Sample {
    fn from((features, label): (Vec<f64>, usize)) -> Self {
        Sample::new(features, label)
    }
}

#[cfg(test)]
#[path = "sample_test.rs"]
mod tests;
