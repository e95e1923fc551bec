use crate::autograd::{Graph, NodeId, Op};
use crate::error::GradnetError;

impl Graph {
    /// Hyperbolic tangent.
    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, GradnetError> {
        let value = self.data(a)?.tanh();
        Ok(self.record(value, Op::Tanh(a)))
    }

    /// Rectified linear unit: `max(0, a)`.
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, GradnetError> {
        let x = self.data(a)?;
        let value = if x > 0.0 { x } else { 0.0 };
        Ok(self.record(value, Op::Relu(a)))
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
