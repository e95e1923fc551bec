use crate::autograd::{Graph, NodeId, Op};
use crate::error::GradnetError;

impl Graph {
    /// `a + b`
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, GradnetError> {
        let value = self.data(a)? + self.data(b)?;
        Ok(self.record(value, Op::Add(a, b)))
    }

    /// `a - b`
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, GradnetError> {
        let value = self.data(a)? - self.data(b)?;
        Ok(self.record(value, Op::Sub(a, b)))
    }

    /// `a * b`
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, GradnetError> {
        let value = self.data(a)? * self.data(b)?;
        Ok(self.record(value, Op::Mul(a, b)))
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
