use crate::autograd::{Graph, NodeId};
use crate::error::GradnetError;
use crate::optim::optimizer_trait::Optimizer;
use log::trace;

/// Plain stochastic gradient descent: `data -= lr * grad` for every parameter.
///
/// No momentum, no weight decay.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
}

impl Sgd {
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            lr,
        }
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), GradnetError> {
        for &id in &self.params {
            let node = graph.node(id)?;
            let updated = node.data() - self.lr * node.grad();
            graph.set_data(id, updated)?;
        }
        trace!("sgd step over {} parameters (lr = {})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), GradnetError> {
        graph.zero_grad(&self.params)
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }
}
