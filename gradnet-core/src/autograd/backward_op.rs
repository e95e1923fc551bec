//! Local backward (vector-Jacobian) rules for every [`Op`] variant.
//!
//! Each rule reads the finalized gradient of the output node and adds its
//! contribution to the gradients of the operands. Contributions are always
//! summed, so a node consumed several times (fan-out) receives the total.

use super::graph::Graph;
use super::node::{NodeId, Op};

impl Graph {
    /// Propagates the gradient of `out` to its operands.
    ///
    /// `out` must have been produced by this graph; ids come from the tape, so
    /// indexing cannot go out of bounds.
    pub(crate) fn apply_backward(&mut self, out: NodeId) {
        let (out_data, out_grad) = {
            let node = &self.nodes()[out.index()];
            (node.data, node.grad)
        };
        let op = self.nodes()[out.index()].op.clone();
        match op {
            Op::Leaf => {}
            Op::Add(a, b) => {
                self.add_grad(a, out_grad);
                self.add_grad(b, out_grad);
            }
            Op::Sub(a, b) => {
                self.add_grad(a, out_grad);
                self.add_grad(b, -out_grad);
            }
            Op::Mul(a, b) => {
                let a_data = self.nodes()[a.index()].data;
                let b_data = self.nodes()[b.index()].data;
                self.add_grad(a, b_data * out_grad);
                self.add_grad(b, a_data * out_grad);
            }
            Op::Tanh(a) => {
                let t = out_data;
                self.add_grad(a, (1.0 - t * t) * out_grad);
            }
            Op::Relu(a) => {
                let mask = if self.nodes()[a.index()].data > 0.0 { 1.0 } else { 0.0 };
                self.add_grad(a, mask * out_grad);
            }
            Op::SoftmaxCrossEntropy { logits, probs, label } => {
                for (i, (logit, p)) in logits.into_iter().zip(probs).enumerate() {
                    let target = if i == label { 1.0 } else { 0.0 };
                    self.add_grad(logit, (p - target) * out_grad);
                }
            }
        }
    }
}
