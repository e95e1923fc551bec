use super::node::{Node, NodeId, Op};
use crate::error::GradnetError;
use log::debug;
use std::collections::HashSet;

/// Arena of scalar nodes plus the tape of operations recorded since the last reset.
///
/// The arena is split in two regions. The first `pinned` slots hold parameter
/// nodes, which survive [`Graph::reset`] and are only ever mutated in place.
/// Everything after them is transient: inputs, intermediate activations and
/// losses created during one forward pass.
///
/// Every operation appends the id of its output node to the tape. Because a
/// node can only be built from nodes that already exist, the tape is always in
/// a valid forward topological order and replaying it backwards visits each
/// node after all of its consumers.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    tape: Vec<NodeId>,
    pinned: usize,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a transient leaf (an input feature or a constant).
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::new(value, Op::Leaf))
    }

    /// Wraps a slice of values as transient leaves, preserving order.
    pub fn leaves(&mut self, values: &[f64]) -> Vec<NodeId> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Creates a parameter leaf that survives resets.
    ///
    /// Parameters live in the pinned prefix of the arena, so they can only be
    /// allocated while no transient node exists.
    pub fn parameter(&mut self, value: f64) -> Result<NodeId, GradnetError> {
        if self.nodes.len() != self.pinned {
            return Err(GradnetError::GraphNotReset {
                live: self.nodes.len() - self.pinned,
            });
        }
        let id = self.push(Node::new(value, Op::Leaf));
        self.pinned += 1;
        Ok(id)
    }

    /// Drops every transient node and clears the tape.
    ///
    /// Parameter nodes keep both their data and their gradient.
    pub fn reset(&mut self) {
        let dropped = self.nodes.len() - self.pinned;
        self.nodes.truncate(self.pinned);
        self.tape.clear();
        debug!(
            "graph reset: dropped {} transient nodes, kept {} parameters",
            dropped, self.pinned
        );
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Appends a non-leaf node and its tape record.
    pub(crate) fn record(&mut self, data: f64, op: Op) -> NodeId {
        let id = self.push(Node::new(data, op));
        self.tape.push(id);
        id
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Infallible gradient accumulation for ids taken from the tape.
    pub(crate) fn add_grad(&mut self, id: NodeId, delta: f64) {
        self.nodes[id.0].grad += delta;
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GradnetError> {
        self.nodes.get(id.0).ok_or(GradnetError::NodeNotFound(id))
    }

    pub fn data(&self, id: NodeId) -> Result<f64, GradnetError> {
        self.node(id).map(|n| n.data)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, GradnetError> {
        self.node(id).map(|n| n.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<&Op, GradnetError> {
        self.node(id).map(|n| &n.op)
    }

    pub fn is_parameter(&self, id: NodeId) -> bool {
        id.0 < self.pinned
    }

    /// Overwrites the value of a parameter node.
    ///
    /// This is the only way `data` changes after construction.
    pub fn set_data(&mut self, id: NodeId, value: f64) -> Result<(), GradnetError> {
        if !self.is_parameter(id) {
            return Err(GradnetError::NotAParameter(id));
        }
        self.nodes[id.0].data = value;
        Ok(())
    }

    /// Adds `delta` to the gradient of `id`.
    pub fn accumulate_grad(&mut self, id: NodeId, delta: f64) -> Result<(), GradnetError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(GradnetError::NodeNotFound(id))?;
        node.grad += delta;
        Ok(())
    }

    /// Resets the gradient of every listed node to exactly zero.
    pub fn zero_grad(&mut self, ids: &[NodeId]) -> Result<(), GradnetError> {
        for &id in ids {
            let node = self
                .nodes
                .get_mut(id.0)
                .ok_or(GradnetError::NodeNotFound(id))?;
            node.grad = 0.0;
        }
        Ok(())
    }

    /// Total number of live nodes, parameters included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn num_parameters(&self) -> usize {
        self.pinned
    }

    /// Output ids of the recorded operations, in creation order.
    pub fn tape(&self) -> &[NodeId] {
        &self.tape
    }

    /// Backpropagates from a scalar `loss` node.
    ///
    /// Seeds `loss.grad = 1.0`, then replays the tape in reverse up to and
    /// including the record that produced `loss`. Records made after `loss`
    /// cannot be its ancestors and are skipped. Every replayed rule runs
    /// exactly once, after all consumers of its output have contributed.
    ///
    /// Transient gradients are expected to start at zero, which holds for a
    /// graph that has been reset since the previous backward pass.
    pub fn backward(&mut self, loss: NodeId) -> Result<(), GradnetError> {
        self.node(loss)?;
        self.nodes[loss.0].grad = 1.0;

        let end = self
            .tape
            .iter()
            .rposition(|&id| id == loss)
            .map_or(0, |pos| pos + 1);
        debug!(
            "backward from {:?} ({}): replaying {} of {} tape records",
            loss,
            self.nodes[loss.0].op.name(),
            end,
            self.tape.len()
        );
        for pos in (0..end).rev() {
            let out = self.tape[pos];
            self.apply_backward(out);
        }
        Ok(())
    }

    /// Depth-first post-order of every ancestor of `root`, `root` last.
    ///
    /// Each node appears exactly once no matter how many consumers it has.
    /// Iterating the result in reverse is a valid backward schedule; the tape
    /// replay in [`Graph::backward`] is an equivalent, cheaper schedule.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, GradnetError> {
        self.node(root)?;
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        // (node, operands already pushed)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            if !visited.insert(id) {
                continue;
            }
            stack.push((id, true));
            for operand in self.nodes[id.0].op.operands().into_iter().rev() {
                if !visited.contains(&operand) {
                    stack.push((operand, false));
                }
            }
        }
        Ok(order)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
