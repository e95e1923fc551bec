/// Stable handle to a node stored in a [`Graph`](super::Graph) arena.
///
/// Ids of parameter nodes stay valid for the lifetime of the graph. Ids of
/// transient nodes (inputs, activations, losses) are only meaningful until the
/// next [`Graph::reset`](super::Graph::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node inside its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The operation that produced a node, together with its operand ids.
///
/// Backward dispatch is a single `match` over this enumeration; see
/// `backward_op.rs` for the local derivative of each variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Input feature, constant or learnable parameter. Has no operands.
    Leaf,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Tanh(NodeId),
    Relu(NodeId),
    /// Softmax followed by negative log-likelihood, differentiated as one step.
    ///
    /// `probs` caches the softmax computed in the forward pass so the backward
    /// rule does not recompute it.
    SoftmaxCrossEntropy {
        logits: Vec<NodeId>,
        probs: Vec<f64>,
        label: usize,
    },
}

impl Op {
    /// Returns the operand ids in the order they were passed to the forward call.
    pub fn operands(&self) -> Vec<NodeId> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) => vec![*a, *b],
            Op::Tanh(a) | Op::Relu(a) => vec![*a],
            Op::SoftmaxCrossEntropy { logits, .. } => logits.clone(),
        }
    }

    /// Short operation name, used in the backward debug log.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(..) => "add",
            Op::Sub(..) => "sub",
            Op::Mul(..) => "mul",
            Op::Tanh(..) => "tanh",
            Op::Relu(..) => "relu",
            Op::SoftmaxCrossEntropy { .. } => "softmax_cross_entropy",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

/// One scalar value in the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op) -> Self {
        Node { data, grad: 0.0, op }
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.data
    }

    /// Gradient accumulated by the last backward pass.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }
}
