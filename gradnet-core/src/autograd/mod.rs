//! Reverse-mode automatic differentiation over scalar nodes.
//!
//! - [`node`]: node ids, the closed [`Op`] enumeration and the node itself.
//! - [`graph`]: the [`Graph`] arena and its operation tape.
//! - `backward_op`: the local derivative of every operation.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use graph::Graph;
pub use node::{Node, NodeId, Op};
