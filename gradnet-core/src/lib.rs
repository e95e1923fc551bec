//! Scalar reverse-mode automatic differentiation and a small feed-forward
//! network built on it.
//!
//! Every value is a node in an explicit [`Graph`]. Operations record their
//! output on the graph's tape and [`Graph::backward`] replays it in reverse.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;

pub use autograd::{Graph, NodeId};
pub use error::GradnetError;
