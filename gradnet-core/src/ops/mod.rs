//! # Operation Library (`ops`)
//!
//! Every operation is a method on [`Graph`](crate::autograd::Graph) that
//! computes its forward value from the current `data` of its operands and
//! appends one record to the tape. The matching local derivative lives in
//! `autograd/backward_op.rs`.
//!
//! - [`arithmetic`]: `add`, `sub`, `mul`.
//! - [`activation`]: `tanh`, `relu`.
//! - [`loss`]: `softmax`, fused softmax cross-entropy, one-hot mean squared error.

pub mod activation;
pub mod arithmetic;
pub mod loss;
