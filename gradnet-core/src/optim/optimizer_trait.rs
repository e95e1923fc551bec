use crate::autograd::Graph;
use crate::error::GradnetError;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer holds the ids of the parameters it manages; their values and
/// gradients live in the [`Graph`] passed to each call.
pub trait Optimizer {
    /// Performs a single optimization step using the current gradients.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `GradnetError` if a managed id
    /// is not a parameter of `graph`.
    fn step(&mut self, graph: &mut Graph) -> Result<(), GradnetError>;

    /// Clears the gradients of all managed parameters.
    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), GradnetError>;

    fn learning_rate(&self) -> f64;
}
