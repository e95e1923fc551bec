use crate::autograd::{Graph, NodeId};
use crate::error::GradnetError;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradnetError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradnetError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(GradnetError),
}

impl From<GradnetError> for GradCheckError {
    fn from(err: GradnetError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar output from leaves holding `inputs`. The analytic
/// gradient of every input comes from one backward pass; the numerical one is
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`, each side evaluated on
/// a fresh graph. A pair passes when it is within `abs_tolerance` absolutely
/// or `rel_tolerance` relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, GradnetError>,
{
    // --- Analytical gradients ---
    let mut graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&id| graph.grad(id))
        .collect::<Result<_, _>>()?;

    // --- Numerical gradients ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tolerance,
            max_relative = rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, GradnetError>,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] += delta;
    let mut graph = Graph::new();
    let leaves = graph.leaves(&perturbed);
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.data(output)?)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
