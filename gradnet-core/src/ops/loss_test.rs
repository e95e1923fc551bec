use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

/// `-ln(softmax(z)[label])` evaluated directly, without the fused node.
fn reference_cross_entropy(logits: &[f64], label: usize) -> f64 {
    let exps: Vec<f64> = logits.iter().map(|z| z.exp()).collect();
    let sum: f64 = exps.iter().sum();
    -(exps[label] / sum).ln()
}

#[test]
fn test_softmax_large_logits_stay_finite() {
    let probs = softmax(&[1000.0, 1000.0, 1000.0]);
    assert_eq!(probs.len(), 3);
    for p in probs {
        assert!(p.is_finite());
        assert_relative_eq!(p, 1.0 / 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_softmax_sums_to_one() {
    let probs = softmax(&[2.0, 1.0, 0.1, -3.0]);
    assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert!(probs[0] > probs[1] && probs[1] > probs[2] && probs[2] > probs[3]);
}

#[test]
fn test_one_hot() -> Result<(), GradnetError> {
    assert_eq!(one_hot(2, 4)?, vec![0.0, 0.0, 1.0, 0.0]);
    assert_eq!(
        one_hot(4, 4),
        Err(GradnetError::LabelOutOfRange {
            label: 4,
            num_classes: 4
        })
    );
    Ok(())
}

#[test]
fn test_cross_entropy_forward() -> Result<(), GradnetError> {
    let values = [2.0, 1.0, 0.1];
    let mut graph = Graph::new();
    let logits = graph.leaves(&values);
    let loss = graph.softmax_cross_entropy(&logits, 1)?;
    assert_relative_eq!(
        graph.data(loss)?,
        reference_cross_entropy(&values, 1),
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn test_cross_entropy_fused_gradient() -> Result<(), GradnetError> {
    let values = [2.0, 1.0, 0.1];
    let mut graph = Graph::new();
    let logits = graph.leaves(&values);
    let loss = graph.softmax_cross_entropy(&logits, 0)?;
    graph.backward(loss)?;

    let probs = softmax(&values);
    let target = one_hot(0, 3)?;
    for i in 0..3 {
        assert_relative_eq!(graph.grad(logits[i])?, probs[i] - target[i], epsilon = 1e-12);
    }

    // Same gradient by central differences of the unfused formula.
    let h = 1e-5;
    for i in 0..3 {
        let mut plus = values;
        let mut minus = values;
        plus[i] += h;
        minus[i] -= h;
        let numerical =
            (reference_cross_entropy(&plus, 0) - reference_cross_entropy(&minus, 0)) / (2.0 * h);
        assert_relative_eq!(graph.grad(logits[i])?, numerical, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn test_cross_entropy_backward_reaches_inputs() -> Result<(), GradnetError> {
    // logits = [w * x, x], so d(loss)/dw = x * dL/dz0.
    let mut graph = Graph::new();
    let w = graph.parameter(0.5)?;
    let x = graph.leaf(2.0);
    let z0 = graph.mul(w, x)?;
    let loss = graph.softmax_cross_entropy(&[z0, x], 1)?;
    graph.backward(loss)?;

    let probs = softmax(&[1.0, 2.0]);
    assert_relative_eq!(graph.grad(w)?, 2.0 * probs[0], epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_cross_entropy_large_logits() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let logits = graph.leaves(&[1000.0, -1000.0]);
    let loss = graph.softmax_cross_entropy(&logits, 1)?;
    let value = graph.data(loss)?;
    assert!(value.is_finite());
    assert_relative_eq!(value, 2000.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_cross_entropy_label_out_of_range() {
    let mut graph = Graph::new();
    let logits = graph.leaves(&[0.1, 0.2]);
    let result = graph.softmax_cross_entropy(&logits, 2);
    assert_eq!(
        result,
        Err(GradnetError::LabelOutOfRange {
            label: 2,
            num_classes: 2
        })
    );
    assert!(graph.tape().is_empty());
}

#[test]
fn test_cross_entropy_empty_scores() {
    let mut graph = Graph::new();
    assert_eq!(
        graph.softmax_cross_entropy(&[], 0),
        Err(GradnetError::EmptyScores)
    );
}

#[test]
fn test_mse_one_hot_forward() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let outputs = graph.leaves(&[0.5, -0.5]);
    let loss = graph.mse_one_hot(&outputs, 0)?;
    // ((0.5 - 1)^2 + (-0.5)^2) / 2
    assert_relative_eq!(graph.data(loss)?, 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_one_hot_grad_check() -> Result<(), GradCheckError> {
    let func = |graph: &mut Graph, x: &[NodeId]| graph.mse_one_hot(x, 2);
    check_grad(func, &[0.3, -0.8, 0.1], 1e-4, 1e-6, 1e-4)
}

#[test]
fn test_mse_one_hot_label_out_of_range() {
    let mut graph = Graph::new();
    let outputs = graph.leaves(&[0.0, 0.0]);
    assert!(matches!(
        graph.mse_one_hot(&outputs, 5),
        Err(GradnetError::LabelOutOfRange { .. })
    ));
}
