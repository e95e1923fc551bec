use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_forward_tanh() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[0.5, -1.0], 0.25, true)?;
    let x = graph.leaves(&[2.0, 1.0]);
    let out = neuron.forward(&mut graph, &x)?;
    // 0.25 + 0.5 * 2 - 1 * 1
    assert_relative_eq!(graph.data(out)?, 0.25_f64.tanh());
    Ok(())
}

#[test]
fn test_neuron_forward_linear() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[3.0], -1.0, false)?;
    let x = graph.leaves(&[2.0]);
    let out = neuron.forward(&mut graph, &x)?;
    assert_relative_eq!(graph.data(out)?, 5.0);
    Ok(())
}

#[test]
fn test_neuron_backward() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let neuron = Neuron::from_values(&mut graph, &[0.5, -1.0], 0.1, true)?;
    let x = graph.leaves(&[2.0, 1.0]);
    let out = neuron.forward(&mut graph, &x)?;
    graph.backward(out)?;

    let t = graph.data(out)?;
    let dt = 1.0 - t * t;
    let weights = neuron.weights();
    assert_relative_eq!(graph.grad(weights[0])?, dt * 2.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(weights[1])?, dt * 1.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(neuron.bias())?, dt, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(x[0])?, dt * 0.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_dimension_mismatch() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let neuron = Neuron::new(&mut graph, 3, true, &mut StdRng::seed_from_u64(1))?;
    let x = graph.leaves(&[1.0, 2.0]);
    let before = graph.len();
    let result = neuron.forward(&mut graph, &x);
    assert_eq!(
        result,
        Err(GradnetError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(graph.len(), before);
    Ok(())
}

#[test]
fn test_neuron_parameters_order() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let neuron = Neuron::new(&mut graph, 4, false, &mut StdRng::seed_from_u64(3))?;
    let params = neuron.parameters();
    assert_eq!(params.len(), 5);
    assert_eq!(&params[..4], neuron.weights());
    assert_eq!(params[4], neuron.bias());
    assert!(params.iter().all(|&id| graph.is_parameter(id)));
    assert_eq!(graph.data(neuron.bias())?, 0.0);
    Ok(())
}
