use super::*;
use crate::nn::neuron::Neuron;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_forward_preserves_neuron_order() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let first = Neuron::from_values(&mut graph, &[1.0, 0.0], 0.0, false)?;
    let second = Neuron::from_values(&mut graph, &[0.0, 1.0], 0.0, false)?;
    let layer = Layer::from_neurons(vec![first, second])?;

    let x = graph.leaves(&[3.0, -2.0]);
    let out = layer.forward(&mut graph, &x)?;
    assert_eq!(out.len(), 2);
    assert_relative_eq!(graph.data(out[0])?, 3.0);
    assert_relative_eq!(graph.data(out[1])?, -2.0);
    Ok(())
}

#[test]
fn test_layer_from_mismatched_neurons() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let a = Neuron::from_values(&mut graph, &[1.0, 2.0], 0.0, true)?;
    let b = Neuron::from_values(&mut graph, &[1.0], 0.0, true)?;
    assert_eq!(
        Layer::from_neurons(vec![a, b]),
        Err(GradnetError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    );
    Ok(())
}

#[test]
fn test_layer_dimension_mismatch() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, 2, 3, true, &mut StdRng::seed_from_u64(5))?;
    let x = graph.leaves(&[1.0]);
    assert!(matches!(
        layer.forward(&mut graph, &x),
        Err(GradnetError::DimensionMismatch { expected: 2, actual: 1 })
    ));
    Ok(())
}

#[test]
fn test_layer_parameters_and_names() -> Result<(), GradnetError> {
    let mut graph = Graph::new();
    let layer = Layer::new(&mut graph, 2, 2, true, &mut StdRng::seed_from_u64(9))?;
    let params = layer.parameters();
    assert_eq!(params.len(), 6);
    assert_eq!(layer.num_parameters(), 6);
    assert_eq!(params, layer.parameters());

    let named = layer.named_parameters();
    let names: Vec<&str> = named.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "neurons.0.w.0",
            "neurons.0.w.1",
            "neurons.0.b",
            "neurons.1.w.0",
            "neurons.1.w.1",
            "neurons.1.b"
        ]
    );
    let ids: Vec<NodeId> = named.into_iter().map(|(_, id)| id).collect();
    assert_eq!(ids, params);
    Ok(())
}
