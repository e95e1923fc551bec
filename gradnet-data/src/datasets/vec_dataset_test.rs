// gradnet-data/src/datasets/vec_dataset_test.rs

use super::*;
use crate::sample::Sample;

#[test]
fn test_vec_dataset_new() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(dataset.len(), 5);
    assert!(!dataset.is_empty());
}

#[test]
fn test_vec_dataset_get_valid_index() -> Result<(), GradnetError> {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0)?, 10);
    assert_eq!(dataset.get(2)?, 30);
    Ok(())
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(
        dataset.get(3),
        Err(GradnetError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_vec_dataset_get_clones_item() -> Result<(), GradnetError> {
    let dataset = VecDataset::new(vec![vec![1.0, 2.0], vec![3.0]]);
    let item: Vec<f64> = dataset.get(1)?;
    assert_eq!(item, vec![3.0]);
    assert_eq!(dataset.as_slice()[1], vec![3.0]);
    Ok(())
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_of_samples() -> Result<(), GradnetError> {
    let dataset: VecDataset<Sample> = vec![
        Sample::new(vec![0.0, 1.0], 0),
        Sample::new(vec![1.0, 0.0], 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(dataset.get(1)?.label, 1);
    assert_eq!(dataset.as_slice().len(), 2);
    Ok(())
}

#[test]
fn test_slice_dataset() -> Result<(), GradnetError> {
    let samples = vec![Sample::new(vec![2.0], 0)];
    let dataset: &[Sample] = &samples;
    assert_eq!(Dataset::len(dataset), 1);
    assert_eq!(Dataset::get(dataset, 0)?.features, vec![2.0]);
    assert!(Dataset::get(dataset, 1).is_err());
    Ok(())
}

#[test]
fn test_vec_as_dataset() -> Result<(), GradnetError> {
    let samples = vec![Sample::new(vec![1.0], 0), Sample::new(vec![2.0], 1)];
    let dataset: &dyn Dataset<Item = Sample> = &samples;
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.get(1)?.label, 1);
    Ok(())
}
