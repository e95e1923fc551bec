//! Trains a small network on two noisy point clouds and reports its accuracy.
//!
//! Run with `RUST_LOG=info` to see per-epoch losses.

use gradnet_core::GradnetError;
use gradnet_data::{Sample, VecDataset};
use gradnet_train::{Classifier, NetworkClassifier, TrainConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn cluster<R: Rng>(rng: &mut R, center: (f64, f64), label: usize, count: usize) -> Vec<Sample> {
    (0..count)
        .map(|_| {
            let x = center.0 + rng.gen_range(-0.5..0.5);
            let y = center.1 + rng.gen_range(-0.5..0.5);
            Sample::new(vec![x, y], label)
        })
        .collect()
}

fn main() -> Result<(), GradnetError> {
    let _ = env_logger::try_init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut samples = cluster(&mut rng, (-1.0, -1.0), 0, 50);
    samples.extend(cluster(&mut rng, (1.0, 1.0), 1, 50));
    let (train_set, test_set): (Vec<_>, Vec<_>) = samples
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 5 != 0);
    let train_set: VecDataset<Sample> = train_set.into_iter().map(|(_, s)| s).collect();
    let test_set: VecDataset<Sample> = test_set.into_iter().map(|(_, s)| s).collect();

    let config = TrainConfig::new(30, 0.05);
    let mut classifier = NetworkClassifier::with_rng(2, &[8, 2], config, &mut rng)?;
    let report = classifier.train(&train_set)?;
    let accuracy = classifier.evaluate(&test_set)?;

    println!(
        "trained {} parameters for {} epochs, final loss {:.4}",
        classifier.num_parameters(),
        report.epochs(),
        report.final_loss().unwrap_or(f64::NAN)
    );
    println!("test accuracy: {:.1}%", accuracy * 100.0);
    Ok(())
}
