//! Stochastic gradient descent training and a classifier adapter for
//! `gradnet-core` networks.

pub mod classifier;
pub mod config;
pub mod trainer;

pub use classifier::{argmax, evaluate, predict, Classifier, NetworkClassifier, DIGIT_LAYER_SIZES};
pub use config::{LossKind, TrainConfig};
pub use trainer::{train, train_step, TrainReport};
