//! # candor-classifier
//!
//! Concrete classifier port for Candor: a logistic model over one-hot
//! categorical features, read from a JSON weight table.
//!
//! Training is out of scope; the weight table is produced elsewhere and only
//! consumed here.

pub mod logistic;

pub use logistic::{LogisticClassifier, LogisticModel};
