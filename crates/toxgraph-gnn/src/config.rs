//! Training configuration.

use serde::{Deserialize, Serialize};

/// Hyperparameters for GIN training.
///
/// The defaults are the values the whole pipeline runs with; there is no
/// configuration file, so anything else is set through the builder methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Number of full passes over the training set (default: 20)
    pub epochs: usize,

    /// Mini-batch size (default: 32)
    pub batch_size: usize,

    /// AdamW learning rate (default: 0.001)
    pub learning_rate: f64,

    /// Hidden width of both message-passing layers (default: 64)
    pub hidden_dim: usize,

    /// Seed for the epoch shuffle
    pub seed: u64,

    /// Use GPU if available (default: true, falls back to CPU)
    pub use_gpu: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 20,
            batch_size: 32,
            learning_rate: 0.001,
            hidden_dim: 64,
            seed: 42,
            use_gpu: true,
        }
    }
}

impl TrainConfig {
    /// Create config for CPU-only training.
    pub fn cpu() -> Self {
        Self {
            use_gpu: false,
            ..Default::default()
        }
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn with_hidden_dim(mut self, dim: usize) -> Self {
        self.hidden_dim = dim;
        self
    }

    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
