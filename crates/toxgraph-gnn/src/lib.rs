//! Toxgraph GNN - graph isomorphism network for molecular toxicity.
//!
//! Pure Rust model and training loop on top of Candle. Molecular graphs
//! come from `toxgraph-chem`; this crate batches them into tensors, runs a
//! two-layer GIN with mean pooling, and trains against binary toxicity
//! labels with per-epoch ROC-AUC evaluation.
//!
//! # Example
//! ```no_run
//! use candle_core::DType;
//! use candle_nn::{VarBuilder, VarMap};
//! use toxgraph_chem::ATOM_FEATURE_DIM;
//! use toxgraph_gnn::{dataset, Gin, TrainConfig, Trainer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = TrainConfig::default();
//! let graphs = dataset::load_tox21_csv("tox21.csv", "NR-AR")?;
//! let (train, eval) = dataset::prefix_split(graphs, 0.8);
//!
//! let trainer = Trainer::new(config.clone())?;
//! let varmap = VarMap::new();
//! let vb = VarBuilder::from_varmap(&varmap, DType::F32, trainer.device());
//! let model = Gin::new(ATOM_FEATURE_DIM, config.hidden_dim, 2, vb.pp("gin"))?;
//!
//! let history = trainer.fit(&model, &varmap, &train, &eval)?;
//! println!("final AUC: {:.4}", history.epochs.last().unwrap().eval_auc);
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod model;
pub mod pooling;
pub mod train;

pub use config::TrainConfig;
pub use data::Batch;
pub use error::{GnnError, Result};
pub use model::{Gin, GinConv, GnnModule};
pub use train::{EpochRecord, Trainer, TrainingHistory};
