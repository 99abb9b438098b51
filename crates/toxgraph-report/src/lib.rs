//! Toxgraph Report - model comparison charts and summaries.
//!
//! Renders a fixed table of benchmark metrics for four toxicity models
//! (FNN, GIN, XGBoost, GCN) into a set of comparison charts, and derives
//! the headline statistics (best model by F1, fastest by training time,
//! percentage gaps). The table is illustrative benchmark data; nothing here
//! consumes the training pipeline's output.

pub mod charts;
pub mod summary;
pub mod tables;

pub use tables::{reference_metrics, ModelMetrics, QualityMetric};
