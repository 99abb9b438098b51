//! Error types for the GNN pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GnnError>;

#[derive(Error, Debug)]
pub enum GnnError {
    #[error("Data error: {0}")]
    Data(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error(
        "ROC-AUC undefined: evaluation labels contain a single class \
         ({positives} positive of {total})"
    )]
    DegenerateLabels { positives: usize, total: usize },

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<candle_core::Error> for GnnError {
    fn from(e: candle_core::Error) -> Self {
        GnnError::Inference(e.to_string())
    }
}
