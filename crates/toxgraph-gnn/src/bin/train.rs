//! GIN training entrypoint.
//!
//! Run with: cargo run -p toxgraph-gnn --bin train
//!
//! Expects `tox21.csv` in the working directory with a `smiles` column and
//! the assay target column. All parameters are literal constants below.

use std::path::Path;

use candle_core::DType;
use candle_nn::{VarBuilder, VarMap};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use toxgraph_chem::ATOM_FEATURE_DIM;
use toxgraph_gnn::{artifacts, dataset, Gin, TrainConfig, Trainer};

const DATASET_PATH: &str = "tox21.csv";
const TARGET: &str = "NR-AR"; // Change target as needed
const TRAIN_FRACTION: f64 = 0.8;
const WEIGHTS_PATH: &str = "gin_tox21.safetensors";
const HISTORY_PATH: &str = "history.json";
const CURVES_PATH: &str = "gin_performance.png";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = TrainConfig::default();
    info!("training GIN on {DATASET_PATH} target '{TARGET}'");

    let graphs = dataset::load_tox21_csv(DATASET_PATH, TARGET)?;
    let (train, eval) = dataset::prefix_split(graphs, TRAIN_FRACTION);
    info!("{} training graphs, {} evaluation graphs", train.len(), eval.len());

    let trainer = Trainer::new(config.clone())?;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, trainer.device());
    let model = Gin::new(ATOM_FEATURE_DIM, config.hidden_dim, 2, vb.pp("gin"))?;

    let history = trainer.fit(&model, &varmap, &train, &eval)?;

    artifacts::save_weights(&varmap, WEIGHTS_PATH)?;
    artifacts::save_history(&history, HISTORY_PATH)?;
    artifacts::plot_training_curves(&history, Path::new(CURVES_PATH))?;

    Ok(())
}
