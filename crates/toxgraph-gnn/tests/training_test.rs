//! End-to-end training over a CSV on disk, the way the train binary runs.

use std::io::Write;

use candle_core::DType;
use candle_nn::{VarBuilder, VarMap};
use toxgraph_chem::ATOM_FEATURE_DIM;
use toxgraph_gnn::{artifacts, dataset, Gin, TrainConfig, Trainer};

/// A small labeled file: aromatic molecules toxic, the rest clean, plus the
/// row types the loader must drop (sentinel, empty, unparseable).
fn write_dataset(rows: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "smiles,NR-AR").unwrap();
    for i in 0..rows {
        if i % 2 == 0 {
            writeln!(file, "c1ccccc1,1").unwrap();
        } else {
            writeln!(file, "CCO,0").unwrap();
        }
    }
    writeln!(file, "CCN,-1").unwrap();
    writeln!(file, "CCC,").unwrap();
    writeln!(file, "not_a_smiles,1").unwrap();
    file
}

#[test]
fn csv_to_trained_model_roundtrip() {
    let file = write_dataset(100);
    let graphs = dataset::load_tox21_csv(file.path(), "NR-AR").unwrap();
    assert_eq!(graphs.len(), 100); // the three bad rows are gone

    let (train, eval) = dataset::prefix_split(graphs, 0.8);
    assert_eq!((train.len(), eval.len()), (80, 20));

    let config = TrainConfig::cpu()
        .with_epochs(2)
        .with_hidden_dim(16)
        .with_seed(7);
    let trainer = Trainer::new(config.clone()).unwrap();
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, trainer.device());
    let model = Gin::new(ATOM_FEATURE_DIM, config.hidden_dim, 2, vb.pp("gin")).unwrap();

    let history = trainer.fit(&model, &varmap, &train, &eval).unwrap();
    assert_eq!(history.epochs.len(), 2);
    for record in &history.epochs {
        assert!(record.train_loss.is_finite() && record.train_loss > 0.0);
        assert!((0.0..=1.0).contains(&record.eval_auc));
    }

    // artifacts land where the binary would put them
    let dir = tempfile::tempdir().unwrap();
    artifacts::save_weights(&varmap, dir.path().join("gin_tox21.safetensors")).unwrap();
    artifacts::save_history(&history, dir.path().join("history.json")).unwrap();
    let curves = artifacts::plot_training_curves(
        &history,
        &dir.path().join("gin_performance.png"),
    )
    .unwrap();

    assert!(dir.path().join("gin_tox21.safetensors").exists());
    assert!(dir.path().join("history.json").exists());
    assert!(curves.exists());
}
