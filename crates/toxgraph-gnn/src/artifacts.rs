//! Persisting run artifacts: weights, history, training curves.

use std::fs::File;
use std::path::{Path, PathBuf};

use candle_nn::VarMap;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use tracing::info;

use crate::error::{GnnError, Result};
use crate::train::TrainingHistory;

/// Save the model parameters as a safetensors snapshot.
pub fn save_weights<P: AsRef<Path>>(varmap: &VarMap, path: P) -> Result<()> {
    varmap.save(path.as_ref())?;
    info!("saved model weights to {}", path.as_ref().display());
    Ok(())
}

/// Save per-epoch losses and AUCs as JSON.
pub fn save_history<P: AsRef<Path>>(history: &TrainingHistory, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, history)?;
    info!("saved training history to {}", path.as_ref().display());
    Ok(())
}

/// Render the loss and AUC curves side by side.
///
/// Accepts the canonical `.png` path and writes an `.svg` next to the same
/// stem (SVG backend, no system font dependencies). Returns the path
/// actually written.
pub fn plot_training_curves(history: &TrainingHistory, path: &Path) -> Result<PathBuf> {
    let svg_path = svg_path(path);
    draw_curves(history, &svg_path).map_err(|e| GnnError::Chart(e.to_string()))?;
    info!("saved training curves to {}", svg_path.display());
    Ok(svg_path)
}

fn svg_path(path: &Path) -> PathBuf {
    if path.extension().map(|e| e == "png").unwrap_or(false) {
        path.with_extension("svg")
    } else {
        path.to_path_buf()
    }
}

fn draw_curves(
    history: &TrainingHistory,
    svg_path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(svg_path, (1200, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let (loss_area, auc_area) = root.split_horizontally(600);
    let epochs = history.epochs.len().max(1);

    let losses = history.losses();
    let max_loss = losses.iter().cloned().fold(f32::EPSILON, f32::max);
    let mut loss_chart = ChartBuilder::on(&loss_area)
        .caption("Training Loss", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..epochs + 1, 0f32..max_loss * 1.1)?;
    loss_chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc("Loss")
        .draw()?;
    loss_chart.draw_series(LineSeries::new(
        losses.iter().enumerate().map(|(i, &l)| (i + 1, l)),
        &BLUE,
    ))?;

    let mut auc_chart = ChartBuilder::on(&auc_area)
        .caption("Test AUC", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..epochs + 1, 0f64..1f64)?;
    auc_chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc("ROC-AUC")
        .draw()?;
    auc_chart.draw_series(LineSeries::new(
        history.aucs().iter().enumerate().map(|(i, &a)| (i + 1, a)),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::EpochRecord;

    fn fake_history() -> TrainingHistory {
        TrainingHistory {
            epochs: (1..=5)
                .map(|epoch| EpochRecord {
                    epoch,
                    train_loss: 1.0 / epoch as f32,
                    eval_auc: 0.5 + 0.05 * epoch as f64,
                })
                .collect(),
        }
    }

    #[test]
    fn history_roundtrips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        save_history(&fake_history(), &path).unwrap();

        let loaded: TrainingHistory =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(loaded.epochs.len(), 5);
        assert!((loaded.epochs[4].eval_auc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn curves_written_as_svg() {
        let dir = tempfile::tempdir().unwrap();
        let requested = dir.path().join("gin_performance.png");
        let written = plot_training_curves(&fake_history(), &requested).unwrap();

        assert_eq!(written.extension().unwrap(), "svg");
        assert!(written.exists());
        assert!(std::fs::metadata(&written).unwrap().len() > 0);
    }

    #[test]
    fn weights_snapshot_written() {
        use candle_core::{DType, Device};
        use candle_nn::VarBuilder;
        use toxgraph_chem::ATOM_FEATURE_DIM;

        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
        let _model =
            crate::model::Gin::new(ATOM_FEATURE_DIM, 8, 2, vb.pp("gin")).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gin_tox21.safetensors");
        save_weights(&varmap, &path).unwrap();
        assert!(path.exists());
    }
}
