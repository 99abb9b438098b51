//! Training and evaluation loop.

use candle_core::{Device, D};
use candle_nn::{loss, ops, Optimizer, ParamsAdamW, VarMap};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;
use toxgraph_chem::MolGraph;

use crate::config::TrainConfig;
use crate::data::Batch;
use crate::error::{GnnError, Result};
use crate::metrics::roc_auc;
use crate::model::GnnModule;

/// One epoch of diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: usize,
    pub train_loss: f32,
    pub eval_auc: f64,
}

/// Per-epoch training losses and evaluation AUCs for a whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub epochs: Vec<EpochRecord>,
}

impl TrainingHistory {
    pub fn losses(&self) -> Vec<f32> {
        self.epochs.iter().map(|e| e.train_loss).collect()
    }

    pub fn aucs(&self) -> Vec<f64> {
        self.epochs.iter().map(|e| e.eval_auc).collect()
    }
}

/// Runs mini-batch gradient descent with per-epoch ROC-AUC evaluation.
///
/// The device is picked once at construction; there is no early stopping,
/// mid-run checkpointing, or learning-rate scheduling.
pub struct Trainer {
    config: TrainConfig,
    device: Device,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Result<Self> {
        let device = Self::select_device(&config)?;
        debug!("Using device: {:?}", device);
        Ok(Self { config, device })
    }

    /// Select the best available device.
    fn select_device(config: &TrainConfig) -> Result<Device> {
        if !config.use_gpu {
            return Ok(Device::Cpu);
        }

        #[cfg(feature = "cuda")]
        {
            match Device::new_cuda(0) {
                Ok(device) => {
                    tracing::info!("CUDA device available");
                    return Ok(device);
                }
                Err(e) => {
                    debug!("CUDA not available: {}, falling back to CPU", e);
                }
            }
        }

        #[cfg(feature = "metal")]
        {
            match Device::new_metal(0) {
                Ok(device) => {
                    tracing::info!("Metal device available");
                    return Ok(device);
                }
                Err(e) => {
                    debug!("Metal not available: {}, falling back to CPU", e);
                }
            }
        }

        Ok(Device::Cpu)
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Train `model` on `train` and evaluate on `eval` every epoch.
    ///
    /// Each epoch shuffles the training set, steps the optimizer once per
    /// mini-batch, then scores the whole evaluation set and prints one
    /// `Epoch NN | Loss: X.XXXX | AUC: X.XXXX` line.
    pub fn fit(
        &self,
        model: &dyn GnnModule,
        varmap: &VarMap,
        train: &[MolGraph],
        eval: &[MolGraph],
    ) -> Result<TrainingHistory> {
        if train.is_empty() || eval.is_empty() {
            return Err(GnnError::Data(
                "training and evaluation sets must both be non-empty".to_string(),
            ));
        }

        let mut optimizer = candle_nn::AdamW::new(
            varmap.all_vars(),
            ParamsAdamW {
                lr: self.config.learning_rate,
                ..Default::default()
            },
        )?;

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut indices: Vec<usize> = (0..train.len()).collect();
        let mut history = TrainingHistory::default();

        for epoch in 1..=self.config.epochs {
            indices.shuffle(&mut rng);

            let mut total_loss = 0.0f32;
            let mut num_batches = 0usize;
            for chunk in indices.chunks(self.config.batch_size) {
                let graphs: Vec<&MolGraph> = chunk.iter().map(|&i| &train[i]).collect();
                let batch = Batch::from_graphs(&graphs, &self.device)?;

                let logits = model.forward(&batch)?;
                let batch_loss = loss::cross_entropy(&logits, &batch.labels)?;
                optimizer.backward_step(&batch_loss)?;

                total_loss += batch_loss.to_scalar::<f32>()?;
                num_batches += 1;
            }
            let train_loss = total_loss / num_batches as f32;

            let (scores, labels) = self.evaluate(model, eval)?;
            let eval_auc = roc_auc(&scores, &labels)?;

            println!("Epoch {epoch:02} | Loss: {train_loss:.4} | AUC: {eval_auc:.4}");
            history.epochs.push(EpochRecord {
                epoch,
                train_loss,
                eval_auc,
            });
        }

        Ok(history)
    }

    /// Score `graphs` with `model`, returning positive-class probabilities
    /// (softmax over the two logits) alongside the true labels.
    pub fn evaluate(
        &self,
        model: &dyn GnnModule,
        graphs: &[MolGraph],
    ) -> Result<(Vec<f32>, Vec<u8>)> {
        let mut scores = Vec::with_capacity(graphs.len());
        let mut labels = Vec::with_capacity(graphs.len());

        for chunk in graphs.chunks(self.config.batch_size) {
            let refs: Vec<&MolGraph> = chunk.iter().collect();
            let batch = Batch::from_graphs(&refs, &self.device)?;

            let logits = model.forward(&batch)?;
            let probs = ops::softmax(&logits, D::Minus1)?;
            let positive = probs.narrow(1, 1, 1)?.squeeze(1)?.to_vec1::<f32>()?;

            scores.extend(positive);
            labels.extend(chunk.iter().map(|g| g.label.unwrap_or(0)));
        }

        Ok((scores, labels))
    }
}
