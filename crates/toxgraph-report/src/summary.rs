//! Textual summary of the metrics table.

use std::fmt::Write;

use crate::tables::{self, ModelMetrics, QualityMetric};

/// Build the console summary: the table sorted by F1 score, the headline
/// models, and each model's percentage gap from the best one.
pub fn render_summary(models: &[ModelMetrics]) -> String {
    let mut out = String::new();

    let mut by_f1: Vec<&ModelMetrics> = models.iter().collect();
    by_f1.sort_by(|a, b| b.f1_score.total_cmp(&a.f1_score));

    let _ = writeln!(out, "\nModel Performance Summary (Sorted by F1-Score):");
    let _ = writeln!(
        out,
        "{:<8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Model", "Time (min)", "Precision", "Recall", "F1-Score", "Accuracy", "AUC-ROC"
    );
    for m in &by_f1 {
        let _ = writeln!(
            out,
            "{:<8} {:>10.0} {:>10.3} {:>10.3} {:>10.3} {:>10.4} {:>10.3}",
            m.name,
            m.training_time_min,
            m.precision,
            m.recall,
            m.f1_score,
            m.accuracy,
            m.auc_roc
        );
    }

    let Some(best) = tables::best_by_f1(models) else {
        let _ = writeln!(out, "\n(no models in table)");
        return out;
    };
    let _ = writeln!(
        out,
        "\nBest performing model (by F1-Score): {}",
        best.name
    );
    if let Some(fastest) = tables::fastest_by_training_time(models) {
        let _ = writeln!(out, "Fastest model (by Training Time): {}", fastest.name);
    }

    let _ = writeln!(
        out,
        "\nPercentage Difference from Best Model ({}):",
        best.name
    );
    let _ = write!(out, "{:<8}", "Model");
    for metric in QualityMetric::ALL {
        let _ = write!(out, " {:>18}", format!("{} (%)", metric.label()));
    }
    let _ = writeln!(out);
    for m in models {
        let _ = write!(out, "{:<8}", m.name);
        for metric in QualityMetric::ALL {
            let diff = tables::percent_diff(m.quality(metric), best.quality(metric));
            let _ = write!(out, " {:>18.2}", diff);
        }
        let _ = writeln!(out);
    }

    out
}
