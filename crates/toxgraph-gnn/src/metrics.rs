//! Evaluation metrics.

use crate::error::{GnnError, Result};

/// Compute the area under the ROC curve.
///
/// Rank-based trapezoidal accumulation over scores sorted descending; tied
/// scores are processed as one group so their internal order cannot shift
/// the result.
///
/// A label set with a single class has no ROC curve; that is a hard error
/// here rather than a placeholder value, because every evaluation split in
/// this pipeline is expected to carry both classes.
pub fn roc_auc(scores: &[f32], labels: &[u8]) -> Result<f64> {
    if scores.len() != labels.len() {
        return Err(GnnError::Data(format!(
            "score/label length mismatch: {} vs {}",
            scores.len(),
            labels.len()
        )));
    }
    let total = labels.len();
    let positives = labels.iter().filter(|&&l| l == 1).count();
    let negatives = total - positives;
    if positives == 0 || negatives == 0 {
        return Err(GnnError::DegenerateLabels { positives, total });
    }

    let mut indices: Vec<usize> = (0..total).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut tp = 0.0f64;
    let mut fp = 0.0f64;
    let mut auc = 0.0f64;
    let mut i = 0;
    while i < total {
        // One step per group of equal scores
        let mut j = i;
        let mut group_tp = 0.0;
        let mut group_fp = 0.0;
        while j < total && scores[indices[j]] == scores[indices[i]] {
            if labels[indices[j]] == 1 {
                group_tp += 1.0;
            } else {
                group_fp += 1.0;
            }
            j += 1;
        }

        // Trapezoidal rule
        auc += group_fp * (tp + tp + group_tp) / 2.0;
        tp += group_tp;
        fp += group_fp;
        i = j;
    }
    debug_assert_eq!((tp, fp), (positives as f64, negatives as f64));

    Ok(auc / (positives as f64 * negatives as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_separation() {
        let scores = [0.9, 0.8, 0.2, 0.1];
        let labels = [1, 1, 0, 0];
        assert!((roc_auc(&scores, &labels).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverted_separation() {
        let scores = [0.1, 0.2, 0.8, 0.9];
        let labels = [1, 1, 0, 0];
        assert!(roc_auc(&scores, &labels).unwrap().abs() < 1e-12);
    }

    #[test]
    fn partial_ranking() {
        // Pairs: (pos 0.8 > neg 0.6), (pos 0.8 > neg 0.3),
        //        (pos 0.4 < neg 0.6), (pos 0.4 > neg 0.3) -> 3/4
        let scores = [0.8, 0.4, 0.6, 0.3];
        let labels = [1, 1, 0, 0];
        assert!((roc_auc(&scores, &labels).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn ties_count_half() {
        let scores = [0.5, 0.5];
        let labels = [1, 0];
        assert!((roc_auc(&scores, &labels).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn single_class_fails_loudly() {
        let err = roc_auc(&[0.1, 0.9], &[1, 1]).unwrap_err();
        assert!(matches!(
            err,
            GnnError::DegenerateLabels {
                positives: 2,
                total: 2
            }
        ));
        assert!(roc_auc(&[0.1, 0.9], &[0, 0]).is_err());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(roc_auc(&[0.1], &[1, 0]).is_err());
    }
}
