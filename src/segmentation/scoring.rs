use ndarray::ArrayView2;

use crate::error::SegmentationError;

/// Reduce a `[T, C]` score matrix to per-frame predictions.
///
/// Each row collapses to `(arg-max index, max value)`; arg-max ties resolve
/// to the lowest class index. Returns the labels and max scores as two
/// parallel sequences of length `T`.
///
/// An empty matrix (no frames or no classes) and non-finite scores are
/// rejected up front rather than propagated into the segmentation.
pub(crate) fn reduce_scores(
    scores: ArrayView2<'_, f32>,
) -> Result<(Vec<usize>, Vec<f32>), SegmentationError> {
    let (frames, classes) = scores.dim();
    if frames == 0 {
        return Err(SegmentationError::InvalidInput(
            "score matrix has no frames".into(),
        ));
    }
    if classes == 0 {
        return Err(SegmentationError::InvalidInput(
            "score matrix has no classes".into(),
        ));
    }

    let mut labels = Vec::with_capacity(frames);
    let mut confidences = Vec::with_capacity(frames);
    for (frame, row) in scores.rows().into_iter().enumerate() {
        let mut best_class = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (class, &score) in row.iter().enumerate() {
            if !score.is_finite() {
                return Err(SegmentationError::InvalidInput(format!(
                    "non-finite score {score} at frame {frame}, class {class}"
                )));
            }
            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }
        labels.push(best_class);
        confidences.push(best_score);
    }

    Ok((labels, confidences))
}

/// Length-weighted mean of two segment confidences.
pub(crate) fn combined_confidence(
    kept_confidence: f64,
    kept_len: usize,
    absorbed_confidence: f64,
    absorbed_len: usize,
) -> f64 {
    let total = (kept_len + absorbed_len) as f64;
    (kept_confidence * kept_len as f64 + absorbed_confidence * absorbed_len as f64) / total
}
