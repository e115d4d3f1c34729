use ndarray::ArrayView2;

use crate::error::SegmentationError;
use crate::models::{LabelMap, Segment};
use crate::segmentation::config::SegmentationConfig;
use crate::segmentation::merge::{choose_neighbor, find_orphans, merge_into_neighbor};
use crate::segmentation::scoring::reduce_scores;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

// Import the logging macros (exported at crate root)
use crate::{log_debug, log_info};

/// An ordered, gap-free labeling of every frame in `[0, T)`.
///
/// Built once from a score matrix, then mutated in place by the gluing and
/// adjacent-merge passes. Between public operations the segments are always
/// sorted by start frame and partition the frame range exactly; no segment
/// is ever created after construction, only merged away.
#[derive(Debug, Clone)]
pub struct Segmentation {
    segments: Vec<Segment>,
}

impl Segmentation {
    /// Run-length encode the per-frame arg-max predictions of `scores`.
    ///
    /// A segment boundary falls at frame 0 and wherever the predicted label
    /// changes; segment confidence is the mean of its frames' max scores.
    pub fn from_scores(scores: ArrayView2<'_, f32>) -> Result<Self, SegmentationError> {
        let (labels, confidences) = reduce_scores(scores)?;

        let mut segments = Vec::new();
        let mut start = 0usize;
        for t in 1..=labels.len() {
            if t < labels.len() && labels[t] == labels[t - 1] {
                continue;
            }
            let confidence = confidences[start..t]
                .iter()
                .map(|&c| f64::from(c))
                .sum::<f64>()
                / (t - start) as f64;
            segments.push(Segment {
                start_frame: start,
                end_frame: t - 1,
                label: labels[start],
                confidence,
            });
            start = t;
        }

        Ok(Self { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The current segments, ordered by start frame.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Merge undersized segments into their neighbors until none remain.
    ///
    /// Each round re-derives the orphan set against the mutated sequence,
    /// targets the least-confident orphan (ties: first in order), and
    /// absorbs it into the neighbor picked by position and run length. A
    /// sequence that has shrunk to a single undersized segment is left
    /// as-is; there is nothing to glue it into.
    pub fn glue_orphans(
        &mut self,
        labels: &LabelMap,
        config: &SegmentationConfig,
    ) -> Result<(), SegmentationError> {
        let limit = self.segments.len() + 1;
        for _ in 0..limit {
            let orphans = find_orphans(&self.segments, labels, config);
            let Some(&target) = orphans.iter().min_by(|&&a, &&b| {
                self.segments[a]
                    .confidence
                    .total_cmp(&self.segments[b].confidence)
            }) else {
                return Ok(());
            };

            match choose_neighbor(&self.segments, target) {
                Ok(neighbor) => {
                    log_debug!(
                        "gluing orphan at {} ({} frames) into neighbor at {}",
                        target,
                        self.segments[target].run_length(),
                        neighbor
                    );
                    merge_into_neighbor(&mut self.segments, target, neighbor);
                }
                Err(SegmentationError::DegenerateSequence) => {
                    log_info!(
                        "lone segment of {} frames is under threshold; nothing to glue into",
                        self.segments[target].run_length()
                    );
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }

        Err(SegmentationError::ConvergenceExceeded {
            pass: "orphan gluing",
            limit,
        })
    }

    /// Fuse consecutive segments that share a label.
    ///
    /// Gluing can remove the separator between two same-label segments, so
    /// this runs as its own fixed point: find the leftmost adjacent match,
    /// merge the left segment into the right, rescan from the front.
    pub fn combine_adjacent(&mut self) -> Result<(), SegmentationError> {
        let limit = self.segments.len() + 1;
        for _ in 0..limit {
            let matched = (0..self.segments.len().saturating_sub(1))
                .find(|&idx| self.segments[idx].label == self.segments[idx + 1].label);
            let Some(idx) = matched else {
                return Ok(());
            };
            merge_into_neighbor(&mut self.segments, idx, idx + 1);
        }

        Err(SegmentationError::ConvergenceExceeded {
            pass: "adjacent merge",
            limit,
        })
    }
}

/// Main entry point: transforms a score matrix into a clean segmentation.
///
/// Chains the full pipeline: arg-max reduction, run-length encoding, orphan
/// gluing under `config`'s thresholds, and the adjacent-merge cleanup pass.
pub fn segment_scores(
    scores: ArrayView2<'_, f32>,
    labels: &LabelMap,
    config: &SegmentationConfig,
) -> Result<Segmentation, SegmentationError> {
    let mut segmentation = Segmentation::from_scores(scores)?;
    log_info!(
        "encoded {} raw segments from {} frames",
        segmentation.len(),
        scores.nrows()
    );

    segmentation.glue_orphans(labels, config)?;
    log_debug!("{} segments after orphan gluing", segmentation.len());

    segmentation.combine_adjacent()?;
    log_info!("{} segments after gluing and adjacent merge", segmentation.len());

    Ok(segmentation)
}
