use serde::{Deserialize, Serialize};

/// One maximal run of frames assigned a single label.
///
/// Frame bounds are inclusive. Segments are never free-standing: a
/// [`Segmentation`](crate::Segmentation) keeps them ordered by start frame
/// and exactly covering `[0, T)` with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_frame: usize,
    pub end_frame: usize,
    /// Id into the caller's label vocabulary.
    pub label: usize,
    /// Mean per-frame max score over the segment's frames. Measures how
    /// sure the classifier was, not how correct the segmentation is.
    pub confidence: f64,
}

impl Segment {
    /// Number of frames covered, derived from the bounds.
    pub fn run_length(&self) -> usize {
        self.end_frame - self.start_frame + 1
    }
}
