/// Configuration for the gluing pass with tunable duration thresholds.
#[derive(Debug, Clone)]
pub struct SegmentationConfig {
    /// Minimum run length (frames) for a non-blank segment.
    pub min_real_run: usize,

    /// Minimum run length (frames) for a blank segment.
    pub min_blank_run: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_real_run: 100,
            min_blank_run: 10,
        }
    }
}
