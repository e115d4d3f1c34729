use thiserror::Error;

/// Errors surfaced while turning one score matrix into a segmentation.
#[derive(Error, Debug)]
pub enum SegmentationError {
    /// Malformed score matrix, a bad label vocabulary, or an unmapped label
    /// id reached the serializer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The sequence is a single segment, so an orphan has no neighbor to
    /// merge into. The glue pass catches this and keeps the segment as-is;
    /// it never escapes the public entry points.
    #[error("segmentation is a single segment; no neighbor to merge into")]
    DegenerateSequence,

    /// A fixed-point pass ran past its iteration cap. Every merge removes
    /// exactly one segment, so hitting the cap means a logic error rather
    /// than bad input.
    #[error("{pass} failed to converge within {limit} iterations")]
    ConvergenceExceeded { pass: &'static str, limit: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
