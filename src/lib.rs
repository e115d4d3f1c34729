//! Temporal segmentation of per-frame classifier scores.
//!
//! Takes the `[T, C]` score matrix an external frame classifier produced
//! for one video, run-length encodes the arg-max predictions into labeled
//! segments, glues undersized "orphan" segments into their neighbors, fuses
//! adjacent same-label runs, and writes the result as
//! `(start_frame, label_name)` CSV rows.

mod error;
mod export;
mod models;
mod segmentation;
mod utils;

pub use error::SegmentationError;
pub use export::{write_csv, write_csv_to};
pub use models::{LabelMap, Segment};
pub use segmentation::{segment_scores, Segmentation, SegmentationConfig};
