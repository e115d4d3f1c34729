pub mod algorithm;
pub mod config;
pub mod merge;
pub mod scoring;

pub use algorithm::{segment_scores, Segmentation};
pub use config::SegmentationConfig;
