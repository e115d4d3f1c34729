//! CSV emission of a finished segmentation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::SegmentationError;
use crate::models::LabelMap;
use crate::segmentation::Segmentation;

/// Write one `(start_frame, label_name)` row per segment to `sink`, in
/// ascending start order.
///
/// No header row, and no end frames: a segment ends where the next row
/// starts, and the last one runs to the end of the video. A label id with
/// no name in `labels` fails the write with `InvalidInput`.
pub fn write_csv_to<W: Write>(
    segmentation: &Segmentation,
    labels: &LabelMap,
    sink: W,
) -> Result<(), SegmentationError> {
    let mut writer = csv::Writer::from_writer(sink);
    for segment in segmentation.segments() {
        let name = labels.name(segment.label).ok_or_else(|| {
            SegmentationError::InvalidInput(format!(
                "no name mapped for label id {}",
                segment.label
            ))
        })?;
        writer.write_record([segment.start_frame.to_string().as_str(), name])?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the segmentation to a CSV file at `path`.
///
/// The file is created (or truncated) and closed on every exit path.
pub fn write_csv<P: AsRef<Path>>(
    segmentation: &Segmentation,
    labels: &LabelMap,
    path: P,
) -> Result<(), SegmentationError> {
    let file = File::create(path)?;
    write_csv_to(segmentation, labels, file)
}
