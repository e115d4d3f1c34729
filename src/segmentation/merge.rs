use crate::error::SegmentationError;
use crate::models::{LabelMap, Segment};
use crate::segmentation::config::SegmentationConfig;
use crate::segmentation::scoring::combined_confidence;

/// A segment shorter than the minimum duration for its label class.
pub(crate) fn is_orphan(
    segment: &Segment,
    labels: &LabelMap,
    config: &SegmentationConfig,
) -> bool {
    let min_run = if labels.is_blank(segment.label) {
        config.min_blank_run
    } else {
        config.min_real_run
    };
    segment.run_length() < min_run
}

/// Indices of every orphan in the current sequence.
///
/// Recomputed from scratch after each mutation, never cached: a merge
/// changes neighboring run lengths and can create or clear orphan status
/// anywhere in the sequence.
pub(crate) fn find_orphans(
    segments: &[Segment],
    labels: &LabelMap,
    config: &SegmentationConfig,
) -> Vec<usize> {
    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| is_orphan(segment, labels, config))
        .map(|(idx, _)| idx)
        .collect()
}

/// Pick the neighbor an orphan merges into.
///
/// Edge segments have only one choice. An interior orphan goes to the
/// strictly longer neighbor; equal run lengths go to the following segment.
pub(crate) fn choose_neighbor(
    segments: &[Segment],
    orphan: usize,
) -> Result<usize, SegmentationError> {
    if segments.len() < 2 {
        return Err(SegmentationError::DegenerateSequence);
    }
    if orphan == 0 {
        return Ok(1);
    }
    if orphan == segments.len() - 1 {
        return Ok(orphan - 1);
    }

    let previous = &segments[orphan - 1];
    let next = &segments[orphan + 1];
    if previous.run_length() > next.run_length() {
        Ok(orphan - 1)
    } else {
        Ok(orphan + 1)
    }
}

/// Merge the segment at `source` into the one at `neighbor` and delete it.
///
/// The neighbor's boundary extends over the absorbed range, its confidence
/// becomes the length-weighted mean of the pair, and its label survives
/// unchanged. `source` and `neighbor` must be adjacent.
pub(crate) fn merge_into_neighbor(segments: &mut Vec<Segment>, source: usize, neighbor: usize) {
    let absorbed = segments[source].clone();
    let kept = &mut segments[neighbor];
    let kept_len = kept.run_length();

    if source < neighbor {
        kept.start_frame = absorbed.start_frame;
    } else {
        kept.end_frame = absorbed.end_frame;
    }
    kept.confidence = combined_confidence(
        kept.confidence,
        kept_len,
        absorbed.confidence,
        absorbed.run_length(),
    );

    segments.remove(source);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: usize, end: usize, label: usize, confidence: f64) -> Segment {
        Segment {
            start_frame: start,
            end_frame: end,
            label,
            confidence,
        }
    }

    fn labels() -> LabelMap {
        LabelMap::new(2, [(0, "real"), (1, "warmup"), (2, "blank")]).unwrap()
    }

    #[test]
    fn test_orphan_policy_splits_on_blank() {
        let config = SegmentationConfig {
            min_real_run: 5,
            min_blank_run: 2,
        };
        let labels = labels();

        // A short non-blank run is an orphan; a blank run of the same
        // length clears its own, lower threshold.
        assert!(is_orphan(&segment(0, 3, 0, 0.9), &labels, &config));
        assert!(!is_orphan(&segment(0, 3, 2, 0.9), &labels, &config));
        assert!(is_orphan(&segment(0, 0, 2, 0.9), &labels, &config));
        assert!(!is_orphan(&segment(0, 4, 0, 0.9), &labels, &config));
    }

    #[test]
    fn test_find_orphans_reports_indices() {
        let config = SegmentationConfig {
            min_real_run: 3,
            min_blank_run: 1,
        };
        let segments = vec![
            segment(0, 4, 0, 0.9),
            segment(5, 5, 1, 0.4),
            segment(6, 9, 0, 0.8),
        ];
        assert_eq!(find_orphans(&segments, &labels(), &config), vec![1]);
    }

    #[test]
    fn test_edge_orphans_take_their_only_neighbor() {
        let segments = vec![
            segment(0, 0, 0, 0.5),
            segment(1, 5, 1, 0.9),
            segment(6, 6, 0, 0.5),
        ];
        assert_eq!(choose_neighbor(&segments, 0).unwrap(), 1);
        assert_eq!(choose_neighbor(&segments, 2).unwrap(), 1);
    }

    #[test]
    fn test_interior_orphan_takes_larger_neighbor() {
        let segments = vec![
            segment(0, 9, 0, 0.9),
            segment(10, 10, 1, 0.4),
            segment(11, 13, 0, 0.8),
        ];
        assert_eq!(choose_neighbor(&segments, 1).unwrap(), 0);

        let segments = vec![
            segment(0, 2, 0, 0.9),
            segment(3, 3, 1, 0.4),
            segment(4, 13, 0, 0.8),
        ];
        assert_eq!(choose_neighbor(&segments, 1).unwrap(), 2);
    }

    #[test]
    fn test_equal_neighbors_tie_goes_to_next() {
        let segments = vec![
            segment(0, 3, 0, 0.9),
            segment(4, 4, 1, 0.4),
            segment(5, 8, 2, 0.8),
        ];
        assert_eq!(choose_neighbor(&segments, 1).unwrap(), 2);
    }

    #[test]
    fn test_single_segment_has_no_neighbor() {
        let segments = vec![segment(0, 2, 0, 0.5)];
        assert!(matches!(
            choose_neighbor(&segments, 0),
            Err(SegmentationError::DegenerateSequence)
        ));
    }

    #[test]
    fn test_merge_into_following_neighbor() {
        let mut segments = vec![
            segment(0, 1, 1, 0.2),
            segment(2, 5, 0, 0.8),
        ];
        merge_into_neighbor(&mut segments, 0, 1);

        assert_eq!(segments.len(), 1);
        let merged = &segments[0];
        assert_eq!(merged.start_frame, 0);
        assert_eq!(merged.end_frame, 5);
        assert_eq!(merged.label, 0);
        assert_eq!(merged.run_length(), 6);
        // (0.8 * 4 + 0.2 * 2) / 6
        assert!((merged.confidence - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_merge_into_preceding_neighbor() {
        let mut segments = vec![
            segment(0, 3, 0, 0.9),
            segment(4, 5, 1, 0.3),
        ];
        merge_into_neighbor(&mut segments, 1, 0);

        assert_eq!(segments.len(), 1);
        let merged = &segments[0];
        assert_eq!(merged.start_frame, 0);
        assert_eq!(merged.end_frame, 5);
        assert_eq!(merged.label, 0);
        assert!((merged.confidence - 0.7).abs() < 1e-12);
    }
}
