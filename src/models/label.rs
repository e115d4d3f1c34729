//! Label vocabulary supplied by the caller.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::SegmentationError;

/// Injective label id -> name mapping plus the designated blank class id.
///
/// Passed in at call time rather than held as shared state, so one process
/// can segment output from classifiers with different vocabularies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelMap {
    names: HashMap<usize, String>,
    blank_id: usize,
}

impl LabelMap {
    /// Build a vocabulary from `(id, name)` pairs.
    ///
    /// Duplicate ids or duplicate names break injectivity and are rejected.
    /// The blank id itself does not need a name; it only needs one if a
    /// blank segment survives to serialization.
    pub fn new<I, S>(blank_id: usize, names: I) -> Result<Self, SegmentationError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        let mut seen = HashSet::new();
        for (id, name) in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(SegmentationError::InvalidInput(format!(
                    "label name '{name}' is mapped from more than one id"
                )));
            }
            if map.insert(id, name).is_some() {
                return Err(SegmentationError::InvalidInput(format!(
                    "label id {id} appears more than once"
                )));
            }
        }

        Ok(Self { names: map, blank_id })
    }

    /// The id of the background/blank class.
    pub fn blank_id(&self) -> usize {
        self.blank_id
    }

    pub fn is_blank(&self, label: usize) -> bool {
        label == self.blank_id
    }

    /// Human-readable name for a label id, if one was supplied.
    pub fn name(&self, label: usize) -> Option<&str> {
        self.names.get(&label).map(String::as_str)
    }
}
