// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cue sheet data model.
//!
//! A cue sheet is the declarative half of a scene's pacing: an ordered list
//! of absolute timestamps, in seconds from scene start, at which each timed
//! action should begin. The matching relative durations are consumed one by
//! one through [`Timeline::next_duration`](crate::Timeline::next_duration).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a cue sheet.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CueSheetError {
    /// A timestamp is NaN or infinite.
    #[error("cue {index} is not a finite number")]
    NotFinite {
        /// Position of the offending cue.
        index: usize,
    },

    /// The first cue must come after the scene starts.
    #[error("first cue must be after time zero, got {value}")]
    StartsAtOrBeforeZero {
        /// The offending timestamp.
        value: f32,
    },

    /// Timestamps must strictly increase.
    #[error("cue {index} ({value}) is not after its predecessor ({prev})")]
    NotIncreasing {
        /// Position of the offending cue.
        index: usize,
        /// The preceding timestamp.
        prev: f32,
        /// The offending timestamp.
        value: f32,
    },
}

/// An ordered list of absolute cue timestamps, in seconds from scene start.
///
/// Timestamps are finite and strictly increasing, and the first cue lies
/// after time zero. An empty sheet is valid and declares zero beats.
///
/// The serialized form is a bare list of seconds, e.g. `[1.0, 3.0, 6.0]`.
/// Deserialization routes through [`CueSheet::new`], so malformed sheets are
/// rejected at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct CueSheet {
    cues: Vec<f32>,
}

impl CueSheet {
    /// Validate and build a cue sheet from absolute timestamps.
    pub fn new(cues: Vec<f32>) -> Result<Self, CueSheetError> {
        let mut prev = 0.0_f32;
        for (index, &value) in cues.iter().enumerate() {
            if !value.is_finite() {
                return Err(CueSheetError::NotFinite { index });
            }
            if index == 0 && value <= 0.0 {
                return Err(CueSheetError::StartsAtOrBeforeZero { value });
            }
            if index > 0 && value <= prev {
                return Err(CueSheetError::NotIncreasing { index, prev, value });
            }
            prev = value;
        }
        Ok(Self { cues })
    }

    /// Absolute timestamps in declaration order.
    pub fn cues(&self) -> &[f32] {
        &self.cues
    }

    /// Number of cues, and therefore of beats, declared.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the sheet declares no cues at all.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Timestamp of the final cue, if any.
    pub fn end_time(&self) -> Option<f32> {
        self.cues.last().copied()
    }

    /// Relative durations between consecutive cues, with an implicit cue at
    /// time zero prepended.
    pub fn durations(&self) -> Vec<f32> {
        let mut prev = 0.0_f32;
        self.cues
            .iter()
            .map(|&cue| {
                let duration = cue - prev;
                prev = cue;
                duration
            })
            .collect()
    }

    /// The full beat plan: start and duration of every timed action.
    pub fn beats(&self) -> Vec<Beat> {
        let mut prev = 0.0_f32;
        self.cues
            .iter()
            .enumerate()
            .map(|(index, &cue)| {
                let beat = Beat {
                    index,
                    start: prev,
                    duration: cue - prev,
                };
                prev = cue;
                beat
            })
            .collect()
    }
}

impl TryFrom<Vec<f32>> for CueSheet {
    type Error = CueSheetError;

    fn try_from(cues: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(cues)
    }
}

impl From<CueSheet> for Vec<f32> {
    fn from(sheet: CueSheet) -> Self {
        sheet.cues
    }
}

/// One timed action derived from a cue sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Beat {
    /// Zero-based position in the sheet.
    pub index: usize,
    /// Absolute start time in seconds (the previous cue, or scene start).
    pub start: f32,
    /// Seconds until the cue this beat runs up to.
    pub duration: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet_is_valid() {
        let sheet = CueSheet::new(Vec::new()).unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet.end_time(), None);
        assert!(sheet.durations().is_empty());
    }

    #[test]
    fn test_durations_are_gaps_from_time_zero() {
        let sheet = CueSheet::new(vec![1.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(sheet.durations(), vec![1.0, 3.0, 1.0, 1.0]);
        assert_eq!(sheet.end_time(), Some(6.0));
    }

    #[test]
    fn test_beat_plan_matches_durations() {
        let sheet = CueSheet::new(vec![1.0, 3.0, 6.0]).unwrap();
        let beats = sheet.beats();
        assert_eq!(beats.len(), 3);
        assert_eq!(beats[0].start, 0.0);
        assert_eq!(beats[0].duration, 1.0);
        assert_eq!(beats[2].index, 2);
        assert_eq!(beats[2].start, 3.0);
        assert_eq!(beats[2].duration, 3.0);
    }

    #[test]
    fn test_first_cue_at_zero_rejected() {
        let err = CueSheet::new(vec![0.0, 1.0]).unwrap_err();
        assert_eq!(err, CueSheetError::StartsAtOrBeforeZero { value: 0.0 });
    }

    #[test]
    fn test_equal_adjacent_cues_rejected() {
        let err = CueSheet::new(vec![1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            CueSheetError::NotIncreasing {
                index: 1,
                prev: 1.0,
                value: 1.0
            }
        );
    }

    #[test]
    fn test_nan_cue_rejected() {
        let err = CueSheet::new(vec![1.0, f32::NAN]).unwrap_err();
        assert_eq!(err, CueSheetError::NotFinite { index: 1 });
    }

    #[test]
    fn test_serde_rejects_unordered_sheet() {
        assert!(ron::from_str::<CueSheet>("[2.0, 1.0]").is_err());
        assert!(serde_json::from_str::<CueSheet>("[2.0, 1.0]").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let sheet = CueSheet::new(vec![1.0, 3.0, 6.0]).unwrap();
        let ron_str = ron::to_string(&sheet).unwrap();
        let loaded: CueSheet = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded, sheet);
    }
}
