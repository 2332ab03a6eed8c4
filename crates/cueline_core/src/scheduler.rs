// SPDX-License-Identifier: MIT OR Apache-2.0
//! One-shot cursor over the relative durations of a cue sheet.

use crate::cue::CueSheet;
use thiserror::Error;

/// Errors surfaced when a scene requests its next beat duration.
///
/// Both kinds signal a static authoring mistake on the caller's side. They
/// are fatal for the scene being constructed and are never masked with a
/// fallback duration, which would silently corrupt the pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CueError {
    /// The scene declared no cue sheet; it paces itself with literal
    /// durations instead.
    #[error("no cue sheet configured for this scene")]
    NotConfigured,

    /// The scene requested more durations than its sheet declares.
    #[error("cue sheet exhausted: all {declared} durations already produced")]
    Exhausted {
        /// Number of cues the sheet declared.
        declared: usize,
    },
}

/// Stateful, single-pass cursor that hands out the gaps between consecutive
/// cues in declaration order.
///
/// The durations are copied out of the [`CueSheet`] at construction, never
/// aliased. Exactly `len` calls to [`next_duration`](Self::next_duration)
/// succeed and there is no rewind; a fresh scheduler is required to restart.
#[derive(Debug, Clone)]
pub struct CueScheduler {
    durations: Vec<f32>,
    cursor: usize,
}

impl CueScheduler {
    /// Derive the relative-duration stream from a cue sheet.
    pub fn new(sheet: &CueSheet) -> Self {
        Self {
            durations: sheet.durations(),
            cursor: 0,
        }
    }

    /// Produce the next duration and advance the cursor.
    pub fn next_duration(&mut self) -> Result<f32, CueError> {
        let Some(&duration) = self.durations.get(self.cursor) else {
            return Err(CueError::Exhausted {
                declared: self.durations.len(),
            });
        };
        self.cursor += 1;
        tracing::trace!(beat = self.cursor, duration, "cue duration produced");
        Ok(duration)
    }

    /// Durations already handed out.
    pub fn produced(&self) -> usize {
        self.cursor
    }

    /// Durations still available.
    pub fn remaining(&self) -> usize {
        self.durations.len() - self.cursor
    }

    /// Whether every declared duration has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.durations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cues: &[f32]) -> CueSheet {
        CueSheet::new(cues.to_vec()).unwrap()
    }

    #[test]
    fn test_durations_in_cue_order() {
        let mut scheduler = CueScheduler::new(&sheet(&[1.0, 3.0, 6.0]));
        assert_eq!(scheduler.next_duration(), Ok(1.0));
        assert_eq!(scheduler.next_duration(), Ok(2.0));
        assert_eq!(scheduler.next_duration(), Ok(3.0));
        assert_eq!(
            scheduler.next_duration(),
            Err(CueError::Exhausted { declared: 3 })
        );
    }

    #[test]
    fn test_produced_plus_remaining_is_total() {
        let mut scheduler = CueScheduler::new(&sheet(&[1.0, 4.0, 5.0, 6.0]));
        for produced in 0..4 {
            assert_eq!(scheduler.produced(), produced);
            assert_eq!(scheduler.produced() + scheduler.remaining(), 4);
            scheduler.next_duration().unwrap();
        }
        assert!(scheduler.is_exhausted());
        assert_eq!(scheduler.produced() + scheduler.remaining(), 4);
    }

    #[test]
    fn test_empty_sheet_exhausts_immediately() {
        let mut scheduler = CueScheduler::new(&sheet(&[]));
        assert!(scheduler.is_exhausted());
        assert_eq!(
            scheduler.next_duration(),
            Err(CueError::Exhausted { declared: 0 })
        );
    }

    #[test]
    fn test_schedulers_do_not_share_state() {
        let sheet = sheet(&[1.0, 3.0, 6.0]);
        let mut a = CueScheduler::new(&sheet);
        let mut b = CueScheduler::new(&sheet);
        assert_eq!(a.next_duration(), Ok(1.0));
        assert_eq!(a.next_duration(), Ok(2.0));
        assert_eq!(b.next_duration(), Ok(1.0));
        assert_eq!(a.next_duration(), Ok(3.0));
        assert_eq!(b.next_duration(), Ok(2.0));
        assert_eq!(b.next_duration(), Ok(3.0));
    }
}
