// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene-facing pacing handle.
//!
//! A scene owns exactly one [`Timeline`]. Scenes that declare a cue sheet
//! call [`Timeline::next_duration`] once per timed action, in the same order
//! as the sheet's beats; scenes without one keep their literal durations and
//! every call fails with [`CueError::NotConfigured`].

use crate::cue::CueSheet;
use crate::scheduler::{CueError, CueScheduler};

/// Observable pacing state, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// No duration has been requested yet; the scheduler does not exist.
    Uninitialized,
    /// The duration stream is live and not yet exhausted.
    Active,
    /// Every declared duration has been produced. No transition leaves this
    /// state; a fresh handle is required to restart.
    Exhausted,
}

/// Pacing handle owned by a single scene.
///
/// Configuration is explicit: either a validated [`CueSheet`] or nothing.
/// The scheduler is created lazily on the first duration request, not at
/// scene construction.
#[derive(Debug)]
pub struct Timeline {
    sheet: Option<CueSheet>,
    scheduler: Option<CueScheduler>,
}

impl Timeline {
    /// Handle built from optional configuration, e.g. a deserialized scene
    /// config.
    pub fn new(sheet: Option<CueSheet>) -> Self {
        Self {
            sheet,
            scheduler: None,
        }
    }

    /// Handle for a scene that declared a cue sheet.
    pub fn cued(sheet: CueSheet) -> Self {
        Self::new(Some(sheet))
    }

    /// Handle for a scene that paces itself with literal durations.
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    /// The configured cue sheet, if any.
    pub fn sheet(&self) -> Option<&CueSheet> {
        self.sheet.as_ref()
    }

    /// Duration of the scene's next beat.
    ///
    /// The first successful call derives the duration stream from the cue
    /// sheet. Fails with [`CueError::NotConfigured`] when no sheet was
    /// declared, and with [`CueError::Exhausted`] once the scene has
    /// requested more beats than the sheet declares.
    pub fn next_duration(&mut self) -> Result<f32, CueError> {
        let Some(sheet) = &self.sheet else {
            return Err(CueError::NotConfigured);
        };
        let scheduler = self.scheduler.get_or_insert_with(|| {
            tracing::debug!(beats = sheet.len(), "cue timeline active");
            CueScheduler::new(sheet)
        });
        scheduler.next_duration()
    }

    /// Current pacing state.
    pub fn state(&self) -> TimelineState {
        match &self.scheduler {
            None => TimelineState::Uninitialized,
            Some(scheduler) if scheduler.is_exhausted() => TimelineState::Exhausted,
            Some(_) => TimelineState::Active,
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::unconfigured()
    }
}
