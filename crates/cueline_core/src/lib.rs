// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cue-driven pacing for scripted animation scenes.
//!
//! A scene's temporal structure is declared once, as a flat cue sheet of
//! "when does each beat happen" timestamps. The scene body is then a
//! sequence of [`Timeline::next_duration`] calls whose order mirrors the
//! sheet, so tuning the pacing means editing the sheet, never the animation
//! logic.
//!
//! The pieces:
//! - [`CueSheet`]: validated, immutable list of absolute cue timestamps
//! - [`CueScheduler`]: one-shot cursor over the relative durations between
//!   consecutive cues
//! - [`Timeline`]: the handle a scene owns, with explicit optional
//!   configuration and lazy scheduler creation
//!
//! Produced durations are handed opaquely to the rendering engine's
//! play/wait primitives. This crate only decides how long each beat lasts,
//! never what is animated.

pub mod cue;
pub mod scheduler;
pub mod timeline;

pub use cue::{Beat, CueSheet, CueSheetError};
pub use scheduler::{CueError, CueScheduler};
pub use timeline::{Timeline, TimelineState};
