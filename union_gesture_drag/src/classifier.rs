// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag classifier: turn pointer phases into drag values and preempt early swipes.
//!
//! ## Usage
//!
//! 1) Create a [`DragClassifier`] with a [`DragConfig`].
//! 2) Feed every phase event from the pointer source to [`DragClassifier::on_phase`].
//! 3) Act on the returned [`DragAction`]: notify observers for the `Emit*` variants,
//!    and restart the native recognizer on [`DragAction::AbortAndReset`].
//!
//! A session starts at [`DragPhase::Began`] and ends at [`DragPhase::Ended`],
//! [`DragPhase::Cancelled`], a detected swipe, or a detached view.
//!
//! ## Swipe-to-dismiss
//!
//! When [`DragConfig::allows_swipe_to_dismiss`] is set, `Changed` samples that
//! arrive strictly within [`SWIPE_DECISION_WINDOW`] of the session start are
//! checked for a steep downward motion. A vertical translation greater than
//! [`SWIPE_MIN_DISTANCE`] that also exceeds [`SWIPE_STEEPNESS`] times the
//! horizontal translation aborts the drag so a competing dismiss gesture can
//! take over. The first `Changed` sample outside the window latches the check
//! off for the rest of the session.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use union_gesture_drag::classifier::{AbortReason, DragAction, DragClassifier, DragConfig, DragPhase};
//! use union_gesture_drag::value::DragSample;
//!
//! let mut drag = DragClassifier::new(DragConfig::swipe_to_dismiss());
//!
//! let began = DragSample::new(Duration::ZERO, Point::new(100.0, 100.0));
//! assert!(matches!(drag.on_phase(DragPhase::Began, began, true), DragAction::EmitBegan(_)));
//!
//! // A fast, steep downward flick inside the decision window is a swipe.
//! let flick = DragSample::new(Duration::from_millis(50), Point::new(105.0, 140.0));
//! assert_eq!(
//!     drag.on_phase(DragPhase::Changed, flick, true),
//!     DragAction::AbortAndReset(AbortReason::SwipeToDismiss)
//! );
//! assert!(!drag.is_active());
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::value::{DragSample, DragValue};

/// Time after session start during which a swipe may still be detected.
pub const SWIPE_DECISION_WINDOW: Duration = Duration::from_millis(100);

/// Minimum vertical translation for a motion to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f64 = 20.0;

/// Ratio by which vertical translation must exceed horizontal translation.
pub const SWIPE_STEEPNESS: f64 = 1.5;

/// Lifecycle phase reported by the pointer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// The pointer went down and the drag started.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was released.
    Ended,
    /// The platform cancelled the interaction.
    Cancelled,
    /// Any other state the host may report (possible, failed, ...).
    Other,
}

/// Why a session was aborted without an end notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbortReason {
    /// An early steep motion was classified as swipe-to-dismiss.
    SwipeToDismiss,
    /// The view hosting the recognizer is no longer attached.
    ViewDetached,
}

/// What the caller should do in response to a phase event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    /// A session started.
    ///
    /// Observers get a began notification followed by a changed
    /// notification carrying this initial value.
    EmitBegan(DragValue),
    /// The drag moved.
    EmitChanged(DragValue),
    /// The drag finished, either released or cancelled.
    EmitEnded(DragValue),
    /// The session was discarded; no value is emitted. The host should
    /// restart its recognizer so pending recognition is dropped.
    AbortAndReset(AbortReason),
    /// Nothing to do.
    Noop,
}

/// Classifier configuration, fixed for the lifetime of a [`DragClassifier`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragConfig {
    /// Whether early steep downward motion cancels the drag in favor of a
    /// dismiss gesture. Defaults to `false`.
    pub allows_swipe_to_dismiss: bool,
}

impl DragConfig {
    /// Configuration with swipe-to-dismiss disabled.
    pub const fn new() -> Self {
        Self {
            allows_swipe_to_dismiss: false,
        }
    }

    /// Configuration with swipe-to-dismiss enabled.
    pub const fn swipe_to_dismiss() -> Self {
        Self {
            allows_swipe_to_dismiss: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SessionState {
    start_location: Option<Point>,
    start_time: Option<Duration>,
    swipe_check_done: bool,
}

/// Stateful drag recognizer for a single active touch.
///
/// Not meant to be shared between threads; drive it from the one context that
/// delivers pointer events.
#[derive(Debug, Clone, Default)]
pub struct DragClassifier {
    config: DragConfig,
    session: SessionState,
}

impl DragClassifier {
    /// Create an idle classifier.
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            session: SessionState::default(),
        }
    }

    /// The configuration this classifier was created with.
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Returns `true` between `Began` and the end of the session.
    pub fn is_active(&self) -> bool {
        self.session.start_location.is_some()
    }

    /// Location captured at `Began`, if a session is active.
    pub fn start_location(&self) -> Option<Point> {
        self.session.start_location
    }

    /// Timestamp captured at `Began`, if a session is active.
    pub fn start_time(&self) -> Option<Duration> {
        self.session.start_time
    }

    /// Returns `true` once the swipe decision has been made for this session.
    pub fn swipe_check_done(&self) -> bool {
        self.session.swipe_check_done
    }

    /// Drop any session state and return to idle.
    pub fn reset(&mut self) {
        self.session = SessionState::default();
    }

    /// Process one phase event and report what the caller should do.
    ///
    /// A detached view always aborts the session, whatever `phase` is.
    pub fn on_phase(
        &mut self,
        phase: DragPhase,
        sample: DragSample,
        is_view_attached: bool,
    ) -> DragAction {
        if !is_view_attached {
            debug!("drag aborted: view detached");
            self.reset();
            return DragAction::AbortAndReset(AbortReason::ViewDetached);
        }

        match phase {
            DragPhase::Began => {
                self.session = SessionState {
                    start_location: Some(sample.location),
                    start_time: Some(sample.timestamp),
                    swipe_check_done: false,
                };
                debug!("drag began at {:?}", sample.location);
                DragAction::EmitBegan(self.value_for(sample))
            }
            DragPhase::Changed => {
                if self.config.allows_swipe_to_dismiss && !self.session.swipe_check_done {
                    match self.session.start_time {
                        Some(start)
                            if sample.timestamp.saturating_sub(start) < SWIPE_DECISION_WINDOW =>
                        {
                            if is_swipe(self.value_for(sample).translation()) {
                                debug!("drag aborted: swipe to dismiss");
                                self.reset();
                                return DragAction::AbortAndReset(AbortReason::SwipeToDismiss);
                            }
                        }
                        _ => {
                            trace!("swipe decision window elapsed");
                            self.session.swipe_check_done = true;
                        }
                    }
                }
                DragAction::EmitChanged(self.value_for(sample))
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                let value = self.value_for(sample);
                self.reset();
                debug!("drag ended ({phase:?}) with translation {:?}", value.translation());
                DragAction::EmitEnded(value)
            }
            DragPhase::Other => DragAction::Noop,
        }
    }

    fn value_for(&self, sample: DragSample) -> DragValue {
        DragValue::from_sample(sample, self.session.start_location)
    }
}

fn is_swipe(translation: Vec2) -> bool {
    let dy = translation.y;
    let dx = translation.x.abs();
    dy > SWIPE_MIN_DISTANCE && dy > dx * SWIPE_STEEPNESS
}
