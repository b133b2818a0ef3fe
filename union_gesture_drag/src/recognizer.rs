// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host adapter: connect a [`DragClassifier`] to a native recognizer and observers.
//!
//! The classifier only decides what should happen. [`DragRecognizer`] carries
//! out those decisions:
//!
//! - [`DragAction::EmitBegan`] calls `on_began`, then `on_changed` with the initial value.
//! - [`DragAction::EmitChanged`] calls `on_changed`.
//! - [`DragAction::EmitEnded`] calls `on_ended`.
//! - [`DragAction::AbortAndReset`] calls no handler and asks the [`GestureHost`]
//!   to restart its native recognizer.
//!
//! The drag always allows simultaneous recognition with other gestures, so a
//! competing dismiss gesture can claim the input after an abort.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use core::time::Duration;
//! use kurbo::Point;
//! use std::rc::Rc;
//! use union_gesture_drag::classifier::{AbortReason, DragConfig, DragPhase};
//! use union_gesture_drag::recognizer::{DragHandlers, DragRecognizer, GestureHost};
//! use union_gesture_drag::value::DragSample;
//!
//! #[derive(Default)]
//! struct Host {
//!     restarts: usize,
//! }
//!
//! impl GestureHost for Host {
//!     fn restart_recognition(&mut self, _reason: AbortReason) {
//!         self.restarts += 1;
//!     }
//! }
//!
//! let moved = Rc::new(Cell::new(0.0));
//! let mut handlers = DragHandlers::new();
//! let sink = moved.clone();
//! handlers.on_changed(move |value| sink.set(value.translation().x));
//!
//! let mut drag = DragRecognizer::attach(Host::default(), DragConfig::swipe_to_dismiss(), handlers);
//! drag.handle(DragPhase::Began, DragSample::new(Duration::ZERO, Point::new(0.0, 0.0)), true);
//! drag.handle(DragPhase::Changed, DragSample::new(Duration::from_millis(30), Point::new(25.0, 2.0)), true);
//! assert_eq!(moved.get(), 25.0);
//!
//! // A steep flick restarts the host recognizer instead of reporting a value.
//! drag.handle(DragPhase::Began, DragSample::new(Duration::from_secs(1), Point::new(0.0, 0.0)), true);
//! drag.handle(DragPhase::Changed, DragSample::new(Duration::from_millis(1050), Point::new(0.0, 60.0)), true);
//! assert_eq!(moved.get(), 0.0);
//! assert_eq!(drag.host().restarts, 1);
//! ```

use alloc::boxed::Box;
use core::fmt;

use log::debug;

use crate::classifier::{AbortReason, DragAction, DragClassifier, DragConfig, DragPhase};
use crate::value::{DragSample, DragValue};

/// The native side of a drag recognizer.
pub trait GestureHost {
    /// Disable and re-enable the native recognizer so any in-progress
    /// recognition is discarded.
    fn restart_recognition(&mut self, reason: AbortReason);

    /// Whether the host can attach a custom recognizer that takes part in
    /// gesture arbitration.
    ///
    /// Hosts that cannot fall back to [`AttachMode::Simultaneous`].
    fn supports_exclusive_recognizers(&self) -> bool {
        true
    }
}

impl<H: GestureHost + ?Sized> GestureHost for &mut H {
    fn restart_recognition(&mut self, reason: AbortReason) {
        (**self).restart_recognition(reason);
    }

    fn supports_exclusive_recognizers(&self) -> bool {
        (**self).supports_exclusive_recognizers()
    }
}

/// How the drag was attached to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachMode {
    /// Custom recognizer with swipe-to-dismiss classification as configured.
    Exclusive,
    /// Plain drag recognized alongside other gestures. Swipe-to-dismiss
    /// classification is unavailable in this mode.
    Simultaneous,
}

/// Observer callbacks for drag notifications.
///
/// Each callback is optional; unset callbacks are skipped.
#[derive(Default)]
pub struct DragHandlers {
    began: Option<Box<dyn FnMut()>>,
    changed: Option<Box<dyn FnMut(DragValue)>>,
    ended: Option<Box<dyn FnMut(DragValue)>>,
}

impl DragHandlers {
    /// Create an empty set of handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback fired once when a session starts.
    pub fn on_began(&mut self, f: impl FnMut() + 'static) -> &mut Self {
        self.began = Some(Box::new(f));
        self
    }

    /// Register the callback fired at session start and on every move.
    pub fn on_changed(&mut self, f: impl FnMut(DragValue) + 'static) -> &mut Self {
        self.changed = Some(Box::new(f));
        self
    }

    /// Register the callback fired once when the drag is released or cancelled.
    pub fn on_ended(&mut self, f: impl FnMut(DragValue) + 'static) -> &mut Self {
        self.ended = Some(Box::new(f));
        self
    }

    fn began(&mut self) {
        if let Some(f) = self.began.as_mut() {
            f();
        }
    }

    fn changed(&mut self, value: DragValue) {
        if let Some(f) = self.changed.as_mut() {
            f(value);
        }
    }

    fn ended(&mut self, value: DragValue) {
        if let Some(f) = self.ended.as_mut() {
            f(value);
        }
    }
}

impl fmt::Debug for DragHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragHandlers")
            .field("began", &self.began.is_some())
            .field("changed", &self.changed.is_some())
            .field("ended", &self.ended.is_some())
            .finish()
    }
}

/// A drag classifier bound to a host and a set of observers.
#[derive(Debug)]
pub struct DragRecognizer<H> {
    classifier: DragClassifier,
    handlers: DragHandlers,
    host: H,
    mode: AttachMode,
}

impl<H: GestureHost> DragRecognizer<H> {
    /// Attach a drag to `host`, picking the attach mode from the host's capabilities.
    pub fn attach(host: H, config: DragConfig, handlers: DragHandlers) -> Self {
        let (mode, config) = if host.supports_exclusive_recognizers() {
            (AttachMode::Exclusive, config)
        } else {
            (AttachMode::Simultaneous, DragConfig::new())
        };
        debug!("drag attached in {mode:?} mode");
        Self {
            classifier: DragClassifier::new(config),
            handlers,
            host,
            mode,
        }
    }

    /// Feed a phase event from the pointer source and dispatch the result.
    ///
    /// Returns the action that was carried out.
    pub fn handle(
        &mut self,
        phase: DragPhase,
        sample: DragSample,
        is_view_attached: bool,
    ) -> DragAction {
        let action = self.classifier.on_phase(phase, sample, is_view_attached);
        match action {
            DragAction::EmitBegan(value) => {
                self.handlers.began();
                self.handlers.changed(value);
            }
            DragAction::EmitChanged(value) => self.handlers.changed(value),
            DragAction::EmitEnded(value) => self.handlers.ended(value),
            DragAction::AbortAndReset(reason) => self.host.restart_recognition(reason),
            DragAction::Noop => {}
        }
        action
    }

    /// Simultaneous recognition policy: always allow.
    pub fn recognizes_simultaneously_with_others(&self) -> bool {
        true
    }

    /// The mode chosen at attach time.
    pub fn mode(&self) -> AttachMode {
        self.mode
    }

    /// The underlying classifier.
    pub fn classifier(&self) -> &DragClassifier {
        &self.classifier
    }

    /// The host this drag is attached to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Mutable access to the handlers, e.g. to register another callback.
    pub fn handlers_mut(&mut self) -> &mut DragHandlers {
        &mut self.handlers
    }

    /// Detach from the host, dropping any session state.
    pub fn detach(self) -> (H, DragHandlers) {
        (self.host, self.handlers)
    }
}
