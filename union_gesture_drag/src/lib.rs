// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Union Gesture Drag: a drag recognizer that yields to early swipe-to-dismiss.
//!
//! This crate recognizes a continuous single-pointer drag and, within a short
//! window after the pointer goes down, decides whether the motion is really a
//! swipe meant for a competing dismiss gesture. Only one interpretation wins:
//! either the drag reports `began`/`changed`/`ended` values, or it is aborted
//! before reporting anything past its start.
//!
//! - [`value`]: Pointer samples and the drag values reported to observers
//! - [`classifier`]: The pure session state machine and swipe heuristic
//! - [`recognizer`]: A thin adapter binding the classifier to a host and callbacks
//!
//! ## Layering
//!
//! [`classifier::DragClassifier`] has no host dependency. It consumes phase
//! events and returns a [`classifier::DragAction`] for each one. Hosts that
//! want callbacks and recognizer restarts handled for them wrap it in a
//! [`recognizer::DragRecognizer`] and implement [`recognizer::GestureHost`]
//! against their native event APIs.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use union_gesture_drag::classifier::{DragAction, DragClassifier, DragConfig, DragPhase};
//! use union_gesture_drag::value::DragSample;
//!
//! let mut drag = DragClassifier::new(DragConfig::swipe_to_dismiss());
//!
//! drag.on_phase(DragPhase::Began, DragSample::new(Duration::ZERO, Point::new(100.0, 100.0)), true);
//!
//! // Mostly horizontal motion: this is a drag, not a swipe.
//! let moved = DragSample::new(Duration::from_millis(50), Point::new(140.0, 105.0));
//! let DragAction::EmitChanged(value) = drag.on_phase(DragPhase::Changed, moved, true) else {
//!     unreachable!();
//! };
//! assert_eq!(value.translation(), Vec2::new(40.0, 5.0));
//!
//! let released = DragSample::new(Duration::from_millis(200), Point::new(100.0, 160.0));
//! let DragAction::EmitEnded(value) = drag.on_phase(DragPhase::Ended, released, true) else {
//!     unreachable!();
//! };
//! assert_eq!(value.translation(), Vec2::new(0.0, 60.0));
//! assert!(!drag.is_active());
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo with the standard library
//! - `libm`: Build Kurbo for `no_std` targets using `libm`
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod classifier;
pub mod recognizer;
pub mod value;
