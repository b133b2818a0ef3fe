// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples consumed by the classifier and drag values it produces.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use union_gesture_drag::value::{DragSample, DragValue};
//!
//! let start = DragSample::new(Duration::ZERO, Point::new(100.0, 100.0));
//! let now = DragSample::new(Duration::from_millis(200), Point::new(100.0, 160.0));
//!
//! let value = DragValue::new(now.timestamp, now.location, start.location);
//! assert_eq!(value.translation(), Vec2::new(0.0, 60.0));
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

/// A single timestamped pointer location delivered with a phase event.
///
/// `timestamp` is measured from an arbitrary monotonic origin chosen by the
/// pointer source; only differences between timestamps are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Monotonic time at which the sample was taken.
    pub timestamp: Duration,
    /// Pointer location in the recognizer's local coordinate space.
    pub location: Point,
}

impl DragSample {
    /// Create a sample from a timestamp and a location.
    pub const fn new(timestamp: Duration, location: Point) -> Self {
        Self {
            timestamp,
            location,
        }
    }
}

/// The value reported to drag observers.
///
/// Equality is structural over all three fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragValue {
    /// Time of the sample this value was computed from.
    pub timestamp: Duration,
    /// Current pointer location.
    pub location: Point,
    /// Location captured when the session began. Constant for a session.
    pub start_location: Point,
}

impl DragValue {
    /// Create a drag value.
    pub const fn new(timestamp: Duration, location: Point, start_location: Point) -> Self {
        Self {
            timestamp,
            location,
            start_location,
        }
    }

    /// Build a value from a sample, falling back to the sample's own location
    /// when no start has been captured.
    pub(crate) fn from_sample(sample: DragSample, start_location: Option<Point>) -> Self {
        Self::new(
            sample.timestamp,
            sample.location,
            start_location.unwrap_or(sample.location),
        )
    }

    /// Offset from the start location to the current location.
    ///
    /// `x` is the horizontal (width) component and `y` the vertical (height)
    /// component.
    pub fn translation(&self) -> Vec2 {
        self.location - self.start_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_location_minus_start() {
        let value = DragValue::new(
            Duration::from_millis(50),
            Point::new(140.0, 105.0),
            Point::new(100.0, 100.0),
        );

        assert_eq!(value.translation(), Vec2::new(40.0, 5.0));
    }

    #[test]
    fn negative_translation() {
        let value = DragValue::new(
            Duration::ZERO,
            Point::new(90.0, 85.0),
            Point::new(100.0, 100.0),
        );

        assert_eq!(value.translation(), Vec2::new(-10.0, -15.0));
    }

    #[test]
    fn from_sample_without_start_has_zero_translation() {
        let sample = DragSample::new(Duration::from_millis(10), Point::new(3.5, 7.25));

        let value = DragValue::from_sample(sample, None);

        assert_eq!(value.start_location, sample.location);
        assert_eq!(value.translation(), Vec2::ZERO);
    }

    #[test]
    fn from_sample_keeps_captured_start() {
        let sample = DragSample::new(Duration::from_millis(10), Point::new(30.0, 40.0));

        let value = DragValue::from_sample(sample, Some(Point::new(10.0, 10.0)));

        assert_eq!(value.start_location, Point::new(10.0, 10.0));
        assert_eq!(value.translation(), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn equality_covers_every_field() {
        let base = DragValue::new(Duration::ZERO, Point::new(1.0, 2.0), Point::ZERO);

        assert_eq!(base, base);
        assert_ne!(
            base,
            DragValue {
                timestamp: Duration::from_millis(1),
                ..base
            },
            "timestamps differ"
        );
        assert_ne!(
            base,
            DragValue {
                location: Point::new(1.0, 3.0),
                ..base
            },
            "locations differ"
        );
        assert_ne!(
            base,
            DragValue {
                start_location: Point::new(0.0, 1.0),
                ..base
            },
            "start locations differ"
        );
    }
}
