use std::time::Duration;

use crate::geometry::Point;

/// Minimum pointer travel before a mouse drag activates, so plain clicks on
/// a card never start a session.
pub const POINTER_ACTIVATION_DISTANCE: f64 = 10.0;

/// Hold time before a touch press becomes a drag.
pub const TOUCH_ACTIVATION_DELAY: Duration = Duration::from_millis(250);

/// Movement allowed during the touch hold; travelling further is a scroll,
/// not a drag.
pub const TOUCH_MOVE_TOLERANCE: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Constraint not satisfied yet; keep feeding samples.
    Pending,
    /// The gesture is a drag; start the session.
    Activated,
    /// The gesture was something else (scroll, tap); never activate.
    Rejected,
}

/// Distance-based activation for pointer devices.
#[derive(Debug, Clone, Copy)]
pub struct PointerSensor {
    origin: Point,
    distance: f64,
}

impl PointerSensor {
    pub fn new(origin: Point) -> Self {
        Self::with_distance(origin, POINTER_ACTIVATION_DISTANCE)
    }

    pub fn with_distance(origin: Point, distance: f64) -> Self {
        Self { origin, distance }
    }

    pub fn update(&self, current: Point) -> Activation {
        if self.origin.distance_to(current) >= self.distance {
            Activation::Activated
        } else {
            Activation::Pending
        }
    }
}

/// Delay-plus-tolerance activation for touch devices.
#[derive(Debug, Clone, Copy)]
pub struct TouchSensor {
    origin: Point,
    delay: Duration,
    tolerance: f64,
}

impl TouchSensor {
    pub fn new(origin: Point) -> Self {
        Self::with_constraint(origin, TOUCH_ACTIVATION_DELAY, TOUCH_MOVE_TOLERANCE)
    }

    pub fn with_constraint(origin: Point, delay: Duration, tolerance: f64) -> Self {
        Self {
            origin,
            delay,
            tolerance,
        }
    }

    pub fn update(&self, current: Point, held: Duration) -> Activation {
        if self.origin.distance_to(current) > self.tolerance {
            return Activation::Rejected;
        }
        if held >= self.delay {
            Activation::Activated
        } else {
            Activation::Pending
        }
    }
}
