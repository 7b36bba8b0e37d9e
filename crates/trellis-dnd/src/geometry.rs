use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned bounding box in viewport coordinates, as reported by the
/// input collaborator for dragged items and droppable regions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Sum of distances between corresponding corners of two rects. The
    /// closest-corners collision metric: smaller means a better match.
    pub fn corner_distance(&self, other: &Rect) -> f64 {
        self.corners()
            .iter()
            .zip(other.corners().iter())
            .map(|(a, b)| a.distance_to(*b))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_of_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(110.0, 70.0)));
        assert!(rect.contains(Point::new(60.0, 45.0)));
        assert!(!rect.contains(Point::new(9.9, 45.0)));
        assert!(!rect.contains(Point::new(60.0, 70.1)));
    }

    #[test]
    fn test_corner_distance_zero_for_identical_rects() {
        let rect = Rect::new(5.0, 5.0, 40.0, 40.0);
        assert_eq!(rect.corner_distance(&rect), 0.0);
    }

    #[test]
    fn test_corner_distance_orders_by_proximity() {
        let active = Rect::new(0.0, 0.0, 10.0, 10.0);
        let near = Rect::new(2.0, 2.0, 10.0, 10.0);
        let far = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(active.corner_distance(&near) < active.corner_distance(&far));
    }
}
