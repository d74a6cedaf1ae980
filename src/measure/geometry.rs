//! Coordinate types for the measurement capture surface.

use serde::{Deserialize, Serialize};

/// A point in surface-relative coordinates (device-independent pixels,
/// origin at the top-left corner of the capture surface).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    /// Create a new surface point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in pixels.
    pub fn distance_to(&self, other: &SurfacePoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Bounding rectangle of the capture surface, in the same coordinate space
/// as the raw pointer events it receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin, as reported by widgets that
    /// already deliver surface-local cursor positions.
    pub fn at_origin(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Convert a raw pointer coordinate into surface-relative space.
    pub fn normalize(&self, raw_x: f64, raw_y: f64) -> SurfacePoint {
        SurfacePoint::new(raw_x - self.left, raw_y - self.top)
    }

    /// Whether a surface-relative point falls inside the rectangle.
    pub fn contains(&self, point: &SurfacePoint) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3_4_5() {
        let a = SurfacePoint::new(0.0, 0.0);
        let b = SurfacePoint::new(300.0, 400.0);
        assert_eq!(a.distance_to(&b), 500.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = SurfacePoint::new(12.5, 80.0);
        let b = SurfacePoint::new(-3.0, 44.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_coincident_points() {
        let p = SurfacePoint::new(7.0, 7.0);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_normalize_subtracts_origin() {
        let rect = SurfaceRect::new(100.0, 50.0, 640.0, 360.0);
        let point = rect.normalize(130.0, 75.0);
        assert_eq!(point, SurfacePoint::new(30.0, 25.0));
    }

    #[test]
    fn test_contains() {
        let rect = SurfaceRect::at_origin(640.0, 360.0);
        assert!(rect.contains(&SurfacePoint::new(0.0, 0.0)));
        assert!(rect.contains(&SurfacePoint::new(640.0, 360.0)));
        assert!(!rect.contains(&SurfacePoint::new(-1.0, 10.0)));
        assert!(!rect.contains(&SurfacePoint::new(10.0, 361.0)));
    }
}
