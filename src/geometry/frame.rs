use crate::error::{GeometryError, Result};
use crate::math::{perp, Point2, Vector2, TOLERANCE};

/// A local Cartesian frame with a uniform scale.
///
/// Maps between global coordinates and frame coordinates where the origin,
/// the x-axis direction, and the unit length are all arbitrary. The y-axis
/// is the x-axis rotated a quarter turn counter-clockwise, so the mapping
/// preserves orientation and angles.
#[derive(Debug, Clone)]
pub struct LocalFrame {
    origin: Point2,
    x_axis: Vector2,
    y_axis: Vector2,
    unit: f64,
}

impl LocalFrame {
    /// Creates a frame at `origin` with the given x-axis direction and unit
    /// length.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length or the unit is not
    /// positive.
    pub fn new(origin: Point2, x_axis: Vector2, unit: f64) -> Result<Self> {
        let len = x_axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        if unit < TOLERANCE {
            return Err(GeometryError::NonPositive {
                parameter: "unit",
                value: unit,
            }
            .into());
        }
        let x_axis = x_axis / len;
        Ok(Self {
            origin,
            x_axis,
            y_axis: perp(&x_axis),
            unit,
        })
    }

    /// Returns the frame origin in global coordinates.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit x-axis direction in global coordinates.
    #[must_use]
    pub fn x_axis(&self) -> &Vector2 {
        &self.x_axis
    }

    /// Returns the frame unit length.
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Converts a global point to frame coordinates.
    #[must_use]
    pub fn to_local(&self, p: &Point2) -> Point2 {
        let d = p - self.origin;
        Point2::new(d.dot(&self.x_axis) / self.unit, d.dot(&self.y_axis) / self.unit)
    }

    /// Converts a frame-coordinate point back to global coordinates.
    #[must_use]
    pub fn to_global(&self, p: &Point2) -> Point2 {
        self.origin + (self.x_axis * p.x + self.y_axis * p.y) * self.unit
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_axis_is_rejected() {
        assert!(LocalFrame::new(Point2::origin(), Vector2::zeros(), 1.0).is_err());
    }

    #[test]
    fn non_positive_unit_is_rejected() {
        assert!(LocalFrame::new(Point2::origin(), Vector2::x(), 0.0).is_err());
        assert!(LocalFrame::new(Point2::origin(), Vector2::x(), -2.0).is_err());
    }

    #[test]
    fn maps_axis_points_to_unit_coordinates() {
        // Frame at (2, 0), x-axis pointing toward -x, unit 2.
        let f = LocalFrame::new(Point2::new(2.0, 0.0), Vector2::new(-1.0, 0.0), 2.0).unwrap();
        let p = f.to_local(&Point2::new(0.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-12, "x={}", p.x);
        assert!(p.y.abs() < 1e-12);

        let q = f.to_local(&Point2::new(1.0, 0.0));
        assert!((q.x - 0.5).abs() < 1e-12, "x={}", q.x);
    }

    #[test]
    fn y_axis_preserves_orientation() {
        // With x-axis = -x the y-axis is -y (a quarter turn CCW).
        let f = LocalFrame::new(Point2::origin(), Vector2::new(-1.0, 0.0), 1.0).unwrap();
        let p = f.to_local(&Point2::new(0.0, -3.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12, "y={}", p.y);
    }

    #[test]
    fn round_trip_is_identity() {
        let f = LocalFrame::new(Point2::new(1.0, -2.0), Vector2::new(3.0, 4.0), 2.5).unwrap();
        let p = Point2::new(-7.0, 0.25);
        let back = f.to_global(&f.to_local(&p));
        assert_relative_eq!(back.x, p.x, max_relative = 1e-12);
        assert_relative_eq!(back.y, p.y, max_relative = 1e-12);
    }

    #[test]
    fn scales_lengths_by_the_unit() {
        let f = LocalFrame::new(Point2::origin(), Vector2::x(), 4.0).unwrap();
        let p = f.to_global(&Point2::new(1.0, 0.5));
        assert!((p - Point2::new(4.0, 2.0)).norm() < 1e-12);
    }
}
