use crate::error::{GeometryError, Result};
use crate::math::{intersect, Point2, TOLERANCE};

use super::Line;

/// A circle in the plane, defined by a center and a positive radius.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::NonPositive {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from `p` to the circle curve.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        ((p - self.center).norm() - self.radius).abs()
    }

    /// Intersection points with an infinite line, ordered by the line
    /// parameter. A tangency yields one point, a miss none.
    #[must_use]
    pub fn line_intersections(&self, line: &Line) -> Vec<Point2> {
        intersect::line_circle(line.origin(), line.direction(), &self.center, self.radius)
            .into_iter()
            .map(|t| line.point_at(t))
            .collect()
    }
}
