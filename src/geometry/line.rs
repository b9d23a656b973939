use crate::error::{GeometryError, Result};
use crate::math::{intersect, perp, Point2, Vector2};

/// An infinite line defined by an origin point and a unit direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`. The direction
/// fixes the sign of parameters and offsets measured along the line.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if len < crate::math::TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates a line from an origin and an already-normalized direction.
    pub(crate) fn from_normalized(origin: Point2, direction: Vector2) -> Self {
        debug_assert!((direction.norm() - 1.0).abs() < 1e-9);
        Self { origin, direction }
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn offset_of(&self, p: &Point2) -> f64 {
        (p - self.origin).dot(&self.direction)
    }

    /// Perpendicular distance from `p` to the line.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        let v = p - self.origin;
        (v.x * self.direction.y - v.y * self.direction.x).abs()
    }

    /// The line through `p` perpendicular to this one.
    ///
    /// Its direction is this line's direction rotated a quarter turn
    /// counter-clockwise.
    #[must_use]
    pub fn perpendicular_at(&self, p: Point2) -> Self {
        Self::from_normalized(p, perp(&self.direction))
    }

    /// Intersection point of two infinite lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines are parallel or coincident.
    pub fn intersection(&self, other: &Self) -> Result<Point2> {
        let (t, _) =
            intersect::line_line(&self.origin, &self.direction, &other.origin, &other.direction)
                .ok_or(GeometryError::ParallelLines)?;
        Ok(self.point_at(t))
    }

    /// Mirror image of `p` across this line.
    ///
    /// The component of `p - origin` along the line is kept and the
    /// perpendicular component is flipped; applying the reflection twice
    /// returns the original point.
    #[must_use]
    pub fn reflect_point(&self, p: &Point2) -> Point2 {
        let v = p - self.origin;
        let along = self.direction * (2.0 * v.dot(&self.direction));
        self.origin + (along - v)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn x_axis() -> Line {
        Line::new(Point2::origin(), Vector2::x()).unwrap()
    }

    #[test]
    fn new_normalizes_direction() {
        let l = Line::new(Point2::new(1.0, 2.0), Vector2::new(3.0, 4.0)).unwrap();
        assert!((l.direction().norm() - 1.0).abs() < TOLERANCE);
        assert!((l.direction().x - 0.6).abs() < TOLERANCE);
        assert!((l.direction().y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn zero_direction_is_rejected() {
        let r = Line::new(Point2::origin(), Vector2::new(0.0, 0.0));
        assert!(r.is_err());
    }

    #[test]
    fn point_at_walks_along_direction() {
        let l = Line::new(Point2::new(1.0, 1.0), Vector2::new(0.0, 2.0)).unwrap();
        let p = l.point_at(3.0);
        assert!((p - Point2::new(1.0, 4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn offset_of_projects_onto_line() {
        let l = x_axis();
        assert!((l.offset_of(&Point2::new(2.5, 7.0)) - 2.5).abs() < TOLERANCE);
        assert!((l.offset_of(&Point2::new(-1.0, -3.0)) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn distance_to_is_perpendicular_distance() {
        let l = x_axis();
        assert!((l.distance_to(&Point2::new(4.0, -2.0)) - 2.0).abs() < TOLERANCE);
        assert!(l.distance_to(&Point2::new(9.0, 0.0)) < TOLERANCE);
    }

    #[test]
    fn perpendicular_at_rotates_quarter_turn() {
        let l = x_axis();
        let n = l.perpendicular_at(Point2::new(2.0, 0.0));
        assert!((n.origin() - Point2::new(2.0, 0.0)).norm() < TOLERANCE);
        assert!((n.direction() - Vector2::y()).norm() < TOLERANCE);
    }

    #[test]
    fn intersection_of_crossing_lines() {
        // y = x meets the vertical line x = 2 at (2, 2).
        let a = Line::new(Point2::origin(), Vector2::new(1.0, 1.0)).unwrap();
        let b = Line::new(Point2::new(2.0, 0.0), Vector2::y()).unwrap();
        let p = a.intersection(&b).unwrap();
        assert!((p - Point2::new(2.0, 2.0)).norm() < 1e-9);
    }

    #[test]
    fn intersection_of_parallel_lines_fails() {
        let a = x_axis();
        let b = Line::new(Point2::new(0.0, 1.0), Vector2::x()).unwrap();
        assert!(a.intersection(&b).is_err());
    }

    #[test]
    fn reflect_point_flips_perpendicular_component() {
        let l = x_axis();
        let p = l.reflect_point(&Point2::new(3.0, 2.0));
        assert!((p - Point2::new(3.0, -2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn reflect_point_is_an_involution() {
        let l = Line::new(Point2::new(1.0, -2.0), Vector2::new(2.0, 1.0)).unwrap();
        let p = Point2::new(4.0, 5.0);
        let back = l.reflect_point(&l.reflect_point(&p));
        assert!((back - p).norm() < 1e-9);
    }

    #[test]
    fn reflect_point_fixes_points_on_the_line() {
        let l = Line::new(Point2::new(1.0, 1.0), Vector2::new(1.0, 1.0)).unwrap();
        let on_line = Point2::new(3.0, 3.0);
        assert!((l.reflect_point(&on_line) - on_line).norm() < 1e-9);
    }
}
