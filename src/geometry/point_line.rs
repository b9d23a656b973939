use crate::math::Point2;

use super::Line;

/// An incidence point paired with the line through it.
///
/// Carries an already-computed intersection between a calculation step and
/// the drawing step that consumes it, so the line is not rebuilt from
/// scratch at each use. The point always lies on the line.
#[derive(Debug, Clone)]
pub struct PointLine {
    point: Point2,
    line: Line,
}

impl PointLine {
    pub(crate) fn new(point: Point2, line: Line) -> Self {
        debug_assert!(line.distance_to(&point) < 1e-6);
        Self { point, line }
    }

    /// Returns the incidence point.
    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    /// Returns the line through the point.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    #[test]
    fn accessors_return_the_pair() {
        let line = Line::new(Point2::new(1.0, 1.0), Vector2::x()).unwrap();
        let pl = PointLine::new(Point2::new(4.0, 1.0), line);
        assert!((pl.point() - Point2::new(4.0, 1.0)).norm() < 1e-12);
        assert!(pl.line().distance_to(pl.point()) < 1e-12);
    }
}
