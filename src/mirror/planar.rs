use crate::error::{FigureError, GeometryError, Result};
use crate::figure::{
    style, AngleMark, Anchor, Arrow, DashPattern, Figure, FillRegion, Pen, StrokePath,
};
use crate::geometry::{Line, PointLine};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A flat mirror: an infinite reflecting line with an oriented front face.
///
/// Defined by a `center` point on the surface and the unit `normal`
/// pointing away from the reflective face. The surface line runs through
/// the center perpendicular to the normal; its direction is the normal
/// rotated a quarter turn clockwise, so positive surface offsets run to
/// the right when the normal points up.
///
/// Geometric queries live here. Drawing requires dimensions and is done
/// through [`SizedPlanarMirror`], obtained from [`with_size`](Self::with_size).
#[derive(Debug, Clone)]
pub struct PlanarMirror {
    center: Point2,
    normal: Vector2,
    normal_line: Line,
    surface_line: Line,
}

impl PlanarMirror {
    /// Creates a mirror through `center` with the given front-face normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(center: Point2, normal: Vector2) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        // Surface direction: the normal rotated a quarter turn clockwise.
        let surface_dir = Vector2::new(normal.y, -normal.x);
        Ok(Self {
            center,
            normal,
            normal_line: Line::from_normalized(center, normal),
            surface_line: Line::from_normalized(center, surface_dir),
        })
    }

    /// Returns the center point of the mirror.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the unit front-face normal.
    #[must_use]
    pub fn normal(&self) -> &Vector2 {
        &self.normal
    }

    /// Returns the normal line through the center.
    #[must_use]
    pub fn normal_line(&self) -> &Line {
        &self.normal_line
    }

    /// Returns the surface line of the mirror.
    #[must_use]
    pub fn surface_line(&self) -> &Line {
        &self.surface_line
    }

    /// Surface point at a signed `offset` from the center, paired with the
    /// normal line through it.
    ///
    /// An offset of exactly zero returns the stored center and normal line
    /// unchanged rather than re-deriving them, so repeated center queries
    /// cannot drift.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn normal_at_offset(&self, offset: f64) -> PointLine {
        if offset == 0.0 {
            return PointLine::new(self.center, self.normal_line.clone());
        }
        let p = self.surface_line.point_at(offset);
        PointLine::new(p, Line::from_normalized(p, self.normal))
    }

    /// Incidence point of the ray `source + t * direction` on the surface,
    /// paired with the normal line through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is zero-length or the ray is
    /// parallel to the surface.
    pub fn normal_from_ray(&self, source: Point2, direction: Vector2) -> Result<PointLine> {
        let ray = Line::new(source, direction)?;
        let p = self.surface_line.intersection(&ray)?;
        Ok(PointLine::new(p, Line::from_normalized(p, self.normal)))
    }

    /// Reflection of `source` across the normal line of `incidence`.
    ///
    /// The reflected ray leaves the incidence point toward this point; it
    /// obeys the law of reflection at that incidence. This is not the
    /// mirror image, see [`image_point`](Self::image_point).
    #[must_use]
    pub fn reflected_point(&self, source: &Point2, incidence: &PointLine) -> Point2 {
        debug_assert!(incidence.line().direction().dot(&self.normal).abs() > 1.0 - 1e-9);
        incidence.line().reflect_point(source)
    }

    /// Reflection of `source` across the normal at a signed surface offset.
    #[must_use]
    pub fn reflected_point_at_offset(&self, source: &Point2, offset: f64) -> Point2 {
        self.reflected_point(source, &self.normal_at_offset(offset))
    }

    /// Mirror image of `source` across the surface line.
    ///
    /// Pure image geometry, independent of any incident ray, and an
    /// involution. Reflected rays extended backward through the mirror all
    /// pass through this point.
    #[must_use]
    pub fn image_point(&self, source: &Point2) -> Point2 {
        self.surface_line.reflect_point(source)
    }

    /// Attaches drawing dimensions, producing the drawable mirror.
    #[must_use]
    pub fn with_size(self, size: MirrorSize) -> SizedPlanarMirror {
        SizedPlanarMirror { mirror: self, size }
    }
}

/// Drawn dimensions of a planar mirror.
///
/// The mirror body extends `left_width` against and `right_width` along the
/// surface direction, and `thickness` behind the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorSize {
    left_width: f64,
    right_width: f64,
    normal_length: f64,
    thickness: f64,
}

impl MirrorSize {
    /// Creates a size from explicit extents.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is not positive.
    pub fn new(
        left_width: f64,
        right_width: f64,
        normal_length: f64,
        thickness: f64,
    ) -> Result<Self> {
        Self::check("left_width", left_width)?;
        Self::check("right_width", right_width)?;
        Self::check("normal_length", normal_length)?;
        Self::check("thickness", thickness)?;
        Ok(Self {
            left_width,
            right_width,
            normal_length,
            thickness,
        })
    }

    /// Creates a size extending `width` to both sides, with the drawn
    /// normal as long as the width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `thickness` is not positive.
    pub fn symmetric(width: f64, thickness: f64) -> Result<Self> {
        Self::new(width, width, width, thickness)
    }

    fn check(parameter: &'static str, value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(FigureError::NonPositiveDimension { parameter, value }.into());
        }
        Ok(())
    }

    /// Extent to the left of the center, against the surface direction.
    #[must_use]
    pub fn left_width(&self) -> f64 {
        self.left_width
    }

    /// Extent to the right of the center, along the surface direction.
    #[must_use]
    pub fn right_width(&self) -> f64 {
        self.right_width
    }

    /// Drawn length of normal segments.
    #[must_use]
    pub fn normal_length(&self) -> f64 {
        self.normal_length
    }

    /// Depth of the mirror body behind the surface.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }
}

/// A planar mirror with drawing dimensions attached.
///
/// Drawing operations live here so an unsized mirror cannot be drawn; each
/// returns `&Self` so calls chain.
#[derive(Debug, Clone)]
pub struct SizedPlanarMirror {
    mirror: PlanarMirror,
    size: MirrorSize,
}

impl SizedPlanarMirror {
    /// Returns the underlying mirror geometry.
    #[must_use]
    pub fn mirror(&self) -> &PlanarMirror {
        &self.mirror
    }

    /// Returns the drawing dimensions.
    #[must_use]
    pub fn size(&self) -> &MirrorSize {
        &self.size
    }

    /// Replaces the drawing dimensions.
    pub fn set_size(&mut self, size: MirrorSize) {
        self.size = size;
    }

    /// Left end of the drawn surface.
    #[must_use]
    pub fn left_end(&self) -> Point2 {
        self.mirror.surface_line.point_at(-self.size.left_width)
    }

    /// Right end of the drawn surface.
    #[must_use]
    pub fn right_end(&self) -> Point2 {
        self.mirror.surface_line.point_at(self.size.right_width)
    }

    /// Draws the mirror body: the filled strip behind the surface, then the
    /// surface segment on top of it.
    pub fn draw_mirror(&self, figure: &mut Figure) -> &Self {
        let a = self.left_end();
        let b = self.right_end();
        let back = -self.mirror.normal * self.size.thickness;
        figure.fill(
            FillRegion::Polygon(vec![a, b, b + back, a + back]),
            style::MIRROR_FILL_TONE,
        );
        figure.stroke(
            StrokePath::Segment { from: a, to: b },
            Pen::from_parts(style::MIRROR_STROKE_WIDTH, DashPattern::Solid),
            None,
        );
        self
    }

    /// Draws the dashed normal segment at the mirror center.
    pub fn draw_normal(&self, figure: &mut Figure) -> &Self {
        self.draw_normal_at(figure, &self.mirror.normal_at_offset(0.0))
    }

    /// Draws the dashed normal segment at an incidence point.
    pub fn draw_normal_at(&self, figure: &mut Figure, incidence: &PointLine) -> &Self {
        let from = *incidence.point();
        let to = incidence.line().point_at(self.size.normal_length);
        figure.stroke(
            StrokePath::Segment { from, to },
            Pen::from_parts(style::DEFAULT_PEN_WIDTH, style::NORMAL_DASH),
            None,
        );
        self
    }

    /// Draws the incident ray from `source` to the incidence point.
    pub fn draw_incident_ray(
        &self,
        figure: &mut Figure,
        source: Point2,
        incidence: &PointLine,
    ) -> &Self {
        debug_assert!(self.mirror.surface_line.distance_to(incidence.point()) < 1e-6);
        figure.stroke(
            StrokePath::Segment {
                from: source,
                to: *incidence.point(),
            },
            Pen::default(),
            Some(Arrow::midway(style::RAY_ARROW_SIZE)),
        );
        self
    }

    /// Draws the incident ray hitting the surface at a signed offset.
    pub fn draw_incident_ray_at_offset(
        &self,
        figure: &mut Figure,
        source: Point2,
        offset: f64,
    ) -> &Self {
        let incidence = self.mirror.normal_at_offset(offset);
        self.draw_incident_ray(figure, source, &incidence)
    }

    /// Draws the reflected ray leaving the incidence point.
    ///
    /// Without `length` the ray ends at the reflection of `source`, whose
    /// distance from the incidence point equals the incident path length;
    /// a `length` truncates or extends the ray along the same line.
    pub fn draw_reflected_ray_from_point_line(
        &self,
        figure: &mut Figure,
        source: Point2,
        incidence: &PointLine,
        length: Option<f64>,
    ) -> &Self {
        let from = *incidence.point();
        let target = self.mirror.reflected_point(&source, incidence);
        let to = match length {
            None => target,
            Some(len) => match (target - from).try_normalize(TOLERANCE) {
                Some(dir) => from + dir * len,
                None => target,
            },
        };
        figure.stroke(
            StrokePath::Segment { from, to },
            Pen::default(),
            Some(Arrow::midway(style::RAY_ARROW_SIZE)),
        );
        self
    }

    /// Draws the reflected ray for an incidence at a signed surface offset.
    pub fn draw_reflected_ray_at_offset(
        &self,
        figure: &mut Figure,
        source: Point2,
        offset: f64,
        length: Option<f64>,
    ) -> &Self {
        let incidence = self.mirror.normal_at_offset(offset);
        self.draw_reflected_ray_from_point_line(figure, source, &incidence, length)
    }

    /// Draws the dotted construction segment from `source` to its mirror
    /// image behind the surface, and marks the image point.
    pub fn draw_image_segment(&self, figure: &mut Figure, source: Point2) -> &Self {
        let image = self.mirror.image_point(&source);
        figure.stroke(
            StrokePath::Segment {
                from: source,
                to: image,
            },
            Pen::default().with_dash(style::VIRTUAL_RAY_DASH),
            None,
        );
        figure.dot(image, style::DOT_RADIUS);
        self
    }

    /// Places a label behind the mirror body, at its right extent.
    pub fn label_mirror(&self, figure: &mut Figure, text: &str) -> &Self {
        let position = self.right_end()
            - self.mirror.normal * (self.size.thickness + style::MIRROR_LABEL_OFFSET);
        figure.label(text, position, Anchor::Center);
        self
    }

    /// Marks the incidence and reflection angles at an incidence point and
    /// labels them.
    ///
    /// Both angles sit between a ray and the normal; with no
    /// `reflected_label` the incident label is reused, asserting the two
    /// angles equal.
    pub fn label_rays(
        &self,
        figure: &mut Figure,
        source: Point2,
        incidence: &PointLine,
        incident_label: &str,
        reflected_label: Option<&str>,
    ) -> &Self {
        let vertex = *incidence.point();
        let normal = self.mirror.normal;
        let radius = self.size.normal_length * style::ANGLE_ARC_RADIUS_FACTOR;
        let to_source = source - vertex;
        let to_reflected = self.mirror.reflected_point(&source, incidence) - vertex;

        figure.angle_mark(AngleMark::between(
            vertex,
            &to_source,
            &normal,
            radius,
            Some(style::ARC_ARROW_SIZE),
        ));
        figure.angle_mark(AngleMark::between(
            vertex,
            &normal,
            &to_reflected,
            radius,
            Some(style::ARC_ARROW_SIZE),
        ));

        if let Some(position) = bisector_position(vertex, &to_source, &normal, radius) {
            figure.label(incident_label, position, Anchor::Center);
        }
        if let Some(position) = bisector_position(vertex, &normal, &to_reflected, radius) {
            figure.label(reflected_label.unwrap_or(incident_label), position, Anchor::Center);
        }
        self
    }
}

/// Label position on the bisector of the angle between `a` and `b`, just
/// outside an arc of the given radius. `None` for degenerate legs.
fn bisector_position(vertex: Point2, a: &Vector2, b: &Vector2, radius: f64) -> Option<Point2> {
    let sum = a.try_normalize(TOLERANCE)? + b.try_normalize(TOLERANCE)?;
    let dir = sum.try_normalize(TOLERANCE)?;
    Some(vertex + dir * (radius * 1.35))
}
