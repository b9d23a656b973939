use log::warn;

use crate::error::{FigureError, GeometryError, Result};
use crate::figure::{style, Anchor, Arrow, DashPattern, Figure, FillRegion, Pen, StrokePath};
use crate::geometry::{Circle, Line, LocalFrame, PointLine};
use crate::math::{angle, Point2, Vector2, TOLERANCE};

/// A concave spherical mirror under the paraxial model.
///
/// Defined by the `vertex` (the surface point on the optical axis), the
/// unit `axis` pointing from the vertex into object space, and a positive
/// focal length. The radius of curvature is twice the focal length; the
/// focus and the center of curvature both lie on the axis in front of the
/// vertex.
///
/// Image constructions run in a local frame anchored at the center of
/// curvature, with x pointing from the center toward the vertex and the
/// radius as unit length: the vertex sits at `x = 1`, the focus at
/// `x = 0.5`, the center at `x = 0`, and the mirror surface is the unit
/// circle. Results are mapped back to global coordinates at the end.
#[derive(Debug, Clone)]
pub struct ConcaveMirror {
    vertex: Point2,
    axis: Vector2,
    focal_length: f64,
    frame: LocalFrame,
    /// The mirror surface in frame coordinates.
    surface: Circle,
}

impl ConcaveMirror {
    /// Creates a mirror from its vertex, optical-axis direction, and focal
    /// length.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length or the focal length is
    /// not positive.
    pub fn new(vertex: Point2, axis: Vector2, focal_length: f64) -> Result<Self> {
        let len = axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        if focal_length < TOLERANCE {
            return Err(GeometryError::NonPositive {
                parameter: "focal_length",
                value: focal_length,
            }
            .into());
        }
        let axis = axis / len;
        let radius = 2.0 * focal_length;
        let center = vertex + axis * radius;
        let frame = LocalFrame::new(center, -axis, radius)?;
        let surface = Circle::new(Point2::origin(), 1.0)?;
        Ok(Self {
            vertex,
            axis,
            focal_length,
            frame,
            surface,
        })
    }

    /// Creates a mirror from its vertex and focus point; the axis and the
    /// focal length follow from their separation.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn from_focus_point(vertex: Point2, focus_point: Point2) -> Result<Self> {
        let to_focus = focus_point - vertex;
        Self::new(vertex, to_focus, to_focus.norm())
    }

    /// Returns the vertex of the mirror.
    #[must_use]
    pub fn vertex(&self) -> &Point2 {
        &self.vertex
    }

    /// Returns the unit optical-axis direction, pointing into object space.
    #[must_use]
    pub fn axis(&self) -> &Vector2 {
        &self.axis
    }

    /// Returns the focal length.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Returns the radius of curvature.
    #[must_use]
    pub fn radius(&self) -> f64 {
        2.0 * self.focal_length
    }

    /// Returns the center of curvature.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        self.frame.origin()
    }

    /// Returns the focus point.
    #[must_use]
    pub fn focus_point(&self) -> Point2 {
        self.vertex + self.axis * self.focal_length
    }

    /// Returns the local construction frame.
    #[must_use]
    pub fn frame(&self) -> &LocalFrame {
        &self.frame
    }

    /// Classifies `source` by its axial position and, for sources beyond
    /// the center of curvature, constructs the real image from the three
    /// characteristic rays.
    ///
    /// Every unsupported region reports itself through a single `log`
    /// warning and comes back as the matching [`ImageConstruction`] tag, so
    /// a caller can keep drawing the rest of the diagram.
    ///
    /// # Errors
    ///
    /// Returns an error if the construction degenerates, which happens for
    /// sources on the optical axis (the characteristic rays coincide) or
    /// when a construction ray misses the mirror circle entirely.
    pub fn construct_image(&self, source: Point2) -> Result<ImageConstruction> {
        let local = self.frame.to_local(&source);
        if local.x >= 1.0 {
            warn!("source sits at or behind the mirror vertex; no image to construct");
            return Ok(ImageConstruction::SourceBehindMirror);
        }
        if local.x >= 0.5 {
            warn!("source between focus and vertex forms a virtual image, which is not supported");
            return Ok(ImageConstruction::VirtualImageUnsupported);
        }
        if local.x > 0.0 {
            warn!("source between center and focus is not supported");
            return Ok(ImageConstruction::RealImageOutsideUnsupported);
        }
        if local.x < 0.0 {
            return self
                .construct_inside(&local)
                .map(ImageConstruction::RealImageInside);
        }
        warn!("source exactly at the center of curvature is not supported");
        Ok(ImageConstruction::AtCenterUnsupported)
    }

    /// Builds the image of a source beyond the center of curvature.
    ///
    /// Works entirely in frame coordinates: the focus is `(0.5, 0)` and the
    /// surface is the unit circle. The image is the intersection of the two
    /// reflected characteristic rays; the center ray is fitted backward
    /// through it afterwards.
    fn construct_inside(&self, source: &Point2) -> Result<CharacteristicRays> {
        let parallel = self.parallel_ray_entry(source)?;
        let focus = self.focus_ray_entry(source)?;
        let image = parallel.line().intersection(focus.line())?;
        let center_entry = self.center_ray_entry(source, &image)?;
        Ok(CharacteristicRays {
            image: self.frame.to_global(&image),
            parallel_entry: self.frame.to_global(parallel.point()),
            focus_entry: self.frame.to_global(focus.point()),
            center_entry: self.frame.to_global(&center_entry),
        })
    }

    /// Entry point of the axis-parallel ray through `source`, paired with
    /// its reflected line through the focus. Frame coordinates.
    fn parallel_ray_entry(&self, source: &Point2) -> Result<PointLine> {
        let ray = Line::from_normalized(*source, Vector2::x());
        let entry = self.front_intersection(&ray)?;
        let reflected = Line::new(entry, Point2::new(0.5, 0.0) - entry)?;
        Ok(PointLine::new(entry, reflected))
    }

    /// Entry point of the ray through `source` and the focus, paired with
    /// its reflected line, which leaves the mirror parallel to the axis.
    /// Frame coordinates.
    fn focus_ray_entry(&self, source: &Point2) -> Result<PointLine> {
        let focus = Point2::new(0.5, 0.0);
        let ray = Line::new(*source, focus - source)?;
        let entry = self.front_intersection(&ray)?;
        let reflected = Line::from_normalized(entry, -Vector2::x());
        Ok(PointLine::new(entry, reflected))
    }

    /// Entry point of the undeviated center ray, fitted backward through
    /// the already-known image point. Frame coordinates.
    fn center_ray_entry(&self, source: &Point2, image: &Point2) -> Result<Point2> {
        let ray = Line::new(*source, image - source)?;
        self.front_intersection(&ray)
    }

    /// Crossing of `ray` with the mirror circle on the front face, which in
    /// frame coordinates means non-negative x. When the ray crosses the
    /// circle only behind the mirror, falls back to the first crossing and
    /// warns instead of failing the whole construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the ray misses the circle entirely.
    fn front_intersection(&self, ray: &Line) -> Result<Point2> {
        let hits = self.surface.line_intersections(ray);
        let first = hits.first().copied().ok_or(GeometryError::NoIntersection)?;
        match hits.iter().copied().find(|p| p.x >= 0.0) {
            Some(p) => Ok(p),
            None => {
                warn!("construction ray only crosses the mirror behind its front face; keeping the first crossing");
                Ok(first)
            }
        }
    }

    /// Attaches drawing dimensions, producing the drawable mirror.
    #[must_use]
    pub fn with_size(self, aperture: Aperture) -> SizedConcaveMirror {
        SizedConcaveMirror {
            mirror: self,
            aperture,
            extension: RayExtension::default(),
        }
    }
}

/// The construction geometry of a real image, in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicRays {
    /// Where the reflected rays meet.
    pub image: Point2,
    /// Mirror entry of the axis-parallel incident ray.
    pub parallel_entry: Point2,
    /// Mirror entry of the incident ray through the focus.
    pub focus_entry: Point2,
    /// Mirror entry of the undeviated ray through the center of curvature.
    pub center_entry: Point2,
}

/// Outcome of a concave-mirror image construction, tagged by the source
/// region along the optical axis (frame x, vertex at 1, focus at 0.5,
/// center at 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageConstruction {
    /// `x < 0`: source beyond the center of curvature; the real image was
    /// constructed.
    RealImageInside(CharacteristicRays),
    /// `0 < x < 0.5`: source between center and focus; the image would be
    /// real but the construction is not supported.
    RealImageOutsideUnsupported,
    /// `0.5 <= x < 1`: source between focus and vertex; the image would be
    /// virtual, which is not supported.
    VirtualImageUnsupported,
    /// `x = 0`: source exactly at the center of curvature.
    AtCenterUnsupported,
    /// `x >= 1`: source at or behind the vertex.
    SourceBehindMirror,
}

/// Angular extent and shell thickness of the drawn mirror arc.
///
/// Angles are in radians, measured at the center of curvature away from
/// the vertex direction; `up` sweeps counter-clockwise, `down` clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aperture {
    up_angle: f64,
    down_angle: f64,
    thickness: f64,
}

impl Aperture {
    /// Creates an aperture from explicit extents.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is not positive.
    pub fn new(up_angle: f64, down_angle: f64, thickness: f64) -> Result<Self> {
        Self::check("up_angle", up_angle)?;
        Self::check("down_angle", down_angle)?;
        Self::check("thickness", thickness)?;
        Ok(Self {
            up_angle,
            down_angle,
            thickness,
        })
    }

    /// Creates an aperture spanning `half_angle` to both sides of the axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_angle` or `thickness` is not positive.
    pub fn symmetric(half_angle: f64, thickness: f64) -> Result<Self> {
        Self::new(half_angle, half_angle, thickness)
    }

    fn check(parameter: &'static str, value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(FigureError::NonPositiveDimension { parameter, value }.into());
        }
        Ok(())
    }

    /// Counter-clockwise angular extent.
    #[must_use]
    pub fn up_angle(&self) -> f64 {
        self.up_angle
    }

    /// Clockwise angular extent.
    #[must_use]
    pub fn down_angle(&self) -> f64 {
        self.down_angle
    }

    /// Radial thickness of the drawn shell.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }
}

/// How far each reflected ray is drawn past the image point, as a factor
/// of the entry-to-image distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayExtension {
    parallel_factor: f64,
    focus_factor: f64,
    center_factor: f64,
}

impl RayExtension {
    /// Creates extension factors for the three reflected rays.
    ///
    /// A factor of 1 stops at the image; the defaults stagger the three
    /// arrow tips so they stay legible.
    ///
    /// # Errors
    ///
    /// Returns an error if any factor is not positive.
    pub fn new(parallel_factor: f64, focus_factor: f64, center_factor: f64) -> Result<Self> {
        Self::check("parallel_factor", parallel_factor)?;
        Self::check("focus_factor", focus_factor)?;
        Self::check("center_factor", center_factor)?;
        Ok(Self {
            parallel_factor,
            focus_factor,
            center_factor,
        })
    }

    fn check(parameter: &'static str, value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(FigureError::NonPositiveDimension { parameter, value }.into());
        }
        Ok(())
    }

    /// Extension factor of the reflected axis-parallel ray.
    #[must_use]
    pub fn parallel_factor(&self) -> f64 {
        self.parallel_factor
    }

    /// Extension factor of the reflected focus ray.
    #[must_use]
    pub fn focus_factor(&self) -> f64 {
        self.focus_factor
    }

    /// Extension factor of the center ray.
    #[must_use]
    pub fn center_factor(&self) -> f64 {
        self.center_factor
    }
}

impl Default for RayExtension {
    fn default() -> Self {
        Self {
            parallel_factor: 1.5,
            focus_factor: 1.65,
            center_factor: 1.8,
        }
    }
}

/// A concave mirror with drawing dimensions attached.
///
/// Obtained from [`ConcaveMirror::with_size`]; drawing operations live
/// here. Methods that only record elements return `&Self` so calls chain.
#[derive(Debug, Clone)]
pub struct SizedConcaveMirror {
    mirror: ConcaveMirror,
    aperture: Aperture,
    extension: RayExtension,
}

impl SizedConcaveMirror {
    /// Returns the underlying mirror geometry.
    #[must_use]
    pub fn mirror(&self) -> &ConcaveMirror {
        &self.mirror
    }

    /// Returns the drawn aperture.
    #[must_use]
    pub fn aperture(&self) -> &Aperture {
        &self.aperture
    }

    /// Returns the reflected-ray extension factors.
    #[must_use]
    pub fn extension(&self) -> &RayExtension {
        &self.extension
    }

    /// Replaces the drawn aperture.
    pub fn set_aperture(&mut self, aperture: Aperture) {
        self.aperture = aperture;
    }

    /// Replaces the reflected-ray extension factors.
    pub fn set_ray_extension(&mut self, extension: RayExtension) {
        self.extension = extension;
    }

    /// Draws the mirror body: the filled shell behind the surface arc, then
    /// the arc itself.
    pub fn draw_mirror(&self, figure: &mut Figure) -> &Self {
        let center = *self.mirror.center();
        let radius = self.mirror.radius();
        let base = angle::direction_angle(&-self.mirror.axis);
        let start_angle = base - self.aperture.down_angle;
        let end_angle = base + self.aperture.up_angle;
        figure.fill(
            FillRegion::ArcBand {
                center,
                inner_radius: radius,
                outer_radius: radius + self.aperture.thickness,
                start_angle,
                end_angle,
            },
            style::MIRROR_FILL_TONE,
        );
        figure.stroke(
            StrokePath::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            },
            Pen::from_parts(style::MIRROR_STROKE_WIDTH, DashPattern::Solid),
            None,
        );
        self
    }

    /// Draws the dashed optical axis from just behind the vertex to
    /// `beyond_center` past the center of curvature.
    pub fn draw_optical_axis(&self, figure: &mut Figure, beyond_center: f64) -> &Self {
        let from = self.mirror.vertex - self.mirror.axis * self.aperture.thickness;
        let to = self.mirror.center() + self.mirror.axis * beyond_center;
        figure.stroke(
            StrokePath::Segment { from, to },
            Pen::from_parts(style::DEFAULT_PEN_WIDTH, style::OPTICAL_AXIS_DASH),
            None,
        );
        self
    }

    /// Marks and labels the center of curvature and the focus.
    pub fn label_cardinal_points(&self, figure: &mut Figure) -> &Self {
        let center = *self.mirror.center();
        let focus = self.mirror.focus_point();
        figure.dot(center, style::DOT_RADIUS);
        figure.label("C", center, Anchor::Below);
        figure.dot(focus, style::DOT_RADIUS);
        figure.label("F", focus, Anchor::Below);
        self
    }

    /// Constructs the image of `source` and draws the full characteristic-
    /// ray diagram with the given pen.
    ///
    /// For a source beyond the center of curvature this records, in order:
    /// the three incident rays from the source to their mirror entries, the
    /// image dot, and the three reflected rays extended past the image by
    /// the configured factors. For every other region nothing is drawn and
    /// the region tag is handed back, after [`ConcaveMirror::construct_image`]
    /// has warned about it.
    ///
    /// # Errors
    ///
    /// Returns an error if the construction degenerates, see
    /// [`ConcaveMirror::construct_image`].
    pub fn draw_image(
        &self,
        figure: &mut Figure,
        source: Point2,
        pen: Pen,
    ) -> Result<ImageConstruction> {
        let outcome = self.mirror.construct_image(source)?;
        let ImageConstruction::RealImageInside(rays) = outcome else {
            return Ok(outcome);
        };

        let arrow = Some(Arrow::midway(style::RAY_ARROW_SIZE));
        for entry in [rays.parallel_entry, rays.focus_entry, rays.center_entry] {
            figure.stroke(
                StrokePath::Segment {
                    from: source,
                    to: entry,
                },
                pen,
                arrow,
            );
        }

        figure.dot(rays.image, style::DOT_RADIUS);

        let reflected = [
            (rays.parallel_entry, self.extension.parallel_factor),
            (rays.focus_entry, self.extension.focus_factor),
            (rays.center_entry, self.extension.center_factor),
        ];
        for (entry, factor) in reflected {
            let to = entry + (rays.image - entry) * factor;
            figure.stroke(StrokePath::Segment { from: entry, to }, pen, arrow);
        }

        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use log::Level;

    use super::*;
    use crate::error::CatoptricsError;
    use crate::figure::Element;

    // f = 1: vertex at the origin, axis +x, focus at (1, 0), center at (2, 0).
    fn standard_mirror() -> ConcaveMirror {
        ConcaveMirror::new(Point2::origin(), Vector2::x(), 1.0).unwrap()
    }

    fn sized_standard_mirror() -> SizedConcaveMirror {
        standard_mirror().with_size(Aperture::symmetric(0.6, 0.3).unwrap())
    }

    fn warn_count(logs: &[testing_logger::CapturedLog]) -> usize {
        logs.iter().filter(|l| l.level == Level::Warn).count()
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(ConcaveMirror::new(Point2::origin(), Vector2::zeros(), 1.0).is_err());
    }

    #[test]
    fn non_positive_focal_length_is_rejected() {
        assert!(ConcaveMirror::new(Point2::origin(), Vector2::x(), 0.0).is_err());
        assert!(ConcaveMirror::new(Point2::origin(), Vector2::x(), -1.0).is_err());
    }

    #[test]
    fn cardinal_points_line_up_on_the_axis() {
        let m = standard_mirror();
        assert!((m.radius() - 2.0).abs() < TOLERANCE);
        assert!((m.focus_point() - Point2::new(1.0, 0.0)).norm() < TOLERANCE);
        assert!((m.center() - Point2::new(2.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn axis_is_normalized() {
        let m = ConcaveMirror::new(Point2::origin(), Vector2::new(0.0, 5.0), 2.0).unwrap();
        assert!((m.axis().norm() - 1.0).abs() < TOLERANCE);
        assert!((m.focus_point() - Point2::new(0.0, 2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn from_focus_point_matches_explicit_construction() {
        let a = ConcaveMirror::from_focus_point(Point2::origin(), Point2::new(1.0, 0.0)).unwrap();
        let b = standard_mirror();
        assert!((a.focal_length() - b.focal_length()).abs() < TOLERANCE);
        assert!((a.center() - b.center()).norm() < TOLERANCE);
    }

    #[test]
    fn from_focus_point_rejects_coincident_points() {
        let p = Point2::new(3.0, 4.0);
        assert!(ConcaveMirror::from_focus_point(p, p).is_err());
    }

    #[test]
    fn frame_places_the_cardinal_points() {
        let m = standard_mirror();
        let vertex = m.frame().to_local(m.vertex());
        let focus = m.frame().to_local(&m.focus_point());
        let center = m.frame().to_local(m.center());
        assert!((vertex - Point2::new(1.0, 0.0)).norm() < 1e-12);
        assert!((focus - Point2::new(0.5, 0.0)).norm() < 1e-12);
        assert!(center.coords.norm() < 1e-12);
    }

    // ── region classification ──

    #[test]
    fn source_behind_the_vertex_warns_once() {
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(-0.5, 0.2)).unwrap();
        assert_eq!(outcome, ImageConstruction::SourceBehindMirror);
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 1));
    }

    #[test]
    fn source_at_the_vertex_counts_as_behind() {
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::origin()).unwrap();
        assert_eq!(outcome, ImageConstruction::SourceBehindMirror);
    }

    #[test]
    fn source_between_focus_and_vertex_is_virtual() {
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(0.4, 0.1)).unwrap();
        assert_eq!(outcome, ImageConstruction::VirtualImageUnsupported);
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 1));
    }

    #[test]
    fn source_exactly_at_the_focus_is_virtual() {
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(1.0, 0.0)).unwrap();
        assert_eq!(outcome, ImageConstruction::VirtualImageUnsupported);
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 1));
    }

    #[test]
    fn source_between_center_and_focus_is_unsupported() {
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(1.5, 0.1)).unwrap();
        assert_eq!(outcome, ImageConstruction::RealImageOutsideUnsupported);
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 1));
    }

    #[test]
    fn source_level_with_the_center_is_unsupported() {
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(2.0, 0.3)).unwrap();
        assert_eq!(outcome, ImageConstruction::AtCenterUnsupported);
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 1));
    }

    // ── image construction ──

    #[test]
    fn construction_matches_the_mirror_equation() {
        // Nearly paraxial source at object distance 5, height 0.02:
        // 1/5 + 1/v = 1/1 gives image distance 1.25 and height -0.005.
        testing_logger::setup();
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(5.0, 0.02)).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image, got {outcome:?}");
        };
        assert!((rays.image.x - 1.25).abs() < 2e-3, "x={}", rays.image.x);
        assert!((rays.image.y + 0.005).abs() < 1e-3, "y={}", rays.image.y);
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 0));
    }

    #[test]
    fn entries_lie_on_the_mirror_surface() {
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(5.0, 0.3)).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image");
        };
        for entry in [rays.parallel_entry, rays.focus_entry, rays.center_entry] {
            let d = (entry - m.center()).norm();
            assert!((d - m.radius()).abs() < 1e-9, "entry={entry:?}");
        }
    }

    #[test]
    fn reflected_rays_are_concurrent_at_the_image() {
        let m = standard_mirror();
        let source = Point2::new(5.0, 0.3);
        let outcome = m.construct_image(source).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image");
        };

        // Parallel ray reflects through the focus.
        let through_focus =
            Line::new(rays.parallel_entry, m.focus_point() - rays.parallel_entry).unwrap();
        assert!(through_focus.distance_to(&rays.image) < 1e-9);

        // Focus ray reflects parallel to the axis.
        let axis_parallel = Line::new(rays.focus_entry, *m.axis()).unwrap();
        assert!(axis_parallel.distance_to(&rays.image) < 1e-9);

        // Center ray is fitted backward through the image: source, entry,
        // and image are collinear by construction. It passes the center of
        // curvature only in the paraxial limit, so that check stays loose.
        let center_ray = Line::new(source, rays.image - source).unwrap();
        assert!(center_ray.distance_to(&rays.center_entry) < 1e-9);
        assert!(center_ray.distance_to(m.center()) < 0.01);
    }

    #[test]
    fn image_is_inverted_below_the_axis() {
        let m = standard_mirror();
        let outcome = m.construct_image(Point2::new(5.0, 0.3)).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image");
        };
        assert!(rays.image.y < 0.0, "image={:?}", rays.image);
    }

    #[test]
    fn tilted_mirror_matches_the_axis_aligned_construction() {
        // The same diagram rotated by 90 degrees: results rotate with it.
        let m = ConcaveMirror::new(Point2::new(1.0, 1.0), Vector2::y(), 1.0).unwrap();
        let outcome = m.construct_image(Point2::new(0.7, 6.0)).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image");
        };

        let reference = ConcaveMirror::new(Point2::origin(), Vector2::x(), 1.0).unwrap();
        let expected = reference.construct_image(Point2::new(5.0, 0.3)).unwrap();
        let ImageConstruction::RealImageInside(expected) = expected else {
            panic!("expected a real image");
        };

        // (x, y) in the reference maps to (1 - y, 1 + x) under the rotation.
        let mapped = Point2::new(1.0 - expected.image.y, 1.0 + expected.image.x);
        assert!((rays.image - mapped).norm() < 1e-9, "image={:?}", rays.image);
    }

    #[test]
    fn on_axis_source_degenerates() {
        testing_logger::setup();
        let m = standard_mirror();
        let err = m.construct_image(Point2::new(5.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            CatoptricsError::Geometry(GeometryError::ParallelLines)
        ));
    }

    #[test]
    fn back_face_crossing_falls_back_with_a_warning() {
        testing_logger::setup();
        let m = standard_mirror();
        // Vertical line at local x = -0.5: both circle crossings sit behind
        // the front face.
        let ray = Line::new(Point2::new(-0.5, -2.0), Vector2::y()).unwrap();
        let p = m.front_intersection(&ray).unwrap();
        assert!(p.x < 0.0);
        assert!((p.y + 0.75_f64.sqrt()).abs() < 1e-9, "p={p:?}");
        testing_logger::validate(|logs| {
            assert_eq!(warn_count(logs), 1);
            let warning = logs
                .iter()
                .find(|l| l.level == Level::Warn)
                .map(|l| l.body.clone())
                .unwrap_or_default();
            assert!(warning.contains("front face"), "warning={warning}");
        });
    }

    #[test]
    fn missing_the_circle_is_an_error() {
        let m = standard_mirror();
        let ray = Line::new(Point2::new(-2.0, -2.0), Vector2::y()).unwrap();
        let err = m.front_intersection(&ray).unwrap_err();
        assert!(matches!(
            err,
            CatoptricsError::Geometry(GeometryError::NoIntersection)
        ));
    }

    // ── sizing ──

    #[test]
    fn aperture_rejects_non_positive_extents() {
        assert!(Aperture::new(0.0, 0.5, 0.1).is_err());
        assert!(Aperture::new(0.5, -0.5, 0.1).is_err());
        assert!(Aperture::new(0.5, 0.5, 0.0).is_err());
        assert!(Aperture::symmetric(0.5, 0.1).is_ok());
    }

    #[test]
    fn ray_extension_rejects_non_positive_factors() {
        assert!(RayExtension::new(0.0, 1.0, 1.0).is_err());
        assert!(RayExtension::new(1.0, -1.0, 1.0).is_err());
        assert!(RayExtension::new(0.5, 0.5, 0.5).is_ok());
    }

    #[test]
    fn ray_extension_defaults_are_staggered() {
        let ext = RayExtension::default();
        assert!(ext.parallel_factor() < ext.focus_factor());
        assert!(ext.focus_factor() < ext.center_factor());
    }

    // ── drawing ──

    #[test]
    fn draw_mirror_records_shell_and_arc() {
        let sized = sized_standard_mirror();
        let mut fig = Figure::new();
        sized.draw_mirror(&mut fig);
        assert_eq!(fig.len(), 2);
        let Element::Fill {
            region: FillRegion::ArcBand {
                inner_radius,
                outer_radius,
                ..
            },
            ..
        } = &fig.elements()[0]
        else {
            panic!("expected an arc-band fill");
        };
        assert!((inner_radius - 2.0).abs() < TOLERANCE);
        assert!((outer_radius - 2.3).abs() < TOLERANCE);
        let Element::Stroke {
            path:
                StrokePath::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                },
            ..
        } = &fig.elements()[1]
        else {
            panic!("expected an arc stroke");
        };
        assert!((center - Point2::new(2.0, 0.0)).norm() < TOLERANCE);
        assert!((radius - 2.0).abs() < TOLERANCE);
        // Arc spans the aperture around the vertex direction (angle pi).
        assert!((start_angle - (std::f64::consts::PI - 0.6)).abs() < 1e-9);
        assert!((end_angle - (std::f64::consts::PI + 0.6)).abs() < 1e-9);
    }

    #[test]
    fn draw_optical_axis_spans_vertex_to_beyond_center() {
        let sized = sized_standard_mirror();
        let mut fig = Figure::new();
        sized.draw_optical_axis(&mut fig, 3.0);
        let Element::Stroke {
            path: StrokePath::Segment { from, to },
            pen,
            ..
        } = &fig.elements()[0]
        else {
            panic!("expected a segment stroke");
        };
        assert!((from - Point2::new(-0.3, 0.0)).norm() < TOLERANCE);
        assert!((to - Point2::new(5.0, 0.0)).norm() < TOLERANCE);
        assert_eq!(pen.dash(), style::OPTICAL_AXIS_DASH);
    }

    #[test]
    fn label_cardinal_points_marks_center_and_focus() {
        let sized = sized_standard_mirror();
        let mut fig = Figure::new();
        sized.label_cardinal_points(&mut fig);
        assert_eq!(fig.len(), 4);
        let labels: Vec<_> = fig
            .elements()
            .iter()
            .filter_map(|e| match e {
                Element::Label(l) => Some(l.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["C", "F"]);
    }

    #[test]
    fn draw_image_records_incident_rays_dot_then_reflected_rays() {
        testing_logger::setup();
        let sized = sized_standard_mirror();
        let source = Point2::new(5.0, 0.3);
        let mut fig = Figure::new();
        let outcome = sized.draw_image(&mut fig, source, Pen::default()).unwrap();
        assert!(matches!(outcome, ImageConstruction::RealImageInside(_)));
        assert_eq!(fig.len(), 7);
        for e in &fig.elements()[0..3] {
            let Element::Stroke {
                path: StrokePath::Segment { from, .. },
                ..
            } = e
            else {
                panic!("expected incident segments first");
            };
            assert!((from - source).norm() < TOLERANCE);
        }
        assert!(matches!(fig.elements()[3], Element::Dot { .. }));
        assert!(fig.elements()[4..7]
            .iter()
            .all(|e| matches!(e, Element::Stroke { .. })));
        testing_logger::validate(|logs| assert_eq!(warn_count(logs), 0));
    }

    #[test]
    fn draw_image_extends_reflected_rays_past_the_image() {
        let sized = sized_standard_mirror();
        let source = Point2::new(5.0, 0.3);
        let mut fig = Figure::new();
        let outcome = sized.draw_image(&mut fig, source, Pen::default()).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image");
        };
        let Element::Stroke {
            path: StrokePath::Segment { from, to },
            ..
        } = &fig.elements()[4]
        else {
            panic!("expected the reflected parallel ray");
        };
        assert!((from - rays.parallel_entry).norm() < TOLERANCE);
        let expected = rays.parallel_entry + (rays.image - rays.parallel_entry) * 1.5;
        assert!((to - expected).norm() < 1e-9);
    }

    #[test]
    fn set_ray_extension_changes_the_drawn_length() {
        let mut sized = sized_standard_mirror();
        sized.set_ray_extension(RayExtension::new(2.0, 2.0, 2.0).unwrap());
        let source = Point2::new(5.0, 0.3);
        let mut fig = Figure::new();
        let outcome = sized.draw_image(&mut fig, source, Pen::default()).unwrap();
        let ImageConstruction::RealImageInside(rays) = outcome else {
            panic!("expected a real image");
        };
        let Element::Stroke {
            path: StrokePath::Segment { to, .. },
            ..
        } = &fig.elements()[4]
        else {
            panic!("expected the reflected parallel ray");
        };
        let expected = rays.parallel_entry + (rays.image - rays.parallel_entry) * 2.0;
        assert!((to - expected).norm() < 1e-9);
    }

    #[test]
    fn unsupported_regions_draw_nothing() {
        let sized = sized_standard_mirror();
        let sources = [
            (Point2::new(1.5, 0.1), ImageConstruction::RealImageOutsideUnsupported),
            (Point2::new(0.4, 0.1), ImageConstruction::VirtualImageUnsupported),
            (Point2::new(2.0, 0.3), ImageConstruction::AtCenterUnsupported),
            (Point2::new(-0.5, 0.2), ImageConstruction::SourceBehindMirror),
        ];
        for (source, expected) in sources {
            testing_logger::setup();
            let mut fig = Figure::new();
            let outcome = sized.draw_image(&mut fig, source, Pen::default()).unwrap();
            assert_eq!(outcome, expected);
            assert!(fig.is_empty(), "source={source:?}");
            testing_logger::validate(|logs| assert_eq!(warn_count(logs), 1));
        }
    }

    #[test]
    fn set_aperture_replaces_dimensions() {
        let mut sized = sized_standard_mirror();
        sized.set_aperture(Aperture::symmetric(0.9, 0.5).unwrap());
        assert!((sized.aperture().up_angle() - 0.9).abs() < f64::EPSILON);
        assert!((sized.aperture().thickness() - 0.5).abs() < f64::EPSILON);
    }
}
