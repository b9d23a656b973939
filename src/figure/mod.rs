//! Figure recording.
//!
//! Mirrors append abstract drawing elements to a [`Figure`]; a host renderer
//! walks the recorded elements and maps each variant onto its own drawing
//! backend. Nothing in this crate rasterizes or lays out text.

pub mod style;

pub use style::{Anchor, Arrow, DashPattern, Pen};

use crate::math::{angle, Point2, Vector2};

/// A stroked path shape.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokePath {
    /// Straight segment between two points.
    Segment { from: Point2, to: Point2 },
    /// Circular arc, swept counter-clockwise from `start_angle` to
    /// `end_angle` (radians).
    Arc {
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// A fillable region.
#[derive(Debug, Clone, PartialEq)]
pub enum FillRegion {
    /// Closed polygon through the given vertices.
    Polygon(Vec<Point2>),
    /// Annular band between two concentric arcs, closed by the radial caps.
    ArcBand {
        center: Point2,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// A text label anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point2,
    pub anchor: Anchor,
}

/// An angle arc swept between two directions around a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleMark {
    pub vertex: Point2,
    /// Direction angle of the first leg, in radians.
    pub from_angle: f64,
    /// Direction angle of the second leg; the arc sweeps from `from_angle`
    /// to `to_angle` through the smaller of the two turns.
    pub to_angle: f64,
    pub radius: f64,
    /// Arrowhead size at the arc end, if any.
    pub arrow_size: Option<f64>,
}

impl AngleMark {
    /// Builds the mark between two leg directions, sweeping through the
    /// smaller turn from `from` to `to`.
    #[must_use]
    pub fn between(
        vertex: Point2,
        from: &Vector2,
        to: &Vector2,
        radius: f64,
        arrow_size: Option<f64>,
    ) -> Self {
        let from_angle = angle::direction_angle(from);
        let to_angle = from_angle + angle::signed_angle(from, to);
        Self {
            vertex,
            from_angle,
            to_angle,
            radius,
            arrow_size,
        }
    }
}

/// A single primitive drawing element of a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Stroked path, optionally with an arrowhead.
    Stroke {
        path: StrokePath,
        pen: Pen,
        arrow: Option<Arrow>,
    },
    /// Filled region with a grayscale tone in `[0, 1]`.
    Fill { region: FillRegion, tone: f64 },
    /// Filled point mark.
    Dot { at: Point2, radius: f64 },
    /// Text label.
    Label(Label),
    /// Angle arc between two rays.
    AngleMark(AngleMark),
}

/// An ordered collection of drawing elements.
///
/// Append order is paint order; hosts draw earlier elements first.
#[derive(Debug, Default)]
pub struct Figure {
    elements: Vec<Element>,
}

impl Figure {
    /// Creates an empty figure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Appends a stroked path.
    pub fn stroke(&mut self, path: StrokePath, pen: Pen, arrow: Option<Arrow>) {
        self.push(Element::Stroke { path, pen, arrow });
    }

    /// Appends a filled region; the tone is clamped to `[0, 1]`.
    pub fn fill(&mut self, region: FillRegion, tone: f64) {
        self.push(Element::Fill {
            region,
            tone: tone.clamp(0.0, 1.0),
        });
    }

    /// Appends a point mark.
    pub fn dot(&mut self, at: Point2, radius: f64) {
        self.push(Element::Dot { at, radius });
    }

    /// Appends a text label.
    pub fn label(&mut self, text: impl Into<String>, position: Point2, anchor: Anchor) {
        self.push(Element::Label(Label {
            text: text.into(),
            position,
            anchor,
        }));
    }

    /// Appends an angle mark.
    pub fn angle_mark(&mut self, mark: AngleMark) {
        self.push(Element::AngleMark(mark));
    }

    /// Returns the recorded elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the number of recorded elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Discards all recorded elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the figure, yielding the recorded elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}
