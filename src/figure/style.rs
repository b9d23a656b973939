use crate::error::{FigureError, Result};

/// Default stroke width for rays and construction lines.
pub const DEFAULT_PEN_WIDTH: f64 = 0.8;

/// Stroke width of mirror surfaces.
pub const MIRROR_STROKE_WIDTH: f64 = 1.6;

/// Grayscale fill tone of mirror bodies (0 = black, 1 = white).
pub const MIRROR_FILL_TONE: f64 = 0.85;

/// Arrowhead size on rays, in drawing units.
pub const RAY_ARROW_SIZE: f64 = 4.0;

/// Arrowhead size on angle arcs.
pub const ARC_ARROW_SIZE: f64 = 2.0;

/// Radius of image and cardinal-point dots.
pub const DOT_RADIUS: f64 = 1.0;

/// Angle-arc radius as a fraction of the drawn normal length.
pub const ANGLE_ARC_RADIUS_FACTOR: f64 = 0.45;

/// Offset of the mirror label behind the mirror body.
pub const MIRROR_LABEL_OFFSET: f64 = 6.0;

/// Dash style of normal lines.
pub const NORMAL_DASH: DashPattern = DashPattern::Dashed;

/// Dash style of the optical axis.
pub const OPTICAL_AXIS_DASH: DashPattern = DashPattern::Dashed;

/// Dash style of virtual rays and image-construction segments.
pub const VIRTUAL_RAY_DASH: DashPattern = DashPattern::Dotted;

/// Dash pattern of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Stroke style for figure paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    width: f64,
    dash: DashPattern,
}

impl Pen {
    /// Creates a solid pen with the given width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(FigureError::NonPositiveDimension {
                parameter: "pen width",
                value: width,
            }
            .into());
        }
        Ok(Self {
            width,
            dash: DashPattern::Solid,
        })
    }

    /// Internal constructor for compile-time style constants.
    pub(crate) const fn from_parts(width: f64, dash: DashPattern) -> Self {
        Self { width, dash }
    }

    /// Returns this pen with a different dash pattern.
    #[must_use]
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the dash pattern.
    #[must_use]
    pub fn dash(&self) -> DashPattern {
        self.dash
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::from_parts(DEFAULT_PEN_WIDTH, DashPattern::Solid)
    }
}

/// An arrowhead placed along a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Arrowhead size in drawing units.
    pub size: f64,
    /// Position along the path as a fraction in `[0, 1]`, 1 being the end.
    pub position: f64,
}

impl Arrow {
    /// An arrowhead at the end of the path.
    #[must_use]
    pub fn at_end(size: f64) -> Self {
        Self { size, position: 1.0 }
    }

    /// An arrowhead halfway along the path.
    #[must_use]
    pub fn midway(size: f64) -> Self {
        Self { size, position: 0.5 }
    }
}

/// Placement of a text label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    Left,
    Right,
    Above,
    Below,
    AboveLeft,
    AboveRight,
    BelowLeft,
    BelowRight,
}
