use super::Vector2;

/// Direction angle of `v` against the positive x-axis, in `(-pi, pi]`.
#[must_use]
pub fn direction_angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Signed angle that rotates `from` onto `to`, in `(-pi, pi]`.
///
/// Positive counter-clockwise.
#[must_use]
pub fn signed_angle(from: &Vector2, to: &Vector2) -> f64 {
    let cross = from.x * to.y - from.y * to.x;
    let dot = from.dot(to);
    cross.atan2(dot)
}

/// Unsigned angle between two vectors, in `[0, pi]`.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f64 {
    signed_angle(a, b).abs()
}
