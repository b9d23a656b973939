use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection of the infinite line `origin + t * dir` with a circle.
///
/// Returns the line parameters of the hits, smaller `t` first. A tangency
/// collapses to a single root; a miss returns an empty vector.
#[must_use]
pub fn line_circle(origin: &Point2, dir: &Vector2, center: &Point2, radius: f64) -> Vec<f64> {
    let mut roots = Vec::new();
    if radius < TOLERANCE {
        return roots;
    }

    let a = dir.norm_squared();
    if a < TOLERANCE * TOLERANCE {
        return roots;
    }

    // Substitute the parametric line into the circle equation:
    // (origin + t*dir - center)² = r²
    let f = origin - center;
    let b = 2.0 * f.dot(dir);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return roots;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: single root.
        roots.push(-b / (2.0 * a));
    } else {
        roots.push((-b - disc_sqrt) / (2.0 * a));
        roots.push((-b + disc_sqrt) / (2.0 * a));
    }
    roots
}
