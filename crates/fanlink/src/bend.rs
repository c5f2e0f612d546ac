//! Bending a link's polyline sideways by its curviness.

use fanlink_graph::{Point, point};

/// Segments with a smaller vertical extent are bent straight up or down.
pub const HORIZONTAL_TOLERANCE: f64 = 0.01;

pub const NEAR_FRACTION: f64 = 1.0 / 8.0;
pub const FAR_FRACTION: f64 = 7.0 / 8.0;

/// Inserts two bend points that pull the middle of the path `curviness` units sideways: one
/// right after the first anchor and one right before the second.
///
/// Paths of four or more points are bent between their second and second-to-last points so
/// the end segments stay straight. Existing points are never moved.
pub fn bend_path(points: &[Point], curviness: f64) -> Vec<Point> {
    let n = points.len();
    if curviness == 0.0 || n < 2 {
        return points.to_vec();
    }
    let (p, q) = if n >= 4 { (1, n - 2) } else { (0, n - 1) };
    let from = points[p];
    let to = points[q];
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let near = bend_point(from, dx, dy, NEAR_FRACTION, curviness);
    let far = bend_point(from, dx, dy, FAR_FRACTION, curviness);

    let mut bent = Vec::with_capacity(n + 2);
    bent.extend_from_slice(&points[..=p]);
    bent.push(near);
    bent.extend_from_slice(&points[p + 1..q]);
    bent.push(far);
    bent.extend_from_slice(&points[q..]);
    bent
}

/// Point at `fraction` along `from -> from + (dx, dy)`, displaced perpendicular to that
/// segment by `|curviness|`. Positive curviness bends to the left of the direction of travel
/// (y grows downward).
pub fn bend_point(from: Point, dx: f64, dy: f64, fraction: f64, curviness: f64) -> Point {
    let mx = from.x + dx * fraction;
    let my = from.y + dy * fraction;
    if dy.abs() < HORIZONTAL_TOLERANCE {
        let y = if dx > 0.0 { my - curviness } else { my + curviness };
        return point(mx, y);
    }
    let slope = -dx / dy;
    let mut e = (curviness * curviness / (slope * slope + 1.0)).sqrt();
    if curviness < 0.0 {
        e = -e;
    }
    let x = if dy < 0.0 { -e } else { e } + mx;
    point(x, slope * (x - mx) + my)
}
